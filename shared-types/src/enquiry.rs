use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single customer enquiry as persisted in the enquiry store.
///
/// Field names serialize in camelCase so the on-disk document and the API
/// responses match the landing-page form payloads.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boxes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub timestamp: String,
    pub status: EnquiryStatus,
}

/// Lifecycle marker managed by the sales team outside this service; every
/// record is written as `new` and never transitioned in-process.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS, PartialEq, Eq)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum EnquiryStatus {
    New,
    Contacted,
    Completed,
}

/// Payload submitted by the landing-page contact form.
///
/// Every field deserializes as optional so that a missing required field is
/// reported through the validation response rather than a framework error.
#[derive(Debug, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SubmitEnquiryRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub shipment_type: Option<String>,
    pub boxes: Option<String>,
    pub weight: Option<String>,
    pub details: Option<String>,
}

/// Outcome envelope returned to the form for every submission.
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmitEnquiryResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_enquiry() -> Enquiry {
        Enquiry {
            id: "ENQ-1755950400000-k3j9x2m1q".to_string(),
            name: "Asha Patel".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+44 20 3384 6470".to_string(),
            shipment_type: Some("individual".to_string()),
            boxes: Some("3".to_string()),
            weight: Some("21-50".to_string()),
            details: Some("Household items to Mumbai".to_string()),
            timestamp: "2026-08-23T10:00:00.000Z".to_string(),
            status: EnquiryStatus::New,
        }
    }

    #[test]
    fn test_enquiry_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample_enquiry()).unwrap();

        assert_eq!(json["shipmentType"], "individual");
        assert_eq!(json["status"], "new");
        assert_eq!(json["name"], "Asha Patel");
        assert!(json.get("shipment_type").is_none());
    }

    #[test]
    fn test_enquiry_round_trip() {
        let json = serde_json::to_string(&sample_enquiry()).unwrap();
        let back: Enquiry = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, "ENQ-1755950400000-k3j9x2m1q");
        assert_eq!(back.email, "asha@example.com");
        assert_eq!(back.boxes.as_deref(), Some("3"));
        assert_eq!(back.status, EnquiryStatus::New);
    }

    #[test]
    fn test_optional_fields_omitted_when_absent() {
        let mut enquiry = sample_enquiry();
        enquiry.shipment_type = None;
        enquiry.details = None;

        let json = serde_json::to_string(&enquiry).unwrap();
        assert!(!json.contains("shipmentType"));
        assert!(!json.contains("details"));

        let back: Enquiry = serde_json::from_str(&json).unwrap();
        assert!(back.shipment_type.is_none());
        assert_eq!(back.weight.as_deref(), Some("21-50"));
    }

    #[test]
    fn test_enquiry_status_serialization() {
        let json = serde_json::to_string(&EnquiryStatus::New).unwrap();
        assert_eq!(json, "\"new\"");

        let contacted: EnquiryStatus = serde_json::from_str("\"contacted\"").unwrap();
        assert_eq!(contacted, EnquiryStatus::Contacted);

        let completed: EnquiryStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(completed, EnquiryStatus::Completed);
    }

    #[test]
    fn test_submit_request_accepts_missing_fields() {
        let request: SubmitEnquiryRequest =
            serde_json::from_str(r#"{"name":"Asha Patel","email":"asha@example.com"}"#).unwrap();

        assert_eq!(request.name.as_deref(), Some("Asha Patel"));
        assert!(request.phone.is_none());
        assert!(request.shipment_type.is_none());
    }

    #[test]
    fn test_submit_request_reads_camel_case_keys() {
        let request: SubmitEnquiryRequest = serde_json::from_str(
            r#"{"name":"A","email":"a@b.c","phone":"1","shipmentType":"business","boxes":"10+"}"#,
        )
        .unwrap();

        assert_eq!(request.shipment_type.as_deref(), Some("business"));
        assert_eq!(request.boxes.as_deref(), Some("10+"));
    }
}
