use actix_web::{web, HttpResponse, Result};
use chrono::{SecondsFormat, Utc};
use rand::Rng;
use shared_types::{Enquiry, EnquiryStatus, SubmitEnquiryRequest, SubmitEnquiryResponse};
use std::sync::Arc;
use tracing::{error, info};

use crate::store::EnquiryStore;

#[derive(Debug)]
enum EnquiryError {
    MissingRequiredFields,
    MethodNotAllowed,
    Storage(String),
}

impl std::fmt::Display for EnquiryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnquiryError::MissingRequiredFields => {
                write!(f, "Name, email, and phone are required fields.")
            }
            EnquiryError::MethodNotAllowed => write!(f, "Method not allowed"),
            EnquiryError::Storage(_) => write!(
                f,
                "An error occurred while processing your enquiry. Please try again."
            ),
        }
    }
}

impl actix_web::error::ResponseError for EnquiryError {
    fn error_response(&self) -> HttpResponse {
        let body = SubmitEnquiryResponse {
            success: false,
            message: self.to_string(),
        };
        match self {
            EnquiryError::MissingRequiredFields => HttpResponse::BadRequest().json(body),
            EnquiryError::MethodNotAllowed => HttpResponse::MethodNotAllowed().json(body),
            EnquiryError::Storage(_) => HttpResponse::InternalServerError().json(body),
        }
    }
}

const ID_SUFFIX_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;

/// Builds ids like `ENQ-1755950400000-k3j9x2m1q`: creation time in unix
/// milliseconds plus a random base36 suffix.
fn generate_enquiry_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_SUFFIX_CHARSET[rng.gen_range(0..ID_SUFFIX_CHARSET.len())] as char)
        .collect();

    format!("ENQ-{}-{}", Utc::now().timestamp_millis(), suffix)
}

/// Accepts one contact-form submission and appends it to the enquiry store.
pub async fn submit_enquiry(
    store: web::Data<Arc<EnquiryStore>>,
    request: web::Json<SubmitEnquiryRequest>,
) -> Result<HttpResponse> {
    let req = request.into_inner();

    let (name, email, phone) = match (req.name, req.email, req.phone) {
        (Some(name), Some(email), Some(phone))
            if !name.is_empty() && !email.is_empty() && !phone.is_empty() =>
        {
            (name, email, phone)
        }
        _ => return Err(EnquiryError::MissingRequiredFields.into()),
    };

    let enquiry = Enquiry {
        id: generate_enquiry_id(),
        name,
        email,
        phone,
        shipment_type: req.shipment_type,
        boxes: req.boxes,
        weight: req.weight,
        details: req.details,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        status: EnquiryStatus::New,
    };

    store.append(enquiry.clone()).await.map_err(|e| {
        error!("Error saving enquiry: {}", e);
        EnquiryError::Storage(e.to_string())
    })?;

    info!(
        "Form submission saved: {} - {} {}",
        enquiry.id, enquiry.name, enquiry.email
    );

    Ok(HttpResponse::Ok().json(SubmitEnquiryResponse {
        success: true,
        message: "Thank you for your enquiry! We will contact you shortly.".to_string(),
    }))
}

/// Catch-all for every non-POST verb on the contact resource.
pub async fn method_not_allowed() -> Result<HttpResponse> {
    Err(EnquiryError::MethodNotAllowed.into())
}
