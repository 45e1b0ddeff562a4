use crate::config::ApiConfig;
use crate::store::EnquiryStore;
use std::path::PathBuf;
use std::sync::Arc;

const ENQUIRIES_FILE_NAME: &str = "enquiries.json";

/// Returns the path to the enquiry store document for the given config.
///
/// Defaults to `data/enquiries.json` under the working directory when no
/// `[storage]` section is configured.
pub fn get_enquiries_path(config: &ApiConfig) -> PathBuf {
    let data_dir = config
        .storage
        .as_ref()
        .map(|storage| storage.data_dir.clone())
        .unwrap_or_else(|| PathBuf::from("data"));

    data_dir.join(ENQUIRIES_FILE_NAME)
}

/// Builds the shared enquiry store handle.
///
/// Nothing is created on disk here; the store file is lazily created as an
/// empty list on the first submission.
pub fn initialize_store(config: &ApiConfig) -> Arc<EnquiryStore> {
    let path = get_enquiries_path(config);
    let serialize_writes = config
        .storage
        .as_ref()
        .map(|storage| storage.serialize_writes)
        .unwrap_or(false);

    Arc::new(EnquiryStore::new(path, serialize_writes))
}
