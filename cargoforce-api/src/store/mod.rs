use shared_types::Enquiry;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Failure modes for the flat-file enquiry store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to access enquiry store: {0}")]
    Io(#[from] std::io::Error),

    #[error("Existing enquiry store is not a valid enquiry list: {0}")]
    Corrupt(serde_json::Error),

    #[error("Failed to encode enquiry list: {0}")]
    Encode(serde_json::Error),
}

/// The flat JSON document holding the ordered list of all enquiries.
///
/// The document is rewritten in full on every append. Records are never
/// mutated or deleted here; `status` transitions happen in external tooling.
pub struct EnquiryStore {
    path: PathBuf,
    serialize_writes: bool,
    write_lock: Mutex<()>,
}

impl EnquiryStore {
    pub fn new(path: PathBuf, serialize_writes: bool) -> Self {
        Self {
            path,
            serialize_writes,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the data directory and an empty `[]` document if absent.
    pub fn ensure(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !self.path.exists() {
            self.write_document(&[])?;
        }
        Ok(())
    }

    /// Reads the full enquiry list. A store that has never been written
    /// reads as empty.
    pub fn load(&self) -> Result<Vec<Enquiry>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(StoreError::Corrupt)
    }

    /// Appends one enquiry by rewriting the whole document.
    ///
    /// By default the current list is read and written back with no locking:
    /// two overlapping appends can each start from the same snapshot, and the
    /// later write silently drops the other record. With `serialize_writes`
    /// enabled, every append holds an internal lock across the full
    /// read-modify-write so overlapping appends both survive.
    pub async fn append(&self, enquiry: Enquiry) -> Result<(), StoreError> {
        if self.serialize_writes {
            let _guard = self.write_lock.lock().await;
            self.append_unlocked(enquiry)
        } else {
            self.append_unlocked(enquiry)
        }
    }

    fn append_unlocked(&self, enquiry: Enquiry) -> Result<(), StoreError> {
        self.ensure()?;
        let mut enquiries = self.load()?;
        enquiries.push(enquiry);
        self.write_document(&enquiries)
    }

    fn write_document(&self, enquiries: &[Enquiry]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(enquiries).map_err(StoreError::Encode)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
