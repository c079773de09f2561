//! File persistence for submission attachments. The pipeline hands accepted
//! uploads here and records only the returned durable URL.

use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::store::new_id;

/// One file part received with a submission, bytes included.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub field_id: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug)]
pub enum UploadError {
    Storage(String),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Storage(msg) => write!(f, "storage failed: {msg}"),
        }
    }
}

#[async_trait]
pub trait FileStore: Send + Sync {
    /// Persist the bytes and return a durable URL for the stored object.
    async fn store(&self, upload: &UploadedFile) -> Result<String, UploadError>;
}

/// Object-storage stand-in: keeps bytes in memory under a random key and
/// mints `/uploads/{key}` URLs.
#[derive(Default)]
pub struct MemoryFileStore {
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        MemoryFileStore::default()
    }

    pub fn object_count(&self) -> usize {
        self.objects.read().map(|o| o.len()).unwrap_or(0)
    }
}

#[async_trait]
impl FileStore for MemoryFileStore {
    async fn store(&self, upload: &UploadedFile) -> Result<String, UploadError> {
        let key = format!("{}/{}", new_id(), upload.file_name);
        self.objects
            .write()
            .map_err(|_| UploadError::Storage("lock poisoned".to_string()))?
            .insert(key.clone(), upload.bytes.clone());
        Ok(format!("/uploads/{key}"))
    }
}
