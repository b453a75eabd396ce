#![allow(missing_docs)]

pub mod memory;
pub mod record;
pub mod upload;

#[cfg(feature = "http")]
pub mod http;

use async_trait::async_trait;
use thiserror::Error;

pub use memory::MemoryStore;
pub use record::{RequestRecord, STATUS_PENDING};
pub use upload::{
    ALLOWED_CONTENT_TYPES, MAX_UPLOAD_BYTES, MemoryUploadGateway, UploadError, UploadFile,
    UploadGateway, check_upload,
};

#[cfg(feature = "http")]
pub use http::{DEFAULT_BUCKET, DEFAULT_TABLE, HttpStore, HttpUploadGateway};

/// Acknowledgement for one inserted row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertAck {
    /// Row identifier assigned by the store, when the backend reports one.
    pub id: Option<String>,
}

/// Errors raised at the storage boundary. Every variant is recoverable by
/// re-triggering the write; the caller's state is never touched.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store returned HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[cfg(feature = "http")]
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to encode record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("store response was malformed: {0}")]
    MalformedResponse(String),
}

/// External request store. One row per draft save and one per final
/// submission; rows are never updated in place.
#[async_trait]
pub trait RequestStore: Send + Sync {
    /// Appends one record as a new, independent row.
    async fn insert(&self, record: &RequestRecord) -> Result<InsertAck, StoreError>;

    /// All persisted rows, newest first. This is the read surface the admin
    /// listing consumes.
    async fn fetch_all(&self) -> Result<Vec<RequestRecord>, StoreError>;
}
