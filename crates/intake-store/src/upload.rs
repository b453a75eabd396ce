use async_trait::async_trait;
use bytes::Bytes;
use intake_spec::UploadRef;
use thiserror::Error;

/// Upper bound for one uploaded asset.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Content types the gateway accepts.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &["image/png", "image/jpeg", "image/jpg"];

/// One file handed to the upload gateway.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// Upload failures. Type and size rejections happen before any network
/// call; transport failures abort the rest of a batch without rolling back
/// uploads that already completed.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("only PNG and JPEG images are allowed (got {0})")]
    UnsupportedType(String),
    #[error("file size must be less than 5MB (got {size} bytes)")]
    TooLarge { size: usize },
    #[cfg(feature = "http")]
    #[error("upload request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upload service returned HTTP {status}: {body}")]
    Http { status: u16, body: String },
}

/// Client-side gate applied to every file before the gateway is touched.
pub fn check_upload(file: &UploadFile) -> Result<(), UploadError> {
    if !ALLOWED_CONTENT_TYPES.contains(&file.content_type.as_str()) {
        return Err(UploadError::UnsupportedType(file.content_type.clone()));
    }
    if file.bytes.len() > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge {
            size: file.bytes.len(),
        });
    }
    Ok(())
}

/// External file-storage service: accepts one file, returns a stable,
/// publicly resolvable reference for it.
#[async_trait]
pub trait UploadGateway: Send + Sync {
    async fn upload(&self, file: &UploadFile) -> Result<UploadRef, UploadError>;
}

/// In-memory gateway for tests and dry runs. Counts calls so tests can
/// assert that rejected files never reach the network.
#[derive(Debug, Default)]
pub struct MemoryUploadGateway {
    uploads: tokio::sync::Mutex<Vec<String>>,
}

impl MemoryUploadGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn upload_count(&self) -> usize {
        self.uploads.lock().await.len()
    }

    pub async fn uploaded_names(&self) -> Vec<String> {
        self.uploads.lock().await.clone()
    }
}

#[async_trait]
impl UploadGateway for MemoryUploadGateway {
    async fn upload(&self, file: &UploadFile) -> Result<UploadRef, UploadError> {
        check_upload(file)?;
        let mut uploads = self.uploads.lock().await;
        uploads.push(file.name.clone());
        Ok(UploadRef::new(format!("memory://uploads/{}", file.name)))
    }
}
