pub mod draft;
pub mod list;
pub mod submit;
pub mod upload;
pub mod validate;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use url::Url;

use intake_spec::IntakeAnswers;
use intake_store::{
    DEFAULT_BUCKET, DEFAULT_TABLE, HttpStore, HttpUploadGateway, MemoryStore, MemoryUploadGateway,
    RequestStore, UploadGateway,
};

/// Connection settings shared by every command that touches the store.
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Base URL of the request store
    #[arg(long = "store-url", value_name = "URL", env = "INTAKE_STORE_URL")]
    pub store_url: Option<Url>,

    /// API key for the request store
    #[arg(
        long = "api-key",
        value_name = "KEY",
        env = "INTAKE_API_KEY",
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// Table the request rows are written to
    #[arg(long, value_name = "TABLE", default_value = DEFAULT_TABLE)]
    pub table: String,

    /// Bucket design materials are uploaded to
    #[arg(long, value_name = "BUCKET", default_value = DEFAULT_BUCKET)]
    pub bucket: String,

    /// Keep everything in memory and print instead of writing
    #[arg(long = "dry-run", default_value_t = false)]
    pub dry_run: bool,
}

impl StoreArgs {
    pub fn store(&self) -> Result<Arc<dyn RequestStore>> {
        if self.dry_run {
            return Ok(Arc::new(MemoryStore::new()));
        }
        let (url, key) = self.credentials()?;
        Ok(Arc::new(HttpStore::new(url, key).with_table(&self.table)))
    }

    pub fn uploads(&self) -> Result<Arc<dyn UploadGateway>> {
        if self.dry_run {
            return Ok(Arc::new(MemoryUploadGateway::new()));
        }
        let (url, key) = self.credentials()?;
        Ok(Arc::new(
            HttpUploadGateway::new(url, key).with_bucket(&self.bucket),
        ))
    }

    fn credentials(&self) -> Result<(Url, String)> {
        let url = self
            .store_url
            .clone()
            .context("--store-url (or INTAKE_STORE_URL) is required unless --dry-run")?;
        let key = self
            .api_key
            .clone()
            .context("--api-key (or INTAKE_API_KEY) is required unless --dry-run")?;
        Ok((url, key))
    }
}

/// Reads an answers file. Unknown fields are rejected so a typo in a field
/// name fails loudly instead of silently dropping the answer.
pub fn load_answers(path: &Path) -> Result<IntakeAnswers> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read answers file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse answers file {}", path.display()))
}
