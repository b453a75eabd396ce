use async_trait::async_trait;
use intake_spec::UploadRef;
use serde_json::Value;
use url::Url;

use crate::record::RequestRecord;
use crate::upload::{UploadError, UploadFile, UploadGateway, check_upload};
use crate::{InsertAck, RequestStore, StoreError};

/// Table the request rows live in.
pub const DEFAULT_TABLE: &str = "website_requests";
/// Bucket design materials are uploaded to.
pub const DEFAULT_BUCKET: &str = "website-requests";

/// REST-backed request store (Supabase-style PostgREST surface). Every
/// insert is an independent `POST`; rows are never updated in place.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: reqwest::Client,
    base: Url,
    api_key: String,
    table: String,
}

impl HttpStore {
    pub fn new(base: Url, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
            api_key: api_key.into(),
            table: DEFAULT_TABLE.to_string(),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    fn table_url(&self) -> Result<Url, StoreError> {
        self.base
            .join(&format!("rest/v1/{}", self.table))
            .map_err(|err| StoreError::MalformedResponse(format!("bad table url: {err}")))
    }
}

#[async_trait]
impl RequestStore for HttpStore {
    async fn insert(&self, record: &RequestRecord) -> Result<InsertAck, StoreError> {
        let url = self.table_url()?;
        tracing::debug!(table = %self.table, draft = record.is_draft, "inserting request row");
        let response = self
            .client
            .post(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(&[record])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(StoreError::Http {
                status: status.as_u16(),
                body,
            });
        }

        // PostgREST returns the inserted rows as a JSON array.
        let rows: Value = serde_json::from_str(&body)?;
        let id = rows
            .get(0)
            .and_then(|row| row.get("id"))
            .map(|id| match id {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            });
        Ok(InsertAck { id })
    }

    async fn fetch_all(&self) -> Result<Vec<RequestRecord>, StoreError> {
        let mut url = self.table_url()?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("order", "created_at.desc");

        let response = self
            .client
            .get(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(StoreError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// REST-backed upload gateway: one object `POST` per file, returning the
/// public URL the bucket exposes for it.
#[derive(Debug, Clone)]
pub struct HttpUploadGateway {
    client: reqwest::Client,
    base: Url,
    api_key: String,
    bucket: String,
}

impl HttpUploadGateway {
    pub fn new(base: Url, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
            api_key: api_key.into(),
            bucket: DEFAULT_BUCKET.to_string(),
        }
    }

    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    fn object_url(&self, path: &str, name: &str) -> Result<Url, UploadError> {
        self.base
            .join(&format!("storage/v1/{path}/{}/{name}", self.bucket))
            .map_err(|err| UploadError::Http {
                status: 0,
                body: format!("bad object url: {err}"),
            })
    }
}

#[async_trait]
impl UploadGateway for HttpUploadGateway {
    async fn upload(&self, file: &UploadFile) -> Result<UploadRef, UploadError> {
        check_upload(file)?;
        let url = self.object_url("object", &file.name)?;
        tracing::debug!(bucket = %self.bucket, name = %file.name, "uploading design material");
        let response = self
            .client
            .post(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Content-Type", &file.content_type)
            .body(file.bytes.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let public = self.object_url("object/public", &file.name)?;
        Ok(UploadRef::new(public.to_string()))
    }
}
