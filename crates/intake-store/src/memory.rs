use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::record::RequestRecord;
use crate::{InsertAck, RequestStore, StoreError};

/// In-memory store used by tests and the CLI's dry-run mode. Inserts are
/// independent appends, mirroring the external store's no-update-in-place
/// behavior.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<(String, RequestRecord)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows written so far.
    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.lock().await.is_empty()
    }

    /// Raw rows in insertion order, with their assigned ids.
    pub async fn rows(&self) -> Vec<(String, RequestRecord)> {
        self.rows.lock().await.clone()
    }
}

#[async_trait]
impl RequestStore for MemoryStore {
    async fn insert(&self, record: &RequestRecord) -> Result<InsertAck, StoreError> {
        let id = Uuid::new_v4().to_string();
        let mut rows = self.rows.lock().await;
        rows.push((id.clone(), record.clone()));
        tracing::debug!(rows = rows.len(), draft = record.is_draft, "memory insert");
        Ok(InsertAck { id: Some(id) })
    }

    async fn fetch_all(&self) -> Result<Vec<RequestRecord>, StoreError> {
        let rows = self.rows.lock().await;
        let mut records: Vec<RequestRecord> =
            rows.iter().map(|(_, record)| record.clone()).collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_spec::IntakeAnswers;
    use time::OffsetDateTime;

    #[tokio::test]
    async fn inserts_are_independent_rows() {
        let store = MemoryStore::new();
        let answers = IntakeAnswers::default();
        let now = OffsetDateTime::now_utc();

        let first = store
            .insert(&RequestRecord::draft(&answers, now))
            .await
            .unwrap();
        let second = store
            .insert(&RequestRecord::draft(&answers, now))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn fetch_all_orders_newest_first() {
        let store = MemoryStore::new();
        let answers = IntakeAnswers::default();
        let older = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let newer = OffsetDateTime::from_unix_timestamp(1_700_000_100).unwrap();

        store
            .insert(&RequestRecord::draft(&answers, older))
            .await
            .unwrap();
        store
            .insert(&RequestRecord::draft(&answers, newer))
            .await
            .unwrap();

        let rows = store.fetch_all().await.unwrap();
        assert_eq!(rows[0].created_at, newer);
        assert_eq!(rows[1].created_at, older);
    }
}
