use std::sync::Arc;

use async_trait::async_trait;
use intake_spec::{AnswerUpdate, SequencerError, Step, UploadRef};
use intake_store::{
    InsertAck, MemoryStore, MemoryUploadGateway, RequestRecord, RequestStore, StoreError,
    UploadError, UploadFile, UploadGateway,
};
use intake_wizard::{SessionError, WizardSession};
use tokio::sync::Notify;

#[tokio::test]
async fn drafts_are_independent_rows_stamped_at_write_time() {
    let store = Arc::new(MemoryStore::new());
    let mut session = WizardSession::new(store.clone(), Arc::new(MemoryUploadGateway::new()));
    let started = session.started_at();

    session.apply(AnswerUpdate::FullName("Jane".into()));
    let first = session.save_draft().await.unwrap();
    session.apply(AnswerUpdate::FullName("Jane Doe".into()));
    let second = session.save_draft().await.unwrap();
    assert_ne!(first.id, second.id);

    let rows = store.rows().await;
    assert_eq!(rows.len(), 2);
    for (_, record) in &rows {
        assert!(record.is_draft);
        assert!(record.created_at >= started);
    }
    // the earlier row keeps the snapshot it was written from
    assert_eq!(rows[0].1.full_name, "Jane");
    assert_eq!(rows[1].1.full_name, "Jane Doe");
}

#[tokio::test]
async fn drafts_save_from_any_step_even_with_invalid_answers() {
    let store = Arc::new(MemoryStore::new());
    let session = WizardSession::new(store.clone(), Arc::new(MemoryUploadGateway::new()));

    // nothing filled in, still a valid draft write
    session.save_draft().await.unwrap();
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn draft_after_submission_is_rejected() {
    let store = Arc::new(MemoryStore::new());
    let mut session = WizardSession::new(store, Arc::new(MemoryUploadGateway::new()));
    fill_and_submit(&mut session).await;

    assert!(matches!(
        session.save_draft().await,
        Err(SessionError::Sequencer(SequencerError::AlreadySubmitted))
    ));
}

struct BlockingStore {
    entered: Arc<Notify>,
    release: Arc<Notify>,
}

#[async_trait]
impl RequestStore for BlockingStore {
    async fn insert(&self, _record: &RequestRecord) -> Result<InsertAck, StoreError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(InsertAck {
            id: Some("blocked-1".into()),
        })
    }

    async fn fetch_all(&self) -> Result<Vec<RequestRecord>, StoreError> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn second_save_while_one_is_in_flight_is_refused() {
    let entered = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let store = Arc::new(BlockingStore {
        entered: entered.clone(),
        release: release.clone(),
    });
    let session = Arc::new(WizardSession::new(
        store,
        Arc::new(MemoryUploadGateway::new()),
    ));

    let in_flight = {
        let session = session.clone();
        tokio::spawn(async move { session.save_draft().await })
    };
    entered.notified().await;

    assert!(matches!(
        session.save_draft().await,
        Err(SessionError::WriteInFlight)
    ));

    release.notify_one();
    let ack = in_flight.await.unwrap().unwrap();
    assert_eq!(ack.id.as_deref(), Some("blocked-1"));

    // the gate reopens once the write completes
    release.notify_one();
    session.save_draft().await.unwrap();
}

struct FlakyGateway {
    fail_on: String,
}

#[async_trait]
impl UploadGateway for FlakyGateway {
    async fn upload(&self, file: &UploadFile) -> Result<UploadRef, UploadError> {
        if file.name == self.fail_on {
            return Err(UploadError::Http {
                status: 503,
                body: "storage unavailable".into(),
            });
        }
        Ok(UploadRef::new(format!("flaky://{}", file.name)))
    }
}

#[tokio::test]
async fn mid_batch_upload_failure_keeps_completed_references() {
    let gateway = Arc::new(FlakyGateway {
        fail_on: "palette.jpg".into(),
    });
    let mut session = WizardSession::new(Arc::new(MemoryStore::new()), gateway);

    let files = vec![
        UploadFile::new("logo.png", "image/png", bytes::Bytes::from_static(b"a")),
        UploadFile::new("palette.jpg", "image/jpeg", bytes::Bytes::from_static(b"b")),
        UploadFile::new("mood.png", "image/png", bytes::Bytes::from_static(b"c")),
    ];
    assert!(matches!(
        session.upload_design_materials(&files).await,
        Err(SessionError::Upload(UploadError::Http { status: 503, .. }))
    ));

    // the first upload survives, the rest of the batch was abandoned
    assert_eq!(
        session
            .answers()
            .design_materials
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>(),
        vec!["flaky://logo.png"],
    );
}

async fn fill_and_submit(session: &mut WizardSession) {
    use intake_spec::{Branding, BudgetRange, DesignStyle, Feature, Timeline, WebsiteType};

    session.apply(AnswerUpdate::FullName("Jane Doe".into()));
    session.apply(AnswerUpdate::Whatsapp("+254712345678".into()));
    session.apply(AnswerUpdate::Email("jane@x.com".into()));
    session.apply(AnswerUpdate::BusinessDescription("Online bakery".into()));
    session.apply(AnswerUpdate::WebsiteType(WebsiteType::OnlineStore));
    session.apply(AnswerUpdate::TargetAudience("Nairobi foodies".into()));
    session.apply(AnswerUpdate::ToggleFeature(Feature::Payments));
    session.apply(AnswerUpdate::Branding(Branding::NeedsDesign));
    session.apply(AnswerUpdate::ToggleDesignStyle(DesignStyle::Modern));
    session.apply(AnswerUpdate::Timeline(Timeline::Asap));
    session.apply(AnswerUpdate::BudgetRange(BudgetRange::Under100k));
    session.go_to(Step::Review).unwrap();
    session.submit().await.unwrap();
}
