#![allow(missing_docs)]

//! Session driver tying the step sequencer and answer accumulator to the
//! request store and upload gateway. One [`WizardSession`] per intake
//! flow; it owns the state the persistence layer snapshots.

pub mod single_flight;

use std::sync::Arc;

use thiserror::Error;
use time::OffsetDateTime;

use intake_spec::{
    AnswerUpdate, IntakeAnswers, SequencerError, Step, StepSequencer, UploadRef, ValidationResult,
    WizardState, validate_step,
};
use intake_store::{
    InsertAck, RequestRecord, RequestStore, StoreError, UploadError, UploadFile, UploadGateway,
    check_upload,
};

pub use single_flight::{WriteGate, WritePermit};

/// Failures surfaced by session operations. Navigation errors leave the
/// session exactly where it was; write errors leave the accumulator and
/// sequencer untouched so the write can be re-triggered.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Sequencer(#[from] SequencerError),
    #[error("another save is already in flight")]
    WriteInFlight,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Upload(#[from] UploadError),
}

/// One intake flow: accumulator, sequencer position, and the backends the
/// flow persists through.
pub struct WizardSession {
    answers: IntakeAnswers,
    sequencer: StepSequencer,
    store: Arc<dyn RequestStore>,
    uploads: Arc<dyn UploadGateway>,
    write_gate: WriteGate,
    started_at: OffsetDateTime,
}

impl WizardSession {
    pub fn new(store: Arc<dyn RequestStore>, uploads: Arc<dyn UploadGateway>) -> Self {
        Self {
            answers: IntakeAnswers::default(),
            sequencer: StepSequencer::new(),
            store,
            uploads,
            write_gate: WriteGate::new(),
            started_at: OffsetDateTime::now_utc(),
        }
    }

    /// Resumes a flow from previously collected answers, starting back at
    /// the first step.
    pub fn with_answers(
        store: Arc<dyn RequestStore>,
        uploads: Arc<dyn UploadGateway>,
        answers: IntakeAnswers,
    ) -> Self {
        Self {
            answers,
            ..Self::new(store, uploads)
        }
    }

    pub fn answers(&self) -> &IntakeAnswers {
        &self.answers
    }

    pub fn state(&self) -> WizardState {
        self.sequencer.state()
    }

    /// The active step, or `None` once submitted.
    pub fn current_step(&self) -> Option<Step> {
        self.sequencer.current()
    }

    pub fn is_submitted(&self) -> bool {
        self.sequencer.is_submitted()
    }

    pub fn started_at(&self) -> OffsetDateTime {
        self.started_at
    }

    /// Funnels one field change into the accumulator.
    pub fn apply(&mut self, update: AnswerUpdate) {
        tracing::debug!(step = %update.step(), "answer updated");
        self.answers.apply(update);
    }

    /// Validation outcome for the active step, without moving.
    pub fn validate_current(&self) -> Option<ValidationResult> {
        self.current_step()
            .map(|step| validate_step(step, &self.answers))
    }

    pub fn advance(&mut self) -> Result<Step, SessionError> {
        Ok(self.sequencer.advance(&self.answers)?)
    }

    pub fn retreat(&mut self) -> Option<Step> {
        self.sequencer.retreat()
    }

    pub fn go_to(&mut self, target: Step) -> Result<Step, SessionError> {
        Ok(self.sequencer.go_to(target, &self.answers)?)
    }

    /// Writes the current accumulator as a new draft row. Available from
    /// any step, regardless of validation state; each call produces an
    /// independent row stamped at the moment of the write.
    pub async fn save_draft(&self) -> Result<InsertAck, SessionError> {
        if self.sequencer.is_submitted() {
            return Err(SequencerError::AlreadySubmitted.into());
        }
        let _permit = self
            .write_gate
            .acquire()
            .ok_or(SessionError::WriteInFlight)?;
        let record = RequestRecord::draft(&self.answers, OffsetDateTime::now_utc());
        let ack = self.store.insert(&record).await?;
        tracing::info!(id = ?ack.id, "draft saved");
        Ok(ack)
    }

    /// The final write. Only valid from the review step with every gated
    /// step passing; the sequencer transitions to `Submitted` only after
    /// the store acknowledges the row.
    pub async fn submit(&mut self) -> Result<InsertAck, SessionError> {
        let _permit = self
            .write_gate
            .acquire()
            .ok_or(SessionError::WriteInFlight)?;
        let mut sequencer = self.sequencer.clone();
        sequencer.complete(&self.answers)?;
        let record = RequestRecord::submission(&self.answers, OffsetDateTime::now_utc());
        let ack = self.store.insert(&record).await?;
        self.sequencer = sequencer;
        tracing::info!(id = ?ack.id, "request submitted");
        Ok(ack)
    }

    /// Uploads a batch of design materials. Every file is checked against
    /// the type and size limits before any byte leaves the client; a
    /// gateway failure mid-batch aborts the remainder but keeps the
    /// references already recorded.
    pub async fn upload_design_materials(
        &mut self,
        files: &[UploadFile],
    ) -> Result<Vec<UploadRef>, SessionError> {
        for file in files {
            check_upload(file)?;
        }
        let mut added = Vec::with_capacity(files.len());
        for file in files {
            let reference = match self.uploads.upload(file).await {
                Ok(reference) => reference,
                Err(err) => {
                    tracing::warn!(name = %file.name, completed = added.len(), "upload batch aborted");
                    return Err(err.into());
                }
            };
            self.answers
                .apply(AnswerUpdate::PushDesignMaterial(reference.clone()));
            added.push(reference);
        }
        Ok(added)
    }

    /// Discards everything and starts a fresh flow against the same
    /// backends.
    pub fn reset(&mut self) {
        self.answers = IntakeAnswers::default();
        self.sequencer = StepSequencer::new();
        self.started_at = OffsetDateTime::now_utc();
        tracing::debug!("session reset");
    }
}

impl std::fmt::Debug for WizardSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardSession")
            .field("state", &self.sequencer.state())
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}
