#![allow(missing_docs)]

pub mod answers;
pub mod options;
pub mod sequencer;
pub mod validate;

pub use answers::{AnswerUpdate, IntakeAnswers, UploadRef};
pub use options::{
    Branding, BudgetRange, DesignStyle, Feature, PaymentMethod, Timeline, WebsiteType,
};
pub use sequencer::{SequencerError, Step, StepSequencer, WizardState};
pub use validate::{FieldError, ValidationResult, validate_all, validate_step};
