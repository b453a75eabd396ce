use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::answers::IntakeAnswers;
use crate::validate::{FieldError, validate_step};

/// The six wizard steps, in order. Each owns a subset of the accumulator's
/// fields and one validation rule.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    BasicInfo,
    Purpose,
    Features,
    Design,
    Commercial,
    Review,
}

impl Step {
    pub const ALL: &'static [Step] = &[
        Step::BasicInfo,
        Step::Purpose,
        Step::Features,
        Step::Design,
        Step::Commercial,
        Step::Review,
    ];

    pub const FIRST: Step = Step::BasicInfo;
    pub const LAST: Step = Step::Review;

    /// 1-based position shown in the progress indicator.
    pub fn index(&self) -> u8 {
        match self {
            Step::BasicInfo => 1,
            Step::Purpose => 2,
            Step::Features => 3,
            Step::Design => 4,
            Step::Commercial => 5,
            Step::Review => 6,
        }
    }

    pub fn from_index(index: u8) -> Option<Step> {
        Step::ALL.get(index.checked_sub(1)? as usize).copied()
    }

    /// Addressable location for this step (`step1`…`step6`).
    pub fn slug(&self) -> &'static str {
        match self {
            Step::BasicInfo => "step1",
            Step::Purpose => "step2",
            Step::Features => "step3",
            Step::Design => "step4",
            Step::Commercial => "step5",
            Step::Review => "step6",
        }
    }

    pub fn next(&self) -> Option<Step> {
        Step::from_index(self.index() + 1)
    }

    pub fn prev(&self) -> Option<Step> {
        Step::from_index(self.index().wrapping_sub(1))
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Where the wizard currently is: on a step, or past the final write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WizardState {
    InProgress(Step),
    Submitted,
}

impl WizardState {
    /// Addressable location: the active step's slug, or `success` once
    /// submitted.
    pub fn slug(&self) -> &'static str {
        match self {
            WizardState::InProgress(step) => step.slug(),
            WizardState::Submitted => "success",
        }
    }
}

/// Transitions the sequencer can refuse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequencerError {
    /// The current step failed its validation gate; position is unchanged
    /// and every error for the step is included.
    #[error("{step} has {} validation error(s)", errors.len())]
    Blocked { step: Step, errors: Vec<FieldError> },
    /// The final step never advances; it completes through a successful
    /// submission write.
    #[error("the review step completes by submitting the request")]
    SubmitRequired,
    /// No transitions exist after the final write.
    #[error("the request was already submitted")]
    AlreadySubmitted,
    /// `complete` was called from somewhere other than the review step.
    #[error("submission is only available from the review step (currently at {0})")]
    NotAtFinalStep(Step),
}

/// State machine over the ordered step list. Forward movement always passes
/// through the validation gate of the step being left; backward movement
/// never re-validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequencer {
    state: WizardState,
}

impl Default for StepSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl StepSequencer {
    pub fn new() -> Self {
        Self {
            state: WizardState::InProgress(Step::FIRST),
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    /// The active step, or `None` once submitted.
    pub fn current(&self) -> Option<Step> {
        match self.state {
            WizardState::InProgress(step) => Some(step),
            WizardState::Submitted => None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.state, WizardState::Submitted)
    }

    /// Moves exactly one step forward if the current step validates.
    pub fn advance(&mut self, answers: &IntakeAnswers) -> Result<Step, SequencerError> {
        let current = self.current().ok_or(SequencerError::AlreadySubmitted)?;
        let next = current.next().ok_or(SequencerError::SubmitRequired)?;
        let result = validate_step(current, answers);
        if !result.is_valid() {
            return Err(SequencerError::Blocked {
                step: current,
                errors: result.errors,
            });
        }
        self.state = WizardState::InProgress(next);
        Ok(next)
    }

    /// Moves exactly one step backward. Never validates the step being
    /// left; returns `None` from the first step or after submission.
    pub fn retreat(&mut self) -> Option<Step> {
        let prev = self.current()?.prev()?;
        self.state = WizardState::InProgress(prev);
        Some(prev)
    }

    /// Direct navigation. Backward jumps are always allowed; a forward jump
    /// validates every step from the current one up to (but excluding) the
    /// target, stopping at the first step that fails.
    pub fn go_to(&mut self, target: Step, answers: &IntakeAnswers) -> Result<Step, SequencerError> {
        let current = self.current().ok_or(SequencerError::AlreadySubmitted)?;
        if target <= current {
            self.state = WizardState::InProgress(target);
            return Ok(target);
        }
        for index in current.index()..target.index() {
            let step = Step::from_index(index).expect("index within step range");
            let result = validate_step(step, answers);
            if !result.is_valid() {
                return Err(SequencerError::Blocked {
                    step,
                    errors: result.errors,
                });
            }
        }
        self.state = WizardState::InProgress(target);
        Ok(target)
    }

    /// Terminal transition, called after the final write succeeds. Only
    /// valid from the review step with every gated step passing.
    pub fn complete(&mut self, answers: &IntakeAnswers) -> Result<(), SequencerError> {
        let current = self.current().ok_or(SequencerError::AlreadySubmitted)?;
        if current != Step::LAST {
            return Err(SequencerError::NotAtFinalStep(current));
        }
        for step in Step::ALL {
            let result = validate_step(*step, answers);
            if !result.is_valid() {
                return Err(SequencerError::Blocked {
                    step: *step,
                    errors: result.errors,
                });
            }
        }
        self.state = WizardState::Submitted;
        Ok(())
    }
}
