use once_cell::sync::Lazy;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::answers::IntakeAnswers;
use crate::sequencer::Step;

// Same shape check the original form applied: something before the `@`,
// something after, and a dot in the domain part.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email regex compiles"));

/// One validation failure, attached to the field that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub code: String,
}

impl FieldError {
    fn new(field: &str, message: &str, code: &str) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }

    fn missing(field: &str, message: &str) -> Self {
        Self::new(field, message, "missing_required")
    }
}

/// Outcome of checking one step against the accumulator. A step with zero
/// errors is valid; every error for the step is reported at once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct ValidationResult {
    pub step: Option<Step>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Pure per-step validation gate. Never inspects fields owned by other
/// steps, so editing a later step can never invalidate an earlier one.
pub fn validate_step(step: Step, answers: &IntakeAnswers) -> ValidationResult {
    let mut errors = Vec::new();

    match step {
        Step::BasicInfo => {
            if answers.full_name.trim().is_empty() {
                errors.push(FieldError::missing("full_name", "Full name is required"));
            }
            if answers.whatsapp.trim().is_empty() {
                errors.push(FieldError::missing("whatsapp", "WhatsApp number is required"));
            }
            if answers.email.trim().is_empty() {
                errors.push(FieldError::missing("email", "Email is required"));
            } else if !EMAIL_SHAPE.is_match(answers.email.trim()) {
                errors.push(FieldError::new("email", "Email is invalid", "invalid_email"));
            }
        }
        Step::Purpose => {
            if answers.business_description.trim().is_empty() {
                errors.push(FieldError::missing(
                    "business_description",
                    "Please describe your business or project",
                ));
            }
            if answers.website_type.is_none() {
                errors.push(FieldError::missing(
                    "website_type",
                    "Please select a website type",
                ));
            }
            if answers.target_audience.trim().is_empty() {
                errors.push(FieldError::missing(
                    "target_audience",
                    "Target audience is required",
                ));
            }
        }
        Step::Features => {
            if answers.features.is_empty() {
                errors.push(FieldError::new(
                    "features",
                    "Please select at least one feature",
                    "empty_set",
                ));
            }
        }
        Step::Design => {
            if answers.branding.is_none() {
                errors.push(FieldError::missing(
                    "branding",
                    "Please select a branding option",
                ));
            }
            if answers.design_styles.is_empty() {
                errors.push(FieldError::new(
                    "design_styles",
                    "Please select at least one design style",
                    "empty_set",
                ));
            }
        }
        Step::Commercial => {
            if answers.timeline.is_none() {
                errors.push(FieldError::missing("timeline", "Please select a timeline"));
            }
            if answers.budget_range.is_none() {
                errors.push(FieldError::missing(
                    "budget_range",
                    "Please select a budget range",
                ));
            }
        }
        Step::Review => {}
    }

    ValidationResult {
        step: Some(step),
        errors,
    }
}

/// Checks every gated step (1–5) and returns the results that failed.
/// Used before the final write and by the CLI submit path.
pub fn validate_all(answers: &IntakeAnswers) -> Vec<ValidationResult> {
    Step::ALL
        .iter()
        .map(|step| validate_step(*step, answers))
        .filter(|result| !result.is_valid())
        .collect()
}
