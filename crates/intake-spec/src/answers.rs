use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::options::{
    Branding, BudgetRange, DesignStyle, Feature, PaymentMethod, Timeline, WebsiteType,
};
use crate::sequencer::Step;

/// Opaque reference returned by the upload gateway for one stored asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct UploadRef(String);

impl UploadRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UploadRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The answer accumulator: one instance per wizard session, shared by every
/// step and mutated only through [`IntakeAnswers::apply`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct IntakeAnswers {
    // Step 1 — basic info
    pub full_name: String,
    pub whatsapp: String,
    pub email: String,
    // Step 2 — purpose
    pub business_description: String,
    pub website_type: Option<WebsiteType>,
    pub target_audience: String,
    pub competitors: Option<String>,
    // Step 3 — features
    pub features: BTreeSet<Feature>,
    pub additional_features: Option<String>,
    // Step 4 — design
    pub branding: Option<Branding>,
    pub design_styles: BTreeSet<DesignStyle>,
    pub reference_websites: Option<String>,
    pub design_materials: Vec<UploadRef>,
    // Step 5 — timeline & budget
    pub timeline: Option<Timeline>,
    pub budget_range: Option<BudgetRange>,
    pub payment_method: Option<PaymentMethod>,
    pub additional_notes: Option<String>,
    // Technical details collected outside the validation gates; these exist
    // so the persisted-schema mapping stays total.
    pub technical_needs: Option<String>,
    pub domain: Option<String>,
    pub maintenance: Option<String>,
    pub budget: Option<String>,
    pub completion_date: Option<String>,
    pub deposit_amount: Option<String>,
    pub installments: Option<String>,
    pub installment_amount: Option<String>,
}

/// Every mutation of the accumulator, funneled through one reducer so each
/// change is traceable and testable away from any rendering concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum AnswerUpdate {
    FullName(String),
    Whatsapp(String),
    Email(String),
    BusinessDescription(String),
    WebsiteType(WebsiteType),
    TargetAudience(String),
    Competitors(Option<String>),
    ToggleFeature(Feature),
    AdditionalFeatures(Option<String>),
    Branding(Branding),
    ToggleDesignStyle(DesignStyle),
    ReferenceWebsites(Option<String>),
    PushDesignMaterial(UploadRef),
    Timeline(Timeline),
    BudgetRange(BudgetRange),
    PaymentMethod(PaymentMethod),
    AdditionalNotes(Option<String>),
    TechnicalNeeds(Option<String>),
    Domain(Option<String>),
    Maintenance(Option<String>),
    Budget(Option<String>),
    CompletionDate(Option<String>),
    DepositAmount(Option<String>),
    Installments(Option<String>),
    InstallmentAmount(Option<String>),
}

impl AnswerUpdate {
    /// The step that owns the field this update writes. No other step ever
    /// writes it.
    pub fn step(&self) -> Step {
        match self {
            AnswerUpdate::FullName(_) | AnswerUpdate::Whatsapp(_) | AnswerUpdate::Email(_) => {
                Step::BasicInfo
            }
            AnswerUpdate::BusinessDescription(_)
            | AnswerUpdate::WebsiteType(_)
            | AnswerUpdate::TargetAudience(_)
            | AnswerUpdate::Competitors(_) => Step::Purpose,
            AnswerUpdate::ToggleFeature(_) | AnswerUpdate::AdditionalFeatures(_) => Step::Features,
            AnswerUpdate::Branding(_)
            | AnswerUpdate::ToggleDesignStyle(_)
            | AnswerUpdate::ReferenceWebsites(_)
            | AnswerUpdate::PushDesignMaterial(_) => Step::Design,
            AnswerUpdate::Timeline(_)
            | AnswerUpdate::BudgetRange(_)
            | AnswerUpdate::PaymentMethod(_)
            | AnswerUpdate::AdditionalNotes(_)
            | AnswerUpdate::TechnicalNeeds(_)
            | AnswerUpdate::Domain(_)
            | AnswerUpdate::Maintenance(_)
            | AnswerUpdate::Budget(_)
            | AnswerUpdate::CompletionDate(_)
            | AnswerUpdate::DepositAmount(_)
            | AnswerUpdate::Installments(_)
            | AnswerUpdate::InstallmentAmount(_) => Step::Commercial,
        }
    }
}

impl IntakeAnswers {
    /// Applies one update to the accumulator. Toggle updates remove a value
    /// that is already present and insert one that is absent, so a double
    /// toggle always restores the set.
    pub fn apply(&mut self, update: AnswerUpdate) {
        match update {
            AnswerUpdate::FullName(value) => self.full_name = value,
            AnswerUpdate::Whatsapp(value) => self.whatsapp = value,
            AnswerUpdate::Email(value) => self.email = value,
            AnswerUpdate::BusinessDescription(value) => self.business_description = value,
            AnswerUpdate::WebsiteType(value) => self.website_type = Some(value),
            AnswerUpdate::TargetAudience(value) => self.target_audience = value,
            AnswerUpdate::Competitors(value) => self.competitors = value,
            AnswerUpdate::ToggleFeature(feature) => {
                if !self.features.remove(&feature) {
                    self.features.insert(feature);
                }
            }
            AnswerUpdate::AdditionalFeatures(value) => self.additional_features = value,
            AnswerUpdate::Branding(value) => self.branding = Some(value),
            AnswerUpdate::ToggleDesignStyle(style) => {
                if !self.design_styles.remove(&style) {
                    self.design_styles.insert(style);
                }
            }
            AnswerUpdate::ReferenceWebsites(value) => self.reference_websites = value,
            AnswerUpdate::PushDesignMaterial(reference) => self.design_materials.push(reference),
            AnswerUpdate::Timeline(value) => self.timeline = Some(value),
            AnswerUpdate::BudgetRange(value) => self.budget_range = Some(value),
            AnswerUpdate::PaymentMethod(value) => self.payment_method = Some(value),
            AnswerUpdate::AdditionalNotes(value) => self.additional_notes = value,
            AnswerUpdate::TechnicalNeeds(value) => self.technical_needs = value,
            AnswerUpdate::Domain(value) => self.domain = value,
            AnswerUpdate::Maintenance(value) => self.maintenance = value,
            AnswerUpdate::Budget(value) => self.budget = value,
            AnswerUpdate::CompletionDate(value) => self.completion_date = value,
            AnswerUpdate::DepositAmount(value) => self.deposit_amount = value,
            AnswerUpdate::Installments(value) => self.installments = value,
            AnswerUpdate::InstallmentAmount(value) => self.installment_amount = value,
        }
    }

    /// Serializes the accumulator as indented JSON for debugging and for
    /// answers files consumed by the CLI.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_roundtrip_json() {
        let mut answers = IntakeAnswers::default();
        answers.apply(AnswerUpdate::FullName("Jane Doe".into()));
        answers.apply(AnswerUpdate::ToggleFeature(Feature::Blog));
        let json = answers.to_json_pretty().unwrap();
        let back: IntakeAnswers = serde_json::from_str(&json).unwrap();
        assert_eq!(back, answers);
    }

    #[test]
    fn partial_answers_file_deserializes_with_defaults() {
        let answers: IntakeAnswers =
            serde_json::from_str(r#"{ "full_name": "Jane", "features": ["blog"] }"#).unwrap();
        assert_eq!(answers.full_name, "Jane");
        assert!(answers.features.contains(&Feature::Blog));
        assert!(answers.website_type.is_none());
    }

    #[test]
    fn misspelled_fields_are_rejected_instead_of_dropped() {
        assert!(serde_json::from_str::<IntakeAnswers>(r#"{ "fullname": "typo" }"#).is_err());
    }
}
