use intake_spec::{IntakeAnswers, UploadRef};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Status assigned when a request row is written.
pub const STATUS_PENDING: &str = "pending";

/// One row of the external `website_requests` schema. Field names follow
/// the persisted column names, which mix camelCase and flattened lowercase;
/// the serde renames pin them down so the wire shape never drifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestRecord {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub whatsapp: String,
    pub email: String,
    #[serde(rename = "businessDescription")]
    pub business_description: String,
    #[serde(rename = "websiteTypes")]
    pub website_types: Vec<String>,
    #[serde(rename = "targetAudience")]
    pub target_audience: String,
    pub competitors: String,
    pub features: Vec<String>,
    #[serde(rename = "additionalFeatures")]
    pub additional_features: String,
    pub branding: String,
    #[serde(rename = "designStyles")]
    pub design_styles: Vec<String>,
    #[serde(rename = "referenceWebsites")]
    pub reference_websites: String,
    pub files: Vec<String>,
    pub technicalrequirements: String,
    pub hostingpreferences: String,
    pub maintenance: String,
    pub budget: String,
    #[serde(rename = "budgetRange")]
    pub budget_range: String,
    pub deadline: String,
    pub timeline: String,
    pub paymentoption: String,
    pub depositamount: String,
    pub installments: String,
    pub installmentamount: String,
    #[serde(rename = "additionalNotes")]
    pub additional_notes: String,
    #[serde(rename = "isDraft")]
    pub is_draft: bool,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl RequestRecord {
    /// Snapshot of the accumulator tagged as an in-progress draft. The
    /// timestamp is the moment of the write, not of accumulator creation.
    pub fn draft(answers: &IntakeAnswers, created_at: OffsetDateTime) -> Self {
        Self::assemble(answers, true, created_at)
    }

    /// The one final row. `is_draft` is false for exactly this write.
    pub fn submission(answers: &IntakeAnswers, created_at: OffsetDateTime) -> Self {
        Self::assemble(answers, false, created_at)
    }

    /// Pure, total mapping from internal field names to the persisted
    /// columns. Every column has a defined source; absent optionals map to
    /// empty defaults.
    fn assemble(answers: &IntakeAnswers, is_draft: bool, created_at: OffsetDateTime) -> Self {
        Self {
            full_name: answers.full_name.clone(),
            whatsapp: answers.whatsapp.clone(),
            email: answers.email.clone(),
            business_description: answers.business_description.clone(),
            website_types: answers
                .website_type
                .map(|kind| vec![kind.label().to_string()])
                .unwrap_or_default(),
            target_audience: answers.target_audience.clone(),
            competitors: opt(&answers.competitors),
            features: answers
                .features
                .iter()
                .map(|feature| feature.label().to_string())
                .collect(),
            additional_features: opt(&answers.additional_features),
            branding: answers
                .branding
                .map(|branding| branding.label().to_string())
                .unwrap_or_default(),
            design_styles: answers
                .design_styles
                .iter()
                .map(|style| style.label().to_string())
                .collect(),
            reference_websites: opt(&answers.reference_websites),
            files: answers
                .design_materials
                .iter()
                .map(|reference| reference.as_str().to_string())
                .collect(),
            technicalrequirements: opt(&answers.technical_needs),
            hostingpreferences: opt(&answers.domain),
            maintenance: opt(&answers.maintenance),
            budget: opt(&answers.budget),
            budget_range: answers
                .budget_range
                .map(|range| range.label().to_string())
                .unwrap_or_default(),
            deadline: opt(&answers.completion_date),
            timeline: answers
                .timeline
                .map(|timeline| timeline.label().to_string())
                .unwrap_or_default(),
            paymentoption: answers
                .payment_method
                .map(|method| method.label().to_string())
                .unwrap_or_default(),
            depositamount: opt(&answers.deposit_amount),
            installments: opt(&answers.installments),
            installmentamount: opt(&answers.installment_amount),
            additional_notes: opt(&answers.additional_notes),
            is_draft,
            status: STATUS_PENDING.to_string(),
            created_at,
        }
    }

    /// Ordered upload references as typed values, mainly for round-trips in
    /// tests and the CLI's list output.
    pub fn upload_refs(&self) -> Vec<UploadRef> {
        self.files.iter().map(UploadRef::new).collect()
    }
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
