use intake_spec::{
    AnswerUpdate, Branding, BudgetRange, DesignStyle, Feature, IntakeAnswers, Step, Timeline,
    WebsiteType, validate_all, validate_step,
};

fn answers_with_basic_info() -> IntakeAnswers {
    let mut answers = IntakeAnswers::default();
    answers.apply(AnswerUpdate::FullName("Jane Doe".into()));
    answers.apply(AnswerUpdate::Whatsapp("+254712345678".into()));
    answers.apply(AnswerUpdate::Email("jane@x.com".into()));
    answers
}

fn complete_answers() -> IntakeAnswers {
    let mut answers = answers_with_basic_info();
    answers.apply(AnswerUpdate::BusinessDescription("Online bakery".into()));
    answers.apply(AnswerUpdate::WebsiteType(WebsiteType::OnlineStore));
    answers.apply(AnswerUpdate::TargetAudience("Nairobi foodies".into()));
    answers.apply(AnswerUpdate::ToggleFeature(Feature::Payments));
    answers.apply(AnswerUpdate::Branding(Branding::NeedsDesign));
    answers.apply(AnswerUpdate::ToggleDesignStyle(DesignStyle::Minimal));
    answers.apply(AnswerUpdate::Timeline(Timeline::WithinOneMonth));
    answers.apply(AnswerUpdate::BudgetRange(BudgetRange::From100kTo300k));
    answers
}

#[test]
fn basic_info_reports_every_missing_field_at_once() {
    let result = validate_step(Step::BasicInfo, &IntakeAnswers::default());
    assert!(!result.is_valid());
    let fields: Vec<&str> = result.errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["full_name", "whatsapp", "email"]);
    assert!(result.errors.iter().all(|e| e.code == "missing_required"));
}

#[test]
fn email_shape_is_checked_only_when_present() {
    let mut answers = answers_with_basic_info();
    answers.apply(AnswerUpdate::Email("not-an-email".into()));
    let result = validate_step(Step::BasicInfo, &answers);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].field, "email");
    assert_eq!(result.errors[0].code, "invalid_email");

    answers.apply(AnswerUpdate::Email("jane@x.com".into()));
    assert!(validate_step(Step::BasicInfo, &answers).is_valid());
}

#[test]
fn whitespace_only_values_do_not_pass() {
    let mut answers = answers_with_basic_info();
    answers.apply(AnswerUpdate::FullName("   ".into()));
    let result = validate_step(Step::BasicInfo, &answers);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].field, "full_name");
}

#[test]
fn purpose_requires_description_type_and_audience() {
    let mut answers = answers_with_basic_info();
    answers.apply(AnswerUpdate::WebsiteType(WebsiteType::Portfolio));
    answers.apply(AnswerUpdate::TargetAudience("Freelancers".into()));
    let result = validate_step(Step::Purpose, &answers);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].field, "business_description");
}

#[test]
fn optional_fields_never_block() {
    let mut answers = complete_answers();
    // competitors, additional notes, reference sites stay empty
    answers.apply(AnswerUpdate::Competitors(None));
    answers.apply(AnswerUpdate::AdditionalNotes(None));
    for step in Step::ALL {
        assert!(
            validate_step(*step, &answers).is_valid(),
            "{step} unexpectedly blocked"
        );
    }
}

#[test]
fn features_and_design_styles_require_non_empty_sets() {
    let answers = IntakeAnswers::default();
    let features = validate_step(Step::Features, &answers);
    assert_eq!(features.errors.len(), 1);
    assert_eq!(features.errors[0].code, "empty_set");

    let design = validate_step(Step::Design, &answers);
    let fields: Vec<&str> = design.errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["branding", "design_styles"]);
}

#[test]
fn review_step_has_no_field_validation() {
    assert!(validate_step(Step::Review, &IntakeAnswers::default()).is_valid());
}

#[test]
fn validate_all_is_empty_for_complete_answers() {
    assert!(validate_all(&complete_answers()).is_empty());
    let failing = validate_all(&IntakeAnswers::default());
    assert_eq!(failing.len(), 5);
}
