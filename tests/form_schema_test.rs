use athlete_track_ui::models::{InjuryStatus, MealType, MetricType, Severity};
use athlete_track_ui::schema::*;

fn finance_values(category: &str, amount: &str, date: &str) -> FormValues {
    FormValues::new()
        .with_text("category", category)
        .with_text("amount", amount)
        .with_text("date", date)
}

#[test]
fn finance_happy_path_passes() {
    let values = finance_values("Equipment", "12.50", "2025-03-01");
    assert!(FINANCE_SCHEMA.validate(&values).is_ok());
}

#[test]
fn finance_negative_amount_is_rejected() {
    let values = finance_values("Equipment", "-4", "2025-03-01");
    let errors = FINANCE_SCHEMA.validate(&values).unwrap_err();
    assert!(errors.get("amount").unwrap().contains("positive"));
    assert!(errors.get("category").is_none());
}

#[test]
fn finance_zero_amount_is_rejected() {
    let values = finance_values("Equipment", "0", "2025-03-01");
    assert!(FINANCE_SCHEMA.validate(&values).is_err());
}

#[test]
fn finance_empty_amount_is_rejected() {
    let values = finance_values("Equipment", "", "2025-03-01");
    let errors = FINANCE_SCHEMA.validate(&values).unwrap_err();
    assert!(errors.get("amount").is_some());
}

#[test]
fn finance_unknown_category_is_rejected() {
    let values = finance_values("Yachts", "10", "2025-03-01");
    let errors = FINANCE_SCHEMA.validate(&values).unwrap_err();
    assert!(errors.get("category").is_some());
}

#[test]
fn finance_bad_date_is_rejected() {
    let values = finance_values("Equipment", "10", "not-a-date");
    let errors = FINANCE_SCHEMA.validate(&values).unwrap_err();
    assert!(errors.get("date").is_some());
}

#[test]
fn login_enforces_minimum_lengths() {
    let values = FormValues::new()
        .with_text("username", "ab")
        .with_text("password", "12345");
    let errors = LOGIN_SCHEMA.validate(&values).unwrap_err();
    assert!(errors.get("username").unwrap().contains("at least 3"));
    assert!(errors.get("password").unwrap().contains("at least 6"));

    let values = FormValues::new()
        .with_text("username", "abc")
        .with_text("password", "secret1");
    assert!(LOGIN_SCHEMA.validate(&values).is_ok());
}

#[test]
fn register_requires_literal_true_terms() {
    let base = || {
        FormValues::new()
            .with_text("username", "athlete")
            .with_text("password", "secret1")
            .with_text("name", "Alex")
    };

    let errors = REGISTER_SCHEMA
        .validate(&base().with_flag("agree_terms", false))
        .unwrap_err();
    assert_eq!(errors.get("agree_terms"), Some("You must agree to the terms"));

    // A missing flag behaves like false, never like accepted.
    let errors = REGISTER_SCHEMA.validate(&base()).unwrap_err();
    assert!(errors.get("agree_terms").is_some());

    assert!(REGISTER_SCHEMA
        .validate(&base().with_flag("agree_terms", true))
        .is_ok());
}

#[test]
fn validate_field_scopes_to_one_field() {
    let values = FormValues::new().with_flag("agree_terms", true);
    assert_eq!(REGISTER_SCHEMA.validate_field("agree_terms", &values), None);

    let values = FormValues::new().with_flag("agree_terms", false);
    assert!(REGISTER_SCHEMA.validate_field("agree_terms", &values).is_some());
}

#[test]
fn nutrition_rejects_negative_macros_but_allows_empty() {
    let base = || {
        FormValues::new()
            .with_text("meal_type", "Breakfast")
            .with_text("food_items", "Oats and berries")
            .with_text("date", "2025-03-01")
    };

    assert!(NUTRITION_SCHEMA.validate(&base()).is_ok());
    assert!(NUTRITION_SCHEMA
        .validate(&base().with_text("calories", "450").with_text("protein", "30"))
        .is_ok());

    let errors = NUTRITION_SCHEMA
        .validate(&base().with_text("calories", "-10"))
        .unwrap_err();
    assert!(errors.get("calories").is_some());

    let errors = NUTRITION_SCHEMA
        .validate(&base().with_text("food_items", "ab"))
        .unwrap_err();
    assert!(errors.get("food_items").is_some());
}

#[test]
fn injury_requires_catalogue_values() {
    let values = FormValues::new()
        .with_text("injury_type", "")
        .with_text("body_part", "")
        .with_text("severity", "Mild")
        .with_text("status", "Active")
        .with_text("date_occurred", "2025-02-10");
    let errors = INJURY_SCHEMA.validate(&values).unwrap_err();
    assert!(errors.get("injury_type").is_some());
    assert!(errors.get("body_part").is_some());
    assert!(errors.get("severity").is_none());

    let values = FormValues::new()
        .with_text("injury_type", "Sprain")
        .with_text("body_part", "Ankle")
        .with_text("severity", "Severe")
        .with_text("status", "Recovered")
        .with_text("date_occurred", "2025-02-10");
    assert!(INJURY_SCHEMA.validate(&values).is_ok());
}

#[test]
fn profile_requires_valid_email() {
    let base = || {
        FormValues::new()
            .with_text("name", "Alex")
            .with_text("username", "alex")
    };

    for bad in ["", "plainaddress", "a@b", "@nolocal.com", "x@.com"] {
        let errors = PROFILE_SCHEMA
            .validate(&base().with_text("email", bad))
            .unwrap_err();
        assert!(errors.get("email").is_some(), "expected rejection for {bad:?}");
    }

    assert!(PROFILE_SCHEMA
        .validate(&base().with_text("email", "athlete@example.com"))
        .is_ok());
}

#[test]
fn numeric_coercion_treats_empty_as_null() {
    assert_eq!(coerce_number(""), Ok(None));
    assert_eq!(coerce_number("  "), Ok(None));
    assert_eq!(coerce_number("12.5"), Ok(Some(12.5)));
    assert!(coerce_number("twelve").is_err());

    assert_eq!(coerce_int(""), Ok(None));
    assert_eq!(coerce_int("42"), Ok(Some(42)));
    assert!(coerce_int("4.2").is_err());
}

#[test]
fn profile_number_coercion_falls_back_to_defaults() {
    assert_eq!(coerce_int_or("", 2000), 2000);
    assert_eq!(coerce_int_or("1800", 2000), 1800);
    assert_eq!(coerce_float_or("junk", 0.0), 0.0);
    assert_eq!(coerce_float_or("82.5", 0.0), 82.5);
}

#[test]
fn schema_label_lists_match_enum_labels() {
    let metric: Vec<&str> = MetricType::all().iter().map(|t| t.label()).collect();
    assert_eq!(METRIC_TYPE_LABELS, metric.as_slice());

    let meals: Vec<&str> = MealType::all().iter().map(|t| t.label()).collect();
    assert_eq!(MEAL_TYPE_LABELS, meals.as_slice());

    let severity: Vec<&str> = Severity::all().iter().map(|s| s.label()).collect();
    assert_eq!(SEVERITY_LABELS, severity.as_slice());

    let status: Vec<&str> = InjuryStatus::all().iter().map(|s| s.label()).collect();
    assert_eq!(INJURY_STATUS_LABELS, status.as_slice());
}

#[test]
fn first_failing_rule_wins_per_field() {
    // Required fires before MinLen so the message names the missing value.
    let values = FormValues::new()
        .with_text("username", "")
        .with_text("password", "secret1");
    let errors = LOGIN_SCHEMA.validate(&values).unwrap_err();
    assert_eq!(errors.get("username"), Some("Username is required"));
}
