use athlete_track_ui::models::*;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn serde_user_optional_fields() {
    let json = r#"{"id":1,"username":"a"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.username, "a");
    assert_eq!(user.name, None);
    assert_eq!(user.role, None);

    let json = r#"{"id":2,"username":"b","name":"Blake","role":"Athlete"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.name.as_deref(), Some("Blake"));
    assert_eq!(user.role.as_deref(), Some("Athlete"));
}

#[test]
fn serde_performance_metric_camel_case() {
    let json = r#"{
        "id": 7,
        "userId": 1,
        "metricType": "Strength",
        "value": 102.5,
        "unit": "kg",
        "date": "2025-03-01",
        "notes": "PR day"
    }"#;
    let metric: PerformanceMetric = serde_json::from_str(json).unwrap();
    assert_eq!(metric.user_id, 1);
    assert_eq!(metric.metric_type, MetricType::Strength);
    assert_eq!(metric.value, 102.5);
    assert_eq!(metric.date, date(2025, 3, 1));

    let out = serde_json::to_string(&metric).unwrap();
    assert!(out.contains("\"userId\":1"));
    assert!(out.contains("\"metricType\":\"Strength\""));
    assert!(out.contains("\"date\":\"2025-03-01\""));
}

#[test]
fn serde_meal_type_multi_word_labels() {
    let log: NutritionLog = serde_json::from_str(
        r#"{
            "id": 1,
            "userId": 1,
            "mealType": "Morning Snack",
            "foodItems": "Banana, yogurt",
            "date": "2025-03-02"
        }"#,
    )
    .unwrap();
    assert_eq!(log.meal_type, MealType::MorningSnack);
    assert_eq!(log.calories, None);
    assert_eq!(log.protein, None);

    let out = serde_json::to_string(&log).unwrap();
    assert!(out.contains("\"mealType\":\"Morning Snack\""));
    assert!(out.contains("\"foodItems\":\"Banana, yogurt\""));
}

#[test]
fn meal_type_labels_round_trip_through_parse() {
    for meal in MealType::all() {
        assert_eq!(MealType::parse(meal.label()), Some(*meal));
    }
    assert_eq!(MealType::parse("Brunch"), None);
}

#[test]
fn metric_type_units_are_constrained() {
    assert_eq!(MetricType::Strength.units(), &["kg", "lbs", "reps"]);
    assert_eq!(MetricType::Power.units(), &["watts", "joules"]);
    for metric in MetricType::all() {
        assert!(!metric.units().is_empty());
    }
}

#[test]
fn serde_injury_status_and_severity() {
    let injury: Injury = serde_json::from_str(
        r#"{
            "id": 3,
            "userId": 1,
            "injuryType": "Sprain",
            "bodyPart": "Ankle",
            "dateOccurred": "2025-02-10",
            "severity": "Moderate",
            "status": "Active"
        }"#,
    )
    .unwrap();
    assert_eq!(injury.severity, Severity::Moderate);
    assert_eq!(injury.status, InjuryStatus::Active);

    let out = serde_json::to_string(&injury).unwrap();
    assert!(out.contains("\"dateOccurred\":\"2025-02-10\""));
    assert!(out.contains("\"status\":\"Active\""));
}

#[test]
fn serde_create_finance_payload_appends_user_id() {
    let payload = CreateFinancePayload {
        user_id: 1,
        category: "Equipment".to_string(),
        amount: 12.5,
        is_income: false,
        date: date(2025, 3, 1),
        description: None,
    };
    let out = serde_json::to_string(&payload).unwrap();
    assert!(out.contains("\"userId\":1"));
    assert!(out.contains("\"category\":\"Equipment\""));
    assert!(out.contains("\"amount\":12.5"));
    assert!(out.contains("\"isIncome\":false"));
    assert!(out.contains("\"date\":\"2025-03-01\""));
}

#[test]
fn serde_finance_amount_survives_round_trip() {
    let json = r#"{"id":9,"userId":1,"category":"Equipment","amount":12.5,"isIncome":false,"date":"2025-03-01"}"#;
    let finance: Finance = serde_json::from_str(json).unwrap();
    assert_eq!(finance.amount, 12.5);
    assert!(!finance.is_income);
    assert_eq!(finance.description, None);
}

#[test]
fn serde_advice_response() {
    let json = r#"{
        "advice": "Focus on recovery",
        "suggestedActions": ["Sleep more", "Hydrate"],
        "confidence": 0.82
    }"#;
    let advice: AdviceResponse = serde_json::from_str(json).unwrap();
    assert_eq!(advice.advice, "Focus on recovery");
    assert_eq!(advice.suggested_actions.len(), 2);
    assert_eq!(advice.confidence, 0.82);
}

#[test]
fn serde_training_plan_response_schedule_shape() {
    let json = r#"{
        "plan": "P",
        "schedule": {
            "Mon": {
                "focus": "F",
                "exercises": ["e1"],
                "duration": "30m",
                "intensity": "High"
            }
        },
        "guidelines": ["g1"]
    }"#;
    let plan: TrainingPlanResponse = serde_json::from_str(json).unwrap();
    assert_eq!(plan.plan, "P");
    assert_eq!(plan.guidelines, vec!["g1".to_string()]);
    let monday = plan.schedule.get("Mon").unwrap();
    assert_eq!(monday.focus, "F");
    assert_eq!(monday.exercises, vec!["e1".to_string()]);
    assert_eq!(monday.duration, "30m");
    assert_eq!(monday.intensity, "High");
}

#[test]
fn serde_register_payload_profile_fields() {
    let payload = RegisterPayload {
        username: "a".to_string(),
        password: "secret1".to_string(),
        name: "A".to_string(),
        role: "Athlete".to_string(),
        weight: 0.0,
        daily_calorie_goal: 2000,
        height_cm: 175,
        age: 30,
        gender: "Not specified".to_string(),
        activity_level: "Moderate".to_string(),
    };
    let out = serde_json::to_string(&payload).unwrap();
    assert!(out.contains("\"dailyCalorieGoal\":2000"));
    assert!(out.contains("\"heightCm\":175"));
    assert!(out.contains("\"activityLevel\":\"Moderate\""));
    // agreeTerms is a client-side gate only and never part of the payload.
    assert!(!out.contains("agreeTerms"));
}
