use athlete_track_ui::coach::*;
use athlete_track_ui::models::*;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn metric(id: i64, day: u32, value: f64) -> PerformanceMetric {
    PerformanceMetric {
        id,
        user_id: 1,
        metric_type: MetricType::Strength,
        value,
        unit: "kg".to_string(),
        date: date(2025, 3, day),
        notes: None,
    }
}

#[test]
fn performance_context_lists_newest_first_capped_at_five() {
    let metrics: Vec<PerformanceMetric> =
        (1..=7).map(|d| metric(d as i64, d, 90.0 + d as f64)).collect();

    let context = performance_context(&metrics);
    let parts: Vec<&str> = context.split("; ").collect();
    assert_eq!(parts.len(), 5);
    assert_eq!(parts[0], "Strength: 97 kg on 2025-03-07");
    assert_eq!(parts[4], "Strength: 93 kg on 2025-03-03");
}

#[test]
fn empty_histories_say_so() {
    assert_eq!(performance_context(&[]), "No performance data recorded yet.");
    assert_eq!(nutrition_context(&[]), "No nutrition data recorded yet.");
    assert_eq!(injury_context(&[]), "No injury data recorded yet.");
}

#[test]
fn nutrition_context_appends_macros_when_present() {
    let logs = vec![
        NutritionLog {
            id: 1,
            user_id: 1,
            meal_type: MealType::Lunch,
            food_items: "Chicken, rice".to_string(),
            calories: Some(700),
            protein: Some(45),
            date: date(2025, 3, 2),
            notes: None,
        },
        NutritionLog {
            id: 2,
            user_id: 1,
            meal_type: MealType::Breakfast,
            food_items: "Oats".to_string(),
            calories: None,
            protein: None,
            date: date(2025, 3, 1),
            notes: None,
        },
    ];

    let context = nutrition_context(&logs);
    assert_eq!(
        context,
        "Lunch on 2025-03-02: Chicken, rice, 700 calories, 45g protein; Breakfast on 2025-03-01: Oats"
    );
}

#[test]
fn injury_context_covers_every_injury() {
    let injuries = vec![Injury {
        id: 1,
        user_id: 1,
        injury_type: "Sprain".to_string(),
        body_part: "Ankle".to_string(),
        date_occurred: date(2025, 2, 10),
        severity: Severity::Moderate,
        status: InjuryStatus::Active,
        notes: None,
    }];

    assert_eq!(
        injury_context(&injuries),
        "Sprain (Ankle): Active, severity: Moderate, occurred on 2025-02-10"
    );
}

#[test]
fn build_context_fills_all_three_sections() {
    let context = build_context(&[metric(1, 1, 100.0)], &[], &[]);
    assert!(context.performance_history.contains("Strength: 100 kg"));
    assert_eq!(context.nutrition_logs, "No nutrition data recorded yet.");
    assert_eq!(context.injuries, "No injury data recorded yet.");
}

#[test]
fn constraints_split_on_non_blank_lines() {
    let raw = "Limited to 4 sessions per week\n\n  No heavy weights  \n";
    assert_eq!(
        split_constraints(raw),
        vec![
            "Limited to 4 sessions per week".to_string(),
            "No heavy weights".to_string(),
        ]
    );
    assert!(split_constraints("").is_empty());
}

#[test]
fn schedule_days_order_monday_through_sunday() {
    let mut days = vec!["Sun", "Wednesday", "Mon", "Friday"];
    days.sort_by_key(|d| weekday_rank(d));
    assert_eq!(days, vec!["Mon", "Wednesday", "Friday", "Sun"]);
    // Unknown labels sink to the end.
    assert!(weekday_rank("Day 1") > weekday_rank("sunday"));
}

#[test]
fn confidence_and_intensity_thresholds() {
    assert_eq!(confidence_class(0.9), "confidence high");
    assert_eq!(confidence_class(0.8), "confidence high");
    assert_eq!(confidence_class(0.6), "confidence medium");
    assert_eq!(confidence_class(0.2), "confidence low");

    assert_eq!(intensity_class("High"), "badge intensity-high");
    assert_eq!(intensity_class("Medium-High"), "badge intensity-high");
    assert_eq!(intensity_class("medium"), "badge intensity-medium");
    assert_eq!(intensity_class("Low"), "badge intensity-low");
    assert_eq!(intensity_class("Recovery"), "badge");
}
