use athlete_track_ui::models::*;
use athlete_track_ui::range::{activity_feed, last_activity_date, ActivityKind};
use athlete_track_ui::utils::{format_currency, format_signed_currency, relative_from, Debouncer};
use chrono::{Days, NaiveDate};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn day(days_ago: u64) -> NaiveDate {
    today().checked_sub_days(Days::new(days_ago)).unwrap()
}

fn metric(id: i64, days_ago: u64) -> PerformanceMetric {
    PerformanceMetric {
        id,
        user_id: 1,
        metric_type: MetricType::Speed,
        value: 24.0,
        unit: "km/h".to_string(),
        date: day(days_ago),
        notes: None,
    }
}

fn log(id: i64, days_ago: u64) -> NutritionLog {
    NutritionLog {
        id,
        user_id: 1,
        meal_type: MealType::Dinner,
        food_items: "Salmon, potatoes".to_string(),
        calories: Some(650),
        protein: Some(40),
        date: day(days_ago),
        notes: None,
    }
}

fn injury(id: i64, days_ago: u64) -> Injury {
    Injury {
        id,
        user_id: 1,
        injury_type: "Strain".to_string(),
        body_part: "Knee".to_string(),
        date_occurred: day(days_ago),
        severity: Severity::Mild,
        status: InjuryStatus::Active,
        notes: None,
    }
}

fn finance(id: i64, days_ago: u64) -> Finance {
    Finance {
        id,
        user_id: 1,
        category: "Medical".to_string(),
        amount: 40.0,
        is_income: false,
        date: day(days_ago),
        description: None,
    }
}

#[test]
fn feed_merges_three_most_recent_of_each_kind() {
    let metrics: Vec<_> = (0..5).map(|i| metric(i as i64, i * 2)).collect();
    let logs: Vec<_> = (0..4).map(|i| log(i as i64, i * 3 + 1)).collect();
    let injuries = vec![injury(1, 5)];

    let feed = activity_feed(&metrics, &logs, &injuries);
    // 3 metrics + 3 logs + 1 injury.
    assert_eq!(feed.len(), 7);
    assert_eq!(feed.iter().filter(|i| i.kind == ActivityKind::Performance).count(), 3);
    assert_eq!(feed.iter().filter(|i| i.kind == ActivityKind::Nutrition).count(), 3);
    assert_eq!(feed.iter().filter(|i| i.kind == ActivityKind::Injury).count(), 1);

    // Newest first across kinds.
    for pair in feed.windows(2) {
        assert!(pair[0].date >= pair[1].date);
    }
    assert_eq!(feed[0].date, day(0));
}

#[test]
fn feed_rows_carry_readable_labels() {
    let feed = activity_feed(&[metric(1, 0)], &[log(1, 1)], &[injury(1, 2)]);
    assert_eq!(feed[0].title, "Speed recorded");
    assert_eq!(feed[0].detail, "24 km/h");
    assert_eq!(feed[1].title, "Dinner logged");
    assert_eq!(feed[1].detail, "Salmon, potatoes");
    assert_eq!(feed[2].title, "Strain (Knee)");
    assert_eq!(feed[2].detail, "Mild, Active");
}

#[test]
fn last_activity_falls_back_to_yesterday_when_empty() {
    assert_eq!(last_activity_date(&[], &[], &[], &[], today()), day(1));

    let newest = last_activity_date(
        &[metric(1, 4)],
        &[log(1, 2)],
        &[injury(1, 9)],
        &[finance(1, 3)],
        today(),
    );
    assert_eq!(newest, day(2));
}

#[test]
fn relative_labels_scale_with_distance() {
    assert_eq!(relative_from(day(0), today()), "today");
    assert_eq!(relative_from(day(1), today()), "yesterday");
    assert_eq!(relative_from(day(3), today()), "3 days ago");
    assert_eq!(relative_from(day(7), today()), "1 week ago");
    assert_eq!(relative_from(day(20), today()), "2 weeks ago");
    assert_eq!(relative_from(day(45), today()), "1 month ago");
    assert_eq!(relative_from(day(400), today()), "1 year ago");
    assert_eq!(relative_from(today().succ_opt().unwrap(), today()), "in 1 day");
}

#[test]
fn currency_labels_carry_the_sign() {
    assert_eq!(format_currency(10.0), "$10.00");
    assert_eq!(format_currency(-10.0), "-$10.00");
    assert_eq!(format_signed_currency(12.5, false), "-$12.50");
    assert_eq!(format_signed_currency(12.5, true), "+$12.50");
}

#[test]
fn debouncer_only_honours_the_latest_token() {
    let mut debounce = Debouncer::new();

    // Three rapid edits inside one quiescent period: only the last
    // scheduled task may fire.
    let first = debounce.bump();
    let second = debounce.bump();
    let last = debounce.bump();

    assert!(!debounce.is_current(first));
    assert!(!debounce.is_current(second));
    assert!(debounce.is_current(last));

    // The next edit cancels the previously current token too.
    let next = debounce.bump();
    assert!(!debounce.is_current(last));
    assert!(debounce.is_current(next));
}
