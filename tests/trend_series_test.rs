use athlete_track_ui::models::{MealType, NutritionLog};
use athlete_track_ui::range::*;
use chrono::{Days, NaiveDate};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn log(id: i64, days_ago: u64, calories: i32) -> NutritionLog {
    NutritionLog {
        id,
        user_id: 1,
        meal_type: MealType::Lunch,
        food_items: "Chicken and rice".to_string(),
        calories: Some(calories),
        protein: Some(30),
        date: today().checked_sub_days(Days::new(days_ago)).unwrap(),
        notes: None,
    }
}

#[test]
fn series_length_matches_window_for_every_range() {
    let logs = vec![log(1, 0, 500)];
    let expected = [
        (TimeRange::Last7Days, 7),
        (TimeRange::Last30Days, 30),
        (TimeRange::Last90Days, 90),
        (TimeRange::LastYear, 365),
        (TimeRange::ThisMonth, 15),
    ];
    for (range, len) in expected {
        let series = daily_series(&logs, range, today(), |l| l.calories.unwrap_or(0) as f64);
        assert_eq!(series.len(), len, "{:?}", range);
    }
}

#[test]
fn days_without_records_are_zero_not_missing() {
    let logs = vec![log(1, 0, 500), log(2, 3, 700)];
    let series = daily_series(&logs, TimeRange::Last7Days, today(), |l| {
        l.calories.unwrap_or(0) as f64
    });

    assert_eq!(series.len(), 7);
    // Oldest first, contiguous dates.
    for pair in series.windows(2) {
        assert_eq!(pair[0].date.succ_opt().unwrap(), pair[1].date);
    }
    assert_eq!(series[6].value, 500.0);
    assert_eq!(series[3].value, 700.0);
    let zero_days = series.iter().filter(|p| p.value == 0.0).count();
    assert_eq!(zero_days, 5);
}

#[test]
fn same_day_records_sum_into_one_point() {
    let logs = vec![log(1, 0, 500), log(2, 0, 250)];
    let series = daily_series(&logs, TimeRange::Last7Days, today(), |l| {
        l.calories.unwrap_or(0) as f64
    });
    assert_eq!(series[6].value, 750.0);
}

#[test]
fn daily_counts_count_records_per_day() {
    let logs = vec![log(1, 1, 500), log(2, 1, 250), log(3, 6, 100)];
    let series = daily_counts(&logs, TimeRange::Last7Days, today());
    assert_eq!(series[5].value, 2.0);
    assert_eq!(series[0].value, 1.0);
    assert_eq!(series[6].value, 0.0);
}

#[test]
fn records_outside_the_window_never_leak_into_the_series() {
    let logs = vec![log(1, 0, 500), log(2, 30, 999)];
    let series = daily_series(&logs, TimeRange::Last7Days, today(), |l| {
        l.calories.unwrap_or(0) as f64
    });
    let total: f64 = series.iter().map(|p| p.value).sum();
    assert_eq!(total, 500.0);
}

#[test]
fn totals_by_groups_with_stable_key_order() {
    let logs = vec![
        NutritionLog {
            meal_type: MealType::Dinner,
            ..log(1, 0, 600)
        },
        NutritionLog {
            meal_type: MealType::Breakfast,
            ..log(2, 0, 400)
        },
        NutritionLog {
            meal_type: MealType::Dinner,
            ..log(3, 1, 200)
        },
    ];

    let totals = totals_by(&logs, |l| l.meal_type, |l| l.calories.unwrap_or(0) as f64);
    assert_eq!(totals.len(), 2);
    // MealType derives Ord in declaration order: Breakfast before Dinner.
    assert_eq!(totals[0], (MealType::Breakfast, 400.0));
    assert_eq!(totals[1], (MealType::Dinner, 800.0));
}

#[test]
fn counts_by_counts_per_key() {
    let logs = vec![log(1, 0, 1), log(2, 0, 2), log(3, 1, 3)];
    let counts = counts_by(&logs, |l| l.meal_type);
    assert_eq!(counts, vec![(MealType::Lunch, 3.0)]);
}
