use athlete_track_ui::models::Finance;
use athlete_track_ui::range::*;
use chrono::{Days, NaiveDate};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn finance(id: i64, days_ago: u64, amount: f64, is_income: bool, category: &str) -> Finance {
    Finance {
        id,
        user_id: 1,
        category: category.to_string(),
        amount,
        is_income,
        date: today().checked_sub_days(Days::new(days_ago)).unwrap(),
        description: None,
    }
}

#[test]
fn thirty_day_window_keeps_only_recent_expenses() {
    // Three expenses dated 1, 40 and 100 days ago; only the first survives a
    // 30-day filter, so the balance is -10.
    let finances = vec![
        finance(1, 1, 10.0, false, "Equipment"),
        finance(2, 40, 20.0, false, "Equipment"),
        finance(3, 100, 30.0, false, "Travel"),
    ];

    let filtered = filter_range(&finances, TimeRange::Last30Days, today());
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 1);

    let summary = finance_summary(&filtered);
    assert_eq!(summary.income, 0.0);
    assert_eq!(summary.expenses, 10.0);
    assert_eq!(summary.balance, -10.0);
}

#[test]
fn filtering_never_mutates_the_source() {
    let finances = vec![
        finance(1, 1, 10.0, false, "Equipment"),
        finance(2, 40, 20.0, false, "Equipment"),
    ];
    let snapshot = finances.clone();

    let _ = filter_range(&finances, TimeRange::Last7Days, today());
    let _ = filter_records(&finances, TimeRange::LastYear, today(), |f| f.is_income);

    assert_eq!(finances, snapshot);
}

#[test]
fn filtering_is_idempotent() {
    let finances = vec![
        finance(1, 1, 10.0, false, "Equipment"),
        finance(2, 12, 20.0, true, "Coaching"),
        finance(3, 40, 30.0, false, "Travel"),
    ];

    let once = filter_range(&finances, TimeRange::Last30Days, today());
    let twice = filter_range(&once, TimeRange::Last30Days, today());
    assert_eq!(once, twice);
}

#[test]
fn range_and_category_filters_are_conjunctive() {
    let finances = vec![
        finance(1, 2, 10.0, false, "Equipment"),
        finance(2, 2, 15.0, false, "Travel"),
        finance(3, 60, 20.0, false, "Equipment"),
    ];

    let filtered = filter_records(&finances, TimeRange::Last30Days, today(), |f| {
        f.category == "Equipment"
    });
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 1);
}

#[test]
fn rolling_windows_include_today() {
    for range in TimeRange::all() {
        assert!(range.contains(today(), today()), "{:?}", range);
    }
}

#[test]
fn this_month_is_a_calendar_window() {
    let range = TimeRange::ThisMonth;
    let first = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let late_may = NaiveDate::from_ymd_opt(2025, 5, 31).unwrap();

    assert_eq!(range.start(today()), first);
    assert!(range.contains(first, today()));
    assert!(!range.contains(late_may, today()));

    let window = range.window(today());
    assert_eq!(window.len(), 15);
    assert_eq!(window[0], first);
    assert_eq!(*window.last().unwrap(), today());
}

#[test]
fn previous_window_has_equal_length() {
    for range in [
        TimeRange::Last7Days,
        TimeRange::Last30Days,
        TimeRange::Last90Days,
        TimeRange::LastYear,
        TimeRange::ThisMonth,
    ] {
        let window = range.window(today());
        let (prev_start, prev_end) = range.previous_window(today());
        let prev_len = (prev_end - prev_start).num_days() + 1;
        assert_eq!(prev_len as usize, window.len(), "{:?}", range);
        // The previous window ends the day before the current one starts.
        assert_eq!(prev_end.succ_opt().unwrap(), range.start(today()), "{:?}", range);
    }
}

#[test]
fn between_is_inclusive_on_both_ends() {
    let finances = vec![
        finance(1, 0, 1.0, false, "Equipment"),
        finance(2, 5, 2.0, false, "Equipment"),
        finance(3, 10, 3.0, false, "Equipment"),
    ];
    let start = today().checked_sub_days(Days::new(5)).unwrap();
    let picked = between(&finances, start, today());
    assert_eq!(picked.len(), 2);
}

#[test]
fn percent_change_omits_empty_previous_period() {
    assert_eq!(percent_change(10.0, 0.0), None);
    assert_eq!(percent_change(15.0, 10.0), Some(50.0));
    assert_eq!(percent_change(5.0, 10.0), Some(-50.0));
    // A negative previous balance still yields a signed, finite delta.
    assert_eq!(percent_change(-5.0, -10.0), Some(50.0));
}

#[test]
fn latest_first_sorts_descending_and_truncates() {
    let finances = vec![
        finance(1, 5, 1.0, false, "Equipment"),
        finance(2, 0, 2.0, false, "Equipment"),
        finance(3, 9, 3.0, false, "Equipment"),
    ];

    let sorted = latest_first(&finances);
    let ids: Vec<i64> = sorted.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![2, 1, 3]);

    let top = recent(&finances, 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].id, 2);
}

#[test]
fn time_range_select_values_round_trip() {
    for range in TimeRange::all() {
        assert_eq!(TimeRange::parse(range.value()), Some(*range));
    }
    assert_eq!(TimeRange::parse("14"), None);
}
