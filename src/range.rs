//! Time-range filtering and the chart-ready aggregations shared by the
//! performance, nutrition, injuries and finances panels.
//!
//! Everything here is a pure function of the cached record list; switching a
//! filter never mutates the source or triggers a refetch.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::{Finance, Injury, NutritionLog, PerformanceMetric};

pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for PerformanceMetric {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for NutritionLog {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for Injury {
    fn date(&self) -> NaiveDate {
        self.date_occurred
    }
}

impl Dated for Finance {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Rolling windows end at `today` inclusive; `ThisMonth` is a calendar
/// window from the 1st to `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Last7Days,
    Last30Days,
    Last90Days,
    LastYear,
    ThisMonth,
}

impl TimeRange {
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Last7Days => "Last 7 Days",
            TimeRange::Last30Days => "Last 30 Days",
            TimeRange::Last90Days => "Last 90 Days",
            TimeRange::LastYear => "This Year",
            TimeRange::ThisMonth => "This Month",
        }
    }

    /// Select option values, kept as the day counts the backend-facing forms
    /// historically used.
    pub fn value(&self) -> &'static str {
        match self {
            TimeRange::Last7Days => "7",
            TimeRange::Last30Days => "30",
            TimeRange::Last90Days => "90",
            TimeRange::LastYear => "365",
            TimeRange::ThisMonth => "month",
        }
    }

    pub fn all() -> &'static [TimeRange] {
        &[
            TimeRange::Last7Days,
            TimeRange::Last30Days,
            TimeRange::Last90Days,
            TimeRange::LastYear,
            TimeRange::ThisMonth,
        ]
    }

    pub fn parse(value: &str) -> Option<TimeRange> {
        TimeRange::all().iter().copied().find(|r| r.value() == value)
    }

    pub fn start(&self, today: NaiveDate) -> NaiveDate {
        let back = |days: u64| today.checked_sub_days(Days::new(days)).unwrap_or(today);
        match self {
            TimeRange::Last7Days => back(6),
            TimeRange::Last30Days => back(29),
            TimeRange::Last90Days => back(89),
            TimeRange::LastYear => back(364),
            TimeRange::ThisMonth => today.with_day(1).unwrap_or(today),
        }
    }

    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        date >= self.start(today) && date <= today
    }

    /// Contiguous list of every day in the window, oldest first. Trend
    /// charts require a regular x-axis, so the length is fixed by the range
    /// regardless of the data.
    pub fn window(&self, today: NaiveDate) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        let mut cursor = self.start(today);
        while cursor <= today {
            days.push(cursor);
            cursor = match cursor.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        days
    }

    /// The equal-length window immediately before this one, for
    /// current-vs-previous deltas.
    pub fn previous_window(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let start = self.start(today);
        let len = (today - start).num_days() + 1;
        let prev_end = start.pred_opt().unwrap_or(start);
        let prev_start = prev_end
            .checked_sub_days(Days::new((len - 1) as u64))
            .unwrap_or(prev_end);
        (prev_start, prev_end)
    }
}

/// Time-range and category filters are conjunctive; `keep` carries the
/// page-specific half.
pub fn filter_records<T, F>(items: &[T], range: TimeRange, today: NaiveDate, keep: F) -> Vec<T>
where
    T: Dated + Clone,
    F: Fn(&T) -> bool,
{
    items
        .iter()
        .filter(|item| range.contains(item.date(), today) && keep(*item))
        .cloned()
        .collect()
}

pub fn filter_range<T: Dated + Clone>(items: &[T], range: TimeRange, today: NaiveDate) -> Vec<T> {
    filter_records(items, range, today, |_| true)
}

pub fn between<T: Dated + Clone>(items: &[T], start: NaiveDate, end: NaiveDate) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.date() >= start && item.date() <= end)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Per-day sum over the window. Days with no records appear with value 0.
pub fn daily_series<T, V>(items: &[T], range: TimeRange, today: NaiveDate, value: V) -> Vec<DayPoint>
where
    T: Dated,
    V: Fn(&T) -> f64,
{
    range
        .window(today)
        .into_iter()
        .map(|date| {
            let total = items
                .iter()
                .filter(|item| item.date() == date)
                .map(&value)
                .sum();
            DayPoint { date, value: total }
        })
        .collect()
}

pub fn daily_counts<T: Dated>(items: &[T], range: TimeRange, today: NaiveDate) -> Vec<DayPoint> {
    daily_series(items, range, today, |_| 1.0)
}

/// Per-category totals in stable (sorted) key order, for distribution
/// charts.
pub fn totals_by<T, K, KF, VF>(items: &[T], key: KF, value: VF) -> Vec<(K, f64)>
where
    K: Ord,
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> f64,
{
    let mut totals = std::collections::BTreeMap::new();
    for item in items {
        *totals.entry(key(item)).or_insert(0.0) += value(item);
    }
    totals.into_iter().collect()
}

pub fn counts_by<T, K, KF>(items: &[T], key: KF) -> Vec<(K, f64)>
where
    K: Ord,
    KF: Fn(&T) -> K,
{
    totals_by(items, key, |_| 1.0)
}

/// `None` when there is no prior period to compare against; the summary
/// band omits the delta badge in that case.
pub fn percent_change(current: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous.abs() * 100.0)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FinanceSummary {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

pub fn finance_summary(finances: &[Finance]) -> FinanceSummary {
    let income: f64 = finances.iter().filter(|f| f.is_income).map(|f| f.amount).sum();
    let expenses: f64 = finances.iter().filter(|f| !f.is_income).map(|f| f.amount).sum();
    FinanceSummary {
        income,
        expenses,
        balance: income - expenses,
    }
}

pub const TABLE_ROW_LIMIT: usize = 10;

/// Records sorted date DESC without touching the input.
pub fn latest_first<T: Dated + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| b.date().cmp(&a.date()));
    sorted
}

pub fn recent<T: Dated + Clone>(items: &[T], limit: usize) -> Vec<T> {
    let mut sorted = latest_first(items);
    sorted.truncate(limit);
    sorted
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Performance,
    Nutrition,
    Injury,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Performance => "Performance",
            ActivityKind::Nutrition => "Nutrition",
            ActivityKind::Injury => "Injury",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub title: String,
    pub detail: String,
    pub date: NaiveDate,
}

/// Dashboard feed: the three most recent records of each kind, merged and
/// sorted newest first.
pub fn activity_feed(
    metrics: &[PerformanceMetric],
    logs: &[NutritionLog],
    injuries: &[Injury],
) -> Vec<ActivityItem> {
    let mut items = Vec::new();

    for m in recent(metrics, 3) {
        items.push(ActivityItem {
            kind: ActivityKind::Performance,
            title: format!("{} recorded", m.metric_type.label()),
            detail: format!("{} {}", m.value, m.unit),
            date: m.date,
        });
    }
    for log in recent(logs, 3) {
        items.push(ActivityItem {
            kind: ActivityKind::Nutrition,
            title: format!("{} logged", log.meal_type.label()),
            detail: log.food_items.clone(),
            date: log.date,
        });
    }
    for injury in recent(injuries, 3) {
        items.push(ActivityItem {
            kind: ActivityKind::Injury,
            title: format!("{} ({})", injury.injury_type, injury.body_part),
            detail: format!("{}, {}", injury.severity.label(), injury.status.label()),
            date: injury.date_occurred,
        });
    }

    items.sort_by(|a, b| b.date.cmp(&a.date));
    items
}

/// Dashboard "last updated" anchor: the newest record date, or yesterday
/// when nothing has been recorded yet.
pub fn last_activity_date(
    metrics: &[PerformanceMetric],
    logs: &[NutritionLog],
    injuries: &[Injury],
    finances: &[Finance],
    today: NaiveDate,
) -> NaiveDate {
    let newest = metrics
        .iter()
        .map(Dated::date)
        .chain(logs.iter().map(Dated::date))
        .chain(injuries.iter().map(Dated::date))
        .chain(finances.iter().map(Dated::date))
        .max();
    newest.unwrap_or_else(|| today.pred_opt().unwrap_or(today))
}
