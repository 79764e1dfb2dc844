use dioxus::prelude::*;

use crate::api;
use crate::cache::{use_finances, use_injuries, use_metrics, use_nutrition};
use crate::coach;
use crate::components::{use_toaster, BarBreakdown, BreakdownRow, FullPageSpinner, StatCard, TrendChart};
use crate::models::{AdvicePayload, AdviceResponse, Finance, Injury, InjuryStatus, NutritionLog, PerformanceMetric};
use crate::range::{
    activity_feed, daily_counts, filter_range, finance_summary, last_activity_date, latest_first,
    totals_by, TimeRange,
};
use crate::router::Route;
use crate::utils::{format_currency, format_signed_currency, relative_from, today_date};

#[component]
pub fn Dashboard() -> Element {
    let metrics = use_metrics();
    let nutrition = use_nutrition();
    let injuries = use_injuries();
    let finances = use_finances();

    // One spinner while any of the four parallel reads is still empty.
    if metrics.is_loading || nutrition.is_loading || injuries.is_loading || finances.is_loading {
        return rsx! {
            FullPageSpinner {}
        };
    }

    let today = today_date();
    let last_updated = relative_from(
        last_activity_date(&metrics.data, &nutrition.data, &injuries.data, &finances.data, today),
        today,
    );

    let latest_metric = latest_first(&metrics.data).into_iter().next();
    let latest_meal = latest_first(&nutrition.data).into_iter().next();
    let latest_injury = latest_first(&injuries.data).into_iter().next();
    let latest_finance = latest_first(&finances.data).into_iter().next();

    let metric_value = latest_metric
        .map(|m| format!("{} {} {}", m.metric_type.label(), m.value, m.unit))
        .unwrap_or_else(|| "No metrics yet".to_string());
    let meal_value = latest_meal
        .map(|log| match log.calories {
            Some(calories) => format!("{} · {} kcal", log.meal_type.label(), calories),
            None => log.meal_type.label().to_string(),
        })
        .unwrap_or_else(|| "No meals yet".to_string());
    let injury_value = latest_injury
        .map(|i| format!("{} ({})", i.injury_type, i.status.label()))
        .unwrap_or_else(|| "No injuries".to_string());
    let finance_value = latest_finance
        .map(|f| format_signed_currency(f.amount, f.is_income))
        .unwrap_or_else(|| "No transactions".to_string());

    rsx! {
        div { class: "content-header",
            h1 { "ATHLETE DASHBOARD" }
            div { class: "header-meta",
                span { class: "meta-label", "Last updated:" }
                span { "{last_updated}" }
            }
        }

        div { class: "stats-band",
            StatCard { title: "Latest Metric".to_string(), value: metric_value, change: None }
            StatCard { title: "Last Meal".to_string(), value: meal_value, change: None }
            StatCard { title: "Latest Injury".to_string(), value: injury_value, change: None }
            StatCard { title: "Last Transaction".to_string(), value: finance_value, change: None }
        }

        div { class: "dashboard-grid",
            PerformanceTrendPanel { metrics: metrics.data.clone() }
            NutritionTodayPanel { logs: nutrition.data.clone() }
        }

        div { class: "dashboard-grid",
            ActivityFeedPanel {
                metrics: metrics.data.clone(),
                logs: nutrition.data.clone(),
                injuries: injuries.data.clone(),
            }
            AiInsightPanel {
                metrics: metrics.data.clone(),
                logs: nutrition.data.clone(),
                injuries: injuries.data.clone(),
            }
        }

        div { class: "dashboard-grid",
            InjuryTrackerPanel { injuries: injuries.data.clone() }
            FinancialSummaryPanel { finances: finances.data.clone() }
        }
    }
}

/// Performance trend with a time-range toggle local to the panel.
#[component]
fn PerformanceTrendPanel(metrics: Vec<PerformanceMetric>) -> Element {
    let mut range = use_signal(|| TimeRange::Last30Days);
    let today = today_date();
    let windowed = filter_range(&metrics, range(), today);
    let points = daily_counts(&windowed, range(), today);

    rsx! {
        div { class: "dashboard-block",
            div { class: "block-header",
                h2 { "PERFORMANCE TREND" }
                div { class: "range-toggle",
                    for r in [TimeRange::Last7Days, TimeRange::Last30Days, TimeRange::Last90Days] {
                        button {
                            class: if range() == r { "active" } else { "" },
                            onclick: move |_| range.set(r),
                            "{r.value()}D"
                        }
                    }
                }
            }
            TrendChart { points }
        }
    }
}

/// Today's meals by type; the donut becomes breakdown rows.
#[component]
fn NutritionTodayPanel(logs: Vec<NutritionLog>) -> Element {
    let today = today_date();
    let todays: Vec<NutritionLog> = logs.iter().filter(|l| l.date == today).cloned().collect();
    let total: i64 = todays.iter().map(|l| l.calories.unwrap_or(0) as i64).sum();
    let rows: Vec<BreakdownRow> = totals_by(
        &todays,
        |l: &NutritionLog| l.meal_type,
        |l| l.calories.unwrap_or(0) as f64,
    )
    .into_iter()
    .map(|(meal, calories)| BreakdownRow {
        label: meal.label().to_string(),
        value: calories,
        display: format!("{:.0} kcal", calories),
    })
    .collect();

    rsx! {
        div { class: "dashboard-block",
            div { class: "block-header",
                h2 { "TODAY'S NUTRITION" }
                span { class: "block-meta", "{total} kcal" }
            }
            if todays.is_empty() {
                div { class: "empty-state", "NO MEALS LOGGED TODAY" }
            } else {
                BarBreakdown { rows }
            }
        }
    }
}

#[component]
fn ActivityFeedPanel(
    metrics: Vec<PerformanceMetric>,
    logs: Vec<NutritionLog>,
    injuries: Vec<Injury>,
) -> Element {
    let today = today_date();
    let feed = activity_feed(&metrics, &logs, &injuries);

    rsx! {
        div { class: "dashboard-block",
            h2 { "RECENT ACTIVITY" }
            if feed.is_empty() {
                div { class: "empty-state", "NO ACTIVITY YET" }
            } else {
                div { class: "activity-feed",
                    for item in feed {
                        {
                            let when = relative_from(item.date, today);
                            rsx! {
                                div { class: "activity-row", key: "{item.kind.label()}-{item.date}-{item.title}",
                                    span { class: "badge category", "{item.kind.label()}" }
                                    div { class: "activity-body",
                                        div { class: "activity-title", "{item.title}" }
                                        div { class: "activity-detail", "{item.detail}" }
                                    }
                                    span { class: "activity-when", "{when}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One-shot advice fetch over a context assembled from the latest records.
#[component]
fn AiInsightPanel(
    metrics: Vec<PerformanceMetric>,
    logs: Vec<NutritionLog>,
    injuries: Vec<Injury>,
) -> Element {
    let toaster = use_toaster();
    let mut advice = use_signal(|| None::<AdviceResponse>);
    let mut loading = use_signal(|| false);

    let context = coach::build_context(&metrics, &logs, &injuries);

    let handle_fetch = move |_| {
        let payload = AdvicePayload {
            question: "What should I focus on to improve my performance this week?".to_string(),
            context: context.clone(),
        };
        loading.set(true);
        spawn(async move {
            let result = api::coach_advice(payload).await;
            loading.set(false);
            match result {
                Ok(response) => {
                    advice.set(Some(response));
                    toaster.success("New coaching advice received", "Your personalized advice has been updated");
                }
                Err(err) => {
                    toaster.error("Failed to get new advice", err.to_string());
                }
            }
        });
    };

    rsx! {
        div { class: "dashboard-block",
            div { class: "block-header",
                h2 { "AI COACH INSIGHTS" }
                button {
                    class: "btn-text",
                    onclick: handle_fetch,
                    disabled: loading(),
                    if loading() { "LOADING..." } else { "GET NEW ADVICE" }
                }
            }
            match advice() {
                Some(response) => rsx! {
                    div { class: "insight-card",
                        p { "{response.advice}" }
                        ul {
                            for action in response.suggested_actions {
                                li { "{action}" }
                            }
                        }
                    }
                },
                None => rsx! {
                    div { class: "empty-state", "Ask your AI coach for this week's focus" }
                },
            }
        }
    }
}

/// Injury panel specialised to active injuries.
#[component]
fn InjuryTrackerPanel(injuries: Vec<Injury>) -> Element {
    let active: Vec<Injury> = latest_first(&injuries)
        .into_iter()
        .filter(|i| i.status == InjuryStatus::Active)
        .collect();

    rsx! {
        div { class: "dashboard-block",
            div { class: "block-header",
                h2 { "INJURY TRACKER" }
                Link { to: Route::Injuries {}, class: "btn-text", "VIEW ALL" }
            }
            if active.is_empty() {
                div { class: "empty-state", "NO ACTIVE INJURIES" }
            } else {
                div { class: "injury-list",
                    for injury in active {
                        div { class: "injury-row", key: "{injury.id}",
                            div {
                                div { class: "injury-title", "{injury.injury_type} · {injury.body_part}" }
                                div { class: "injury-meta", "{injury.severity.label()}" }
                            }
                            span { class: "badge status-active", "Active" }
                        }
                    }
                }
            }
        }
    }
}

/// 30-day financial summary with the expense category breakdown.
#[component]
fn FinancialSummaryPanel(finances: Vec<Finance>) -> Element {
    let today = today_date();
    let windowed = filter_range(&finances, TimeRange::Last30Days, today);
    let summary = finance_summary(&windowed);
    let expenses: Vec<Finance> = windowed.iter().filter(|f| !f.is_income).cloned().collect();
    let rows: Vec<BreakdownRow> = totals_by(&expenses, |f: &Finance| f.category.clone(), |f| f.amount)
        .into_iter()
        .map(|(label, value)| BreakdownRow {
            display: format_currency(value),
            label,
            value,
        })
        .collect();

    rsx! {
        div { class: "dashboard-block",
            div { class: "block-header",
                h2 { "FINANCIAL SUMMARY" }
                Link { to: Route::Finances {}, class: "btn-text", "VIEW ALL" }
            }
            div { class: "analytics-item",
                div { class: "analytics-label", "BALANCE (30D)" }
                div { class: "analytics-value", "{format_currency(summary.balance)}" }
            }
            div { class: "analytics-item",
                div { class: "analytics-label", "INCOME" }
                div { class: "analytics-value", "+{format_currency(summary.income)}" }
            }
            div { class: "analytics-item",
                div { class: "analytics-label", "EXPENSES" }
                div { class: "analytics-value", "-{format_currency(summary.expenses)}" }
            }
            BarBreakdown { rows }
        }
    }
}
