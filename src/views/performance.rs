use dioxus::prelude::*;

use crate::cache::{use_metrics, use_query_client, Resource};
use crate::components::{BarBreakdown, BreakdownRow, LoadingBlock, Overlay, StatCard, StatChange, TrendChart};
use crate::forms::PerformanceForm;
use crate::models::{MetricType, PerformanceMetric};
use crate::range::{
    between, counts_by, daily_counts, filter_records, latest_first, percent_change, TimeRange,
    TABLE_ROW_LIMIT,
};
use crate::session::use_session;
use crate::utils::{format_date_full, today_date};

#[component]
pub fn Performance() -> Element {
    let session = use_session();
    let client = use_query_client();
    let query = use_metrics();

    let mut time_range = use_signal(|| TimeRange::Last30Days);
    let mut selected_type = use_signal(|| None::<MetricType>);
    let mut show_dialog = use_signal(|| false);

    if query.is_loading {
        return rsx! {
            LoadingBlock {}
        };
    }

    let today = today_date();
    let range = time_range();
    let type_filter = selected_type();

    let keep = |m: &PerformanceMetric| type_filter.is_none_or(|t| m.metric_type == t);
    let filtered = filter_records(&query.data, range, today, keep);

    let (prev_start, prev_end) = range.previous_window(today);
    let previous: Vec<_> = between(&query.data, prev_start, prev_end)
        .into_iter()
        .filter(|m| keep(m))
        .collect();

    let session_count = filtered.len();
    let average = if filtered.is_empty() {
        0.0
    } else {
        filtered.iter().map(|m| m.value).sum::<f64>() / filtered.len() as f64
    };
    let prev_average = if previous.is_empty() {
        0.0
    } else {
        previous.iter().map(|m| m.value).sum::<f64>() / previous.len() as f64
    };
    let types_tracked = {
        let mut types: Vec<_> = filtered.iter().map(|m| m.metric_type).collect();
        types.sort();
        types.dedup();
        types.len()
    };

    let trend = daily_counts(&filtered, range, today);
    let distribution: Vec<BreakdownRow> = counts_by(&filtered, |m: &PerformanceMetric| m.metric_type)
        .into_iter()
        .map(|(metric_type, count)| BreakdownRow {
            label: metric_type.label().to_string(),
            value: count,
            display: format!("{:.0}", count),
        })
        .collect();

    let table_rows = latest_first(&filtered);
    let has_more = table_rows.len() > TABLE_ROW_LIMIT;

    let handle_refresh = move |_| {
        if let Some(user_id) = session.user_id() {
            client.invalidate(Resource::Metrics, user_id);
        }
    };

    rsx! {
        div { class: "content-header",
            div {
                h1 { "PERFORMANCE" }
                p { class: "page-subtitle", "Record and visualize your performance metrics" }
            }
            div { class: "header-actions",
                button { class: "btn-text", onclick: handle_refresh, "REFRESH" }
                button { onclick: move |_| show_dialog.set(true), "ADD METRIC" }
            }
        }

        if let Some(err) = query.error {
            div { class: "error-message", "{err}" }
        }

        div { class: "filters",
            div { class: "filter-group",
                label { "TIME RANGE" }
                select {
                    value: "{range.value()}",
                    onchange: move |e| {
                        if let Some(next) = TimeRange::parse(&e.value()) {
                            time_range.set(next);
                        }
                    },
                    for r in TimeRange::all() {
                        option { value: "{r.value()}", "{r.label()}" }
                    }
                }
            }

            div { class: "filter-group",
                label { "METRIC TYPE" }
                select {
                    value: type_filter.map(|t| t.label()).unwrap_or("All"),
                    onchange: move |e| selected_type.set(MetricType::parse(&e.value())),
                    option { value: "All", "All" }
                    for t in MetricType::all() {
                        option { value: "{t.label()}", "{t.label()}" }
                    }
                }
            }
        }

        div { class: "stats-band",
            StatCard {
                title: "Training Sessions".to_string(),
                value: session_count.to_string(),
                change: Some(StatChange {
                    percent: percent_change(session_count as f64, previous.len() as f64),
                    label: "vs previous period",
                }),
            }
            StatCard {
                title: "Avg. Value".to_string(),
                value: format!("{:.1}", average),
                change: Some(StatChange {
                    percent: percent_change(average, prev_average),
                    label: "vs previous period",
                }),
            }
            StatCard {
                title: "Types Tracked".to_string(),
                value: types_tracked.to_string(),
                change: None,
            }
        }

        div { class: "dashboard-grid",
            div { class: "dashboard-block",
                h2 { "SESSIONS PER DAY" }
                TrendChart { points: trend }
            }

            div { class: "dashboard-block",
                h2 { "SESSIONS BY TYPE" }
                BarBreakdown { rows: distribution }
            }

            div { class: "dashboard-block",
                h2 { "RECENT METRICS" }
                if table_rows.is_empty() {
                    div { class: "empty-state",
                        p { "No performance metrics for this period" }
                        button { onclick: move |_| show_dialog.set(true), "RECORD YOUR FIRST METRIC" }
                    }
                } else {
                    table { class: "record-table",
                        thead {
                            tr {
                                th { "DATE" }
                                th { "TYPE" }
                                th { class: "right", "VALUE" }
                                th { "NOTES" }
                            }
                        }
                        tbody {
                            for metric in table_rows.iter().take(TABLE_ROW_LIMIT) {
                                {
                                    let date = format_date_full(metric.date);
                                    let value = format!("{} {}", metric.value, metric.unit);
                                    let notes = metric.notes.clone().unwrap_or_else(|| "-".to_string());
                                    rsx! {
                                        tr { key: "{metric.id}",
                                            td { "{date}" }
                                            td {
                                                span { class: "badge category", "{metric.metric_type.label()}" }
                                            }
                                            td { class: "right", "{value}" }
                                            td { "{notes}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    if has_more {
                        button { class: "btn-text w-full", "VIEW ALL METRICS" }
                    }
                }
            }
        }

        if show_dialog() {
            Overlay {
                title: "Record Performance Metric".to_string(),
                on_close: move |_| show_dialog.set(false),
                PerformanceForm { on_success: move |_| show_dialog.set(false) }
            }
        }
    }
}
