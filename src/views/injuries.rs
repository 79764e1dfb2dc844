use dioxus::prelude::*;

use crate::cache::{use_injuries, use_query_client, Resource};
use crate::components::{BarBreakdown, BreakdownRow, LoadingBlock, Overlay, StatCard, TrendChart};
use crate::forms::InjuryForm;
use crate::models::{Injury, InjuryStatus};
use crate::range::{counts_by, daily_counts, filter_records, latest_first, TimeRange, TABLE_ROW_LIMIT};
use crate::session::use_session;
use crate::utils::{format_date_full, today_date};

#[component]
pub fn Injuries() -> Element {
    let session = use_session();
    let client = use_query_client();
    let query = use_injuries();

    let mut time_range = use_signal(|| TimeRange::Last90Days);
    let mut selected_status = use_signal(|| None::<InjuryStatus>);
    let mut show_dialog = use_signal(|| false);

    if query.is_loading {
        return rsx! {
            LoadingBlock {}
        };
    }

    let today = today_date();
    let range = time_range();
    let status_filter = selected_status();

    let keep = |injury: &Injury| status_filter.is_none_or(|s| injury.status == s);
    let filtered = filter_records(&query.data, range, today, keep);

    // Status counts ignore the time window; an old injury can still be
    // active.
    let active_count = query.data.iter().filter(|i| i.status == InjuryStatus::Active).count();
    let recovered_count = query
        .data
        .iter()
        .filter(|i| i.status == InjuryStatus::Recovered)
        .count();

    let trend = daily_counts(&filtered, range, today);
    let distribution: Vec<BreakdownRow> = counts_by(&filtered, |i: &Injury| i.body_part.clone())
        .into_iter()
        .map(|(body_part, count)| BreakdownRow {
            label: body_part,
            value: count,
            display: format!("{:.0}", count),
        })
        .collect();

    let table_rows = latest_first(&filtered);
    let has_more = table_rows.len() > TABLE_ROW_LIMIT;

    let handle_refresh = move |_| {
        if let Some(user_id) = session.user_id() {
            client.invalidate(Resource::Injuries, user_id);
        }
    };

    rsx! {
        div { class: "content-header",
            div {
                h1 { "INJURIES" }
                p { class: "page-subtitle", "Log injuries and track your recovery" }
            }
            div { class: "header-actions",
                button { class: "btn-text", onclick: handle_refresh, "REFRESH" }
                button { onclick: move |_| show_dialog.set(true), "RECORD INJURY" }
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
                label { "STATUS" }
                select {
                    value: status_filter.map(|s| s.label()).unwrap_or("All"),
                    onchange: move |e| selected_status.set(InjuryStatus::parse(&e.value())),
                    option { value: "All", "All" }
                    for status in InjuryStatus::all() {
                        option { value: "{status.label()}", "{status.label()}" }
                    }
                }
            }
        }

        div { class: "stats-band",
            StatCard {
                title: "Active Injuries".to_string(),
                value: active_count.to_string(),
                change: None,
            }
            StatCard {
                title: "Recovered".to_string(),
                value: recovered_count.to_string(),
                change: None,
            }
            StatCard {
                title: "In Selected Period".to_string(),
                value: filtered.len().to_string(),
                change: None,
            }
        }

        div { class: "dashboard-grid",
            div { class: "dashboard-block",
                h2 { "INJURIES PER DAY" }
                TrendChart { points: trend }
            }

            div { class: "dashboard-block",
                h2 { "BY BODY PART" }
                BarBreakdown { rows: distribution }
            }

            div { class: "dashboard-block",
                h2 { "INJURY HISTORY" }
                if table_rows.is_empty() {
                    div { class: "empty-state",
                        p { "No injuries recorded for this period" }
                    }
                } else {
                    table { class: "record-table",
                        thead {
                            tr {
                                th { "DATE" }
                                th { "TYPE" }
                                th { "BODY PART" }
                                th { "SEVERITY" }
                                th { "STATUS" }
                            }
                        }
                        tbody {
                            for injury in table_rows.iter().take(TABLE_ROW_LIMIT) {
                                {
                                    let date = format_date_full(injury.date_occurred);
                                    let severity_class = match injury.severity {
                                        crate::models::Severity::Mild => "badge severity-mild",
                                        crate::models::Severity::Moderate => "badge severity-moderate",
                                        crate::models::Severity::Severe => "badge severity-severe",
                                    };
                                    let status_class = match injury.status {
                                        InjuryStatus::Active => "badge status-active",
                                        InjuryStatus::Recovered => "badge status-recovered",
                                    };
                                    rsx! {
                                        tr { key: "{injury.id}",
                                            td { "{date}" }
                                            td { "{injury.injury_type}" }
                                            td { "{injury.body_part}" }
                                            td {
                                                span { class: severity_class, "{injury.severity.label()}" }
                                            }
                                            td {
                                                span { class: status_class, "{injury.status.label()}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    if has_more {
                        button { class: "btn-text w-full", "VIEW ALL INJURIES" }
                    }
                }
            }
        }

        if show_dialog() {
            Overlay {
                title: "Record an Injury".to_string(),
                on_close: move |_| show_dialog.set(false),
                InjuryForm { on_success: move |_| show_dialog.set(false) }
            }
        }
    }
}
