use dioxus::prelude::*;

use crate::cache::{use_finances, use_query_client, Resource};
use crate::components::{BarBreakdown, BreakdownRow, LoadingBlock, Overlay, StatCard, StatChange, TrendChart};
use crate::forms::FinanceForm;
use crate::range::{
    between, daily_series, filter_records, finance_summary, latest_first, percent_change,
    totals_by, TimeRange, TABLE_ROW_LIMIT,
};
use crate::session::use_session;
use crate::utils::{format_currency, format_date_full, format_signed_currency, today_date};

#[component]
pub fn Finances() -> Element {
    let session = use_session();
    let client = use_query_client();
    let query = use_finances();

    let mut time_range = use_signal(|| TimeRange::Last30Days);
    let mut selected_category = use_signal(|| "All".to_string());
    let mut show_dialog = use_signal(|| false);

    if query.is_loading {
        return rsx! {
            LoadingBlock {}
        };
    }

    let today = today_date();
    let range = time_range();
    let category = selected_category();

    let keep = |f: &crate::models::Finance| category == "All" || f.category == category;
    let filtered = filter_records(&query.data, range, today, keep);

    let summary = finance_summary(&filtered);
    let (prev_start, prev_end) = range.previous_window(today);
    let previous: Vec<_> = between(&query.data, prev_start, prev_end)
        .into_iter()
        .filter(|f| keep(f))
        .collect();
    let prev_summary = finance_summary(&previous);

    let expenses_trend = daily_series(&filtered, range, today, |f: &crate::models::Finance| {
        if f.is_income {
            0.0
        } else {
            f.amount
        }
    });
    let income_trend = daily_series(&filtered, range, today, |f: &crate::models::Finance| {
        if f.is_income {
            f.amount
        } else {
            0.0
        }
    });

    let expense_rows: Vec<BreakdownRow> = totals_by(
        &filtered.iter().filter(|f| !f.is_income).cloned().collect::<Vec<_>>(),
        |f| f.category.clone(),
        |f| f.amount,
    )
    .into_iter()
    .map(|(label, value)| BreakdownRow {
        display: format_currency(value),
        label,
        value,
    })
    .collect();

    let mut categories: Vec<String> = vec!["All".to_string()];
    let mut seen: std::collections::BTreeSet<String> = std::collections::BTreeSet::new();
    for f in &query.data {
        seen.insert(f.category.clone());
    }
    categories.extend(seen);

    let table_rows = latest_first(&filtered);
    let has_more = table_rows.len() > TABLE_ROW_LIMIT;

    let handle_refresh = move |_| {
        if let Some(user_id) = session.user_id() {
            client.invalidate(Resource::Finances, user_id);
        }
    };

    rsx! {
        div { class: "content-header",
            div {
                h1 { "FINANCIAL TRACKING" }
                p { class: "page-subtitle", "Track and analyze your athletic expenses and income" }
            }
            div { class: "header-actions",
                button { class: "btn-text", onclick: handle_refresh, "REFRESH" }
                button { onclick: move |_| show_dialog.set(true), "RECORD TRANSACTION" }
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
                label { "CATEGORY" }
                select {
                    value: "{selected_category}",
                    onchange: move |e| selected_category.set(e.value()),
                    for cat in categories {
                        option { value: "{cat}", "{cat}" }
                    }
                }
            }
        }

        div { class: "stats-band",
            StatCard {
                title: "Balance".to_string(),
                value: format_currency(summary.balance),
                change: Some(StatChange {
                    percent: percent_change(summary.balance, prev_summary.balance),
                    label: "vs previous period",
                }),
            }
            StatCard {
                title: "Income".to_string(),
                value: format_currency(summary.income),
                change: Some(StatChange {
                    percent: percent_change(summary.income, prev_summary.income),
                    label: "vs previous period",
                }),
            }
            StatCard {
                title: "Expenses".to_string(),
                value: format_currency(summary.expenses),
                change: Some(StatChange {
                    percent: percent_change(summary.expenses, prev_summary.expenses),
                    label: "vs previous period",
                }),
            }
        }

        div { class: "dashboard-grid",
            div { class: "dashboard-block",
                h2 { "DAILY EXPENSES" }
                TrendChart { points: expenses_trend }
            }

            div { class: "dashboard-block",
                h2 { "DAILY INCOME" }
                TrendChart { points: income_trend }
            }

            div { class: "dashboard-block",
                h2 { "EXPENSE CATEGORIES" }
                BarBreakdown { rows: expense_rows }
            }

            div { class: "dashboard-block",
                h2 { "TRANSACTION HISTORY" }
                if table_rows.is_empty() {
                    div { class: "empty-state",
                        p { "No financial records for this period" }
                        button { onclick: move |_| show_dialog.set(true), "RECORD YOUR FIRST TRANSACTION" }
                    }
                } else {
                    table { class: "record-table",
                        thead {
                            tr {
                                th { "DATE" }
                                th { "CATEGORY" }
                                th { "DESCRIPTION" }
                                th { "TYPE" }
                                th { class: "right", "AMOUNT" }
                            }
                        }
                        tbody {
                            for finance in table_rows.iter().take(TABLE_ROW_LIMIT) {
                                {
                                    let date = format_date_full(finance.date);
                                    let description =
                                        finance.description.clone().unwrap_or_else(|| "-".to_string());
                                    let amount = format_signed_currency(finance.amount, finance.is_income);
                                    rsx! {
                                        tr { key: "{finance.id}",
                                            td { "{date}" }
                                            td {
                                                span { class: "badge category", "{finance.category}" }
                                            }
                                            td { "{description}" }
                                            td {
                                                span {
                                                    class: if finance.is_income { "badge income" } else { "badge expense" },
                                                    if finance.is_income { "Income" } else { "Expense" }
                                                }
                                            }
                                            td {
                                                class: if finance.is_income { "right amount income" } else { "right amount expense" },
                                                "{amount}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    if has_more {
                        button { class: "btn-text w-full", "VIEW ALL TRANSACTIONS" }
                    }
                }
            }
        }

        if show_dialog() {
            Overlay {
                title: "Record Financial Transaction".to_string(),
                on_close: move |_| show_dialog.set(false),
                FinanceForm { on_success: move |_| show_dialog.set(false) }
            }
        }
    }
}
