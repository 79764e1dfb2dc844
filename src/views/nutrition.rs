use dioxus::prelude::*;

use crate::cache::{use_nutrition, use_query_client, Resource};
use crate::components::{BarBreakdown, BreakdownRow, LoadingBlock, Overlay, StatCard, StatChange, TrendChart};
use crate::forms::NutritionForm;
use crate::models::{MealType, NutritionLog};
use crate::range::{
    between, daily_series, filter_records, latest_first, percent_change, totals_by, TimeRange,
    TABLE_ROW_LIMIT,
};
use crate::session::use_session;
use crate::utils::{format_date_full, today_date};

fn calories_of(log: &NutritionLog) -> f64 {
    log.calories.unwrap_or(0) as f64
}

fn protein_of(log: &NutritionLog) -> f64 {
    log.protein.unwrap_or(0) as f64
}

#[component]
pub fn Nutrition() -> Element {
    let session = use_session();
    let client = use_query_client();
    let query = use_nutrition();

    let mut time_range = use_signal(|| TimeRange::Last7Days);
    let mut selected_meal = use_signal(|| None::<MealType>);
    let mut show_dialog = use_signal(|| false);

    if query.is_loading {
        return rsx! {
            LoadingBlock {}
        };
    }

    let today = today_date();
    let range = time_range();
    let meal_filter = selected_meal();

    let keep = |log: &NutritionLog| meal_filter.is_none_or(|m| log.meal_type == m);
    let filtered = filter_records(&query.data, range, today, keep);

    let (prev_start, prev_end) = range.previous_window(today);
    let previous: Vec<_> = between(&query.data, prev_start, prev_end)
        .into_iter()
        .filter(|log| keep(log))
        .collect();

    let total_calories: f64 = filtered.iter().map(calories_of).sum();
    let total_protein: f64 = filtered.iter().map(protein_of).sum();
    let prev_calories: f64 = previous.iter().map(calories_of).sum();
    let prev_protein: f64 = previous.iter().map(protein_of).sum();

    let trend = daily_series(&filtered, range, today, calories_of);
    let distribution: Vec<BreakdownRow> = totals_by(&filtered, |log: &NutritionLog| log.meal_type, calories_of)
        .into_iter()
        .map(|(meal, calories)| BreakdownRow {
            label: meal.label().to_string(),
            value: calories,
            display: format!("{:.0} kcal", calories),
        })
        .collect();

    let table_rows = latest_first(&filtered);
    let has_more = table_rows.len() > TABLE_ROW_LIMIT;

    let handle_refresh = move |_| {
        if let Some(user_id) = session.user_id() {
            client.invalidate(Resource::Nutrition, user_id);
        }
    };

    rsx! {
        div { class: "content-header",
            div {
                h1 { "NUTRITION" }
                p { class: "page-subtitle", "Log meals and keep your fueling on target" }
            }
            div { class: "header-actions",
                button { class: "btn-text", onclick: handle_refresh, "REFRESH" }
                button { onclick: move |_| show_dialog.set(true), "LOG MEAL" }
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
                label { "MEAL TYPE" }
                select {
                    value: meal_filter.map(|m| m.label()).unwrap_or("All"),
                    onchange: move |e| selected_meal.set(MealType::parse(&e.value())),
                    option { value: "All", "All" }
                    for meal in MealType::all() {
                        option { value: "{meal.label()}", "{meal.label()}" }
                    }
                }
            }
        }

        div { class: "stats-band",
            StatCard {
                title: "Calories".to_string(),
                value: format!("{:.0} kcal", total_calories),
                change: Some(StatChange {
                    percent: percent_change(total_calories, prev_calories),
                    label: "vs previous period",
                }),
            }
            StatCard {
                title: "Protein".to_string(),
                value: format!("{:.0} g", total_protein),
                change: Some(StatChange {
                    percent: percent_change(total_protein, prev_protein),
                    label: "vs previous period",
                }),
            }
            StatCard {
                title: "Meals Logged".to_string(),
                value: filtered.len().to_string(),
                change: Some(StatChange {
                    percent: percent_change(filtered.len() as f64, previous.len() as f64),
                    label: "vs previous period",
                }),
            }
        }

        div { class: "dashboard-grid",
            div { class: "dashboard-block",
                h2 { "CALORIES PER DAY" }
                TrendChart { points: trend }
            }

            div { class: "dashboard-block",
                h2 { "CALORIES BY MEAL" }
                BarBreakdown { rows: distribution }
            }

            div { class: "dashboard-block",
                h2 { "RECENT MEALS" }
                if table_rows.is_empty() {
                    div { class: "empty-state",
                        p { "No meals logged for this period" }
                        button { onclick: move |_| show_dialog.set(true), "LOG YOUR FIRST MEAL" }
                    }
                } else {
                    table { class: "record-table",
                        thead {
                            tr {
                                th { "DATE" }
                                th { "MEAL" }
                                th { "FOOD ITEMS" }
                                th { class: "right", "KCAL" }
                                th { class: "right", "PROTEIN" }
                            }
                        }
                        tbody {
                            for log in table_rows.iter().take(TABLE_ROW_LIMIT) {
                                {
                                    let date = format_date_full(log.date);
                                    let calories = log
                                        .calories
                                        .map(|c| c.to_string())
                                        .unwrap_or_else(|| "-".to_string());
                                    let protein = log
                                        .protein
                                        .map(|p| format!("{}g", p))
                                        .unwrap_or_else(|| "-".to_string());
                                    rsx! {
                                        tr { key: "{log.id}",
                                            td { "{date}" }
                                            td {
                                                span { class: "badge category", "{log.meal_type.label()}" }
                                            }
                                            td { "{log.food_items}" }
                                            td { class: "right", "{calories}" }
                                            td { class: "right", "{protein}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    if has_more {
                        button { class: "btn-text w-full", "VIEW ALL MEALS" }
                    }
                }
            }
        }

        if show_dialog() {
            Overlay {
                title: "Log a Meal".to_string(),
                on_close: move |_| show_dialog.set(false),
                NutritionForm { on_success: move |_| show_dialog.set(false) }
            }
        }
    }
}
