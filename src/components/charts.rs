//! Chart panels built from the series in [`crate::range`]. Rendering is
//! plain markup; the series shape is the contract.

use dioxus::prelude::*;

use crate::range::DayPoint;
use crate::utils::format_date_short;

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub label: String,
    pub value: f64,
    pub display: String,
}

/// Horizontal distribution bars, one row per category.
#[component]
pub fn BarBreakdown(rows: Vec<BreakdownRow>) -> Element {
    if rows.is_empty() {
        return rsx! {
            div { class: "empty-state", "NO DATA" }
        };
    }
    let max = rows.iter().map(|r| r.value).fold(0.0_f64, f64::max);

    rsx! {
        div { class: "bar-chart",
            for row in rows {
                {
                    let pct = if max > 0.0 { row.value / max * 100.0 } else { 0.0 };
                    rsx! {
                        div { class: "bar-row", key: "{row.label}",
                            span { class: "bar-label", "{row.label}" }
                            div { class: "bar-track",
                                div { class: "bar-fill", style: "width: {pct}%" }
                            }
                            span { class: "bar-value", "{row.display}" }
                        }
                    }
                }
            }
        }
    }
}

/// Per-day trend columns over a regular window; zero days render as empty
/// columns so the x-axis stays contiguous.
#[component]
pub fn TrendChart(points: Vec<DayPoint>) -> Element {
    if points.is_empty() {
        return rsx! {
            div { class: "empty-state", "NO DATA" }
        };
    }
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let first = points.first().map(|p| format_date_short(p.date)).unwrap_or_default();
    let last = points.last().map(|p| format_date_short(p.date)).unwrap_or_default();

    rsx! {
        div { class: "trend-panel",
            div { class: "trend-chart",
                for point in points {
                    {
                        let pct = if max > 0.0 { point.value / max * 100.0 } else { 0.0 };
                        let tooltip = format!("{}: {:.1}", format_date_short(point.date), point.value);
                        rsx! {
                            div { class: "trend-col", key: "{point.date}", title: "{tooltip}",
                                div { class: "trend-fill", style: "height: {pct}%" }
                            }
                        }
                    }
                }
            }
            div { class: "trend-axis",
                span { "{first}" }
                span { "{last}" }
            }
        }
    }
}
