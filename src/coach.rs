//! Context assembly for the AI coach endpoints. No intelligence lives here;
//! the client only flattens recent records into the textual context the
//! server expects.

use crate::models::{CoachContext, Injury, NutritionLog, PerformanceMetric};
use crate::range::recent;
use crate::utils::format_date_full;

pub fn build_context(
    metrics: &[PerformanceMetric],
    logs: &[NutritionLog],
    injuries: &[Injury],
) -> CoachContext {
    CoachContext {
        performance_history: performance_context(metrics),
        nutrition_logs: nutrition_context(logs),
        injuries: injury_context(injuries),
    }
}

pub fn performance_context(metrics: &[PerformanceMetric]) -> String {
    if metrics.is_empty() {
        return "No performance data recorded yet.".to_string();
    }
    recent(metrics, 5)
        .iter()
        .map(|m| {
            format!(
                "{}: {} {} on {}",
                m.metric_type.label(),
                m.value,
                m.unit,
                format_date_full(m.date)
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn nutrition_context(logs: &[NutritionLog]) -> String {
    if logs.is_empty() {
        return "No nutrition data recorded yet.".to_string();
    }
    recent(logs, 5)
        .iter()
        .map(|log| {
            let mut text = format!(
                "{} on {}: {}",
                log.meal_type.label(),
                format_date_full(log.date),
                log.food_items
            );
            if let Some(calories) = log.calories {
                text.push_str(&format!(", {} calories", calories));
            }
            if let Some(protein) = log.protein {
                text.push_str(&format!(", {}g protein", protein));
            }
            text
        })
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn injury_context(injuries: &[Injury]) -> String {
    if injuries.is_empty() {
        return "No injury data recorded yet.".to_string();
    }
    injuries
        .iter()
        .map(|injury| {
            format!(
                "{} ({}): {}, severity: {}, occurred on {}",
                injury.injury_type,
                injury.body_part,
                injury.status.label(),
                injury.severity.label(),
                format_date_full(injury.date_occurred)
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Training-plan constraints arrive as a textarea; one constraint per
/// non-blank line.
pub fn split_constraints(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Schedule keys are day names; render Monday..Sunday rather than
/// alphabetically. Unknown keys sort last in their original form.
pub fn weekday_rank(day: &str) -> usize {
    const ORDER: &[&str] = &[
        "monday", "mon", "tuesday", "tue", "wednesday", "wed", "thursday", "thu", "friday", "fri",
        "saturday", "sat", "sunday", "sun",
    ];
    let lower = day.to_lowercase();
    ORDER
        .iter()
        .position(|d| *d == lower)
        .map(|i| i / 2)
        .unwrap_or(7)
}

/// Confidence colour threshold class for the advice card.
pub fn confidence_class(confidence: f64) -> &'static str {
    if confidence >= 0.8 {
        "confidence high"
    } else if confidence >= 0.5 {
        "confidence medium"
    } else {
        "confidence low"
    }
}

pub fn intensity_class(intensity: &str) -> &'static str {
    let lower = intensity.to_lowercase();
    if lower.contains("high") {
        "badge intensity-high"
    } else if lower.contains("medium") {
        "badge intensity-medium"
    } else if lower.contains("low") {
        "badge intensity-low"
    } else {
        "badge"
    }
}
