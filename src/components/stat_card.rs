use dioxus::prelude::*;

/// Current-vs-previous delta. `None` percent means there was no prior
/// period; the badge is omitted instead of showing a made-up number.
#[derive(Debug, Clone, PartialEq)]
pub struct StatChange {
    pub percent: Option<f64>,
    pub label: &'static str,
}

#[component]
pub fn StatCard(title: String, value: String, change: Option<StatChange>) -> Element {
    rsx! {
        div { class: "stat-card",
            div { class: "stat-title", "{title}" }
            div { class: "stat-value", "{value}" }
            if let Some(change) = change {
                if let Some(percent) = change.percent {
                    div {
                        class: if percent >= 0.0 { "stat-change positive" } else { "stat-change negative" },
                        span {
                            if percent >= 0.0 {
                                "+{percent:.1}%"
                            } else {
                                "{percent:.1}%"
                            }
                        }
                        span { class: "stat-change-label", "{change.label}" }
                    }
                }
            }
        }
    }
}
