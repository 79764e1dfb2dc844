use dioxus::prelude::*;

#[component]
pub fn LoadingBlock() -> Element {
    rsx! {
        div { class: "loading", "LOADING..." }
    }
}

/// Full-height spinner for route-level waits (session rehydration, first
/// dashboard load).
#[component]
pub fn FullPageSpinner() -> Element {
    rsx! {
        div { class: "loading-screen",
            div { class: "loading", "LOADING..." }
        }
    }
}
