use dioxus::prelude::*;

use crate::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "not-found",
            h1 { "404" }
            p { "No page at {path}" }
            Link { to: Route::Dashboard {}, "BACK TO DASHBOARD" }
        }
    }
}
