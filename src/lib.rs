pub mod api;
pub mod cache;
pub mod coach;
pub mod components;
pub mod forms;
pub mod models;
pub mod range;
pub mod router;
pub mod schema;
pub mod session;
pub mod utils;
pub mod views;

use dioxus::prelude::*;

use cache::QueryProvider;
use components::ToastProvider;
use router::Route;
use session::SessionProvider;

#[component]
pub fn App() -> Element {
    rsx! {
        SessionProvider {
            QueryProvider {
                ToastProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}
