use dioxus::prelude::*;

use crate::cache::use_query_client;
use crate::models::User;
use crate::router::Route;
use crate::session::use_session;

fn nav_items() -> Vec<(Route, &'static str)> {
    vec![
        (Route::Dashboard {}, "DASHBOARD"),
        (Route::Performance {}, "PERFORMANCE"),
        (Route::Nutrition {}, "NUTRITION"),
        (Route::Injuries {}, "INJURIES"),
        (Route::Finances {}, "FINANCES"),
        (Route::AiCoach {}, "AI COACH"),
        (Route::Settings {}, "SETTINGS"),
    ]
}

/// App frame for authenticated pages: top strip, sidebar navigation and the
/// routed content area.
#[component]
pub fn AppShell(user: User, children: Element) -> Element {
    let session = use_session();
    let client = use_query_client();

    // Cache eviction happens before the session flips so an in-flight read
    // can never land in another user's view.
    let handle_logout = move |_| {
        spawn(async move {
            client.evict_all();
            session.logout().await;
        });
    };

    let display_name = user.name.clone().unwrap_or_else(|| user.username.clone());

    rsx! {
        div { id: "main",
            header { class: "top-strip",
                div { class: "app-name", "ATHLETETRACK" }
                div { class: "user-area",
                    span { class: "user-name", "{display_name}" }
                    button { class: "btn-text", onclick: handle_logout, "LOGOUT" }
                }
            }
            div { class: "layout",
                nav { class: "sidebar",
                    for (route, label) in nav_items() {
                        Link {
                            to: route,
                            class: "nav-link",
                            active_class: "active",
                            "{label}"
                        }
                    }
                }
                main { class: "content container",
                    {children}
                }
            }
        }
    }
}
