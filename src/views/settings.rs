use dioxus::prelude::*;

use crate::forms::{NotificationsForm, ProfileForm};
use crate::session::use_session;

#[derive(Clone, Copy, PartialEq)]
enum SettingsTab {
    Profile,
    Notifications,
    Appearance,
}

impl SettingsTab {
    fn label(&self) -> &'static str {
        match self {
            SettingsTab::Profile => "PROFILE",
            SettingsTab::Notifications => "NOTIFICATIONS",
            SettingsTab::Appearance => "APPEARANCE",
        }
    }

    fn all() -> &'static [SettingsTab] {
        &[
            SettingsTab::Profile,
            SettingsTab::Notifications,
            SettingsTab::Appearance,
        ]
    }
}

#[component]
pub fn Settings() -> Element {
    let session = use_session();
    let mut tab = use_signal(|| SettingsTab::Profile);
    // Theme handling itself is external; this only remembers the choice.
    let mut theme = use_signal(|| "dark".to_string());

    let username = session
        .user()
        .map(|u| u.username)
        .unwrap_or_default();

    rsx! {
        div { class: "content-header",
            div {
                h1 { "SETTINGS" }
                p { class: "page-subtitle", "Manage your account settings and preferences" }
            }
        }

        div { class: "settings-layout",
            div { class: "settings-sidebar",
                div { class: "dashboard-block",
                    h2 { "YOUR SETTINGS" }
                    for t in SettingsTab::all() {
                        button {
                            class: if tab() == *t { "settings-nav active" } else { "settings-nav" },
                            onclick: move |_| tab.set(*t),
                            "{t.label()}"
                        }
                    }
                }

                div { class: "dashboard-block",
                    h2 { "ACCOUNT" }
                    div { class: "settings-item",
                        span { "USERNAME" }
                        span { class: "font-mono", "{username}" }
                    }
                }
            }

            div { class: "settings-main dashboard-block",
                match tab() {
                    SettingsTab::Profile => rsx! {
                        div {
                            h2 { "PROFILE INFORMATION" }
                            p { class: "page-subtitle", "Update your personal information and contact details" }
                            ProfileForm {}
                        }
                    },
                    SettingsTab::Notifications => rsx! {
                        div {
                            h2 { "NOTIFICATION SETTINGS" }
                            p { class: "page-subtitle", "Customize which notifications you receive" }
                            NotificationsForm {}
                        }
                    },
                    SettingsTab::Appearance => rsx! {
                        div {
                            h2 { "APPEARANCE SETTINGS" }
                            p { class: "page-subtitle", "Select your preferred theme for the application" }
                            div { class: "theme-row",
                                for option in ["light", "dark", "system"] {
                                    button {
                                        class: if theme() == option { "active" } else { "" },
                                        onclick: move |_| theme.set(option.to_string()),
                                        "{option.to_uppercase()}"
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
