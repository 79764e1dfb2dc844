use dioxus::prelude::*;

use crate::components::use_toaster;

struct NotificationPref {
    label: &'static str,
    hint: &'static str,
}

const PREFS: &[NotificationPref] = &[
    NotificationPref {
        label: "Performance Updates",
        hint: "Receive notifications about your performance metrics",
    },
    NotificationPref {
        label: "Nutrition Reminders",
        hint: "Get reminders to log your meals and nutrition",
    },
    NotificationPref {
        label: "Injury Alerts",
        hint: "Receive alerts about injury recovery progress",
    },
    NotificationPref {
        label: "Financial Reports",
        hint: "Receive monthly financial summary reports",
    },
    NotificationPref {
        label: "AI Coach Insights",
        hint: "Get notifications when your AI coach has new insights",
    },
];

/// Declared defaults: everything on except financial reports.
pub const NOTIFICATION_DEFAULTS: [bool; 5] = [true, true, true, false, true];

#[component]
pub fn NotificationsForm() -> Element {
    let toaster = use_toaster();
    let mut enabled = use_signal(|| NOTIFICATION_DEFAULTS);

    let handle_submit = move |e: Event<FormData>| {
        e.prevent_default();
        e.stop_propagation();
        toaster.success(
            "Notification preferences updated",
            "Your notification settings have been saved",
        );
    };

    rsx! {
        form { onsubmit: handle_submit,
            for (index, pref) in PREFS.iter().enumerate() {
                div { class: "settings-item", key: "{pref.label}",
                    div {
                        div { class: "settings-label", "{pref.label}" }
                        div { class: "settings-hint", "{pref.hint}" }
                    }
                    input {
                        r#type: "checkbox",
                        checked: enabled()[index],
                        onchange: move |e| {
                            let mut next = enabled();
                            next[index] = e.checked();
                            enabled.set(next);
                        },
                    }
                }
            }

            button { class: "primary", r#type: "submit", "SAVE PREFERENCES" }
        }
    }
}
