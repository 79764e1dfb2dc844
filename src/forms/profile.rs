use dioxus::prelude::*;

use crate::components::use_toaster;
use crate::schema::{FieldErrors, FormValues, PROFILE_SCHEMA};
use crate::session::use_session;

/// Profile details form on the settings page. No profile endpoint exists;
/// validation and confirmation are local.
#[component]
pub fn ProfileForm() -> Element {
    let session = use_session();
    let toaster = use_toaster();
    let user = session.user();

    let mut name = use_signal(|| {
        user.as_ref()
            .and_then(|u| u.name.clone())
            .unwrap_or_default()
    });
    let mut username = use_signal(|| {
        user.as_ref()
            .map(|u| u.username.clone())
            .unwrap_or_default()
    });
    let mut email = use_signal(|| "athlete@example.com".to_string());
    let mut errors = use_signal(FieldErrors::new);

    let handle_submit = move |e: Event<FormData>| {
        e.prevent_default();
        e.stop_propagation();

        let values = FormValues::new()
            .with_text("name", name())
            .with_text("username", username())
            .with_text("email", email());

        if let Err(field_errors) = PROFILE_SCHEMA.validate(&values) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());
        toaster.success("Profile updated", "Your profile information has been updated");
    };

    let errs = errors();

    rsx! {
        form { onsubmit: handle_submit,
            div { class: "form-group",
                label { "NAME" }
                input {
                    r#type: "text",
                    placeholder: "Your name",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
                if let Some(msg) = errs.get("name") {
                    p { class: "field-error", "{msg}" }
                }
            }

            div { class: "form-group",
                label { "USERNAME" }
                input {
                    r#type: "text",
                    placeholder: "username",
                    value: "{username}",
                    oninput: move |e| username.set(e.value()),
                }
                if let Some(msg) = errs.get("username") {
                    p { class: "field-error", "{msg}" }
                }
            }

            div { class: "form-group",
                label { "EMAIL" }
                input {
                    r#type: "text",
                    placeholder: "email@example.com",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
                if let Some(msg) = errs.get("email") {
                    p { class: "field-error", "{msg}" }
                }
            }

            button { class: "primary", r#type: "submit", "SAVE CHANGES" }
        }
    }
}
