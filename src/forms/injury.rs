use dioxus::prelude::*;

use crate::api;
use crate::cache::{use_query_client, Resource};
use crate::components::use_toaster;
use crate::models::{CreateInjuryPayload, InjuryStatus, Severity, BODY_PARTS, INJURY_TYPES};
use crate::schema::{FieldErrors, FormValues, INJURY_SCHEMA};
use crate::session::use_session;
use crate::utils::{parse_form_date, today_string};

#[component]
pub fn InjuryForm(on_success: EventHandler<()>) -> Element {
    let session = use_session();
    let client = use_query_client();
    let toaster = use_toaster();

    // Type and body part start unselected so the schema forces a choice.
    let mut injury_type = use_signal(String::new);
    let mut body_part = use_signal(String::new);
    let mut severity = use_signal(|| Severity::Mild);
    let mut status = use_signal(|| InjuryStatus::Active);
    let mut date_occurred = use_signal(today_string);
    let mut notes = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut pending = use_signal(|| false);

    let handle_submit = move |e: Event<FormData>| {
        e.prevent_default();
        e.stop_propagation();

        let values = FormValues::new()
            .with_text("injury_type", injury_type())
            .with_text("body_part", body_part())
            .with_text("severity", severity().label())
            .with_text("status", status().label())
            .with_text("date_occurred", date_occurred());

        if let Err(field_errors) = INJURY_SCHEMA.validate(&values) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());

        let Some(user_id) = session.user_id() else {
            return;
        };
        let payload = CreateInjuryPayload {
            user_id,
            injury_type: injury_type(),
            body_part: body_part(),
            date_occurred: parse_form_date(&date_occurred()).unwrap_or_default(),
            severity: severity(),
            status: status(),
            notes: {
                let text = notes().trim().to_string();
                (!text.is_empty()).then_some(text)
            },
        };

        pending.set(true);
        spawn(async move {
            let result = api::create_injury(payload).await;
            pending.set(false);

            match result {
                Ok(_) => {
                    client.invalidate(Resource::Injuries, user_id);
                    toaster.success("Injury recorded", "Your injury has been successfully recorded");
                    injury_type.set(String::new());
                    body_part.set(String::new());
                    severity.set(Severity::Mild);
                    status.set(InjuryStatus::Active);
                    date_occurred.set(today_string());
                    notes.set(String::new());
                    on_success.call(());
                }
                Err(err) => {
                    toaster.error("Failed to save", err.to_string());
                }
            }
        });
    };

    let errs = errors();

    rsx! {
        form { onsubmit: handle_submit,
            div { class: "form-row",
                div { class: "form-group",
                    label { "INJURY TYPE" }
                    select {
                        value: "{injury_type}",
                        onchange: move |e| injury_type.set(e.value()),
                        disabled: pending(),
                        option { value: "", "SELECT TYPE" }
                        for t in INJURY_TYPES {
                            option { value: "{t}", "{t}" }
                        }
                    }
                    if let Some(msg) = errs.get("injury_type") {
                        p { class: "field-error", "{msg}" }
                    }
                }

                div { class: "form-group",
                    label { "BODY PART" }
                    select {
                        value: "{body_part}",
                        onchange: move |e| body_part.set(e.value()),
                        disabled: pending(),
                        option { value: "", "SELECT BODY PART" }
                        for part in BODY_PARTS {
                            option { value: "{part}", "{part}" }
                        }
                    }
                    if let Some(msg) = errs.get("body_part") {
                        p { class: "field-error", "{msg}" }
                    }
                }
            }

            div { class: "form-row",
                div { class: "form-group",
                    label { "SEVERITY" }
                    select {
                        value: "{severity().label()}",
                        onchange: move |e| {
                            if let Some(next) = Severity::parse(&e.value()) {
                                severity.set(next);
                            }
                        },
                        disabled: pending(),
                        for level in Severity::all() {
                            option { value: "{level.label()}", "{level.label()}" }
                        }
                    }
                }

                div { class: "form-group",
                    label { "STATUS" }
                    select {
                        value: "{status().label()}",
                        onchange: move |e| {
                            if let Some(next) = InjuryStatus::parse(&e.value()) {
                                status.set(next);
                            }
                        },
                        disabled: pending(),
                        for s in InjuryStatus::all() {
                            option { value: "{s.label()}", "{s.label()}" }
                        }
                    }
                }
            }

            div { class: "form-group",
                label { "DATE OCCURRED" }
                input {
                    r#type: "date",
                    value: "{date_occurred}",
                    onchange: move |e| date_occurred.set(e.value()),
                    disabled: pending(),
                }
                if let Some(msg) = errs.get("date_occurred") {
                    p { class: "field-error", "{msg}" }
                }
            }

            div { class: "form-group",
                label { "NOTES (OPTIONAL)" }
                textarea {
                    placeholder: "Describe how the injury happened and any treatment so far",
                    value: "{notes}",
                    oninput: move |e| notes.set(e.value()),
                    disabled: pending(),
                }
            }

            button {
                class: "primary w-full",
                r#type: "submit",
                disabled: pending(),
                if pending() { "SAVING..." } else { "SAVE INJURY" }
            }
        }
    }
}
