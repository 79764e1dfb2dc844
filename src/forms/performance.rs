use dioxus::prelude::*;

use crate::api;
use crate::cache::{use_query_client, Resource};
use crate::components::use_toaster;
use crate::models::{CreateMetricPayload, MetricType};
use crate::schema::{self, FieldErrors, FormValues, PERFORMANCE_SCHEMA};
use crate::session::use_session;
use crate::utils::{parse_form_date, today_string};

#[component]
pub fn PerformanceForm(on_success: EventHandler<()>) -> Element {
    let session = use_session();
    let client = use_query_client();
    let toaster = use_toaster();

    let mut metric_type = use_signal(|| MetricType::Strength);
    let mut value = use_signal(String::new);
    let mut unit = use_signal(|| "kg".to_string());
    let mut date = use_signal(today_string);
    let mut notes = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut pending = use_signal(|| false);

    // Switching the metric type snaps the unit to that type's first unit.
    let handle_type_change = move |e: Event<FormData>| {
        if let Some(next) = MetricType::parse(&e.value()) {
            metric_type.set(next);
            unit.set(next.units()[0].to_string());
        }
    };

    let handle_submit = move |e: Event<FormData>| {
        e.prevent_default();
        e.stop_propagation();

        let values = FormValues::new()
            .with_text("metric_type", metric_type().label())
            .with_text("value", value())
            .with_text("unit", unit())
            .with_text("date", date());

        let mut field_errors = match PERFORMANCE_SCHEMA.validate(&values) {
            Ok(()) => FieldErrors::new(),
            Err(errs) => errs,
        };
        if !metric_type().units().contains(&unit().as_str()) {
            field_errors.insert("unit", format!("Select a unit for {}", metric_type().label()));
        }
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());

        let Some(user_id) = session.user_id() else {
            return;
        };
        let payload = CreateMetricPayload {
            user_id,
            metric_type: metric_type(),
            value: schema::coerce_number(&value()).ok().flatten().unwrap_or_default(),
            unit: unit(),
            date: parse_form_date(&date()).unwrap_or_default(),
            notes: {
                let text = notes().trim().to_string();
                (!text.is_empty()).then_some(text)
            },
        };

        pending.set(true);
        spawn(async move {
            let result = api::create_metric(payload).await;
            pending.set(false);

            match result {
                Ok(_) => {
                    client.invalidate(Resource::Metrics, user_id);
                    toaster.success("Performance recorded", "Your performance metric has been saved");
                    metric_type.set(MetricType::Strength);
                    value.set(String::new());
                    unit.set("kg".to_string());
                    date.set(today_string());
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
            div { class: "form-group",
                label { "METRIC TYPE" }
                select {
                    value: "{metric_type().label()}",
                    onchange: handle_type_change,
                    disabled: pending(),
                    for t in MetricType::all() {
                        option { value: "{t.label()}", "{t.label()}" }
                    }
                }
                if let Some(msg) = errs.get("metric_type") {
                    p { class: "field-error", "{msg}" }
                }
            }

            div { class: "form-row",
                div { class: "form-group",
                    label { "VALUE" }
                    input {
                        r#type: "number",
                        step: "0.01",
                        value: "{value}",
                        oninput: move |e| value.set(e.value()),
                        disabled: pending(),
                    }
                    if let Some(msg) = errs.get("value") {
                        p { class: "field-error", "{msg}" }
                    }
                }

                div { class: "form-group",
                    label { "UNIT" }
                    select {
                        value: "{unit}",
                        onchange: move |e| unit.set(e.value()),
                        disabled: pending(),
                        for u in metric_type().units() {
                            option { value: "{u}", "{u}" }
                        }
                    }
                    if let Some(msg) = errs.get("unit") {
                        p { class: "field-error", "{msg}" }
                    }
                }
            }

            div { class: "form-group",
                label { "DATE" }
                input {
                    r#type: "date",
                    value: "{date}",
                    onchange: move |e| date.set(e.value()),
                    disabled: pending(),
                }
                if let Some(msg) = errs.get("date") {
                    p { class: "field-error", "{msg}" }
                }
            }

            div { class: "form-group",
                label { "NOTES (OPTIONAL)" }
                textarea {
                    placeholder: "Any additional notes about this performance",
                    value: "{notes}",
                    oninput: move |e| notes.set(e.value()),
                    disabled: pending(),
                }
            }

            button {
                class: "primary w-full",
                r#type: "submit",
                disabled: pending(),
                if pending() { "SAVING..." } else { "SAVE PERFORMANCE" }
            }
        }
    }
}
