use dioxus::prelude::*;

use crate::api;
use crate::cache::{use_query_client, Resource};
use crate::components::use_toaster;
use crate::models::{CreateFinancePayload, FINANCE_CATEGORIES};
use crate::schema::{self, FieldErrors, FormValues, FINANCE_SCHEMA};
use crate::session::use_session;
use crate::utils::{parse_form_date, today_string};

#[component]
pub fn FinanceForm(on_success: EventHandler<()>) -> Element {
    let session = use_session();
    let client = use_query_client();
    let toaster = use_toaster();

    let mut category = use_signal(|| "Equipment".to_string());
    let mut amount = use_signal(String::new);
    let mut is_income = use_signal(|| false);
    let mut date = use_signal(today_string);
    let mut description = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut pending = use_signal(|| false);

    let handle_submit = move |e: Event<FormData>| {
        e.prevent_default();
        e.stop_propagation();

        let values = FormValues::new()
            .with_text("category", category())
            .with_text("amount", amount())
            .with_text("date", date());

        if let Err(field_errors) = FINANCE_SCHEMA.validate(&values) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());

        let Some(user_id) = session.user_id() else {
            return;
        };
        let amount_value = schema::coerce_number(&amount())
            .ok()
            .flatten()
            .unwrap_or_default();
        let payload = CreateFinancePayload {
            user_id,
            category: category(),
            amount: amount_value,
            is_income: is_income(),
            date: parse_form_date(&date()).unwrap_or_default(),
            description: {
                let text = description().trim().to_string();
                (!text.is_empty()).then_some(text)
            },
        };

        pending.set(true);
        spawn(async move {
            let result = api::create_finance(payload).await;
            pending.set(false);

            match result {
                Ok(_) => {
                    client.invalidate(Resource::Finances, user_id);
                    toaster.success("Transaction recorded", "Your financial transaction has been saved");
                    category.set("Equipment".to_string());
                    amount.set(String::new());
                    is_income.set(false);
                    date.set(today_string());
                    description.set(String::new());
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
            div { class: "form-group form-switch",
                label { "TYPE" }
                div { class: "switch-row",
                    span { class: "switch-hint",
                        if is_income() { "Income (money received)" } else { "Expense (money spent)" }
                    }
                    input {
                        r#type: "checkbox",
                        checked: is_income(),
                        onchange: move |e| is_income.set(e.checked()),
                        disabled: pending(),
                    }
                }
            }

            div { class: "form-group",
                label { "CATEGORY" }
                select {
                    value: "{category}",
                    onchange: move |e| category.set(e.value()),
                    disabled: pending(),
                    for cat in FINANCE_CATEGORIES {
                        option { value: "{cat}", "{cat}" }
                    }
                }
                if let Some(msg) = errs.get("category") {
                    p { class: "field-error", "{msg}" }
                }
            }

            div { class: "form-group",
                label { "AMOUNT" }
                input {
                    r#type: "number",
                    step: "0.01",
                    placeholder: "0.00",
                    value: "{amount}",
                    oninput: move |e| amount.set(e.value()),
                    disabled: pending(),
                }
                if let Some(msg) = errs.get("amount") {
                    p { class: "field-error", "{msg}" }
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
                label { "DESCRIPTION (OPTIONAL)" }
                textarea {
                    placeholder: "Describe the transaction",
                    value: "{description}",
                    oninput: move |e| description.set(e.value()),
                    disabled: pending(),
                }
            }

            button {
                class: "primary w-full",
                r#type: "submit",
                disabled: pending(),
                if pending() { "SAVING..." } else { "SAVE TRANSACTION" }
            }
        }
    }
}
