use dioxus::prelude::*;

use crate::api;
use crate::cache::{use_query_client, Resource};
use crate::components::use_toaster;
use crate::models::{CreateNutritionPayload, MealType};
use crate::schema::{self, FieldErrors, FormValues, NUTRITION_SCHEMA};
use crate::session::use_session;
use crate::utils::{parse_form_date, today_string, Debouncer};

/// Quiet period after typing stops before the analyze call fires.
const ANALYZE_DEBOUNCE_MILLIS: u32 = 1_500;
/// Only substantial input is worth a round-trip.
const ANALYZE_MIN_LEN: usize = 10;

#[component]
pub fn NutritionForm(on_success: EventHandler<()>) -> Element {
    let session = use_session();
    let client = use_query_client();
    let toaster = use_toaster();

    let mut meal_type = use_signal(|| MealType::Breakfast);
    let mut food_items = use_signal(String::new);
    let mut calories = use_signal(String::new);
    let mut protein = use_signal(String::new);
    let mut date = use_signal(today_string);
    let mut notes = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut pending = use_signal(|| false);

    let mut debounce = use_signal(Debouncer::new);
    let mut analyzing = use_signal(|| false);

    // Every edit supersedes the previous timer; the analyze call only goes
    // out after the field has been quiet for the debounce window.
    let handle_food_input = move |e: Event<FormData>| {
        let text = e.value();
        food_items.set(text.clone());
        let token = debounce.write().bump();
        if text.trim().chars().count() <= ANALYZE_MIN_LEN {
            return;
        }
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(ANALYZE_DEBOUNCE_MILLIS).await;
            if !debounce.read().is_current(token) {
                return;
            }
            analyzing.set(true);
            match api::analyze_nutrition(text).await {
                Ok(facts) => {
                    calories.set(facts.calories.to_string());
                    protein.set(facts.protein.to_string());
                }
                Err(err) => {
                    toaster.error("Analysis failed", err.to_string());
                }
            }
            analyzing.set(false);
        });
    };

    let handle_submit = move |e: Event<FormData>| {
        e.prevent_default();
        e.stop_propagation();

        let values = FormValues::new()
            .with_text("meal_type", meal_type().label())
            .with_text("food_items", food_items())
            .with_text("calories", calories())
            .with_text("protein", protein())
            .with_text("date", date());

        if let Err(field_errors) = NUTRITION_SCHEMA.validate(&values) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());

        let Some(user_id) = session.user_id() else {
            return;
        };
        let payload = CreateNutritionPayload {
            user_id,
            meal_type: meal_type(),
            food_items: food_items().trim().to_string(),
            calories: schema::coerce_int(&calories()).ok().flatten(),
            protein: schema::coerce_int(&protein()).ok().flatten(),
            date: parse_form_date(&date()).unwrap_or_default(),
            notes: {
                let text = notes().trim().to_string();
                (!text.is_empty()).then_some(text)
            },
        };

        pending.set(true);
        spawn(async move {
            let result = api::create_nutrition(payload).await;
            pending.set(false);

            match result {
                Ok(_) => {
                    client.invalidate(Resource::Nutrition, user_id);
                    toaster.success("Nutrition log saved", "Your nutrition log has been recorded");
                    meal_type.set(MealType::Breakfast);
                    food_items.set(String::new());
                    calories.set(String::new());
                    protein.set(String::new());
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
                label { "MEAL TYPE" }
                select {
                    value: "{meal_type().label()}",
                    onchange: move |e| {
                        if let Some(next) = MealType::parse(&e.value()) {
                            meal_type.set(next);
                        }
                    },
                    disabled: pending(),
                    for t in MealType::all() {
                        option { value: "{t.label()}", "{t.label()}" }
                    }
                }
                if let Some(msg) = errs.get("meal_type") {
                    p { class: "field-error", "{msg}" }
                }
            }

            div { class: "form-group",
                label { "FOOD ITEMS" }
                textarea {
                    placeholder: "List the foods you ate (e.g., Grilled chicken, brown rice, vegetables)",
                    value: "{food_items}",
                    oninput: handle_food_input,
                    disabled: pending(),
                }
                if analyzing() {
                    p { class: "field-hint", "Analyzing nutrition content..." }
                }
                if let Some(msg) = errs.get("food_items") {
                    p { class: "field-error", "{msg}" }
                }
            }

            div { class: "form-row",
                div { class: "form-group",
                    label { "CALORIES (KCAL)" }
                    input {
                        r#type: "number",
                        placeholder: "Auto-calculated from food items",
                        value: "{calories}",
                        oninput: move |e| calories.set(e.value()),
                        disabled: pending(),
                    }
                    if let Some(msg) = errs.get("calories") {
                        p { class: "field-error", "{msg}" }
                    }
                }

                div { class: "form-group",
                    label { "PROTEIN (G)" }
                    input {
                        r#type: "number",
                        placeholder: "Auto-calculated from food items",
                        value: "{protein}",
                        oninput: move |e| protein.set(e.value()),
                        disabled: pending(),
                    }
                    if let Some(msg) = errs.get("protein") {
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
                    placeholder: "Any additional notes about this meal",
                    value: "{notes}",
                    oninput: move |e| notes.set(e.value()),
                    disabled: pending(),
                }
            }

            button {
                class: "primary w-full",
                r#type: "submit",
                disabled: pending(),
                if pending() { "SAVING..." } else { "SAVE NUTRITION LOG" }
            }
        }
    }
}
