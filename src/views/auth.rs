use dioxus::prelude::*;

use crate::cache::use_query_client;
use crate::components::{use_toaster, FullPageSpinner};
use crate::models::{LoginPayload, RegisterPayload};
use crate::router::{auth_gate_for, AuthGate, Route};
use crate::schema::{self, FieldErrors, FormValues, LOGIN_SCHEMA, REGISTER_SCHEMA};
use crate::session::use_session;

#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    Login,
    Register,
}

const FEATURES: &[&str] = &[
    "Track & visualize your performance metrics",
    "Monitor nutrition & optimize your diet",
    "Log injuries & manage recovery",
    "Track athletic-related finances",
    "Get personalized AI coaching",
];

const GENDERS: &[&str] = &["Not specified", "Female", "Male", "Other"];
const ACTIVITY_LEVELS: &[&str] = &["Light", "Moderate", "High", "Very High"];

#[component]
pub fn Auth() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut mode = use_signal(|| AuthMode::Login);

    match auth_gate_for(&session.state()) {
        AuthGate::Spinner => {
            return rsx! {
                FullPageSpinner {}
            };
        }
        AuthGate::RedirectHome => {
            nav.replace(Route::Dashboard {});
            return rsx! {};
        }
        AuthGate::Render => {}
    }

    let title = match mode() {
        AuthMode::Login => "Sign in to your account",
        AuthMode::Register => "Create an account",
    };

    rsx! {
        div { class: "auth-container",
            div { class: "auth-hero",
                h1 { "ATHLETETRACK" }
                p { "Your comprehensive athletic performance management platform" }
                ul {
                    for feature in FEATURES {
                        li { "{feature}" }
                    }
                }
            }

            div { class: "auth-block",
                h2 { "{title}" }

                div { class: "auth-tabs",
                    button {
                        class: if mode() == AuthMode::Login { "active" } else { "" },
                        onclick: move |_| mode.set(AuthMode::Login),
                        "LOGIN"
                    }
                    button {
                        class: if mode() == AuthMode::Register { "active" } else { "" },
                        onclick: move |_| mode.set(AuthMode::Register),
                        "REGISTER"
                    }
                }

                match mode() {
                    AuthMode::Login => rsx! {
                        LoginForm {}
                    },
                    AuthMode::Register => rsx! {
                        RegisterForm {}
                    },
                }
            }
        }
    }
}

#[component]
fn LoginForm() -> Element {
    let session = use_session();
    let client = use_query_client();
    let toaster = use_toaster();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);

    let handle_submit = move |e: Event<FormData>| {
        e.prevent_default();
        e.stop_propagation();

        let values = FormValues::new()
            .with_text("username", username())
            .with_text("password", password());

        if let Err(field_errors) = LOGIN_SCHEMA.validate(&values) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());

        let payload = LoginPayload {
            username: username().trim().to_string(),
            password: password(),
        };

        spawn(async move {
            match session.login(payload).await {
                Ok(_) => {
                    // Fresh cache for the user that just signed in.
                    client.evict_all();
                }
                Err(err) => {
                    toaster.error("Login failed", err.to_string());
                }
            }
        });
    };

    let errs = errors();
    let pending = session.is_pending();

    rsx! {
        form { onsubmit: handle_submit,
            div { class: "form-group",
                label { "USERNAME" }
                input {
                    r#type: "text",
                    value: "{username}",
                    oninput: move |e| username.set(e.value()),
                    disabled: pending,
                }
                if let Some(msg) = errs.get("username") {
                    p { class: "field-error", "{msg}" }
                }
            }

            div { class: "form-group",
                label { "PASSWORD" }
                input {
                    r#type: "password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                    disabled: pending,
                }
                if let Some(msg) = errs.get("password") {
                    p { class: "field-error", "{msg}" }
                }
            }

            button {
                class: "primary w-full",
                r#type: "submit",
                disabled: pending,
                if pending { "SIGNING IN..." } else { "SIGN IN" }
            }
        }
    }
}

#[component]
fn RegisterForm() -> Element {
    let session = use_session();
    let client = use_query_client();
    let toaster = use_toaster();

    let mut username = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut weight = use_signal(String::new);
    let mut age = use_signal(|| "30".to_string());
    let mut height_cm = use_signal(|| "175".to_string());
    let mut calorie_goal = use_signal(|| "2000".to_string());
    let mut gender = use_signal(|| GENDERS[0].to_string());
    let mut activity_level = use_signal(|| "Moderate".to_string());
    let mut agree_terms = use_signal(|| false);
    let mut errors = use_signal(FieldErrors::new);

    let build_values = move || {
        FormValues::new()
            .with_text("username", username())
            .with_text("password", password())
            .with_text("name", name())
            .with_flag("agree_terms", agree_terms())
    };

    // The terms checkbox revalidates immediately so the message clears the
    // moment the box is ticked.
    let handle_terms_change = move |e: Event<FormData>| {
        agree_terms.set(e.checked());
        let values = FormValues::new().with_flag("agree_terms", e.checked());
        let mut current = errors();
        match REGISTER_SCHEMA.validate_field("agree_terms", &values) {
            Some(msg) => current.insert("agree_terms", msg),
            None => current.remove("agree_terms"),
        }
        errors.set(current);
    };

    let handle_submit = move |e: Event<FormData>| {
        e.prevent_default();
        e.stop_propagation();

        if let Err(field_errors) = REGISTER_SCHEMA.validate(&build_values()) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());

        // agree_terms gates submission but never travels to the server.
        let payload = RegisterPayload {
            username: username().trim().to_string(),
            password: password(),
            name: name().trim().to_string(),
            role: "Athlete".to_string(),
            weight: schema::coerce_float_or(&weight(), 0.0),
            daily_calorie_goal: schema::coerce_int_or(&calorie_goal(), 2000),
            height_cm: schema::coerce_int_or(&height_cm(), 175),
            age: schema::coerce_int_or(&age(), 30),
            gender: gender(),
            activity_level: activity_level(),
        };

        spawn(async move {
            match session.register(payload).await {
                Ok(_) => {
                    client.evict_all();
                }
                Err(err) => {
                    toaster.error("Registration failed", err.to_string());
                }
            }
        });
    };

    let errs = errors();
    let pending = session.is_pending();

    rsx! {
        form { onsubmit: handle_submit,
            div { class: "form-group",
                label { "USERNAME" }
                input {
                    r#type: "text",
                    value: "{username}",
                    oninput: move |e| username.set(e.value()),
                    disabled: pending,
                }
                if let Some(msg) = errs.get("username") {
                    p { class: "field-error", "{msg}" }
                }
            }

            div { class: "form-group",
                label { "FULL NAME" }
                input {
                    r#type: "text",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                    disabled: pending,
                }
                if let Some(msg) = errs.get("name") {
                    p { class: "field-error", "{msg}" }
                }
            }

            div { class: "form-group",
                label { "PASSWORD" }
                input {
                    r#type: "password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                    disabled: pending,
                }
                if let Some(msg) = errs.get("password") {
                    p { class: "field-error", "{msg}" }
                }
            }

            div { class: "form-row",
                div { class: "form-group",
                    label { "WEIGHT (KG)" }
                    input {
                        r#type: "number",
                        step: "0.1",
                        value: "{weight}",
                        oninput: move |e| weight.set(e.value()),
                        disabled: pending,
                    }
                }
                div { class: "form-group",
                    label { "AGE" }
                    input {
                        r#type: "number",
                        value: "{age}",
                        oninput: move |e| age.set(e.value()),
                        disabled: pending,
                    }
                }
            }

            div { class: "form-row",
                div { class: "form-group",
                    label { "HEIGHT (CM)" }
                    input {
                        r#type: "number",
                        value: "{height_cm}",
                        oninput: move |e| height_cm.set(e.value()),
                        disabled: pending,
                    }
                }
                div { class: "form-group",
                    label { "DAILY CALORIE GOAL" }
                    input {
                        r#type: "number",
                        value: "{calorie_goal}",
                        oninput: move |e| calorie_goal.set(e.value()),
                        disabled: pending,
                    }
                }
            }

            div { class: "form-row",
                div { class: "form-group",
                    label { "GENDER" }
                    select {
                        value: "{gender}",
                        onchange: move |e| gender.set(e.value()),
                        disabled: pending,
                        for g in GENDERS {
                            option { value: "{g}", "{g}" }
                        }
                    }
                }
                div { class: "form-group",
                    label { "ACTIVITY LEVEL" }
                    select {
                        value: "{activity_level}",
                        onchange: move |e| activity_level.set(e.value()),
                        disabled: pending,
                        for level in ACTIVITY_LEVELS {
                            option { value: "{level}", "{level}" }
                        }
                    }
                }
            }

            div { class: "form-group form-switch",
                div { class: "switch-row",
                    input {
                        r#type: "checkbox",
                        checked: agree_terms(),
                        onchange: handle_terms_change,
                        disabled: pending,
                    }
                    span { class: "switch-hint", "I agree to the terms of service and privacy policy" }
                }
                if let Some(msg) = errs.get("agree_terms") {
                    p { class: "field-error", "{msg}" }
                }
            }

            button {
                class: "primary w-full",
                r#type: "submit",
                disabled: pending,
                if pending { "CREATING ACCOUNT..." } else { "CREATE ACCOUNT" }
            }
        }
    }
}
