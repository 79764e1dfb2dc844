use dioxus::prelude::*;

use crate::api;
use crate::cache::{use_injuries, use_metrics, use_nutrition};
use crate::coach;
use crate::components::{use_toaster, LoadingBlock};
use crate::models::{
    AdvicePayload, AdviceResponse, InjuryStatus, TrainingPlanPayload, TrainingPlanResponse,
    FITNESS_LEVELS,
};

#[derive(Clone, Copy, PartialEq)]
enum CoachTab {
    Advice,
    Training,
}

#[component]
pub fn AiCoach() -> Element {
    let metrics = use_metrics();
    let nutrition = use_nutrition();
    let injuries = use_injuries();

    let mut tab = use_signal(|| CoachTab::Advice);

    if metrics.is_loading || nutrition.is_loading || injuries.is_loading {
        return rsx! {
            LoadingBlock {}
        };
    }

    let context = coach::build_context(&metrics.data, &nutrition.data, &injuries.data);
    let active_injuries = injuries
        .data
        .iter()
        .filter(|i| i.status == InjuryStatus::Active)
        .count();

    rsx! {
        div { class: "content-header",
            div {
                h1 { "AI COACH" }
                p { class: "page-subtitle", "Get personalized advice and training plans powered by AI" }
            }
        }

        div { class: "coach-layout",
            div { class: "coach-sidebar",
                div { class: "dashboard-block",
                    h2 { "DATA SNAPSHOT" }
                    div { class: "analytics-item",
                        div { class: "analytics-label", "PERFORMANCE METRICS" }
                        div { class: "analytics-value",
                            if metrics.data.is_empty() {
                                "No performance data recorded yet"
                            } else {
                                "{metrics.data.len()} metrics recorded"
                            }
                        }
                    }
                    div { class: "analytics-item",
                        div { class: "analytics-label", "NUTRITION LOGS" }
                        div { class: "analytics-value",
                            if nutrition.data.is_empty() {
                                "No nutrition data recorded yet"
                            } else {
                                "{nutrition.data.len()} meals recorded"
                            }
                        }
                    }
                    div { class: "analytics-item",
                        div { class: "analytics-label", "INJURY RECORDS" }
                        div { class: "analytics-value",
                            if injuries.data.is_empty() {
                                "No injuries recorded yet"
                            } else {
                                "{injuries.data.len()} injuries recorded ({active_injuries} active)"
                            }
                        }
                    }
                    p { class: "block-footnote",
                        "More data leads to more personalized advice from your AI coach"
                    }
                }
            }

            div { class: "coach-main dashboard-block",
                div { class: "auth-tabs",
                    button {
                        class: if tab() == CoachTab::Advice { "active" } else { "" },
                        onclick: move |_| tab.set(CoachTab::Advice),
                        "GET ADVICE"
                    }
                    button {
                        class: if tab() == CoachTab::Training { "active" } else { "" },
                        onclick: move |_| tab.set(CoachTab::Training),
                        "TRAINING PLAN"
                    }
                }

                match tab() {
                    CoachTab::Advice => rsx! {
                        AdvicePanel { context: context.clone() }
                    },
                    CoachTab::Training => rsx! {
                        TrainingPlanPanel {}
                    },
                }
            }
        }
    }
}

#[component]
fn AdvicePanel(context: crate::models::CoachContext) -> Element {
    let toaster = use_toaster();
    let mut question = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut advice = use_signal(|| None::<AdviceResponse>);

    let handle_ask = move |_| {
        let text = question().trim().to_string();
        if text.is_empty() {
            toaster.error("Missing question", "Please enter a question for the AI coach");
            return;
        }
        let payload = AdvicePayload {
            question: text,
            context: context.clone(),
        };
        loading.set(true);
        spawn(async move {
            let result = api::coach_advice(payload).await;
            loading.set(false);
            match result {
                Ok(response) => {
                    advice.set(Some(response));
                    toaster.success("AI Coach Response", "New advice received");
                }
                Err(err) => {
                    toaster.error("Error", err.to_string());
                }
            }
        });
    };

    let advice_view = match advice() {
        Some(response) => {
            let confidence_pct = (response.confidence * 100.0).round();
            let confidence_class = coach::confidence_class(response.confidence);
            rsx! {
                div { class: "insight-card",
                    div { class: "block-header",
                        h3 { "AI COACH ADVICE" }
                        span { class: confidence_class, "Confidence: {confidence_pct:.0}%" }
                    }
                    p { "{response.advice}" }
                    if !response.suggested_actions.is_empty() {
                        div {
                            h4 { "SUGGESTED ACTIONS" }
                            ul {
                                for action in response.suggested_actions {
                                    li { "{action}" }
                                }
                            }
                        }
                    }
                }
            }
        }
        None => rsx! {
            div { class: "empty-state",
                p { "Ask your AI coach a question to get personalized advice" }
                p { class: "block-footnote",
                    "Example: \"How can I improve my sprint technique?\" or \"What should I eat before a competition?\""
                }
            }
        },
    };

    rsx! {
        div { class: "coach-panel",
            h2 { "ASK YOUR AI COACH" }
            p { class: "page-subtitle",
                "Get personalized advice based on your performance data, nutrition logs, and injury history"
            }

            div { class: "form-group",
                textarea {
                    placeholder: "Ask a question about training, nutrition, recovery, or performance...",
                    value: "{question}",
                    oninput: move |e| question.set(e.value()),
                    disabled: loading(),
                }
            }

            button {
                class: "primary",
                onclick: handle_ask,
                disabled: loading(),
                if loading() { "GETTING ADVICE..." } else { "GET AI ADVICE" }
            }

            {advice_view}
        }
    }
}

#[component]
fn TrainingPlanPanel() -> Element {
    let toaster = use_toaster();
    let mut level = use_signal(|| "intermediate".to_string());
    let mut goals = use_signal(String::new);
    let mut constraints = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut plan = use_signal(|| None::<TrainingPlanResponse>);

    let handle_generate = move |_| {
        if goals().trim().is_empty() {
            toaster.error("Missing information", "Please enter your training goals");
            return;
        }
        let payload = TrainingPlanPayload {
            level: level(),
            goals: goals().trim().to_string(),
            constraints: coach::split_constraints(&constraints()),
        };
        loading.set(true);
        spawn(async move {
            let result = api::training_plan(payload).await;
            loading.set(false);
            match result {
                Ok(response) => {
                    plan.set(Some(response));
                    toaster.success("Training Plan Generated", "Your personalized training plan is ready");
                }
                Err(err) => {
                    toaster.error("Error", err.to_string());
                }
            }
        });
    };

    match plan() {
        None => rsx! {
            div { class: "coach-panel",
                h2 { "GENERATE TRAINING PLAN" }
                p { class: "page-subtitle",
                    "Get a personalized training plan based on your fitness level, goals, and constraints"
                }

                div { class: "form-group",
                    label { "FITNESS LEVEL" }
                    select {
                        value: "{level}",
                        onchange: move |e| level.set(e.value()),
                        disabled: loading(),
                        for l in FITNESS_LEVELS {
                            option { value: "{l}", "{l}" }
                        }
                    }
                }

                div { class: "form-group",
                    label { "YOUR TRAINING GOALS" }
                    textarea {
                        placeholder: "E.g., Improve 10k run time, increase strength, prepare for competition...",
                        value: "{goals}",
                        oninput: move |e| goals.set(e.value()),
                        disabled: loading(),
                    }
                }

                div { class: "form-group",
                    label { "CONSTRAINTS (ONE PER LINE, OPTIONAL)" }
                    textarea {
                        placeholder: "E.g., Limited to 4 sessions per week",
                        value: "{constraints}",
                        oninput: move |e| constraints.set(e.value()),
                        disabled: loading(),
                    }
                    p { class: "field-hint",
                        "List any time constraints, equipment limitations, or injuries"
                    }
                }

                button {
                    class: "primary",
                    onclick: handle_generate,
                    disabled: loading(),
                    if loading() { "GENERATING PLAN..." } else { "GENERATE TRAINING PLAN" }
                }
            }
        },
        Some(response) => {
            let mut days: Vec<(String, crate::models::WorkoutDay)> =
                response.schedule.clone().into_iter().collect();
            days.sort_by_key(|(day, _)| coach::weekday_rank(day));

            rsx! {
                div { class: "coach-panel",
                    div { class: "block-header",
                        h2 { "YOUR TRAINING PLAN" }
                        button { class: "btn-text", onclick: move |_| plan.set(None), "CREATE NEW PLAN" }
                    }

                    p { "{response.plan}" }

                    h3 { "WEEKLY SCHEDULE" }
                    div { class: "schedule-list",
                        for (day, workout) in days {
                            {
                                let badge_class = coach::intensity_class(&workout.intensity);
                                rsx! {
                                    div { class: "day-card", key: "{day}",
                                        div { class: "block-header",
                                            h4 { "{day}" }
                                            span { class: badge_class, "{workout.intensity} Intensity" }
                                        }
                                        div { class: "day-meta", "{workout.duration}" }
                                        div { class: "day-focus", "{workout.focus}" }
                                        ul {
                                            for exercise in workout.exercises {
                                                li { "{exercise}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if !response.guidelines.is_empty() {
                        div {
                            h3 { "IMPORTANT GUIDELINES" }
                            ul { class: "guideline-list",
                                for guideline in response.guidelines {
                                    li { "{guideline}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
