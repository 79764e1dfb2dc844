use urlencoding::encode;
use wasm_bindgen::JsCast;

use crate::models::*;

const API_BASE: &str = "";

/// Failure taxonomy surfaced to views. Validation errors never reach this
/// layer; they are computed client-side before the request is issued.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 401. At login this means bad credentials; mid-session it means the
    /// cookie expired and the session must be torn down.
    Unauthorized,
    /// 409, e.g. username already taken at registration.
    Conflict(String),
    /// Any other non-2xx with the server's message.
    Server { status: u16, message: String },
    /// The fetch itself failed (network, CORS, serialization).
    Transport(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Invalid credentials"),
            ApiError::Conflict(message) => write!(f, "{}", message),
            ApiError::Server { message, .. } => write!(f, "{}", message),
            ApiError::Transport(message) => write!(f, "{}", message),
        }
    }
}

impl ApiError {
    fn transport(context: &str) -> ApiError {
        ApiError::Transport(context.to_string())
    }
}

fn build_query_params(params: &[(&str, Option<String>)]) -> String {
    let query_parts: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| format!("{}={}", encode(key), encode(v))))
        .collect();

    if query_parts.is_empty() {
        String::new()
    } else {
        format!("?{}", query_parts.join("&"))
    }
}

async fn send(method: &str, url: &str, body: Option<String>) -> Result<web_sys::Response, ApiError> {
    use web_sys::{RequestCredentials, RequestInit, RequestMode};

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    opts.set_credentials(RequestCredentials::Include);

    if let Some(b) = body {
        let body_js = wasm_bindgen::JsValue::from_str(&b);
        opts.set_body(&body_js);
        let headers =
            web_sys::Headers::new().map_err(|_| ApiError::transport("Failed to create headers"))?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|_| ApiError::transport("Failed to set header"))?;
        opts.set_headers(&headers);
    }

    let window = web_sys::window().ok_or_else(|| ApiError::transport("No window"))?;
    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|_| ApiError::transport("Failed to create request"))?;

    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| ApiError::transport("Network request failed"))?;

    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::transport("Invalid response"))?;

    if resp.ok() {
        return Ok(resp);
    }

    let status = resp.status();
    let message = read_error_message(&resp).await;
    match status {
        401 => Err(ApiError::Unauthorized),
        409 => Err(ApiError::Conflict(message)),
        _ => Err(ApiError::Server { status, message }),
    }
}

/// Error bodies are `{"message": "..."}` when the server produced them, raw
/// text otherwise.
async fn read_error_message(resp: &web_sys::Response) -> String {
    let text = match resp.text() {
        Ok(promise) => wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };
    if text.is_empty() {
        return "Request failed".to_string();
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }
    text
}

async fn request<T: serde::de::DeserializeOwned>(
    method: &str,
    url: &str,
    body: Option<String>,
) -> Result<T, ApiError> {
    let resp = send(method, url, body).await?;

    let json = wasm_bindgen_futures::JsFuture::from(
        resp.json()
            .map_err(|_| ApiError::transport("Failed to get json"))?,
    )
    .await
    .map_err(|_| ApiError::transport("Failed to parse json"))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Transport(e.to_string()))
}

async fn request_no_body(method: &str, url: &str) -> Result<(), ApiError> {
    send(method, url, None).await.map(|_| ())
}

fn to_body<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError::Transport(e.to_string()))
}

// Auth API

pub async fn login(payload: LoginPayload) -> Result<User, ApiError> {
    let body = to_body(&payload)?;
    request("POST", &format!("{}/api/login", API_BASE), Some(body)).await
}

pub async fn register(payload: RegisterPayload) -> Result<User, ApiError> {
    let body = to_body(&payload)?;
    request("POST", &format!("{}/api/register", API_BASE), Some(body)).await
}

/// Rehydrates the session from the cookie on app mount.
pub async fn current_user() -> Result<User, ApiError> {
    request("GET", &format!("{}/api/user", API_BASE), None).await
}

pub async fn logout() -> Result<(), ApiError> {
    request_no_body("POST", &format!("{}/api/logout", API_BASE)).await
}

// Record APIs, all scoped by userId

fn user_query(user_id: i64) -> String {
    build_query_params(&[("userId", Some(user_id.to_string()))])
}

pub async fn metrics(user_id: i64) -> Result<Vec<PerformanceMetric>, ApiError> {
    let url = format!("{}/api/metrics{}", API_BASE, user_query(user_id));
    request("GET", &url, None).await
}

pub async fn create_metric(payload: CreateMetricPayload) -> Result<PerformanceMetric, ApiError> {
    let body = to_body(&payload)?;
    request("POST", &format!("{}/api/metrics", API_BASE), Some(body)).await
}

pub async fn nutrition(user_id: i64) -> Result<Vec<NutritionLog>, ApiError> {
    let url = format!("{}/api/nutrition{}", API_BASE, user_query(user_id));
    request("GET", &url, None).await
}

pub async fn create_nutrition(payload: CreateNutritionPayload) -> Result<NutritionLog, ApiError> {
    let body = to_body(&payload)?;
    request("POST", &format!("{}/api/nutrition", API_BASE), Some(body)).await
}

pub async fn analyze_nutrition(food_items: String) -> Result<NutritionFacts, ApiError> {
    let body = to_body(&AnalyzePayload { food_items })?;
    request("POST", &format!("{}/api/nutrition/analyze", API_BASE), Some(body)).await
}

pub async fn injuries(user_id: i64) -> Result<Vec<Injury>, ApiError> {
    let url = format!("{}/api/injuries{}", API_BASE, user_query(user_id));
    request("GET", &url, None).await
}

pub async fn create_injury(payload: CreateInjuryPayload) -> Result<Injury, ApiError> {
    let body = to_body(&payload)?;
    request("POST", &format!("{}/api/injuries", API_BASE), Some(body)).await
}

pub async fn finances(user_id: i64) -> Result<Vec<Finance>, ApiError> {
    let url = format!("{}/api/finances{}", API_BASE, user_query(user_id));
    request("GET", &url, None).await
}

pub async fn create_finance(payload: CreateFinancePayload) -> Result<Finance, ApiError> {
    let body = to_body(&payload)?;
    request("POST", &format!("{}/api/finances", API_BASE), Some(body)).await
}

// AI coach API; the client only carries questions and context strings.

pub async fn coach_advice(payload: AdvicePayload) -> Result<AdviceResponse, ApiError> {
    let body = to_body(&payload)?;
    request("POST", &format!("{}/api/ai-coach/advice", API_BASE), Some(body)).await
}

pub async fn training_plan(payload: TrainingPlanPayload) -> Result<TrainingPlanResponse, ApiError> {
    let body = to_body(&payload)?;
    request(
        "POST",
        &format!("{}/api/ai-coach/training-plan", API_BASE),
        Some(body),
    )
    .await
}
