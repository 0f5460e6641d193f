//! Thin fetch client for the JARVIS REST backend.
//!
//! Every call resolves or fails; callers decide what to show. The
//! pull-to-refresh core relies only on that settlement guarantee.

use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::model::{
    ActionResponse, AiAnalysisResponse, AskRequest, AskResponse, CreateUserRequest, Domain, User,
    UserListResponse,
};

pub const API_BASE: &str = "/api";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("bad response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Network(format!("{value:?}"))
    }
}

async fn send(method: &str, path: &str, body: Option<String>) -> Result<String, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(payload) = &body {
        opts.set_body(&JsValue::from_str(payload));
    }
    let url = format!("{API_BASE}{path}");
    let request = Request::new_with_str_and_init(&url, &opts)?;
    if body.is_some() {
        request.headers().set("Content-Type", "application/json")?;
    }
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch returned a non-Response value".into()))?;
    let text = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .unwrap_or_default();
    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
            body: text,
        });
    }
    Ok(text)
}

async fn fetch_json<T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: Option<String>,
) -> Result<T, ApiError> {
    let text = send(method, path, body).await?;
    Ok(serde_json::from_str(&text)?)
}

pub async fn get_domains() -> Result<Vec<Domain>, ApiError> {
    fetch_json("GET", "/domains", None).await
}

pub async fn get_users(domain: Option<&str>) -> Result<UserListResponse, ApiError> {
    let path = match domain {
        Some(d) if !d.is_empty() => {
            format!("/users?domain={}", js_sys::encode_uri_component(d))
        }
        _ => "/users".to_string(),
    };
    fetch_json("GET", &path, None).await
}

pub async fn create_user(request: &CreateUserRequest) -> Result<User, ApiError> {
    let body = serde_json::to_string(request)?;
    fetch_json("POST", "/users", Some(body)).await
}

pub async fn disable_user(user_id: &str) -> Result<ActionResponse, ApiError> {
    let path = format!("/users/{}/disable", js_sys::encode_uri_component(user_id));
    fetch_json("POST", &path, None).await
}

pub async fn delete_user(user_id: &str) -> Result<ActionResponse, ApiError> {
    let path = format!("/users/{}", js_sys::encode_uri_component(user_id));
    fetch_json("DELETE", &path, None).await
}

pub async fn analyze_users() -> Result<AiAnalysisResponse, ApiError> {
    fetch_json("POST", "/analyze-users", None).await
}

pub async fn ask_jarvis(
    question: &str,
    context: Option<serde_json::Value>,
) -> Result<AskResponse, ApiError> {
    let body = serde_json::to_string(&AskRequest {
        question: question.to_string(),
        context,
    })?;
    fetch_json("POST", "/ask", Some(body)).await
}
