//! HTTP Core
//!
//! Request plans are built by pure functions and executed by one
//! fetch-backed adapter, so the wire contract (method, URL, headers,
//! body) is testable without a browser. Every mutating request must
//! carry the CSRF token; a missing token aborts client-side.

use std::collections::HashMap;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;

pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Failure taxonomy. Validation failures are client-detectable and
/// recoverable; transport and application failures are not.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// fetch rejected: offline, DNS, CORS
    #[error("network error: {0}")]
    Network(String),
    /// non-2xx status; `field_errors` carries server validation marks
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        field_errors: HashMap<String, Vec<String>>,
    },
    /// 2xx body carrying an error-shaped payload
    #[error("{0}")]
    Application(String),
    #[error("malformed response: {0}")]
    Decode(String),
    /// client-side validation, nothing was sent
    #[error("{0}")]
    Validation(String),
    #[error("CSRF token not found. Please refresh the page.")]
    MissingCsrf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// One planned request: everything needed to execute it later
#[derive(Debug, Clone, PartialEq)]
pub struct RequestPlan {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

impl RequestPlan {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

pub fn collection_url(resource: &str) -> String {
    format!("/admin/{resource}")
}

pub fn item_url(resource: &str, id: u32) -> String {
    format!("/admin/{resource}/{id}")
}

pub fn get_plan(url: String) -> RequestPlan {
    RequestPlan {
        method: Method::Get,
        url,
        headers: Vec::new(),
        body: None,
    }
}

/// Plan a mutating request. The CSRF token is mandatory here: the old
/// report scripts that skipped it were the inconsistency, not the rule.
pub fn mutating_plan(
    method: Method,
    url: String,
    body: Option<String>,
    csrf: Option<String>,
) -> Result<RequestPlan, ApiError> {
    let token = csrf.ok_or(ApiError::MissingCsrf)?;
    let mut headers = vec![(CSRF_HEADER, token)];
    if body.is_some() {
        headers.push(("Content-Type", "application/json".to_string()));
    }
    Ok(RequestPlan {
        method,
        url,
        headers,
        body,
    })
}

/// POST to the collection without an id, PUT to the item with one
pub fn save_plan<T: Serialize>(
    resource: &str,
    id: Option<u32>,
    payload: &T,
    csrf: Option<String>,
) -> Result<RequestPlan, ApiError> {
    let body = serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
    match id {
        None => mutating_plan(Method::Post, collection_url(resource), Some(body), csrf),
        Some(id) => mutating_plan(Method::Put, item_url(resource, id), Some(body), csrf),
    }
}

pub fn delete_plan(resource: &str, id: u32, csrf: Option<String>) -> Result<RequestPlan, ApiError> {
    mutating_plan(Method::Delete, item_url(resource, id), None, csrf)
}

/// Read the CSRF token from the host page: the meta tag first, the
/// hidden form input as fallback
pub fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    if let Ok(Some(meta)) = document.query_selector("meta[name=\"csrf-token\"]") {
        if let Some(meta) = meta.dyn_ref::<web_sys::HtmlMetaElement>() {
            let content = meta.content();
            if !content.is_empty() {
                return Some(content);
            }
        }
    }
    if let Ok(Some(input)) = document.query_selector("input[name=\"csrf_token\"]") {
        if let Some(input) = input.dyn_ref::<web_sys::HtmlInputElement>() {
            let value = input.value();
            if !value.is_empty() {
                return Some(value);
            }
        }
    }
    None
}

/// Execute a plan, returning status and body text
pub async fn execute(plan: RequestPlan) -> Result<(u16, String), ApiError> {
    let mut builder = match plan.method {
        Method::Get => Request::get(&plan.url),
        Method::Post => Request::post(&plan.url),
        Method::Put => Request::put(&plan.url),
        Method::Delete => Request::delete(&plan.url),
    };
    for (name, value) in &plan.headers {
        builder = builder.header(name, value);
    }
    let request = match plan.body {
        Some(body) => builder
            .body(body)
            .map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?,
    };
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok((status, body))
}

/// Shape of an error body: `{message, errors?}`
#[derive(Debug, Default, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: HashMap<String, Vec<String>>,
}

fn http_error(status: u16, body: &str) -> ApiError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    ApiError::Http {
        status,
        message: parsed
            .message
            .or(parsed.error)
            .unwrap_or_else(|| format!("Request failed with status {status}")),
        field_errors: parsed.errors,
    }
}

/// Execute a plan and decode a JSON body
pub async fn fetch_json<T: DeserializeOwned>(plan: RequestPlan) -> Result<T, ApiError> {
    let (status, body) = execute(plan).await?;
    if !(200..300).contains(&status) {
        return Err(http_error(status, &body));
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Execute a plan where only success/failure matters
pub async fn send(plan: RequestPlan) -> Result<(), ApiError> {
    let (status, body) = execute(plan).await?;
    if !(200..300).contains(&status) {
        return Err(http_error(status, &body));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RolePayload;

    fn token() -> Option<String> {
        Some("tok-123".to_string())
    }

    #[test]
    fn save_without_id_posts_to_the_collection() {
        let payload = RolePayload {
            name: "auditor".into(),
            ..Default::default()
        };
        let plan = save_plan("roles", None, &payload, token()).unwrap();
        assert_eq!(plan.method, Method::Post);
        assert_eq!(plan.url, "/admin/roles");
        assert_eq!(plan.header(CSRF_HEADER), Some("tok-123"));
        assert_eq!(plan.header("Content-Type"), Some("application/json"));
        assert!(plan.body.as_deref().unwrap_or("").contains("auditor"));
    }

    #[test]
    fn save_with_id_puts_to_the_item() {
        let payload = RolePayload::default();
        let plan = save_plan("roles", Some(17), &payload, token()).unwrap();
        assert_eq!(plan.method, Method::Put);
        assert_eq!(plan.url, "/admin/roles/17");
        assert_eq!(plan.header(CSRF_HEADER), Some("tok-123"));
    }

    #[test]
    fn mutating_without_a_token_is_a_hard_error() {
        let payload = RolePayload::default();
        let err = save_plan("roles", None, &payload, None).unwrap_err();
        assert!(matches!(err, ApiError::MissingCsrf));
        let err = delete_plan("teams", 3, None).unwrap_err();
        assert!(matches!(err, ApiError::MissingCsrf));
    }

    #[test]
    fn delete_plan_targets_exactly_one_item() {
        let plan = delete_plan("users", 42, token()).unwrap();
        assert_eq!(plan.method, Method::Delete);
        assert_eq!(plan.url, "/admin/users/42");
        assert!(plan.body.is_none());
    }

    #[test]
    fn report_gets_carry_no_csrf_header() {
        let plan = get_plan("/admin/reports/workload/data?team_id=7".to_string());
        assert_eq!(plan.method, Method::Get);
        assert!(plan.header(CSRF_HEADER).is_none());
    }

    #[test]
    fn error_bodies_surface_message_and_field_errors() {
        let body = r#"{"message": "Validation failed", "errors": {"name": ["required"]}}"#;
        match http_error(400, body) {
            ApiError::Http {
                status,
                message,
                field_errors,
            } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Validation failed");
                assert_eq!(field_errors["name"], vec!["required"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // unparseable body still produces a usable message
        match http_error(502, "<html>bad gateway</html>") {
            ApiError::Http { message, .. } => assert!(message.contains("502")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
