//! Client Error Telemetry
//!
//! Last-resort net for uncaught errors: log, show a generic notification,
//! and best-effort POST the details to the server. The POST is the only
//! retried operation in the client; failures of the final attempt are
//! swallowed.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use super::http::{self, ApiError, Method};

const LOG_ERROR_URL: &str = "/api/log-error";
const RETRY_ATTEMPTS: u32 = 3;
const RETRY_DELAY_MS: u32 = 1_000;

#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    pub url: String,
    pub line: u32,
    pub column: u32,
}

/// POST with fixed-delay retry; gives up silently after the last attempt
pub async fn post_error_report(report: ErrorReport) {
    for attempt in 1..=RETRY_ATTEMPTS {
        match try_post(&report).await {
            Ok(()) => return,
            Err(err) => {
                leptos::logging::warn!("Error logging attempt {attempt} failed: {err}");
                if attempt < RETRY_ATTEMPTS {
                    TimeoutFuture::new(RETRY_DELAY_MS).await;
                }
            }
        }
    }
}

async fn try_post(report: &ErrorReport) -> Result<(), ApiError> {
    let body = serde_json::to_string(report).map_err(|e| ApiError::Decode(e.to_string()))?;
    let plan = http::mutating_plan(
        Method::Post,
        LOG_ERROR_URL.to_string(),
        Some(body),
        http::csrf_token(),
    )?;
    http::send(plan).await
}

/// Install window-level `error` and `unhandledrejection` listeners.
/// `notify` surfaces the generic user-facing message.
pub fn install_global_handlers(notify: impl Fn(String) + Clone + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let on_error = {
        let notify = notify.clone();
        Closure::<dyn FnMut(web_sys::ErrorEvent)>::new(move |event: web_sys::ErrorEvent| {
            leptos::logging::error!(
                "Global error: {} ({}:{}:{})",
                event.message(),
                event.filename(),
                event.lineno(),
                event.colno()
            );
            notify("An error occurred. Please try again or contact support.".to_string());
            let report = ErrorReport {
                message: event.message(),
                stack: None,
                url: event.filename(),
                line: event.lineno(),
                column: event.colno(),
            };
            spawn_local(post_error_report(report));
        })
    };
    let _ = window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
    on_error.forget();

    let on_rejection = Closure::<dyn FnMut(web_sys::PromiseRejectionEvent)>::new(
        move |event: web_sys::PromiseRejectionEvent| {
            let reason = event.reason();
            let message = reason
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
                .or_else(|| reason.as_string())
                .unwrap_or_else(|| "Unhandled promise rejection".to_string());
            let stack = js_sys::Reflect::get(&reason, &JsValue::from_str("stack"))
                .ok()
                .and_then(|v| v.as_string());
            leptos::logging::error!("Unhandled promise rejection: {message}");
            notify("An async operation failed. Please try again.".to_string());
            let url = web_sys::window()
                .and_then(|w| w.location().href().ok())
                .unwrap_or_default();
            spawn_local(post_error_report(ErrorReport {
                message,
                stack,
                url,
                line: 0,
                column: 0,
            }));
        },
    );
    let _ = window
        .add_event_listener_with_callback("unhandledrejection", on_rejection.as_ref().unchecked_ref());
    on_rejection.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serialization_omits_absent_stack() {
        let report = ErrorReport {
            message: "boom".into(),
            stack: None,
            url: "/admin/reports".into(),
            line: 10,
            column: 4,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("stack").is_none());
        assert_eq!(json["message"], "boom");
        assert_eq!(json["line"], 10);
    }
}
