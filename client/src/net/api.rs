//! HTTP call to the remote chat endpoint.
//!
//! Client-side (hydrate): real POST via `gloo-net`.
//! Server-side (SSR): the widget never sends during rendering, so the call
//! reports an error.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `Err(String)` for the widget to log. Nothing here
//! retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatRequest, ChatResponseBody};

/// Endpoint URL baked in at build time. Unset means the widget cannot send.
pub const CHAT_ENDPOINT_URL: Option<&str> = option_env!("CHAT_ENDPOINT_URL");

fn resolve_endpoint(configured: Option<&str>) -> Result<&str, String> {
    match configured.map(str::trim) {
        Some(url) if !url.is_empty() => Ok(url),
        _ => Err("chat endpoint not configured (CHAT_ENDPOINT_URL)".to_owned()),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_request_failed_message(status: u16) -> String {
    format!("chat request failed: {status}")
}

/// POST a visitor message to the configured chat endpoint.
///
/// # Errors
///
/// Returns an error string if no endpoint is configured, the request cannot
/// be sent, the endpoint answers with a non-OK status, or the body does not
/// decode.
pub async fn send_chat(request: &ChatRequest) -> Result<ChatResponseBody, String> {
    let endpoint = resolve_endpoint(CHAT_ENDPOINT_URL)?;

    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(chat_request_failed_message(resp.status()));
        }
        resp.json::<ChatResponseBody>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, request);
        Err("not available on server".to_owned())
    }
}
