//! Browser-side create-card call against the server proxy.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning an error since submissions only happen
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into a user-facing `String`: the proxy's `message`
//! field when it sent one, the transport error text for network failures, and
//! a generic fallback otherwise. No retries.
//!
//! CANCELLATION
//! ============
//! The request is bound to an `AbortController` owned by the future. Dropping
//! the future before the response arrives aborts the underlying `fetch`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use uuid::Uuid;

use super::types::{CardCreated, CardRequest};
#[cfg(any(test, feature = "hydrate"))]
use super::types::{ErrorBody, GENERIC_FAILURE_MESSAGE};

/// Proxy endpoint for card creation.
pub const CARDS_ENDPOINT: &str = "/api/cards";

/// Extract the user-facing message from a non-success response body.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned())
}

#[cfg(feature = "hydrate")]
struct AbortOnDrop(Option<web_sys::AbortController>);

#[cfg(feature = "hydrate")]
impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if let Some(controller) = &self.0 {
            controller.abort();
        }
    }
}

/// Create one card through `POST /api/cards`.
///
/// `idempotency_key` identifies this submission attempt; the proxy replays
/// the first result for a repeated key instead of creating a second card.
///
/// # Errors
///
/// Returns the failure message when the request cannot be sent, the proxy
/// responds with a non-success status, or the response body is malformed.
pub async fn create_card(request: &CardRequest, idempotency_key: Uuid) -> Result<CardCreated, String> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::IDEMPOTENCY_HEADER;

        let controller = web_sys::AbortController::new().ok();
        let signal = controller.as_ref().map(web_sys::AbortController::signal);
        let _abort = AbortOnDrop(controller);

        let resp = gloo_net::http::Request::post(CARDS_ENDPOINT)
            .header(IDEMPOTENCY_HEADER, &idempotency_key.to_string())
            .abort_signal(signal.as_ref())
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(failure_message(&body));
        }
        resp.json::<CardCreated>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, idempotency_key);
        Err("not available on server".to_owned())
    }
}
