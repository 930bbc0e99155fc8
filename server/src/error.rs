//! HTTP-facing error type for the card endpoint.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use client::net::types::ErrorBody;

use crate::trello::TrelloError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body is missing something the board requires.
    #[error("{0}")]
    Validation(&'static str),

    /// An attempt with the same idempotency key is still running.
    #[error("Esta solicitação já está sendo enviada. Aguarde.")]
    InFlight,

    /// The board rejected the card or could not be reached.
    #[error(transparent)]
    Upstream(#[from] TrelloError),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InFlight => StatusCode::CONFLICT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Upstream(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody { message: Some(self.message()) })).into_response()
    }
}
