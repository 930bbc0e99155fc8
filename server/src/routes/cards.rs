//! Card creation proxy route.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use client::net::types::{CardCreated, CardRequest, IDEMPOTENCY_HEADER};

use crate::dedup::Claim;
use crate::error::ApiError;
use crate::state::AppState;

/// Longest idempotency key kept in the window.
const MAX_IDEMPOTENCY_KEY_LEN: usize = 128;

/// `POST /api/cards`: file one support card on the board.
///
/// Answers `201` for a new card and `200` when a completed idempotency key
/// is replayed.
///
/// # Errors
///
/// `400` for a malformed or incomplete request, `409` while the same key is
/// still in flight, `502` when the board call fails.
pub async fn create_card(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<CardRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CardCreated>), ApiError> {
    let Json(request) = body.map_err(|e| {
        tracing::debug!(error = %e, "rejected card request body");
        ApiError::Validation("Requisição inválida.")
    })?;
    validate_request(&request)?;

    let reservation = match idempotency_key(&headers)? {
        Some(key) => match state.idempotency.claim(key) {
            Claim::Fresh(reservation) => Some(reservation),
            Claim::InFlight => {
                tracing::info!(list = request.list.as_str(), "duplicate submission still in flight");
                return Err(ApiError::InFlight);
            }
            Claim::Completed(id) => {
                tracing::info!(list = request.list.as_str(), card_id = %id, "replayed completed submission");
                return Ok((StatusCode::OK, Json(CardCreated { id })));
            }
        },
        None => None,
    };

    match state
        .board
        .create_card(request.list, &request.title, &request.description)
        .await
    {
        Ok(id) => {
            tracing::info!(list = request.list.as_str(), card_id = %id, "card created");
            if let Some(reservation) = reservation {
                reservation.complete(id.clone());
            }
            Ok((StatusCode::CREATED, Json(CardCreated { id })))
        }
        Err(e) => {
            tracing::warn!(list = request.list.as_str(), error = %e, "card creation failed");
            Err(ApiError::Upstream(e))
        }
    }
}

fn validate_request(request: &CardRequest) -> Result<(), ApiError> {
    if request.title.trim().is_empty() || request.description.trim().is_empty() {
        return Err(ApiError::Validation("Título e descrição são obrigatórios."));
    }
    Ok(())
}

/// Read the optional idempotency key. A blank header counts as absent.
fn idempotency_key(headers: &HeaderMap) -> Result<Option<&str>, ApiError> {
    let Some(value) = headers.get(IDEMPOTENCY_HEADER) else {
        return Ok(None);
    };
    let key = value
        .to_str()
        .map_err(|_| ApiError::Validation("Idempotency-Key inválida."))?
        .trim();
    if key.is_empty() {
        return Ok(None);
    }
    if key.len() > MAX_IDEMPOTENCY_KEY_LEN {
        return Err(ApiError::Validation("Idempotency-Key inválida."));
    }
    Ok(Some(key))
}

#[cfg(test)]
#[path = "cards_test.rs"]
mod tests;
