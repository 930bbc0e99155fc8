use std::sync::Arc;

use axum::http::HeaderValue;
use axum::response::IntoResponse;
use client::net::types::{ErrorBody, GENERIC_FAILURE_MESSAGE, TargetList};

use super::*;
use crate::state::test_helpers::{FiledCard, MockBoard, test_app_state};

fn request(list: TargetList, title: &str, description: &str) -> CardRequest {
    CardRequest { list, title: title.into(), description: description.into() }
}

fn headers_with_key(key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(IDEMPOTENCY_HEADER, HeaderValue::from_str(key).unwrap());
    headers
}

async fn error_body(err: ApiError) -> (StatusCode, ErrorBody) {
    let response = err.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn creates_card_and_returns_201() {
    let board = Arc::new(MockBoard::accepting("card-1"));
    let state = test_app_state(board.clone());

    let (status, Json(created)) = create_card(
        State(state),
        HeaderMap::new(),
        Ok(Json(request(TargetList::Requests, "[Filme] Matrix", "**Tipo:** Filme"))),
    )
    .await
    .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.id, "card-1");
    assert_eq!(
        board.filed(),
        vec![FiledCard {
            list: TargetList::Requests,
            name: "[Filme] Matrix".into(),
            desc: "**Tipo:** Filme".into()
        }]
    );
}

#[tokio::test]
async fn blank_title_is_rejected_without_board_call() {
    let board = Arc::new(MockBoard::accepting("card-1"));
    let state = test_app_state(board.clone());

    let err = create_card(State(state), HeaderMap::new(), Ok(Json(request(TargetList::Problems, "  ", "desc"))))
        .await
        .unwrap_err();

    assert_eq!(board.calls(), 0);
    let (status, body) = error_body(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.message.is_some());
}

#[tokio::test]
async fn empty_description_is_rejected() {
    let board = Arc::new(MockBoard::accepting("card-1"));
    let state = test_app_state(board.clone());

    let err = create_card(State(state), HeaderMap::new(), Ok(Json(request(TargetList::Suggestions, "t", ""))))
        .await
        .unwrap_err();

    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(board.calls(), 0);
}

#[tokio::test]
async fn board_rejection_maps_to_502_with_board_message() {
    let board = Arc::new(MockBoard::rejecting(401, Some("Unauthorized")));
    let state = test_app_state(board);

    let err = create_card(State(state), HeaderMap::new(), Ok(Json(request(TargetList::Requests, "t", "d"))))
        .await
        .unwrap_err();

    let (status, body) = error_body(err).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body.message.as_deref(), Some("Unauthorized"));
}

#[tokio::test]
async fn board_rejection_without_message_uses_generic_text() {
    let board = Arc::new(MockBoard::rejecting(500, None));
    let state = test_app_state(board);

    let err = create_card(State(state), HeaderMap::new(), Ok(Json(request(TargetList::Requests, "t", "d"))))
        .await
        .unwrap_err();

    let (_, body) = error_body(err).await;
    assert_eq!(body.message.as_deref(), Some(GENERIC_FAILURE_MESSAGE));
}

#[tokio::test]
async fn repeated_key_replays_first_card_without_second_call() {
    let board = Arc::new(MockBoard::accepting("card-1"));
    let state = test_app_state(board.clone());
    let key = "2f1c1b7e-8d0a-4a57-9a4f-3f0f2f8b9c11";

    let (first, Json(created)) = create_card(
        State(state.clone()),
        headers_with_key(key),
        Ok(Json(request(TargetList::Requests, "t", "d"))),
    )
    .await
    .unwrap();
    assert_eq!(first, StatusCode::CREATED);

    board.accept_next("card-2");
    let (second, Json(replayed)) = create_card(
        State(state),
        headers_with_key(key),
        Ok(Json(request(TargetList::Requests, "t", "d"))),
    )
    .await
    .unwrap();

    assert_eq!(second, StatusCode::OK);
    assert_eq!(replayed.id, created.id);
    assert_eq!(board.calls(), 1);
}

#[tokio::test]
async fn in_flight_key_gets_409() {
    let board = Arc::new(MockBoard::accepting("card-1"));
    let state = test_app_state(board.clone());
    let key = "in-flight-key";

    let held = state.idempotency.claim(key);
    assert!(matches!(held, Claim::Fresh(_)));

    let err = create_card(State(state), headers_with_key(key), Ok(Json(request(TargetList::Requests, "t", "d"))))
        .await
        .unwrap_err();

    assert_eq!(board.calls(), 0);
    let (status, body) = error_body(err).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body.message.as_deref(), Some("Esta solicitação já está sendo enviada. Aguarde."));
    drop(held);
}

#[tokio::test]
async fn failed_attempt_releases_key_for_retry() {
    let board = Arc::new(MockBoard::rejecting(503, None));
    let state = test_app_state(board.clone());
    let key = "retry-key";

    let _ = create_card(
        State(state.clone()),
        headers_with_key(key),
        Ok(Json(request(TargetList::Problems, "t", "d"))),
    )
    .await
    .unwrap_err();

    board.accept_next("card-9");
    let (status, Json(created)) = create_card(
        State(state),
        headers_with_key(key),
        Ok(Json(request(TargetList::Problems, "t", "d"))),
    )
    .await
    .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.id, "card-9");
    assert_eq!(board.calls(), 2);
}

#[test]
fn idempotency_key_blank_is_absent() {
    assert!(idempotency_key(&HeaderMap::new()).unwrap().is_none());
    assert!(idempotency_key(&headers_with_key("   ")).unwrap().is_none());
    assert_eq!(idempotency_key(&headers_with_key(" abc ")).unwrap(), Some("abc"));
}

#[test]
fn idempotency_key_too_long_is_rejected() {
    let long = "k".repeat(MAX_IDEMPOTENCY_KEY_LEN + 1);
    let err = idempotency_key(&headers_with_key(&long)).unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}
