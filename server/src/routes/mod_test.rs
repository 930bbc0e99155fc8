use std::sync::Arc;

use super::*;
use crate::state::test_helpers::{MockBoard, test_app_state};

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn api_routes_build_with_state() {
    let state = test_app_state(Arc::new(MockBoard::accepting("card-1")));
    let _router: Router = api_routes(state);
}
