//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the board client behind a trait object and the idempotency window.

use std::sync::Arc;
use std::time::Duration;

use crate::dedup::IdempotencyCache;
use crate::trello::CardBoard;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub board: Arc<dyn CardBoard>,
    pub idempotency: IdempotencyCache,
}

impl AppState {
    #[must_use]
    pub fn new(board: Arc<dyn CardBoard>, idempotency_window: Duration) -> Self {
        Self { board, idempotency: IdempotencyCache::new(idempotency_window) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;
