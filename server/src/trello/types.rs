//! Board errors and the card-creation seam.

use client::net::types::{GENERIC_FAILURE_MESSAGE, TargetList};

/// Board-assigned card identifier.
pub type CardId = String;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by board client operations.
#[derive(Debug, thiserror::Error)]
pub enum TrelloError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request never produced a response.
    #[error("board request failed: {0}")]
    Request(String),

    /// The board answered with a non-success status.
    #[error("board rejected card: status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// The success body could not be deserialized.
    #[error("board response parse failed: {0}")]
    Parse(String),
}

impl TrelloError {
    /// Text shown to the submitter. Only a board-supplied message is passed
    /// through; everything else collapses to the generic failure text.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_owned(),
        }
    }
}

// =============================================================================
// TRAIT
// =============================================================================

/// Anything that can file a card on the support board.
#[async_trait::async_trait]
pub trait CardBoard: Send + Sync {
    /// Create one card in `list`.
    ///
    /// # Errors
    ///
    /// Returns a [`TrelloError`] if the request fails, the board rejects it,
    /// or the response is malformed.
    async fn create_card(&self, list: TargetList, name: &str, desc: &str) -> Result<CardId, TrelloError>;
}
