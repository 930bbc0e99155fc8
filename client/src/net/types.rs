//! Shared wire DTOs for the browser/proxy boundary.
//!
//! DESIGN
//! ======
//! The server links this crate with the `ssr` feature and deserializes the
//! same types, so the card request schema is defined exactly once.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Board list a submission lands in. One list per form variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetList {
    Requests,
    Problems,
    Suggestions,
}

impl TargetList {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Requests => "requests",
            Self::Problems => "problems",
            Self::Suggestions => "suggestions",
        }
    }
}

/// Card creation request sent from the browser to `POST /api/cards`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRequest {
    pub list: TargetList,
    pub title: String,
    pub description: String,
}

/// Successful card creation response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCreated {
    /// Board-assigned card identifier.
    pub id: String,
}

/// Error body returned by the proxy for any non-success status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Header carrying the per-attempt deduplication token.
pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

/// Fallback error text when a failure carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Erro desconhecido ao criar cartão no Trello";
