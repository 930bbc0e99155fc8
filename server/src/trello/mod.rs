//! Trello board adapter.
//!
//! DESIGN
//! ======
//! The board and its three lists are fixed. Handlers depend on the
//! [`CardBoard`] trait so tests can swap in an in-memory board; production
//! uses [`api::TrelloClient`].

pub mod api;
pub mod types;

use client::net::types::TargetList;

pub use types::{CardBoard, CardId, TrelloError};

/// Support board all cards land on.
pub const BOARD_ID: &str = "90pWzFcP";

/// Map a form's target list to its board list id.
#[must_use]
pub fn list_id(list: TargetList) -> &'static str {
    match list {
        TargetList::Requests => "684e203b3eb82ea24df04678",
        TargetList::Problems => "684e203b3eb82ea24df04679",
        TargetList::Suggestions => "684e203b3eb82ea24df0467a",
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
