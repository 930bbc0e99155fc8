//! In-memory idempotency window for card submissions.
//!
//! DESIGN
//! ======
//! Keys map to either an in-flight marker or the card id the first attempt
//! produced. A fresh claim hands back a [`Reservation`]; completing it stores
//! the card id, dropping it without completing frees the key so a retry can
//! go through. Completed entries older than the window are pruned on every
//! claim; in-flight entries live exactly as long as their reservation.
//!
//! TRADE-OFFS
//! ==========
//! State is per process. A restart forgets every key, and several replicas
//! would each keep their own window.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::trello::CardId;

// =============================================================================
// CLAIM
// =============================================================================

/// Outcome of claiming an idempotency key.
#[derive(Debug)]
pub enum Claim {
    /// First sighting in the window; the caller owns the attempt.
    Fresh(Reservation),
    /// Another attempt with this key has not finished yet.
    InFlight,
    /// A previous attempt already produced this card.
    Completed(CardId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum EntryState {
    InFlight,
    Completed(CardId),
}

#[derive(Debug)]
struct Entry {
    state: EntryState,
    at: Instant,
}

// =============================================================================
// CACHE
// =============================================================================

#[derive(Clone)]
pub struct IdempotencyCache {
    inner: Arc<Mutex<HashMap<String, Entry>>>,
    window: Duration,
}

impl IdempotencyCache {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self { inner: Arc::new(Mutex::new(HashMap::new())), window }
    }

    /// Claim `key` for a new attempt.
    pub fn claim(&self, key: &str) -> Claim {
        self.claim_at(key, Instant::now())
    }

    fn claim_at(&self, key: &str, now: Instant) -> Claim {
        let mut entries = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        prune_window(&mut entries, now, self.window);

        match entries.get(key).map(|entry| &entry.state) {
            Some(EntryState::InFlight) => Claim::InFlight,
            Some(EntryState::Completed(id)) => Claim::Completed(id.clone()),
            None => {
                entries.insert(key.to_owned(), Entry { state: EntryState::InFlight, at: now });
                Claim::Fresh(Reservation { cache: self.clone(), key: Some(key.to_owned()) })
            }
        }
    }

    fn complete(&self, key: &str, id: CardId) {
        let mut entries = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), Entry { state: EntryState::Completed(id), at: Instant::now() });
    }

    fn release(&self, key: &str) {
        let mut entries = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if entries.get(key).is_some_and(|entry| entry.state == EntryState::InFlight) {
            entries.remove(key);
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

/// Expire completed entries only. An in-flight entry is removed by its
/// reservation, however long the board call takes.
fn prune_window(entries: &mut HashMap<String, Entry>, now: Instant, window: Duration) {
    entries.retain(|_, entry| {
        entry.state == EntryState::InFlight || now.saturating_duration_since(entry.at) < window
    });
}

// =============================================================================
// RESERVATION
// =============================================================================

/// Exclusive hold on a key while its attempt runs.
///
/// Released on drop unless [`Reservation::complete`] was called, so a
/// cancelled or failed attempt never leaves the key stuck in flight.
#[derive(Debug)]
pub struct Reservation {
    cache: IdempotencyCache,
    key: Option<String>,
}

impl Reservation {
    /// Record the card the attempt produced.
    pub fn complete(mut self, id: CardId) {
        if let Some(key) = self.key.take() {
            self.cache.complete(&key, id);
        }
    }
}

impl Drop for Reservation {
    fn drop(&mut self) {
        if let Some(key) = self.key.take() {
            self.cache.release(&key);
        }
    }
}

impl std::fmt::Debug for IdempotencyCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdempotencyCache").field("window", &self.window).finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "dedup_test.rs"]
mod tests;
