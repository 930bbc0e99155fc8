//! Networking modules for the card proxy.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the browser-side create-card call and `types` defines the
//! wire schema shared with the server.

pub mod api;
pub mod types;
