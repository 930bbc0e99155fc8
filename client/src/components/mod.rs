//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal chrome and form controls while reading/writing
//! shared state from Leptos context providers.

pub mod form_card;
pub mod header;
pub mod toast;
