//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Plain structs wrapped in `RwSignal` contexts by `app::App`. Keeping them
//! free of Leptos types lets the transition rules be tested directly.

pub mod toast;
pub mod view;
