//! Page modules for the portal screens.
//!
//! ARCHITECTURE
//! ============
//! `portal` is the only route and switches between the home screen and the
//! three form screens. Each form page owns its form signal and delegates the
//! submission cycle to `form_submit`.

pub mod content_request;
pub(crate) mod form_submit;
pub mod home;
pub mod portal;
pub mod problem_report;
pub mod suggestions;
