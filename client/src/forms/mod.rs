//! Submission form models: validation, card construction, outcome handling.
//!
//! DESIGN
//! ======
//! Each variant is a plain struct of string fields implementing
//! [`SupportForm`]. The trait carries the whole submission contract so the
//! page components only wire signals to it:
//!
//! 1. `card_request` validates required fields and builds the card. A
//!    validation error means no network call is made.
//! 2. `settle` applies the network outcome: success resets every field to its
//!    default, failure leaves the fields untouched.
//!
//! Lengths used for title truncation are counted in `char`s.

pub mod content_request;
pub mod problem_report;
pub mod suggestion;


use crate::net::types::{CardCreated, CardRequest, TargetList};
use crate::state::toast::Toast;

/// One `<option>` of a form select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Shared contract of the three submission forms.
pub trait SupportForm: Default + Clone {
    /// Board list the card is created in.
    const LIST: TargetList;
    /// Toast shown after the card was created.
    const SUCCESS_MESSAGE: &'static str;
    /// Prepended to the failure message in the error toast.
    const FAILURE_PREFIX: &'static str;

    /// Check required fields.
    ///
    /// # Errors
    ///
    /// Returns the form-specific validation message when a required field is
    /// blank.
    fn validate(&self) -> Result<(), &'static str>;

    /// Card name as it appears on the board.
    fn card_title(&self) -> String;

    /// Labeled multi-line card body. `submitted_at` is the pre-formatted
    /// local timestamp.
    fn card_description(&self, submitted_at: &str) -> String;

    /// Validate and build the card request for this submission.
    ///
    /// # Errors
    ///
    /// Returns the validation message; no request exists in that case.
    fn card_request(&self, submitted_at: &str) -> Result<CardRequest, &'static str> {
        self.validate()?;
        Ok(CardRequest {
            list: Self::LIST,
            title: self.card_title(),
            description: self.card_description(submitted_at),
        })
    }

    /// Apply the create-card outcome and return the toast to show.
    fn settle(&mut self, outcome: Result<&CardCreated, &str>) -> Toast {
        match outcome {
            Ok(_) => {
                *self = Self::default();
                Toast::success(Self::SUCCESS_MESSAGE)
            }
            Err(message) => Toast::error(format!("{}{message}", Self::FAILURE_PREFIX)),
        }
    }
}

/// Per-instance submission state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
}

impl SubmitPhase {
    /// Enter `Submitting`. Returns `false` when a submission is already in
    /// flight, in which case the caller must not start another one.
    pub fn begin(&mut self) -> bool {
        if *self == Self::Submitting {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    pub fn finish(&mut self) {
        *self = Self::Editing;
    }

    #[must_use]
    pub fn is_submitting(self) -> bool {
        self == Self::Submitting
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(crate) fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if is_blank(value) { placeholder } else { value }
}

/// Longest prefix of `value` holding at most `max` chars.
pub(crate) fn prefix_chars(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

/// Render `**Label:** value` lines in order.
pub(crate) fn labeled_block(lines: &[(&str, &str)]) -> String {
    lines
        .iter()
        .map(|(label, value)| format!("**{label}:** {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}
