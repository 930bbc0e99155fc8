//! Single-slot toast notification state.
//!
//! DESIGN
//! ======
//! Every `show`/`hide` bumps a generation counter. An auto-dismiss timer
//! captures the generation returned by `show` and calls `expire` with it when
//! it fires; a stale generation is a no-op, so a superseded timer never hides
//! the newer toast.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

/// How long a toast stays up before it dismisses itself.
pub const TOAST_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// BEM modifier class for the toast container.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "toast toast--info",
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✔",
            Self::Info | Self::Error => "⚠",
        }
    }
}

/// A message ready to be shown, produced by form logic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Success }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Error }
    }
}

/// Toast overlay state, provided as an `RwSignal` context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub message: String,
    pub kind: ToastKind,
    pub visible: bool,
    generation: u64,
}

impl ToastState {
    /// Replace whatever is showing and return the generation the caller's
    /// dismiss timer must present to `expire`.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.generation += 1;
        self.message = message.into();
        self.kind = kind;
        self.visible = true;
        self.generation
    }

    /// Hide immediately. Pending timers become stale.
    pub fn hide(&mut self) {
        self.generation += 1;
        self.visible = false;
    }

    /// Timer callback. Hides only if no `show`/`hide` happened since the
    /// timer was armed; returns whether it did.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.visible && generation == self.generation {
            self.visible = false;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
