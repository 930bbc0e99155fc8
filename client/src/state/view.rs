#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// Screens the portal can display. Exactly one is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewId {
    #[default]
    Home,
    ContentRequest,
    ProblemReport,
    Suggestions,
}

impl ViewId {
    /// Navigation order used by the header.
    pub const ALL: [Self; 4] = [Self::Home, Self::ContentRequest, Self::ProblemReport, Self::Suggestions];

    /// Stable marker rendered as `data-view` on the main element.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::ContentRequest => "content-request",
            Self::ProblemReport => "problem-report",
            Self::Suggestions => "suggestions",
        }
    }

    /// Header navigation label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Início",
            Self::ContentRequest => "Solicitar Conteúdo",
            Self::ProblemReport => "Relatar Problema",
            Self::Suggestions => "Sugestões",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Home => "★",
            Self::ContentRequest => "🎬",
            Self::ProblemReport => "🐞",
            Self::Suggestions => "💡",
        }
    }
}

/// Shell navigation state: the active view and the narrow-layout dropdown.
///
/// There is no history. Switching views never asks for confirmation and any
/// in-progress form input is discarded with the unmounted view.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub current: ViewId,
    pub menu_open: bool,
}

impl ViewState {
    pub fn set_view(&mut self, id: ViewId) {
        self.current = id;
    }

    /// Dropdown selection: switch and close the menu.
    pub fn choose_from_menu(&mut self, id: ViewId) {
        self.current = id;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Form back button.
    pub fn back(&mut self) {
        self.current = ViewId::Home;
    }
}
