use std::fmt::Display;

use dioxus::prelude::*;
use quiz_core::navigation::Screen;
use services::{AuthServiceError, QuizFlowError};
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// Saving or loading failed.
    Storage,
    /// The action does not apply to the current state.
    Rejected,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Storage => "Your progress could not be saved. Please try again.",
            ViewError::Rejected => "That action is not available right now.",
        }
    }

    #[must_use]
    pub fn from_quiz_flow(err: &QuizFlowError) -> Self {
        match err {
            QuizFlowError::Storage(_) | QuizFlowError::History(_) => ViewError::Storage,
            _ => ViewError::Rejected,
        }
    }

    #[must_use]
    pub fn from_auth(err: &AuthServiceError) -> Self {
        match err {
            AuthServiceError::Storage(_) => ViewError::Storage,
            _ => ViewError::Rejected,
        }
    }
}

/// Shared UI signals: the selected tab, a revision counter bumped after each
/// service mutation, and the last action error.
#[derive(Clone, Copy, PartialEq)]
pub struct UiState {
    pub screen: Signal<Screen>,
    pub revision: Signal<u64>,
    pub error: Signal<Option<ViewError>>,
}

impl UiState {
    /// Must be called inside a component scope.
    #[must_use]
    pub fn new(initial: Screen) -> Self {
        Self {
            screen: Signal::new(initial),
            revision: Signal::new(0),
            error: Signal::new(None),
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        *self.screen.read()
    }

    /// Subscribe the calling component to service changes.
    pub fn track(&self) -> u64 {
        *self.revision.read()
    }

    pub fn refresh(mut self) {
        self.error.set(None);
        *self.revision.write() += 1;
    }

    pub fn go(mut self, screen: Screen) {
        self.screen.set(screen);
        self.refresh();
    }

    /// Log `err` and surface it as `kind`, then re-render.
    pub fn fail(mut self, kind: ViewError, err: impl Display) {
        warn!(error = %err, "ui action failed");
        *self.revision.write() += 1;
        self.error.set(Some(kind));
    }
}

#[component]
pub fn ErrorBanner() -> Element {
    let ui = use_context::<UiState>();
    let error = *ui.error.read();
    rsx! {
        if let Some(err) = error {
            div { class: "error-banner", role: "alert", "{err.message()}" }
        }
    }
}
