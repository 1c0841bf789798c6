use std::sync::Arc;

use quiz_core::navigation::Screen;
use services::{AppServices, AuthService, HistoryService, ProfileService, QuizFlowService};

/// What the UI needs from the composition root.
pub trait UiApp: Send + Sync {
    fn auth(&self) -> Arc<AuthService>;
    fn history(&self) -> Arc<HistoryService>;
    fn profile(&self) -> Arc<ProfileService>;
    fn quiz_flow(&self) -> Arc<QuizFlowService>;
}

impl UiApp for AppServices {
    fn auth(&self) -> Arc<AuthService> {
        AppServices::auth(self)
    }

    fn history(&self) -> Arc<HistoryService> {
        AppServices::history(self)
    }

    fn profile(&self) -> Arc<ProfileService> {
        AppServices::profile(self)
    }

    fn quiz_flow(&self) -> Arc<QuizFlowService> {
        AppServices::quiz_flow(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    auth: Arc<AuthService>,
    history: Arc<HistoryService>,
    profile: Arc<ProfileService>,
    quiz_flow: Arc<QuizFlowService>,
    start_screen: Screen,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            auth: app.auth(),
            history: app.history(),
            profile: app.profile(),
            quiz_flow: app.quiz_flow(),
            start_screen: Screen::default(),
        }
    }

    /// Tab selected when the window opens.
    #[must_use]
    pub fn with_start_screen(mut self, screen: Screen) -> Self {
        self.start_screen = screen;
        self
    }

    #[must_use]
    pub fn start_screen(&self) -> Screen {
        self.start_screen
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn history(&self) -> Arc<HistoryService> {
        Arc::clone(&self.history)
    }

    #[must_use]
    pub fn profile(&self) -> Arc<ProfileService> {
        Arc::clone(&self.profile)
    }

    #[must_use]
    pub fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }
}

// Provided by the composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
