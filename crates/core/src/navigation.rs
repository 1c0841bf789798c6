use std::fmt;

use crate::model::{AuthScreen, AuthState};

/// Top-level screens reachable from the bottom navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Home,
    Library,
    Settings,
    History,
}

impl Screen {
    /// Screens shown as tabs in the navigation bar, in display order.
    pub const TABS: [Screen; 3] = [Screen::Home, Screen::Library, Screen::Settings];

    /// Resolve a screen by name, case-insensitively. Unknown names map to `Home`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "library" => Screen::Library,
            "settings" => Screen::Settings,
            "history" => Screen::History,
            _ => Screen::Home,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Library => "Library",
            Screen::Settings => "Settings",
            Screen::History => "History",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The view the shell should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppView {
    Login,
    SignUp,
    Pin,
    Results,
    Quiz,
    Screen(Screen),
}

/// Everything the router looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub auth: AuthState,
    pub auth_screen: AuthScreen,
    pub has_active_quiz: bool,
    pub has_results: bool,
    pub screen: Screen,
}

impl NavState {
    /// Pick the view. Results win over an active quiz, which wins over the
    /// selected screen; nothing past the gate is visible unless logged in.
    #[must_use]
    pub fn resolve(&self) -> AppView {
        match self.auth {
            AuthState::LoggedOut => match self.auth_screen {
                AuthScreen::Login => AppView::Login,
                AuthScreen::SignUp => AppView::SignUp,
            },
            AuthState::Locked => AppView::Pin,
            AuthState::LoggedIn if self.has_results => AppView::Results,
            AuthState::LoggedIn if self.has_active_quiz => AppView::Quiz,
            AuthState::LoggedIn => AppView::Screen(self.screen),
        }
    }

    #[must_use]
    pub fn shows_nav_bar(&self) -> bool {
        !self.has_active_quiz && !self.has_results && self.screen != Screen::History
    }
}
