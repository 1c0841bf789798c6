mod auth;
mod history;
mod home;
mod icons;
mod library;
mod quiz;
mod results;
mod settings;
mod state;

pub use auth::{LoginView, PinView, SignUpView};
pub use history::{AttemptList, HistoryView};
pub use home::HomeView;
pub use icons::{SubjectIcon, TabIcon};
pub use library::LibraryView;
pub use quiz::QuizView;
pub use results::ResultsView;
pub use settings::SettingsView;
pub use state::{ErrorBanner, UiState, ViewError};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
