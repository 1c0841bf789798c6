#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth_service;
pub mod error;
pub mod history_service;
mod persisted;
pub mod profile_service;
pub mod sessions;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use error::{
    AppServicesError, AuthServiceError, HistoryError, ProfileError, QuizFlowError,
};
pub use history_service::{HistoryService, HistoryStats};
pub use profile_service::ProfileService;
pub use sessions::{ActiveQuizView, QuizFlowService, QuizResults, StepOutcome};
