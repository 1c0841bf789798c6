mod attempt;
mod auth;
mod catalog;
mod ids;
mod profile;
mod snapshot;

pub use ids::{ParseIdError, QuizId, SubjectId};

pub use attempt::QuizAttempt;
pub use auth::{
    AuthAction, AuthError, AuthGate, AuthScreen, AuthState, AuthToken, DEMO_LOGIN_EMAIL,
    DEMO_SIGNUP_EMAIL,
};
pub use catalog::{Answer, Catalog, CatalogError, Question, Quiz, Subject};
pub use profile::{UserProfile, UserProfileDraft};
pub use snapshot::SavedQuizState;
