//! The durable key schema.

use serde::{Deserialize, Serialize};

use quiz_core::model::{AuthToken, QuizAttempt, SavedQuizState, UserProfile};

use crate::codec::Record;

pub const AUTH_TOKEN_KEY: &str = "userToken";
pub const SAVED_PROGRESS_KEY: &str = "savedQuizProgress";
pub const QUIZ_HISTORY_KEY: &str = "quizHistory";
pub const USER_PROFILE_KEY: &str = "userProfile";

/// Every key the app writes, for bulk reset.
pub const ALL_KEYS: [&str; 4] = [
    AUTH_TOKEN_KEY,
    SAVED_PROGRESS_KEY,
    QUIZ_HISTORY_KEY,
    USER_PROFILE_KEY,
];

/// Completed attempts, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizHistory(pub Vec<QuizAttempt>);

impl Record for AuthToken {
    const KEY: &'static str = AUTH_TOKEN_KEY;
    const VERSION: u32 = 1;
}

impl Record for SavedQuizState {
    const KEY: &'static str = SAVED_PROGRESS_KEY;
    const VERSION: u32 = 1;
}

impl Record for QuizHistory {
    const KEY: &'static str = QUIZ_HISTORY_KEY;
    const VERSION: u32 = 1;
}

impl Record for UserProfile {
    const KEY: &'static str = USER_PROFILE_KEY;
    const VERSION: u32 = 1;
}
