use serde::{Deserialize, Serialize};

use crate::model::QuizId;

/// Point-in-time record of an in-progress quiz, used to resume after restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedQuizState {
    pub quiz_id: QuizId,
    pub current_question_index: usize,
    pub score: u32,
    /// Remaining seconds; `None` for untimed quizzes.
    pub time_left: Option<u32>,
}

impl SavedQuizState {
    #[must_use]
    pub fn new(
        quiz_id: QuizId,
        current_question_index: usize,
        score: u32,
        time_left: Option<u32>,
    ) -> Self {
        Self {
            quiz_id,
            current_question_index,
            score,
            time_left,
        }
    }
}
