use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::QuizId;

/// A completed quiz attempt as recorded in history.
///
/// Attempts are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    quiz_id: QuizId,
    quiz_title: String,
    score: u32,
    total_questions: u32,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    date: DateTime<Utc>,
}

impl QuizAttempt {
    #[must_use]
    pub fn new(
        quiz_id: QuizId,
        quiz_title: impl Into<String>,
        score: u32,
        total_questions: u32,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            quiz_id,
            quiz_title: quiz_title.into(),
            score,
            total_questions,
            date,
        }
    }

    #[must_use]
    pub fn quiz_id(&self) -> &QuizId {
        &self.quiz_id
    }

    #[must_use]
    pub fn quiz_title(&self) -> &str {
        &self.quiz_title
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Score as a whole percentage of the question count (0 for an empty quiz).
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }
        let pct = (u64::from(self.score) * 100) / u64::from(self.total_questions);
        u32::try_from(pct).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn percentage_rounds_down() {
        let attempt = QuizAttempt::new(QuizId::new("q"), "Q", 2, 3, fixed_now());
        assert_eq!(attempt.percentage(), 66);
    }

    #[test]
    fn percentage_of_empty_quiz_is_zero() {
        let attempt = QuizAttempt::new(QuizId::new("q"), "Q", 0, 0, fixed_now());
        assert_eq!(attempt.percentage(), 0);
    }

    #[test]
    fn serializes_with_camel_case_and_millis() {
        let attempt = QuizAttempt::new(QuizId::new("ana-q1"), "Skull", 1, 3, fixed_now());
        let json = serde_json::to_value(&attempt).unwrap();
        assert_eq!(json["quizId"], "ana-q1");
        assert_eq!(json["quizTitle"], "Skull");
        assert_eq!(json["totalQuestions"], 3);
        assert_eq!(json["date"], 1_700_000_000_000_i64);
    }
}
