use quiz_core::model::QuizAttempt;

use super::time_fmt::format_date;

/// One row of the history list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptRowVm {
    pub title: String,
    pub score_label: String,
    pub percentage_label: String,
    pub date_label: String,
    pub passed: bool,
}

impl AttemptRowVm {
    #[must_use]
    pub fn from_attempt(attempt: &QuizAttempt) -> Self {
        let percentage = attempt.percentage();
        Self {
            title: attempt.quiz_title().to_string(),
            score_label: format!("{}/{}", attempt.score(), attempt.total_questions()),
            percentage_label: format!("{percentage}%"),
            date_label: format_date(attempt.date()),
            passed: percentage >= 50,
        }
    }
}

#[must_use]
pub fn map_attempt_rows(attempts: &[QuizAttempt]) -> Vec<AttemptRowVm> {
    attempts.iter().map(AttemptRowVm::from_attempt).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuizId;
    use quiz_core::time::fixed_now;

    #[test]
    fn row_labels() {
        let attempt = QuizAttempt::new(QuizId::new("ana-q1"), "Bones", 2, 3, fixed_now());
        let row = AttemptRowVm::from_attempt(&attempt);
        assert_eq!(row.title, "Bones");
        assert_eq!(row.score_label, "2/3");
        assert_eq!(row.percentage_label, "66%");
        assert_eq!(row.date_label, "Nov 14, 2023");
        assert!(row.passed);
    }
}
