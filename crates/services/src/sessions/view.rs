use quiz_core::model::QuizId;
use quiz_core::session::{CompletionReason, QuizOutcome, QuizSession};

/// Presentation-agnostic snapshot of the question on screen.
///
/// The UI formats the countdown and numbering itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveQuizView {
    pub quiz_id: QuizId,
    pub quiz_title: String,
    /// Zero-based.
    pub question_index: usize,
    pub total_questions: u32,
    pub question: String,
    pub answers: Vec<String>,
    pub score: u32,
    pub time_left: Option<u32>,
}

impl ActiveQuizView {
    pub(crate) fn from_session(session: &QuizSession) -> Option<Self> {
        let progress = session.progress()?;
        let question = session.current_question()?;
        Some(Self {
            quiz_id: session.quiz().id().clone(),
            quiz_title: session.quiz().title().to_owned(),
            question_index: progress.current_question_index,
            total_questions: session.total_questions(),
            question: question.text().to_owned(),
            answers: question
                .answers()
                .iter()
                .map(|answer| answer.text().to_owned())
                .collect(),
            score: progress.score,
            time_left: progress.time_left,
        })
    }
}

/// Final figures of a completed attempt, shown on the results screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResults {
    pub quiz_id: QuizId,
    pub quiz_title: String,
    pub score: u32,
    pub total_questions: u32,
    pub reason: CompletionReason,
}

impl QuizResults {
    pub(crate) fn new(outcome: QuizOutcome, quiz_title: &str) -> Self {
        Self {
            quiz_id: outcome.quiz_id,
            quiz_title: quiz_title.to_owned(),
            score: outcome.score,
            total_questions: outcome.total_questions,
            reason: outcome.reason,
        }
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }
        self.score.saturating_mul(100) / self.total_questions
    }

    #[must_use]
    pub fn timed_out(&self) -> bool {
        self.reason == CompletionReason::TimeExpired
    }
}
