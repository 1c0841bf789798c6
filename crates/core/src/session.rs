//! Quiz attempt state machine.
//!
//! A session moves `NotStarted → InProgress → Completed`. Every transition that
//! leaves the session in progress yields a [`SavedQuizState`] for the caller to
//! persist; terminal transitions yield a [`QuizOutcome`] instead. The machine
//! never touches storage or history itself.

use thiserror::Error;

use crate::model::{Question, Quiz, QuizId, SavedQuizState};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("quiz session is not in progress")]
    NotInProgress,

    #[error("answer {index} is out of range ({available} options)")]
    AnswerOutOfRange { index: usize, available: usize },
}

/// Mutable counters of an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current_question_index: usize,
    pub score: u32,
    /// Remaining seconds; `None` when the quiz is untimed.
    pub time_left: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionReason {
    AllAnswered,
    TimeExpired,
    /// The quiz has no questions and finished on start.
    NoQuestions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress(Progress),
    Completed {
        progress: Progress,
        reason: CompletionReason,
    },
}

/// What a completed session reports to its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    pub quiz_id: QuizId,
    pub score: u32,
    pub total_questions: u32,
    pub reason: CompletionReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartResult {
    Fresh,
    Resumed,
    /// Started and finished in one step (quiz without questions).
    Completed(QuizOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed (tick on an untimed quiz); no snapshot needed.
    Unchanged,
    /// Still in progress; persist this snapshot.
    Continue(SavedQuizState),
    Completed(QuizOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    quiz: Quiz,
    state: SessionState,
}

impl QuizSession {
    #[must_use]
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            state: SessionState::NotStarted,
        }
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn progress(&self) -> Option<Progress> {
        match self.state {
            SessionState::NotStarted => None,
            SessionState::InProgress(progress) | SessionState::Completed { progress, .. } => {
                Some(progress)
            }
        }
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self.state, SessionState::InProgress(_))
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.state, SessionState::Completed { .. })
    }

    /// The question awaiting an answer, while in progress.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SessionState::InProgress(progress) => {
                self.quiz.question(progress.current_question_index)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        u32::try_from(self.quiz.question_count()).unwrap_or(u32::MAX)
    }

    /// Snapshot of the current attempt, while in progress.
    #[must_use]
    pub fn snapshot(&self) -> Option<SavedQuizState> {
        match self.state {
            SessionState::InProgress(progress) => Some(self.snapshot_of(progress)),
            _ => None,
        }
    }

    #[must_use]
    pub fn outcome(&self) -> Option<QuizOutcome> {
        match self.state {
            SessionState::Completed { progress, reason } => Some(self.outcome_of(progress, reason)),
            _ => None,
        }
    }

    /// Start (or restart) the attempt, resuming from `resume` when it belongs
    /// to this quiz and fits its shape.
    pub fn start(&mut self, resume: Option<&SavedQuizState>) -> StartResult {
        if self.quiz.question_count() == 0 {
            let progress = Progress {
                current_question_index: 0,
                score: 0,
                time_left: self.quiz.time_limit_secs(),
            };
            return StartResult::Completed(self.complete(progress, CompletionReason::NoQuestions));
        }

        match resume.filter(|saved| self.accepts(saved)) {
            Some(saved) => {
                self.state = SessionState::InProgress(Progress {
                    current_question_index: saved.current_question_index,
                    score: saved.score,
                    time_left: saved.time_left,
                });
                StartResult::Resumed
            }
            None => {
                self.state = SessionState::InProgress(Progress {
                    current_question_index: 0,
                    score: 0,
                    time_left: self.quiz.time_limit_secs(),
                });
                StartResult::Fresh
            }
        }
    }

    /// Advance the countdown by one second.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInProgress` outside of an active attempt.
    pub fn tick(&mut self) -> Result<Transition, SessionError> {
        let SessionState::InProgress(mut progress) = self.state else {
            return Err(SessionError::NotInProgress);
        };
        let Some(time_left) = progress.time_left else {
            return Ok(Transition::Unchanged);
        };

        let time_left = time_left.saturating_sub(1);
        progress.time_left = Some(time_left);
        if time_left == 0 {
            return Ok(Transition::Completed(
                self.complete(progress, CompletionReason::TimeExpired),
            ));
        }

        self.state = SessionState::InProgress(progress);
        Ok(Transition::Continue(self.snapshot_of(progress)))
    }

    /// Answer the current question with the option at `selected`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInProgress` outside of an active attempt and
    /// `SessionError::AnswerOutOfRange` if `selected` is not an option.
    pub fn answer(&mut self, selected: usize) -> Result<Transition, SessionError> {
        let SessionState::InProgress(mut progress) = self.state else {
            return Err(SessionError::NotInProgress);
        };
        let question = self
            .quiz
            .question(progress.current_question_index)
            .ok_or(SessionError::NotInProgress)?;
        let answer = question
            .answers()
            .get(selected)
            .ok_or(SessionError::AnswerOutOfRange {
                index: selected,
                available: question.answers().len(),
            })?;

        if answer.is_correct() {
            progress.score = progress.score.saturating_add(1);
        }
        progress.current_question_index += 1;

        if progress.current_question_index >= self.quiz.question_count() {
            return Ok(Transition::Completed(
                self.complete(progress, CompletionReason::AllAnswered),
            ));
        }

        self.state = SessionState::InProgress(progress);
        Ok(Transition::Continue(self.snapshot_of(progress)))
    }

    /// Drop the attempt without an outcome.
    pub fn abandon(&mut self) {
        self.state = SessionState::NotStarted;
    }

    fn accepts(&self, saved: &SavedQuizState) -> bool {
        let timing_matches = match (self.quiz.time_limit_secs(), saved.time_left) {
            (Some(limit), Some(left)) => left > 0 && left <= limit,
            (None, None) => true,
            _ => false,
        };
        saved.quiz_id == *self.quiz.id()
            && saved.current_question_index < self.quiz.question_count()
            && usize::try_from(saved.score).is_ok_and(|score| score <= saved.current_question_index)
            && timing_matches
    }

    fn complete(&mut self, progress: Progress, reason: CompletionReason) -> QuizOutcome {
        self.state = SessionState::Completed { progress, reason };
        self.outcome_of(progress, reason)
    }

    fn snapshot_of(&self, progress: Progress) -> SavedQuizState {
        SavedQuizState::new(
            self.quiz.id().clone(),
            progress.current_question_index,
            progress.score,
            progress.time_left,
        )
    }

    fn outcome_of(&self, progress: Progress, reason: CompletionReason) -> QuizOutcome {
        QuizOutcome {
            quiz_id: self.quiz.id().clone(),
            score: progress.score,
            total_questions: self.total_questions(),
            reason,
        }
    }
}
