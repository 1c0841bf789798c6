use std::sync::{Arc, Mutex};

use quiz_core::Clock;
use quiz_core::model::{Catalog, QuizAttempt, QuizId, SavedQuizState};
use quiz_core::session::{QuizOutcome, QuizSession, SessionError, StartResult, Transition};
use storage::Storage;
use tokio::sync::Mutex as OpGate;
use tracing::{debug, info, warn};

use super::view::{ActiveQuizView, QuizResults};
use crate::error::QuizFlowError;
use crate::history_service::HistoryService;
use crate::persisted::{load_or_discard, lock};

/// Result of driving the active quiz one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Completed(QuizResults),
}

#[derive(Debug, Default)]
struct FlowState {
    session: Option<QuizSession>,
    saved: Option<SavedQuizState>,
    results: Option<QuizResults>,
}

/// Orchestrates the active quiz, its saved snapshot and the results overlay.
///
/// Every in-progress transition rewrites the snapshot; completion removes it
/// and appends to history.
///
/// Mutating operations are serialized by `ops`, held across their storage
/// awaits, so a tick and an answer racing from separate UI tasks apply and
/// persist in one order. `state` is only held briefly for reads.
#[derive(Clone)]
pub struct QuizFlowService {
    clock: Clock,
    catalog: Arc<Catalog>,
    storage: Storage,
    history: Arc<HistoryService>,
    state: Arc<Mutex<FlowState>>,
    ops: Arc<OpGate<()>>,
}

impl QuizFlowService {
    #[must_use]
    pub fn new(
        clock: Clock,
        catalog: Arc<Catalog>,
        storage: Storage,
        history: Arc<HistoryService>,
    ) -> Self {
        Self {
            clock,
            catalog,
            storage,
            history,
            state: Arc::new(Mutex::new(FlowState::default())),
            ops: Arc::new(OpGate::new(())),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// Load the persisted snapshot, dropping it if unreadable or if its quiz
    /// is no longer in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::Storage` on backend failures.
    pub async fn load_saved(&self) -> Result<Option<SavedQuizState>, QuizFlowError> {
        let _op = self.ops.lock().await;
        let mut saved = load_or_discard::<SavedQuizState>(&self.storage).await?;
        let stale = saved
            .as_ref()
            .is_some_and(|snapshot| self.catalog.find_quiz(&snapshot.quiz_id).is_none());
        if stale {
            warn!("discarding snapshot for a quiz missing from the catalog");
            self.storage.clear::<SavedQuizState>().await?;
            saved = None;
        }
        lock(&self.state).saved.clone_from(&saved);
        Ok(saved)
    }

    #[must_use]
    pub fn saved_progress(&self) -> Option<SavedQuizState> {
        lock(&self.state).saved.clone()
    }

    #[must_use]
    pub fn has_active_quiz(&self) -> bool {
        lock(&self.state)
            .session
            .as_ref()
            .is_some_and(QuizSession::is_in_progress)
    }

    #[must_use]
    pub fn has_results(&self) -> bool {
        lock(&self.state).results.is_some()
    }

    #[must_use]
    pub fn active_view(&self) -> Option<ActiveQuizView> {
        lock(&self.state)
            .session
            .as_ref()
            .and_then(ActiveQuizView::from_session)
    }

    #[must_use]
    pub fn results(&self) -> Option<QuizResults> {
        lock(&self.state).results.clone()
    }

    /// Start `quiz_id` from the first question, discarding any saved snapshot.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::UnknownQuiz` if the id is not in the catalog,
    /// or a storage/history error.
    pub async fn start_quiz(&self, quiz_id: &QuizId) -> Result<StepOutcome, QuizFlowError> {
        let _op = self.ops.lock().await;
        self.start_fresh(quiz_id).await
    }

    async fn start_fresh(&self, quiz_id: &QuizId) -> Result<StepOutcome, QuizFlowError> {
        let quiz = self
            .catalog
            .find_quiz(quiz_id)
            .cloned()
            .ok_or_else(|| QuizFlowError::UnknownQuiz(quiz_id.clone()))?;
        self.storage.clear::<SavedQuizState>().await?;
        lock(&self.state).saved = None;

        let mut session = QuizSession::new(quiz);
        let started = session.start(None);
        info!(quiz_id = %quiz_id, "quiz started");
        self.begin(session, started).await
    }

    /// Continue the saved attempt where it left off.
    ///
    /// A snapshot that no longer fits its quiz restarts the quiz instead.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::NoSavedProgress` when nothing is saved,
    /// `QuizFlowError::UnknownQuiz` for a stale snapshot, or a storage error.
    pub async fn resume_saved(&self) -> Result<StepOutcome, QuizFlowError> {
        let _op = self.ops.lock().await;
        let saved = self.saved_progress().ok_or(QuizFlowError::NoSavedProgress)?;
        let quiz = self
            .catalog
            .find_quiz(&saved.quiz_id)
            .cloned()
            .ok_or_else(|| QuizFlowError::UnknownQuiz(saved.quiz_id.clone()))?;

        let mut session = QuizSession::new(quiz);
        let started = session.start(Some(&saved));
        match started {
            StartResult::Resumed => info!(quiz_id = %saved.quiz_id, "quiz resumed"),
            _ => warn!(quiz_id = %saved.quiz_id, "saved progress rejected, starting over"),
        }
        self.begin(session, started).await
    }

    /// Answer the current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::NoActiveQuiz`, a session error for an invalid
    /// option, or a storage/history error.
    pub async fn answer(&self, selected: usize) -> Result<StepOutcome, QuizFlowError> {
        self.step(|session| session.answer(selected)).await
    }

    /// Count the timer down by one second.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::NoActiveQuiz` or a storage/history error.
    pub async fn tick(&self) -> Result<StepOutcome, QuizFlowError> {
        self.step(QuizSession::tick).await
    }

    /// Leave the active quiz without recording it.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::Storage` if the snapshot cannot be removed.
    pub async fn abandon(&self) -> Result<(), QuizFlowError> {
        let _op = self.ops.lock().await;
        {
            let mut state = lock(&self.state);
            if let Some(session) = state.session.as_mut() {
                session.abandon();
            }
            state.session = None;
            state.saved = None;
        }
        self.storage.clear::<SavedQuizState>().await?;
        info!("quiz abandoned");
        Ok(())
    }

    /// Run the quiz shown on the results screen again.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::NoResults` outside the results screen, or any
    /// error from [`Self::start_quiz`].
    pub async fn restart(&self) -> Result<StepOutcome, QuizFlowError> {
        let _op = self.ops.lock().await;
        let results = self.results().ok_or(QuizFlowError::NoResults)?;
        self.start_fresh(&results.quiz_id).await
    }

    /// Dismiss the results screen.
    pub fn leave_results(&self) {
        let mut state = lock(&self.state);
        state.results = None;
        state.session = None;
    }

    async fn begin(
        &self,
        session: QuizSession,
        started: StartResult,
    ) -> Result<StepOutcome, QuizFlowError> {
        let title = session.quiz().title().to_owned();
        if let StartResult::Completed(outcome) = started {
            return self.finish(outcome, &title).await;
        }

        let snapshot = session.snapshot();
        {
            let mut state = lock(&self.state);
            state.session = Some(session);
            state.results = None;
        }
        if let Some(snapshot) = snapshot {
            self.persist_snapshot(snapshot).await?;
        }
        Ok(StepOutcome::Continue)
    }

    async fn step<F>(&self, apply: F) -> Result<StepOutcome, QuizFlowError>
    where
        F: FnOnce(&mut QuizSession) -> Result<Transition, SessionError>,
    {
        let _op = self.ops.lock().await;
        let (transition, title) = {
            let mut state = lock(&self.state);
            let session = state
                .session
                .as_mut()
                .filter(|session| session.is_in_progress())
                .ok_or(QuizFlowError::NoActiveQuiz)?;
            let transition = apply(session)?;
            (transition, session.quiz().title().to_owned())
        };

        match transition {
            Transition::Unchanged => Ok(StepOutcome::Continue),
            Transition::Continue(snapshot) => {
                self.persist_snapshot(snapshot).await?;
                Ok(StepOutcome::Continue)
            }
            Transition::Completed(outcome) => self.finish(outcome, &title).await,
        }
    }

    async fn persist_snapshot(&self, snapshot: SavedQuizState) -> Result<(), QuizFlowError> {
        self.storage.save(&snapshot).await?;
        debug!(
            quiz_id = %snapshot.quiz_id,
            index = snapshot.current_question_index,
            "snapshot saved"
        );
        lock(&self.state).saved = Some(snapshot);
        Ok(())
    }

    async fn finish(
        &self,
        outcome: QuizOutcome,
        quiz_title: &str,
    ) -> Result<StepOutcome, QuizFlowError> {
        let results = QuizResults::new(outcome, quiz_title);
        {
            let mut state = lock(&self.state);
            state.session = None;
            state.saved = None;
            state.results = Some(results.clone());
        }

        let attempt = QuizAttempt::new(
            results.quiz_id.clone(),
            quiz_title,
            results.score,
            results.total_questions,
            self.clock.now(),
        );
        // A finished quiz is never resumable, even if the history write fails.
        self.storage.clear::<SavedQuizState>().await?;
        self.history.append(attempt).await?;
        info!(
            quiz_id = %results.quiz_id,
            score = results.score,
            total = results.total_questions,
            reason = ?results.reason,
            "quiz completed"
        );
        Ok(StepOutcome::Completed(results))
    }
}
