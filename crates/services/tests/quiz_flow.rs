use std::sync::Arc;

use async_trait::async_trait;
use quiz_core::model::{
    Answer, AuthState, Catalog, Question, Quiz, QuizId, SavedQuizState, Subject, SubjectId,
};
use quiz_core::session::CompletionReason;
use quiz_core::time::{fixed_clock, fixed_now};
use services::{AppServices, QuizFlowError, StepOutcome};
use storage::records::{QUIZ_HISTORY_KEY, SAVED_PROGRESS_KEY};
use storage::{InMemoryStore, KeyValueStore, Storage, StorageError};

fn two_question_catalog() -> Catalog {
    let quiz = Quiz::new(
        QuizId::new("q1"),
        "Quiz One",
        Some(5),
        vec![
            Question::new("A", vec![Answer::wrong("a0"), Answer::correct("a1")]),
            Question::new("B", vec![Answer::correct("b0"), Answer::wrong("b1")]),
        ],
    );
    Catalog::new(vec![Subject::new(
        SubjectId::new("subject"),
        "Subject",
        "heartbeat",
        vec![quiz],
    )])
    .expect("catalog")
}

fn one_question_catalog() -> Catalog {
    let quiz = Quiz::new(
        QuizId::new("q1"),
        "Quick",
        Some(5),
        vec![Question::new("A", vec![Answer::correct("a0"), Answer::wrong("a1")])],
    );
    Catalog::new(vec![Subject::new(
        SubjectId::new("subject"),
        "Subject",
        "heartbeat",
        vec![quiz],
    )])
    .expect("catalog")
}

async fn services_over(storage: Storage) -> AppServices {
    AppServices::bootstrap(storage, two_question_catalog(), fixed_clock())
        .await
        .expect("bootstrap")
}

#[tokio::test]
async fn answer_tick_answer_records_attempt() {
    let storage = Storage::in_memory();
    let app = services_over(storage.clone()).await;
    let flow = app.quiz_flow();

    flow.start_quiz(&QuizId::new("q1")).await.unwrap();
    assert_eq!(flow.answer(1).await.unwrap(), StepOutcome::Continue);
    for _ in 0..3 {
        assert_eq!(flow.tick().await.unwrap(), StepOutcome::Continue);
    }
    assert_eq!(flow.active_view().unwrap().time_left, Some(2));

    let StepOutcome::Completed(results) = flow.answer(0).await.unwrap() else {
        panic!("expected completion");
    };
    assert_eq!(results.score, 2);
    assert_eq!(results.total_questions, 2);
    assert_eq!(results.reason, CompletionReason::AllAnswered);

    let attempts = app.history().attempts();
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0].quiz_id(), &QuizId::new("q1"));
    assert_eq!(attempts[0].quiz_title(), "Quiz One");
    assert_eq!(attempts[0].date(), fixed_now());
    assert!(storage.load::<SavedQuizState>().await.unwrap().is_none());
}

#[tokio::test]
async fn restart_resumes_saved_progress() {
    let storage = Storage::in_memory();
    let app = services_over(storage.clone()).await;
    let flow = app.quiz_flow();
    flow.start_quiz(&QuizId::new("q1")).await.unwrap();
    flow.answer(1).await.unwrap();
    flow.tick().await.unwrap();

    let restarted = services_over(storage).await;
    let flow = restarted.quiz_flow();
    assert_eq!(
        flow.saved_progress(),
        Some(SavedQuizState::new(QuizId::new("q1"), 1, 1, Some(4)))
    );
    assert!(!flow.has_active_quiz());

    flow.resume_saved().await.unwrap();
    let view = flow.active_view().unwrap();
    assert_eq!(view.question_index, 1);
    assert_eq!(view.question, "B");
    assert_eq!(view.score, 1);
    assert_eq!(view.time_left, Some(4));
}

#[tokio::test]
async fn mismatched_snapshot_starts_fresh() {
    let storage = Storage::in_memory();
    storage
        .save(&SavedQuizState::new(QuizId::new("q1"), 5, 0, Some(3)))
        .await
        .unwrap();

    let app = services_over(storage).await;
    let flow = app.quiz_flow();
    flow.resume_saved().await.unwrap();

    let view = flow.active_view().unwrap();
    assert_eq!(view.question_index, 0);
    assert_eq!(view.time_left, Some(5));
}

#[tokio::test]
async fn abandon_discards_snapshot_without_history() {
    let storage = Storage::in_memory();
    let app = services_over(storage.clone()).await;
    let flow = app.quiz_flow();
    flow.start_quiz(&QuizId::new("q1")).await.unwrap();
    flow.answer(0).await.unwrap();

    flow.abandon().await.unwrap();
    assert!(!flow.has_active_quiz());
    assert!(flow.saved_progress().is_none());
    assert!(app.history().is_empty());
    assert!(storage.load::<SavedQuizState>().await.unwrap().is_none());
}

#[tokio::test]
async fn restart_from_results_and_leave() {
    let app = services_over(Storage::in_memory()).await;
    let flow = app.quiz_flow();
    assert!(matches!(flow.restart().await, Err(QuizFlowError::NoResults)));

    flow.start_quiz(&QuizId::new("q1")).await.unwrap();
    flow.answer(0).await.unwrap();
    flow.answer(1).await.unwrap();
    assert!(flow.has_results());

    flow.restart().await.unwrap();
    assert!(!flow.has_results());
    assert_eq!(flow.active_view().unwrap().question_index, 0);

    flow.answer(1).await.unwrap();
    flow.answer(0).await.unwrap();
    flow.leave_results();
    assert!(!flow.has_results());
    assert!(!flow.has_active_quiz());
    assert_eq!(app.history().attempts().len(), 2);
}

#[tokio::test]
async fn out_of_range_answer_leaves_session_untouched() {
    let app = services_over(Storage::in_memory()).await;
    let flow = app.quiz_flow();
    flow.start_quiz(&QuizId::new("q1")).await.unwrap();

    let err = flow.answer(7).await.unwrap_err();
    assert!(matches!(err, QuizFlowError::Session(_)));
    assert_eq!(flow.active_view().unwrap().question_index, 0);
}

#[tokio::test]
async fn bootstrap_restores_locked_user() {
    let storage = Storage::in_memory();
    let app = services_over(storage.clone()).await;
    assert_eq!(app.auth_state(), AuthState::LoggedOut);
    app.auth().login("ada@example.com").await.unwrap();

    let restarted = services_over(storage).await;
    assert_eq!(restarted.auth_state(), AuthState::Locked);
}

struct ReadOnlyStore;

#[async_trait]
impl KeyValueStore for ReadOnlyStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("read-only".into()))
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[tokio::test]
async fn write_failures_surface_as_storage_errors() {
    let app = services_over(Storage::new(Arc::new(ReadOnlyStore))).await;
    let flow = app.quiz_flow();

    let err = flow.start_quiz(&QuizId::new("q1")).await.unwrap_err();
    assert!(matches!(err, QuizFlowError::Storage(_)));
}

/// Delays snapshot writes and can refuse history writes.
#[derive(Clone, Default)]
struct SlowSnapshotStore {
    inner: InMemoryStore,
    fail_history: bool,
}

#[async_trait]
impl KeyValueStore for SlowSnapshotStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == SAVED_PROGRESS_KEY {
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }
        if key == QUIZ_HISTORY_KEY && self.fail_history {
            return Err(StorageError::Connection("history unavailable".into()));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key).await
    }
}

#[tokio::test]
async fn tick_in_flight_does_not_outlive_completion() {
    let storage = Storage::new(Arc::new(SlowSnapshotStore::default()));
    let app = AppServices::bootstrap(storage.clone(), one_question_catalog(), fixed_clock())
        .await
        .expect("bootstrap");
    let flow = app.quiz_flow();
    flow.start_quiz(&QuizId::new("q1")).await.unwrap();

    let ticking = {
        let flow = Arc::clone(&flow);
        tokio::spawn(async move { flow.tick().await })
    };
    // Let the tick reach its snapshot write before answering.
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let outcome = flow.answer(0).await.unwrap();
    assert!(matches!(outcome, StepOutcome::Completed(_)));
    let tick = ticking.await.expect("tick task");
    assert!(matches!(
        tick,
        Ok(StepOutcome::Continue) | Err(QuizFlowError::NoActiveQuiz)
    ));

    assert!(flow.saved_progress().is_none());
    assert!(storage.load::<SavedQuizState>().await.unwrap().is_none());
    assert!(flow.has_results());
    assert_eq!(app.history().attempts().len(), 1);
}

#[tokio::test]
async fn failed_history_write_still_drops_snapshot() {
    let storage = Storage::new(Arc::new(SlowSnapshotStore {
        fail_history: true,
        ..SlowSnapshotStore::default()
    }));
    let app = AppServices::bootstrap(storage.clone(), one_question_catalog(), fixed_clock())
        .await
        .expect("bootstrap");
    let flow = app.quiz_flow();
    flow.start_quiz(&QuizId::new("q1")).await.unwrap();
    assert!(storage.load::<SavedQuizState>().await.unwrap().is_some());

    let err = flow.answer(0).await.unwrap_err();
    assert!(matches!(err, QuizFlowError::History(_)));
    assert!(flow.has_results());
    assert!(flow.saved_progress().is_none());
    assert!(storage.load::<SavedQuizState>().await.unwrap().is_none());
}
