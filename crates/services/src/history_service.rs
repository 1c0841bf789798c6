use std::sync::{Arc, Mutex};

use quiz_core::model::QuizAttempt;
use storage::{QuizHistory, Storage};
use tracing::info;

use crate::error::HistoryError;
use crate::persisted::{load_or_discard, lock};

/// Aggregate figures over the whole ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryStats {
    pub attempts: usize,
    pub average_percentage: u32,
    pub best_percentage: u32,
}

/// Ledger of completed attempts, most recent first.
///
/// The whole sequence is rewritten on every append.
#[derive(Clone)]
pub struct HistoryService {
    storage: Storage,
    attempts: Arc<Mutex<Vec<QuizAttempt>>>,
}

impl HistoryService {
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            attempts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Replace the in-memory ledger with the persisted one.
    ///
    /// An unreadable record is discarded and the ledger starts empty.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError` on storage failures.
    pub async fn load(&self) -> Result<usize, HistoryError> {
        let loaded = load_or_discard::<QuizHistory>(&self.storage)
            .await?
            .unwrap_or_default();
        let count = loaded.0.len();
        *lock(&self.attempts) = loaded.0;
        Ok(count)
    }

    #[must_use]
    pub fn attempts(&self) -> Vec<QuizAttempt> {
        lock(&self.attempts).clone()
    }

    /// Up to `limit` most recent attempts.
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<QuizAttempt> {
        lock(&self.attempts).iter().take(limit).cloned().collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock(&self.attempts).is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> HistoryStats {
        let attempts = lock(&self.attempts);
        if attempts.is_empty() {
            return HistoryStats::default();
        }
        let total: u64 = attempts.iter().map(|a| u64::from(a.percentage())).sum();
        let count = attempts.len() as u64;
        HistoryStats {
            attempts: attempts.len(),
            average_percentage: u32::try_from(total / count).unwrap_or(u32::MAX),
            best_percentage: attempts.iter().map(QuizAttempt::percentage).max().unwrap_or(0),
        }
    }

    /// Record a completed attempt at the front of the ledger.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError` if the ledger cannot be persisted.
    pub async fn append(&self, attempt: QuizAttempt) -> Result<(), HistoryError> {
        let snapshot = {
            let mut attempts = lock(&self.attempts);
            attempts.insert(0, attempt);
            QuizHistory(attempts.clone())
        };
        self.storage.save(&snapshot).await?;
        info!(attempts = snapshot.0.len(), "history appended");
        Ok(())
    }

    /// Empty the ledger and delete the persisted record.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError` if the record cannot be removed.
    pub async fn clear(&self) -> Result<(), HistoryError> {
        lock(&self.attempts).clear();
        self.storage.clear::<QuizHistory>().await?;
        info!("history cleared");
        Ok(())
    }
}
