use std::sync::Arc;

use quiz_core::model::{AuthState, Catalog};
use quiz_core::{Clock, builtin_catalog};
use storage::Storage;
use tracing::info;

use crate::auth_service::AuthService;
use crate::error::AppServicesError;
use crate::history_service::HistoryService;
use crate::profile_service::ProfileService;
use crate::sessions::QuizFlowService;

/// Root context handed to the UI: every service over one shared `Storage`.
#[derive(Clone)]
pub struct AppServices {
    storage: Storage,
    auth: Arc<AuthService>,
    history: Arc<HistoryService>,
    profile: Arc<ProfileService>,
    quiz_flow: Arc<QuizFlowService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the bundled catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or loading fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let catalog = builtin_catalog()?;
        Self::bootstrap(storage, catalog, clock).await
    }

    /// Wire services over `storage` and load every persisted record.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` on storage failures. Unreadable records are
    /// discarded rather than reported.
    pub async fn bootstrap(
        storage: Storage,
        catalog: Catalog,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let auth = Arc::new(AuthService::new(storage.clone()));
        let history = Arc::new(HistoryService::new(storage.clone()));
        let profile = Arc::new(ProfileService::new(storage.clone()));
        let quiz_flow = Arc::new(QuizFlowService::new(
            clock,
            Arc::new(catalog),
            storage.clone(),
            Arc::clone(&history),
        ));

        let auth_state = auth.load().await?;
        let attempts = history.load().await?;
        profile.load().await?;
        let saved = quiz_flow.load_saved().await?;
        info!(
            auth = ?auth_state,
            attempts,
            saved_progress = saved.is_some(),
            "services ready"
        );

        Ok(Self {
            storage,
            auth,
            history,
            profile,
            quiz_flow,
        })
    }

    /// Convenience for tests and ephemeral runs.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the bundled catalog is invalid.
    pub async fn in_memory(clock: Clock) -> Result<Self, AppServicesError> {
        Self::bootstrap(Storage::in_memory(), builtin_catalog()?, clock).await
    }

    #[must_use]
    pub fn storage(&self) -> Storage {
        self.storage.clone()
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn history(&self) -> Arc<HistoryService> {
        Arc::clone(&self.history)
    }

    #[must_use]
    pub fn profile(&self) -> Arc<ProfileService> {
        Arc::clone(&self.profile)
    }

    #[must_use]
    pub fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }

    #[must_use]
    pub fn auth_state(&self) -> AuthState {
        self.auth.state()
    }
}
