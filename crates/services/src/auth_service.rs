use std::sync::{Arc, Mutex};

use quiz_core::model::{AuthGate, AuthScreen, AuthState, AuthToken};
use storage::Storage;
use tracing::info;

use crate::error::AuthServiceError;
use crate::persisted::{load_or_discard, lock};

/// Drives the auth gate and keeps the persisted token in step with it.
#[derive(Clone)]
pub struct AuthService {
    storage: Storage,
    gate: Arc<Mutex<AuthGate>>,
}

impl AuthService {
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            gate: Arc::new(Mutex::new(AuthGate::from_persisted(None))),
        }
    }

    /// Rebuild the gate from the persisted token.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError` on storage failures.
    pub async fn load(&self) -> Result<AuthState, AuthServiceError> {
        let token = load_or_discard::<AuthToken>(&self.storage).await?;
        let gate = AuthGate::from_persisted(token);
        let state = gate.state();
        *lock(&self.gate) = gate;
        Ok(state)
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        lock(&self.gate).state()
    }

    #[must_use]
    pub fn screen(&self) -> AuthScreen {
        lock(&self.gate).screen()
    }

    /// Identity of the current (or locked) user.
    #[must_use]
    pub fn identity(&self) -> Option<String> {
        lock(&self.gate)
            .identity()
            .map(|token| token.identity().to_owned())
    }

    pub fn show_screen(&self, screen: AuthScreen) {
        lock(&self.gate).show_screen(screen);
    }

    /// # Errors
    ///
    /// Returns `AuthServiceError::Auth` unless logged out, or a storage error.
    pub async fn login(&self, email: &str) -> Result<AuthState, AuthServiceError> {
        let token = lock(&self.gate).login(email)?;
        self.persist(token).await
    }

    /// # Errors
    ///
    /// Returns `AuthServiceError::Auth` unless logged out, or a storage error.
    pub async fn sign_up(&self, email: &str) -> Result<AuthState, AuthServiceError> {
        let token = lock(&self.gate).sign_up(email)?;
        self.persist(token).await
    }

    /// Unlock a locked session. The code is not checked.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError::Auth` unless locked.
    pub fn unlock(&self, code: &str) -> Result<AuthState, AuthServiceError> {
        let mut gate = lock(&self.gate);
        gate.unlock(code)?;
        info!("session unlocked");
        Ok(gate.state())
    }

    /// # Errors
    ///
    /// Returns `AuthServiceError` if the token cannot be removed.
    pub async fn logout(&self) -> Result<AuthState, AuthServiceError> {
        lock(&self.gate).logout();
        self.storage.clear::<AuthToken>().await?;
        info!("logged out");
        Ok(AuthState::LoggedOut)
    }

    async fn persist(&self, token: AuthToken) -> Result<AuthState, AuthServiceError> {
        self.storage.save(&token).await?;
        info!(identity = token.identity(), "logged in");
        Ok(self.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::KeyValueStore;
    use storage::records::AUTH_TOKEN_KEY;

    #[tokio::test]
    async fn fresh_install_then_login_then_restart_is_locked() {
        let storage = Storage::in_memory();
        let auth = AuthService::new(storage.clone());
        assert_eq!(auth.load().await.unwrap(), AuthState::LoggedOut);

        assert_eq!(auth.login("").await.unwrap(), AuthState::LoggedIn);
        assert!(storage.kv.get(AUTH_TOKEN_KEY).await.unwrap().is_some());

        let restarted = AuthService::new(storage);
        assert_eq!(restarted.load().await.unwrap(), AuthState::Locked);
        assert_eq!(restarted.identity().as_deref(), Some("user@example.com"));

        assert_eq!(restarted.unlock("0000").unwrap(), AuthState::LoggedIn);
    }

    #[tokio::test]
    async fn logout_removes_token() {
        let storage = Storage::in_memory();
        let auth = AuthService::new(storage.clone());
        auth.load().await.unwrap();
        auth.sign_up("me@example.com").await.unwrap();

        auth.logout().await.unwrap();
        assert_eq!(auth.state(), AuthState::LoggedOut);
        assert!(auth.identity().is_none());
        assert!(storage.kv.get(AUTH_TOKEN_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn second_login_is_rejected_without_writing() {
        let storage = Storage::in_memory();
        let auth = AuthService::new(storage.clone());
        auth.login("first@example.com").await.unwrap();

        let err = auth.login("second@example.com").await.unwrap_err();
        assert!(matches!(err, AuthServiceError::Auth(_)));
        assert_eq!(auth.identity().as_deref(), Some("first@example.com"));
    }

    #[tokio::test]
    async fn corrupt_token_starts_logged_out() {
        let storage = Storage::in_memory();
        storage.kv.set(AUTH_TOKEN_KEY, "user@example.com").await.unwrap();

        let auth = AuthService::new(storage.clone());
        assert_eq!(auth.load().await.unwrap(), AuthState::LoggedOut);
        assert!(storage.kv.get(AUTH_TOKEN_KEY).await.unwrap().is_none());
    }
}
