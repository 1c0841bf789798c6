use std::sync::{Arc, Mutex};

use quiz_core::model::{UserProfile, UserProfileDraft};
use storage::Storage;
use tracing::info;

use crate::error::ProfileError;
use crate::persisted::{load_or_discard, lock};

#[derive(Clone)]
pub struct ProfileService {
    storage: Storage,
    profile: Arc<Mutex<UserProfile>>,
}

impl ProfileService {
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            profile: Arc::new(Mutex::new(UserProfile::default())),
        }
    }

    /// Load the persisted profile (or defaults if missing or unreadable).
    ///
    /// # Errors
    ///
    /// Returns `ProfileError` on storage failures.
    pub async fn load(&self) -> Result<UserProfile, ProfileError> {
        let profile = load_or_discard::<UserProfile>(&self.storage)
            .await?
            .unwrap_or_default();
        *lock(&self.profile) = profile.clone();
        Ok(profile)
    }

    #[must_use]
    pub fn profile(&self) -> UserProfile {
        lock(&self.profile).clone()
    }

    /// Replace the whole profile and persist it.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError` if persistence fails.
    pub async fn update(&self, draft: UserProfileDraft) -> Result<UserProfile, ProfileError> {
        let profile = draft.validate();
        *lock(&self.profile) = profile.clone();
        self.storage.save(&profile).await?;
        info!("profile updated");
        Ok(profile)
    }
}
