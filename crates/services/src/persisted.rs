use std::sync::{Mutex, MutexGuard, PoisonError};

use storage::{Record, Storage, StorageError};
use tracing::warn;

/// Load record `T`, treating an unreadable value as absent.
///
/// A value that fails to decode is logged and deleted so the next write
/// starts from a clean slate. Backend failures are still returned.
pub(crate) async fn load_or_discard<T: Record>(
    storage: &Storage,
) -> Result<Option<T>, StorageError> {
    match storage.load::<T>().await {
        Ok(value) => Ok(value),
        Err(err) if err.is_decode() => {
            warn!(key = T::KEY, error = %err, "discarding unreadable record");
            storage.clear::<T>().await?;
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Lock in-memory service state, recovering the guard from a poisoned lock.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
