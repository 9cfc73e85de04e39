//! Browser `localStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so pages and
//! state containers can persist data without repeating web-sys glue. Writes
//! are fire-and-forget autosaves: failures are logged at warn level and
//! otherwise ignored. SSR paths no-op.

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("localStorage is unavailable")]
    Unavailable,
    #[error("localStorage write failed: {0}")]
    Write(String),
}

/// Raw string stored under `key`, if any.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Overwrite `key` with `value`.
///
/// # Errors
///
/// [`StorageError::Unavailable`] when there is no storage (SSR, privacy
/// mode), [`StorageError::Write`] when the browser rejects the write (quota).
pub fn save_raw(key: &str, value: &str) -> Result<(), StorageError> {
    #[cfg(feature = "hydrate")]
    {
        let storage =
            web_sys::window().and_then(|w| w.local_storage().ok().flatten()).ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::Write(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
        Err(StorageError::Unavailable)
    }
}
