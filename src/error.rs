//! Error types
//!
//! None of these reach callers of the settings accessors: the manager logs
//! them and falls back to defaults. They exist so the ports and the fallible
//! loading path can say what went wrong.

use thiserror::Error;

/// Failure of the underlying key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No storage backend is reachable (no window, storage disabled, ...)
    #[error("storage is unavailable")]
    Unavailable,

    #[error("failed to read `{0}` from storage")]
    Read(String),

    /// Usually a quota error in the browser
    #[error("failed to write `{0}` to storage")]
    Write(String),

    #[error("failed to remove `{0}` from storage")]
    Remove(String),
}

/// Failure while loading persisted settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Stored blob is not valid JSON
    #[error("settings in storage are not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Stored blob is valid JSON but not an object
    #[error("settings in storage are a JSON {0}, expected an object")]
    NotAnObject(&'static str),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// An integer that does not name any variant of a statistics enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown {kind} type {value}")]
pub struct UnknownTypeError {
    pub kind: &'static str,
    pub value: u8,
}
