//! Error type shared by the storage shim and the entity stores

use thiserror::Error;

/// Errors surfaced by the data layer
///
/// Storage and serialization failures are produced by [`crate::database::Storage`].
/// The entity stores log and swallow those; only the two validation variants
/// reach store callers.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Database(#[from] redb::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("نام کاربری قبلاً استفاده شده است")]
    DuplicateUsername,

    #[error("این کتاب قبلاً به علاقه‌مندی‌ها اضافه شده است")]
    DuplicateFavorite,
}

pub type StoreResult<T> = Result<T, StoreError>;
