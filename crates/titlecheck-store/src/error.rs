use thiserror::Error;

/// Errors raised by the title store.
///
/// A duplicate title is not an error; see [`crate::SqliteTitleStore::add_title`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// Titles must contain at least one character.
    #[error("title is empty")]
    EmptyTitle,

    /// The underlying SQLite database failed.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
