use std::path::PathBuf;

/// Failures of the record store mirror.
///
/// These never reach the caller of a logging method; the logger hands them
/// to its [`Diagnostics`](crate::Diagnostics) sink and carries on.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Error opening database {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Error preparing statement: {0}")]
    Prepare(#[source] rusqlite::Error),

    #[error("Error inserting row: {0}")]
    Insert(#[source] rusqlite::Error),

    #[error("Error closing database: {0}")]
    Close(#[source] rusqlite::Error),
}
