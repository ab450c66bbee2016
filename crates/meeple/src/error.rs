//! Error types for the game list.

use std::io;
use std::path::PathBuf;

/// Errors raised by [`GameList`](crate::GameList) operations.
///
/// Every failing operation leaves the list exactly as it was.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    /// `add` was given no candidates to choose from.
    #[error("no games to choose from")]
    NoCandidates,

    /// `remove` was called on an empty list with something other than the
    /// wildcard.
    #[error("the game list is empty")]
    EmptyList,

    /// The address is not the wildcard, a known name, a range or an index.
    #[error("'{0}' does not match any game")]
    NotFound(String),

    /// A single index outside `1..=len`.
    #[error("index {index} is out of range (1-{len})")]
    IndexOutOfRange { index: i64, len: usize },

    /// A range whose start is zero, past the end, or after its end.
    #[error("invalid range {start}-{end} for {len} games")]
    InvalidRange { start: u64, end: u64, len: usize },

    /// Writing the list to disk failed.
    #[error("failed to save game list to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListError {
    /// Returns `true` for errors caused by an address that could not be
    /// resolved, as opposed to I/O failures.
    pub fn is_address_error(&self) -> bool {
        !matches!(self, ListError::Save { .. })
    }

    /// Create a save error.
    pub fn save(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Save {
            path: path.into(),
            source,
        }
    }
}

/// Result type for game list operations.
pub type Result<T> = std::result::Result<T, ListError>;
