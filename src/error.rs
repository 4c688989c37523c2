//! Error types for pickmenu
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Boxed error returned by user-supplied matchers and actions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for menu operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// Terminal read or write failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The search query prompt failed
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// A custom search matcher reported a failure
    #[error("search for '{query}' failed: {source}")]
    Search {
        query: String,
        #[source]
        source: BoxError,
    },

    /// An action item failed while running
    #[error("action '{title}' failed: {source}")]
    Action {
        title: String,
        #[source]
        source: BoxError,
    },

    /// A scripted key or query source has nothing left to give
    #[error("input exhausted: no more scripted {0}")]
    InputExhausted(&'static str),

    /// Configuration file could not be parsed or holds an invalid value
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}
