//! Error types for the command-line tool.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A path given on the command line does not exist
    #[error("{what} not found: {}", path.display())]
    MissingPath {
        /// What the path was supposed to point at
        what: &'static str,
        /// The path as given
        path: PathBuf,
    },

    /// A path exists but is the wrong kind of filesystem object
    #[error("{what} is not a {expected}: {}", path.display())]
    WrongKind {
        /// What the path was supposed to point at
        what: &'static str,
        /// `"directory"` or `"file"`
        expected: &'static str,
        /// The path as given
        path: PathBuf,
    },

    /// Missing required configuration value
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
