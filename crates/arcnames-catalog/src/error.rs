//! Error types for catalog building

use arcnames_formats::{tab::TabError, toc::TocError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while recovering names and writing catalog artifacts
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A file or directory could not be read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A required input does not exist and the run is strict
    #[error("missing source: {0}")]
    MissingSource(PathBuf),

    /// A TAB file failed to parse
    #[error("failed to read archive table {path}: {source}")]
    Tab {
        /// TAB file path
        path: PathBuf,
        /// Format error
        #[source]
        source: TabError,
    },

    /// A TOC window failed to parse
    #[error("failed to read TOC in {path} at {offset:#x}: {source}")]
    Toc {
        /// ARC file path
        path: PathBuf,
        /// Window start within the ARC file
        offset: u64,
        /// Format error
        #[source]
        source: TocError,
    },

    /// A JSON artifact could not be read or written
    #[error("invalid JSON in {path}: {source}")]
    Json {
        /// Artifact path
        path: PathBuf,
        /// Serialization error
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Wrap an I/O error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error only reports an absent input
    pub const fn is_missing_source(&self) -> bool {
        matches!(self, Self::MissingSource(_))
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
