//! TOC error types

use thiserror::Error;

/// TOC-specific error type
#[derive(Debug, Error)]
pub enum TocError {
    /// A record name is not valid UTF-8
    #[error("TOC record {index} has a name that is not valid UTF-8: {source}")]
    InvalidName {
        /// Zero-based record index within the window
        index: u64,
        /// Decoding failure
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Builder was given a name longer than the length prefix can express
    #[error("TOC name of {0} bytes does not fit a u32 length prefix")]
    NameTooLong(usize),

    /// I/O error during reading
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `BinRW` writing error
    #[error("binary format error: {0}")]
    BinRw(#[from] binrw::Error),
}

/// Result type for TOC operations
pub type TocResult<T> = Result<T, TocError>;
