//! TAB error types

use super::TabFormat;
use thiserror::Error;

/// TAB-specific error type
#[derive(Debug, Error)]
pub enum TabError {
    /// Leading magic is not `TAB\0`; the file is not an archive table
    #[error("invalid TAB magic: expected {expected:#010x}, got {actual:#010x}")]
    InvalidMagic {
        /// Expected magic value
        expected: u32,
        /// Magic value found in the file
        actual: u32,
    },

    /// File ends inside the fixed header
    #[error("truncated {format} TAB header: need {needed} bytes, got {actual}")]
    TruncatedHeader {
        /// Layout being read
        format: TabFormat,
        /// Bytes required for the header
        needed: usize,
        /// Bytes available
        actual: usize,
    },

    /// Builder was given compressed blocks for the legacy layout
    #[error("legacy TAB layout has no compressed block index ({0} blocks given)")]
    UnexpectedBlocks(usize),

    /// I/O error during reading
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `BinRW` parsing/writing error
    #[error("binary format error: {0}")]
    BinRw(#[from] binrw::Error),
}

/// Result type for TAB operations
pub type TabResult<T> = Result<T, TabError>;
