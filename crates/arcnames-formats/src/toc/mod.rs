//! TOC record stream implementation
//!
//! Some ARC payloads are tables of contents for a group of entries. Unlike a
//! TAB, a TOC stores names, so it can reveal paths that no hint corpus
//! contains yet.
//!
//! # Format Structure
//!
//! ```text
//! TOC window (offset/size taken from the TAB record of the TOC entry):
//! └── Records (back-to-back until the window size is consumed)
//!     ├── name_length (u32)
//!     ├── name (name_length bytes, UTF-8, not terminated)
//!     ├── offset (u32, 0 = content supplied by a patch)
//!     └── size (u32)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use arcnames_formats::toc::{TocBuilder, TocEntry, TocFile};
//!
//! let data = TocBuilder::new()
//!     .add_entry(TocEntry::new("patched_file.bin", 0, 128))
//!     .add_entry(TocEntry::new("base_file.bin", 0x4000, 64))
//!     .build()?;
//!
//! let toc = TocFile::parse(&data)?;
//! assert_eq!(toc.patched().collect::<Vec<_>>(), ["patched_file.bin"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod builder;
mod entry;
/// TOC error types
pub mod error;
mod reader;

pub use builder::TocBuilder;
pub use entry::{RECORD_OVERHEAD, TocEntry};
pub use error::{TocError, TocResult};
pub use reader::{TocRead, TocReader};

use std::io::Cursor;

/// Offset value marking an entry whose content lives only in a patch
pub const PATCHED_OFFSET: u32 = 0;

/// A fully parsed TOC window
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TocFile {
    /// Records in stream order
    pub entries: Vec<TocEntry>,
}

impl TocFile {
    /// Parse a TOC window held in memory; the whole slice is the window
    pub fn parse(data: &[u8]) -> TocResult<Self> {
        let entries = TocReader::new(Cursor::new(data), data.len() as u64)
            .collect::<TocResult<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// Names of entries carrying the patched sentinel, in stream order
    pub fn patched(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.is_patched())
            .map(|e| e.name.as_str())
    }
}
