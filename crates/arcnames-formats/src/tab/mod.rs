//! Archive table (TAB) format implementation
//!
//! A TAB file is the directory of an ARC payload file. It never stores the
//! path of an entry, only the lookup3 hash of it.
//!
//! # Format Structure
//!
//! ```text
//! Legacy TAB (first generation):
//! ├── magic (u32, "TAB\0")
//! ├── version (u16)
//! ├── endian (u16)
//! ├── alignment (u32)
//! └── Records (12 bytes each, until end of file)
//!     ├── name_hash (u32)
//!     ├── offset (u32)
//!     └── size (u32)
//!
//! Extended TAB (second generation):
//! ├── magic (u32, "TAB\0")
//! ├── version (u16)
//! ├── endian (u16)
//! ├── alignment (u32)
//! ├── unknown (u32)
//! ├── max_compressed_block_size (u32)
//! ├── uncompressed_block_size (u32)
//! ├── block_count (u32)
//! ├── Compressed blocks (block_count × 8 bytes, skipped)
//! └── Records (20 bytes each, until end of file)
//!     ├── name_hash (u32)
//!     ├── offset (u32)
//!     ├── size (u32)
//!     ├── uncompressed_size (u32)
//!     ├── compressed_block_index (u16)
//!     ├── compression_type (u8)
//!     └── flags (u8)
//! ```
//!
//! All integers are little-endian. The record count is not stored: a table
//! ends where the file can no longer supply a full record.
//!
//! # Usage
//!
//! ## Streaming records
//!
//! ```rust,no_run
//! use arcnames_formats::tab::{TabFormat, TabReader};
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let file = BufReader::new(File::open("game0.tab")?);
//! let mut reader = TabReader::new(file, TabFormat::Legacy)?;
//!
//! for entry in &mut reader {
//!     let entry = entry?;
//!     println!("{} at {:#x} ({} bytes)", entry.hash, entry.offset, entry.size);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Building
//!
//! ```rust
//! use arcnames_formats::tab::{TabBuilder, TabEntry, TabFile, TabFormat};
//! use arcnames_hash::NameHash;
//!
//! let data = TabBuilder::new(TabFormat::Legacy)
//!     .add_entry(TabEntry::new(NameHash::from_path("textures/car.dds"), 0x100, 0x40))
//!     .build()?;
//!
//! let table = TabFile::parse(&data, TabFormat::Legacy)?;
//! assert_eq!(table.entries.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod builder;
mod entry;
/// TAB error types
pub mod error;
mod header;
mod reader;

pub use builder::TabBuilder;
pub use entry::{EntryDetails, ExtendedTabEntry, LegacyTabEntry, TabEntry};
pub use error::{TabError, TabResult};
pub use header::{CompressedBlock, ExtendedTabHeader, LegacyTabHeader, TabHeader};
pub use reader::{RecordRead, TabReader};

use arcnames_hash::NameHash;
use std::fmt;
use std::io::Cursor;

/// Magic constant at offset 0 of every TAB file (`"TAB\0"` little-endian)
pub const TAB_MAGIC: u32 = 0x0042_4154;

/// TAB layout generation
///
/// The layout cannot be detected from content; callers select it from the
/// game they are processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabFormat {
    /// First generation: 12-byte header, 12-byte records
    Legacy,
    /// Second generation: 24-byte header, block index, 20-byte records
    Extended,
}

impl TabFormat {
    /// Size of the fixed header, including the magic and excluding the
    /// extended block index
    pub const fn header_size(self) -> usize {
        match self {
            Self::Legacy => 12,
            Self::Extended => 24,
        }
    }

    /// Record stride in bytes
    pub const fn entry_size(self) -> usize {
        match self {
            Self::Legacy => 12,
            Self::Extended => 20,
        }
    }

    /// Size of one compressed-block index entry (extended layout only)
    pub const fn block_entry_size(self) -> usize {
        match self {
            Self::Legacy => 0,
            Self::Extended => 8,
        }
    }
}

impl fmt::Display for TabFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => f.write_str("legacy"),
            Self::Extended => f.write_str("extended"),
        }
    }
}

/// A fully parsed TAB file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabFile {
    /// Layout the file was read with
    pub format: TabFormat,
    /// File header, `None` when the file ends inside it
    pub header: Option<TabHeader>,
    /// Records in file order
    pub entries: Vec<TabEntry>,
}

impl TabFile {
    /// Parse a complete TAB file held in memory
    pub fn parse(data: &[u8], format: TabFormat) -> TabResult<Self> {
        let mut reader = TabReader::new(Cursor::new(data), format)?;
        let entries = reader.by_ref().collect::<TabResult<Vec<_>>>()?;
        Ok(Self {
            format,
            header: reader.header().cloned(),
            entries,
        })
    }

    /// Layout generation of this table
    pub const fn format(&self) -> TabFormat {
        self.format
    }

    /// Find the first record with the given name hash
    pub fn find(&self, hash: NameHash) -> Option<&TabEntry> {
        self.entries.iter().find(|e| e.hash == hash)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_strides() {
        assert_eq!(TabFormat::Legacy.header_size(), 12);
        assert_eq!(TabFormat::Legacy.entry_size(), 12);
        assert_eq!(TabFormat::Extended.header_size(), 24);
        assert_eq!(TabFormat::Extended.entry_size(), 20);
        assert_eq!(TabFormat::Extended.block_entry_size(), 8);
    }

    #[test]
    fn test_magic_bytes() {
        assert_eq!(TAB_MAGIC.to_le_bytes(), *b"TAB\0");
    }

    #[test]
    fn test_find() {
        let car = NameHash::from_path("textures/car.dds");
        let data = TabBuilder::new(TabFormat::Legacy)
            .add_entry(TabEntry::new(NameHash::new(1), 0, 16))
            .add_entry(TabEntry::new(car, 0x100, 0x40))
            .build()
            .unwrap();

        let table = TabFile::parse(&data, TabFormat::Legacy).unwrap();
        assert_eq!(table.format(), TabFormat::Legacy);
        let entry = table.find(car).unwrap();
        assert_eq!(entry.offset, 0x100);
        assert_eq!(entry.size, 0x40);
        assert!(table.find(NameHash::new(2)).is_none());
    }
}
