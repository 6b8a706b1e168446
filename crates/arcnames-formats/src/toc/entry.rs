//! TOC records

use super::PATCHED_OFFSET;

/// Bytes of a record that do not belong to the name
pub const RECORD_OVERHEAD: u64 = 12;

/// One named entry of a TOC stream
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TocEntry {
    /// Archive path of the entry
    pub name: String,
    /// Payload offset, or [`PATCHED_OFFSET`] when the content comes from a
    /// patch
    pub offset: u32,
    /// Payload size in bytes
    pub size: u32,
}

impl TocEntry {
    /// Create a record
    pub fn new(name: impl Into<String>, offset: u32, size: u32) -> Self {
        Self {
            name: name.into(),
            offset,
            size,
        }
    }

    /// Whether the entry's current content lives only in a patch
    pub const fn is_patched(&self) -> bool {
        self.offset == PATCHED_OFFSET
    }

    /// Bytes this record occupies in a stream
    pub fn encoded_len(&self) -> u64 {
        RECORD_OVERHEAD + self.name.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patched_sentinel() {
        assert!(TocEntry::new("patched_file.bin", 0, 128).is_patched());
        assert!(!TocEntry::new("base_file.bin", 0x800, 128).is_patched());
    }

    #[test]
    fn test_encoded_len() {
        assert_eq!(TocEntry::new("abc", 1, 2).encoded_len(), 15);
        assert_eq!(TocEntry::new("", 1, 2).encoded_len(), 12);
    }
}
