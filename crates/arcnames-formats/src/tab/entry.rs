//! TAB directory records

use arcnames_hash::NameHash;
use binrw::{BinRead, BinWrite};

/// Legacy on-disk record (12 bytes)
#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Eq)]
#[brw(little)]
pub struct LegacyTabEntry {
    /// lookup3 hash of the entry path
    #[br(map = NameHash::new)]
    #[bw(map = |h: &NameHash| h.get())]
    pub hash: NameHash,
    /// Payload offset in the ARC file
    pub offset: u32,
    /// Payload size in bytes
    pub size: u32,
}

/// Extended on-disk record (20 bytes)
#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Eq)]
#[brw(little)]
pub struct ExtendedTabEntry {
    /// lookup3 hash of the entry path
    #[br(map = NameHash::new)]
    #[bw(map = |h: &NameHash| h.get())]
    pub hash: NameHash,
    /// Payload offset in the ARC file
    pub offset: u32,
    /// Stored (possibly compressed) size
    pub size: u32,
    /// Size after decompression
    pub uncompressed_size: u32,
    /// First compressed block of the payload
    pub compressed_block_index: u16,
    /// Compression scheme identifier
    pub compression_type: u8,
    /// Entry flags
    pub flags: u8,
}

/// Layout-specific record fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryDetails {
    /// Legacy records carry nothing beyond hash, offset and size
    #[default]
    Legacy,
    /// Extended record fields
    Extended {
        /// Size after decompression
        uncompressed_size: u32,
        /// First compressed block of the payload
        compressed_block_index: u16,
        /// Compression scheme identifier
        compression_type: u8,
        /// Entry flags
        flags: u8,
    },
}

/// One directory record, independent of layout generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabEntry {
    /// lookup3 hash of the entry path
    pub hash: NameHash,
    /// Payload offset in the ARC file
    pub offset: u32,
    /// Payload size in bytes
    pub size: u32,
    /// Layout-specific fields
    pub details: EntryDetails,
}

impl TabEntry {
    /// Create a record with no extended fields
    pub const fn new(hash: NameHash, offset: u32, size: u32) -> Self {
        Self {
            hash,
            offset,
            size,
            details: EntryDetails::Legacy,
        }
    }

    /// Attach extended fields
    pub const fn with_details(mut self, details: EntryDetails) -> Self {
        self.details = details;
        self
    }

    /// Convert to the extended on-disk record, zero-filling missing fields
    pub fn to_extended(&self) -> ExtendedTabEntry {
        let (uncompressed_size, compressed_block_index, compression_type, flags) =
            match self.details {
                EntryDetails::Legacy => (self.size, 0, 0, 0),
                EntryDetails::Extended {
                    uncompressed_size,
                    compressed_block_index,
                    compression_type,
                    flags,
                } => (
                    uncompressed_size,
                    compressed_block_index,
                    compression_type,
                    flags,
                ),
            };

        ExtendedTabEntry {
            hash: self.hash,
            offset: self.offset,
            size: self.size,
            uncompressed_size,
            compressed_block_index,
            compression_type,
            flags,
        }
    }

    /// Convert to the legacy on-disk record, dropping extended fields
    pub const fn to_legacy(&self) -> LegacyTabEntry {
        LegacyTabEntry {
            hash: self.hash,
            offset: self.offset,
            size: self.size,
        }
    }
}

impl From<LegacyTabEntry> for TabEntry {
    fn from(raw: LegacyTabEntry) -> Self {
        Self::new(raw.hash, raw.offset, raw.size)
    }
}

impl From<ExtendedTabEntry> for TabEntry {
    fn from(raw: ExtendedTabEntry) -> Self {
        Self {
            hash: raw.hash,
            offset: raw.offset,
            size: raw.size,
            details: EntryDetails::Extended {
                uncompressed_size: raw.uncompressed_size,
                compressed_block_index: raw.compressed_block_index,
                compression_type: raw.compression_type,
                flags: raw.flags,
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use binrw::io::Cursor;

    #[test]
    fn test_legacy_layout() {
        let raw = LegacyTabEntry {
            hash: NameHash::new(0x204f_79bf),
            offset: 0x100,
            size: 0x40,
        };
        let mut out = Cursor::new(Vec::new());
        raw.write(&mut out).unwrap();
        let bytes = out.into_inner();

        assert_eq!(bytes.len(), 12);
        assert_eq!(&bytes[0..4], &[0xbf, 0x79, 0x4f, 0x20]);
        assert_eq!(&bytes[4..8], &0x100u32.to_le_bytes());
        assert_eq!(&bytes[8..12], &0x40u32.to_le_bytes());
    }

    #[test]
    fn test_extended_layout() {
        let raw = ExtendedTabEntry {
            hash: NameHash::new(0xdead_beef),
            offset: 0x2000,
            size: 10,
            uncompressed_size: 20,
            compressed_block_index: 0x0102,
            compression_type: 1,
            flags: 0x80,
        };
        let mut out = Cursor::new(Vec::new());
        raw.write(&mut out).unwrap();
        let bytes = out.into_inner();

        assert_eq!(bytes.len(), 20);
        assert_eq!(&bytes[16..18], &[0x02, 0x01]);
        assert_eq!(bytes[18], 1);
        assert_eq!(bytes[19], 0x80);

        let parsed = ExtendedTabEntry::read(&mut Cursor::new(&bytes)).unwrap();
        assert_eq!(parsed, raw);
    }

    #[test]
    fn test_extended_conversion_keeps_details() {
        let raw = ExtendedTabEntry {
            hash: NameHash::new(7),
            offset: 1,
            size: 2,
            uncompressed_size: 3,
            compressed_block_index: 4,
            compression_type: 5,
            flags: 6,
        };
        let entry = TabEntry::from(raw);
        assert_eq!(entry.to_extended(), raw);
        assert_eq!(entry.to_legacy().size, 2);
    }

    #[test]
    fn test_legacy_entry_to_extended_defaults() {
        let entry = TabEntry::new(NameHash::new(9), 0x10, 0x20);
        let ext = entry.to_extended();
        assert_eq!(ext.uncompressed_size, 0x20);
        assert_eq!(ext.compressed_block_index, 0);
    }
}
