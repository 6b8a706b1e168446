//! TAB header structures for both layout generations

use super::{TAB_MAGIC, TabFormat, error::TabError, error::TabResult};
use crate::io_util::read_full;
use binrw::{BinRead, BinWrite};
use std::io::{Cursor, Read, Seek, Write};

/// Bytes of the extended block-count field that follows the fixed header
const BLOCK_COUNT_SIZE: usize = 4;

/// Legacy header fields following the magic (8 bytes)
#[derive(BinRead, BinWrite, Debug, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct LegacyTabHeader {
    /// Format version
    pub version: u16,
    /// Endianness marker (always little-endian in shipped files)
    pub endian: u16,
    /// Payload alignment in the ARC file
    pub alignment: u32,
}

impl Default for LegacyTabHeader {
    fn default() -> Self {
        Self {
            version: 1,
            endian: 1,
            alignment: 0x800,
        }
    }
}

/// Extended header fields following the magic (20 bytes)
#[derive(BinRead, BinWrite, Debug, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct ExtendedTabHeader {
    /// Format version
    pub version: u16,
    /// Endianness marker
    pub endian: u16,
    /// Payload alignment in the ARC file
    pub alignment: u32,
    /// Unidentified field, preserved as-is
    pub unknown: u32,
    /// Largest compressed block in the ARC file
    pub max_compressed_block_size: u32,
    /// Size of a fully decompressed block
    pub uncompressed_block_size: u32,
}

impl Default for ExtendedTabHeader {
    fn default() -> Self {
        Self {
            version: 2,
            endian: 1,
            alignment: 0x1000,
            unknown: 0,
            max_compressed_block_size: 0,
            uncompressed_block_size: 0x4_0000,
        }
    }
}

/// Compressed-block index entry (extended layout)
///
/// The reader skips these in bulk; they are only modelled so the builder can
/// produce faithful tables.
#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Eq)]
#[brw(little)]
pub struct CompressedBlock {
    /// Compressed size in bytes
    pub compressed_size: u32,
    /// Decompressed size in bytes
    pub uncompressed_size: u32,
}

/// Parsed TAB header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabHeader {
    /// First-generation header
    Legacy(LegacyTabHeader),
    /// Second-generation header plus the size of its block index
    Extended {
        /// Fixed header fields
        header: ExtendedTabHeader,
        /// Number of compressed-block index entries that follow
        block_count: u32,
    },
}

impl TabHeader {
    /// Layout generation of this header
    pub const fn format(&self) -> TabFormat {
        match self {
            Self::Legacy(_) => TabFormat::Legacy,
            Self::Extended { .. } => TabFormat::Extended,
        }
    }

    /// Bytes between the end of the header and the first record
    pub fn block_index_size(&self) -> u64 {
        match self {
            Self::Legacy(_) => 0,
            Self::Extended { block_count, .. } => {
                u64::from(*block_count) * TabFormat::Extended.block_entry_size() as u64
            }
        }
    }

    /// Read the header for `format`, validating the magic first.
    ///
    /// Stops right after the header (and, for the extended layout, after the
    /// block count); the block index itself is left for the caller to skip.
    pub fn read<R: Read + ?Sized>(reader: &mut R, format: TabFormat) -> TabResult<Self> {
        let header_size = format.header_size();
        let mut buf = [0u8; 24];
        let buf = &mut buf[..header_size];
        let got = read_full(reader, buf)?;

        if got < 4 {
            return Err(TabError::TruncatedHeader {
                format,
                needed: header_size,
                actual: got,
            });
        }

        let magic = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
        if magic != TAB_MAGIC {
            return Err(TabError::InvalidMagic {
                expected: TAB_MAGIC,
                actual: magic,
            });
        }

        if got < header_size {
            return Err(TabError::TruncatedHeader {
                format,
                needed: header_size,
                actual: got,
            });
        }

        let mut body = Cursor::new(&buf[4..]);
        match format {
            TabFormat::Legacy => Ok(Self::Legacy(LegacyTabHeader::read(&mut body)?)),
            TabFormat::Extended => {
                let header = ExtendedTabHeader::read(&mut body)?;

                let mut count = [0u8; BLOCK_COUNT_SIZE];
                let got_count = read_full(reader, &mut count)?;
                if got_count < BLOCK_COUNT_SIZE {
                    return Err(TabError::TruncatedHeader {
                        format,
                        needed: header_size + BLOCK_COUNT_SIZE,
                        actual: header_size + got_count,
                    });
                }

                Ok(Self::Extended {
                    header,
                    block_count: u32::from_le_bytes(count),
                })
            }
        }
    }

    /// Write the magic, header fields and (extended) block count
    pub fn write<W: Write + Seek>(&self, writer: &mut W) -> binrw::BinResult<()> {
        TAB_MAGIC.write_le(writer)?;
        match self {
            Self::Legacy(header) => header.write(writer),
            Self::Extended {
                header,
                block_count,
            } => {
                header.write(writer)?;
                block_count.write_le(writer)
            }
        }
    }
}
