//! TAB file builder

use super::{
    TabFormat,
    entry::TabEntry,
    error::{TabError, TabResult},
    header::{CompressedBlock, ExtendedTabHeader, LegacyTabHeader, TabHeader},
};
use binrw::BinWrite;
use std::io::Cursor;

/// Builds TAB files in either layout
#[derive(Debug, Clone)]
pub struct TabBuilder {
    format: TabFormat,
    legacy_header: LegacyTabHeader,
    extended_header: ExtendedTabHeader,
    blocks: Vec<CompressedBlock>,
    entries: Vec<TabEntry>,
}

impl TabBuilder {
    /// Create a builder with default header fields for `format`
    pub fn new(format: TabFormat) -> Self {
        Self {
            format,
            legacy_header: LegacyTabHeader::default(),
            extended_header: ExtendedTabHeader::default(),
            blocks: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Override the legacy header fields
    pub fn legacy_header(mut self, header: LegacyTabHeader) -> Self {
        self.legacy_header = header;
        self
    }

    /// Override the extended header fields
    pub fn extended_header(mut self, header: ExtendedTabHeader) -> Self {
        self.extended_header = header;
        self
    }

    /// Append a compressed-block index entry (extended layout only)
    pub fn add_block(mut self, block: CompressedBlock) -> Self {
        self.blocks.push(block);
        self
    }

    /// Append a record
    pub fn add_entry(mut self, entry: TabEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Append several records
    pub fn add_entries(mut self, entries: impl IntoIterator<Item = TabEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Serialize the table
    pub fn build(&self) -> TabResult<Vec<u8>> {
        let header = match self.format {
            TabFormat::Legacy => {
                if !self.blocks.is_empty() {
                    return Err(TabError::UnexpectedBlocks(self.blocks.len()));
                }
                TabHeader::Legacy(self.legacy_header.clone())
            }
            TabFormat::Extended => TabHeader::Extended {
                header: self.extended_header.clone(),
                block_count: self.blocks.len() as u32,
            },
        };

        let size = self.format.header_size()
            + self.blocks.len() * self.format.block_entry_size()
            + self.entries.len() * self.format.entry_size()
            + 4;
        let mut out = Cursor::new(Vec::with_capacity(size));

        header.write(&mut out)?;
        for block in &self.blocks {
            block.write(&mut out)?;
        }
        for entry in &self.entries {
            match self.format {
                TabFormat::Legacy => entry.to_legacy().write(&mut out)?,
                TabFormat::Extended => entry.to_extended().write(&mut out)?,
            }
        }

        Ok(out.into_inner())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use arcnames_hash::NameHash;

    #[test]
    fn test_legacy_size() {
        let data = TabBuilder::new(TabFormat::Legacy)
            .add_entries((0..5).map(|i| TabEntry::new(NameHash::new(i), 0, 0)))
            .build()
            .unwrap();
        assert_eq!(data.len(), 12 + 5 * 12);
        assert_eq!(&data[0..4], b"TAB\0");
    }

    #[test]
    fn test_extended_size() {
        let data = TabBuilder::new(TabFormat::Extended)
            .add_block(CompressedBlock {
                compressed_size: 1,
                uncompressed_size: 2,
            })
            .add_entry(TabEntry::new(NameHash::new(1), 0, 0))
            .build()
            .unwrap();
        assert_eq!(data.len(), 24 + 4 + 8 + 20);
        assert_eq!(&data[24..28], &1u32.to_le_bytes());
    }

    #[test]
    fn test_legacy_rejects_blocks() {
        let result = TabBuilder::new(TabFormat::Legacy)
            .add_block(CompressedBlock {
                compressed_size: 1,
                uncompressed_size: 1,
            })
            .build();
        assert!(matches!(result, Err(TabError::UnexpectedBlocks(1))));
    }
}
