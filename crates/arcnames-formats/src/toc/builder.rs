//! TOC stream builder

use super::{
    entry::TocEntry,
    error::{TocError, TocResult},
};
use binrw::BinWrite;
use std::io::{Cursor, Write};

/// Builds TOC record streams
#[derive(Debug, Clone, Default)]
pub struct TocBuilder {
    entries: Vec<TocEntry>,
}

impl TocBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record
    pub fn add_entry(mut self, entry: TocEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Serialize the records back-to-back
    pub fn build(&self) -> TocResult<Vec<u8>> {
        let size: u64 = self.entries.iter().map(TocEntry::encoded_len).sum();
        let mut out = Cursor::new(Vec::with_capacity(usize::try_from(size).unwrap_or(0)));

        for entry in &self.entries {
            let name_len = u32::try_from(entry.name.len())
                .map_err(|_| TocError::NameTooLong(entry.name.len()))?;
            name_len.write_le(&mut out)?;
            out.write_all(entry.name.as_bytes())?;
            entry.offset.write_le(&mut out)?;
            entry.size.write_le(&mut out)?;
        }

        Ok(out.into_inner())
    }
}
