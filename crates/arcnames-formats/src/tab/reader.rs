//! Streaming TAB record reader

use super::{
    TabFormat,
    entry::{ExtendedTabEntry, LegacyTabEntry, TabEntry},
    error::{TabError, TabResult},
    header::TabHeader,
};
use crate::io_util::read_full;
use binrw::BinRead;
use std::io::{Cursor, Read, Seek, SeekFrom};
use tracing::{debug, trace, warn};

/// Largest record stride of any layout
const MAX_ENTRY_SIZE: usize = 20;

/// Outcome of a single record read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordRead {
    /// A complete record
    Record(TabEntry),
    /// The stream could not supply a full record. This is how every table
    /// ends; `trailing` counts the bytes of an incomplete final record.
    End {
        /// Bytes left over after the last complete record
        trailing: usize,
    },
}

/// Reads TAB records one stride at a time.
///
/// The header is read and validated on construction. Records are then read
/// until a short read, which yields [`RecordRead::End`]. A file that ends
/// inside its header is an empty table. I/O failures are returned as errors
/// and are never confused with the end of the table.
#[derive(Debug)]
pub struct TabReader<R> {
    inner: R,
    format: TabFormat,
    header: Option<TabHeader>,
    records_read: u64,
    finished: bool,
}

impl<R: Read + Seek> TabReader<R> {
    /// Read the header for `format` and position the reader on the first
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`TabError::InvalidMagic`] if the file is not an archive
    /// table.
    pub fn new(mut inner: R, format: TabFormat) -> TabResult<Self> {
        let header = match TabHeader::read(&mut inner, format) {
            Ok(header) => header,
            Err(TabError::TruncatedHeader { needed, actual, .. }) => {
                warn!(%format, needed, actual, "TAB ends inside its header, no records");
                return Ok(Self {
                    inner,
                    format,
                    header: None,
                    records_read: 0,
                    finished: true,
                });
            }
            Err(e) => return Err(e),
        };

        let skip = header.block_index_size();
        if skip > 0 {
            // Seeking past the end is allowed; the first record read then
            // reports an empty table.
            inner.seek(SeekFrom::Current(i64::try_from(skip).unwrap_or(i64::MAX)))?;
        }

        debug!(%format, skipped_block_bytes = skip, "read TAB header");

        Ok(Self {
            inner,
            format,
            header: Some(header),
            records_read: 0,
            finished: false,
        })
    }
}

impl<R: Read> TabReader<R> {
    /// Parsed file header, `None` when the file ends inside it
    pub const fn header(&self) -> Option<&TabHeader> {
        self.header.as_ref()
    }

    /// Layout generation being read
    pub const fn format(&self) -> TabFormat {
        self.format
    }

    /// Number of complete records returned so far
    pub const fn records_read(&self) -> u64 {
        self.records_read
    }

    /// Read the next record.
    ///
    /// Once [`RecordRead::End`] has been returned every further call returns
    /// `End { trailing: 0 }`.
    pub fn next_record(&mut self) -> TabResult<RecordRead> {
        if self.finished {
            return Ok(RecordRead::End { trailing: 0 });
        }

        let stride = self.format().entry_size();
        let mut buf = [0u8; MAX_ENTRY_SIZE];
        let got = match read_full(&mut self.inner, &mut buf[..stride]) {
            Ok(got) => got,
            Err(e) => {
                self.finished = true;
                return Err(e.into());
            }
        };

        if got < stride {
            self.finished = true;
            if got > 0 {
                debug!(
                    trailing = got,
                    records = self.records_read,
                    "TAB ends with a partial record"
                );
            }
            return Ok(RecordRead::End { trailing: got });
        }

        let mut cursor = Cursor::new(&buf[..stride]);
        let entry = match self.format() {
            TabFormat::Legacy => TabEntry::from(LegacyTabEntry::read(&mut cursor)?),
            TabFormat::Extended => TabEntry::from(ExtendedTabEntry::read(&mut cursor)?),
        };

        self.records_read += 1;
        trace!(hash = %entry.hash, offset = entry.offset, size = entry.size, "TAB record");
        Ok(RecordRead::Record(entry))
    }

    /// Consume the reader, returning the underlying stream
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Iterator for TabReader<R> {
    type Item = TabResult<TabEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_record() {
            Ok(RecordRead::Record(entry)) => Some(Ok(entry)),
            Ok(RecordRead::End { .. }) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
