//! Windowed TOC record reader

use super::{
    entry::{RECORD_OVERHEAD, TocEntry},
    error::{TocError, TocResult},
};
use crate::io_util::read_full;
use std::io::Read;
use tracing::{debug, trace};

/// Outcome of a single record read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TocRead {
    /// A complete record
    Record(TocEntry),
    /// The window is exhausted or cannot hold another full record
    End {
        /// Window bytes left unconsumed
        trailing: u64,
    },
}

/// Reads TOC records back-to-back from a window of `window` bytes.
///
/// The reader must already be positioned at the start of the window. The end
/// is tracked with a running byte count rather than end of file, so the
/// window may sit in the middle of a larger ARC file. A record that would
/// cross the window boundary, or that the stream cannot fully supply, ends
/// the table.
#[derive(Debug)]
pub struct TocReader<R> {
    inner: R,
    window: u64,
    consumed: u64,
    records_read: u64,
    finished: bool,
}

impl<R: Read> TocReader<R> {
    /// Start reading a window of `window` bytes
    pub const fn new(inner: R, window: u64) -> Self {
        Self {
            inner,
            window,
            consumed: 0,
            records_read: 0,
            finished: false,
        }
    }

    /// Window bytes consumed so far
    pub const fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Number of complete records returned so far
    pub const fn records_read(&self) -> u64 {
        self.records_read
    }

    fn end(&mut self) -> TocRead {
        self.finished = true;
        let trailing = self.window.saturating_sub(self.consumed);
        if trailing > 0 {
            debug!(
                trailing,
                records = self.records_read,
                "TOC window ends with a partial record"
            );
        }
        TocRead::End { trailing }
    }

    /// Read the next record
    pub fn next_record(&mut self) -> TocResult<TocRead> {
        if self.finished {
            return Ok(TocRead::End { trailing: 0 });
        }
        let remaining = self.window.saturating_sub(self.consumed);
        if remaining < RECORD_OVERHEAD {
            return Ok(self.end());
        }

        let mut len_buf = [0u8; 4];
        if self.fill(&mut len_buf)? < len_buf.len() {
            return Ok(self.end());
        }
        let name_len = u64::from(u32::from_le_bytes(len_buf));
        if RECORD_OVERHEAD + name_len > remaining {
            return Ok(self.end());
        }

        // Bounded by the window check above
        let mut name = vec![0u8; name_len as usize];
        if self.fill(&mut name)? < name.len() {
            return Ok(self.end());
        }

        let mut tail = [0u8; 8];
        if self.fill(&mut tail)? < tail.len() {
            return Ok(self.end());
        }

        let index = self.records_read;
        let name = String::from_utf8(name).map_err(|source| {
            self.finished = true;
            TocError::InvalidName { index, source }
        })?;
        let offset = u32::from_le_bytes([tail[0], tail[1], tail[2], tail[3]]);
        let size = u32::from_le_bytes([tail[4], tail[5], tail[6], tail[7]]);

        self.consumed += RECORD_OVERHEAD + name_len;
        self.records_read += 1;
        trace!(%name, offset, size, "TOC record");
        Ok(TocRead::Record(TocEntry { name, offset, size }))
    }

    fn fill(&mut self, buf: &mut [u8]) -> TocResult<usize> {
        read_full(&mut self.inner, buf).map_err(|e| {
            self.finished = true;
            TocError::Io(e)
        })
    }

    /// Consume the reader, returning the underlying stream
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Iterator for TocReader<R> {
    type Item = TocResult<TocEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_record() {
            Ok(TocRead::Record(entry)) => Some(Ok(entry)),
            Ok(TocRead::End { .. }) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::toc::TocBuilder;
    use std::io::Cursor;

    fn two_records() -> Vec<u8> {
        TocBuilder::new()
            .add_entry(TocEntry::new("patched_file.bin", 0, 128))
            .add_entry(TocEntry::new("base_file.bin", 0x4000, 64))
            .build()
            .unwrap()
    }

    #[test]
    fn test_reads_window() {
        let data = two_records();
        let mut reader = TocReader::new(Cursor::new(&data), data.len() as u64);

        match reader.next_record().unwrap() {
            TocRead::Record(entry) => {
                assert_eq!(entry.name, "patched_file.bin");
                assert!(entry.is_patched());
            }
            TocRead::End { .. } => panic!("ended early"),
        }
        assert!(matches!(reader.next_record().unwrap(), TocRead::Record(_)));
        assert_eq!(reader.next_record().unwrap(), TocRead::End { trailing: 0 });
        assert_eq!(reader.consumed(), data.len() as u64);
    }

    #[test]
    fn test_window_stops_before_following_data() {
        let mut data = two_records();
        let window = data.len() as u64;
        // Unrelated bytes after the window must not be parsed
        data.extend_from_slice(&[0xff; 32]);

        let entries: Vec<_> = TocReader::new(Cursor::new(&data), window)
            .collect::<TocResult<_>>()
            .unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_record_crossing_window_ends() {
        let data = two_records();
        // Window covers the first record and half of the second
        let first = TocEntry::new("patched_file.bin", 0, 128).encoded_len();
        let mut reader = TocReader::new(Cursor::new(&data), first + 10);

        assert!(matches!(reader.next_record().unwrap(), TocRead::Record(_)));
        assert_eq!(reader.next_record().unwrap(), TocRead::End { trailing: 10 });
    }

    #[test]
    fn test_short_stream_ends() {
        let data = two_records();
        let truncated = &data[..data.len() - 3];
        let mut reader = TocReader::new(Cursor::new(truncated), data.len() as u64);

        assert!(matches!(reader.next_record().unwrap(), TocRead::Record(_)));
        assert!(matches!(reader.next_record().unwrap(), TocRead::End { .. }));
        assert_eq!(reader.records_read(), 1);
    }

    #[test]
    fn test_oversized_length_prefix_is_not_allocated() {
        let mut data = Vec::new();
        data.extend_from_slice(&u32::MAX.to_le_bytes());
        data.extend_from_slice(&[0u8; 8]);

        let mut reader = TocReader::new(Cursor::new(&data), data.len() as u64);
        assert!(matches!(reader.next_record().unwrap(), TocRead::End { .. }));
    }

    #[test]
    fn test_invalid_utf8_name() {
        let mut data = Vec::new();
        data.extend_from_slice(&2u32.to_le_bytes());
        data.extend_from_slice(&[0xc3, 0x28]);
        data.extend_from_slice(&[0u8; 8]);

        let mut reader = TocReader::new(Cursor::new(&data), data.len() as u64);
        let err = reader.next_record().unwrap_err();
        assert!(matches!(err, TocError::InvalidName { index: 0, .. }));
    }

    #[test]
    fn test_empty_window() {
        let mut reader = TocReader::new(Cursor::new(Vec::new()), 0);
        assert_eq!(reader.next_record().unwrap(), TocRead::End { trailing: 0 });
    }
}
