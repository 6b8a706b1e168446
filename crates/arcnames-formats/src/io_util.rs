//! Short-read aware helpers shared by the stream readers

use std::io::{ErrorKind, Read, Result};

/// Fill `buf` from `reader`, stopping early only at end of stream.
///
/// Returns the number of bytes read. A value smaller than `buf.len()` means
/// the stream ran out; it is not reported as an error.
pub(crate) fn read_full<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
