//! Artifact writing helpers

use crate::error::{CatalogError, CatalogResult};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize `value` as JSON, pretty-printed or compact
pub fn write_json<W, T>(writer: W, value: &T, pretty: bool) -> serde_json::Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    if pretty {
        serde_json::to_writer_pretty(writer, value)
    } else {
        serde_json::to_writer(writer, value)
    }
}

/// Create `path` (and its parent directories) for buffered writing
pub fn create_file(path: &Path) -> CatalogResult<BufWriter<File>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| CatalogError::io(path, e))?;
    Ok(BufWriter::new(file))
}

/// Write `value` as a JSON file at `path`
pub fn save_json<T>(path: &Path, value: &T, pretty: bool) -> CatalogResult<()>
where
    T: Serialize + ?Sized,
{
    let mut out = create_file(path)?;
    write_json(&mut out, value, pretty).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    out.flush().map_err(|e| CatalogError::io(path, e))
}

/// Write a text artifact through `write`, creating parent directories
pub fn save_text<F>(path: &Path, write: F) -> CatalogResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let mut out = create_file(path)?;
    write(&mut out)
        .and_then(|()| out.flush())
        .map_err(|e| CatalogError::io(path, e))
}
