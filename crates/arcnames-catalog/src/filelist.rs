//! Per-archive filelists
//!
//! A filelist holds the recovered names of one archive, sorted, followed by
//! a `; <found>/<total> (<pct>%)` line. Since the statistics line is a hint
//! comment, filelists can be fed straight back in as hint files.

use crate::coverage::CoverageStats;
use crate::dictionary::{Dictionary, DictionaryMerger};
use crate::discovery::discover;
use crate::error::{CatalogError, CatalogResult};
use crate::hints::{COMMENT_MARKER, parse_hints};
use crate::output::save_text;
use crate::profile::GameProfile;
use crate::resolver::ArchiveResolution;
use crate::source::MissingSourcePolicy;
use arcnames_hash::NameHash;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Extension of filelist files
pub const FILELIST_EXTENSION: &str = "filelist";

/// Name of the run-level statistics file
pub const STATUS_FILE: &str = "status.txt";

/// Write one filelist: names, then the statistics comment
pub fn write_filelist<W, S>(writer: &mut W, names: &[S], stats: &CoverageStats) -> io::Result<()>
where
    W: Write + ?Sized,
    S: AsRef<str>,
{
    for name in names {
        writeln!(writer, "{}", name.as_ref())?;
    }
    writeln!(writer, "{COMMENT_MARKER} {stats}")
}

/// Location of the filelist for a source named `<directory>/<stem>`
pub fn filelist_path(out_root: &Path, source: &str) -> PathBuf {
    out_root.join(format!("{source}.{FILELIST_EXTENSION}"))
}

/// Write the filelist of every archive below `out_root`
pub fn write_filelists(out_root: &Path, resolutions: &[ArchiveResolution]) -> CatalogResult<()> {
    for resolution in resolutions {
        let path = filelist_path(out_root, resolution.source.name());
        let names = resolution.sorted_names();
        save_text(&path, |out| {
            write_filelist(out, names.as_slice(), &resolution.stats)
        })?;
    }
    info!(out = %out_root.display(), filelists = resolutions.len(), "wrote filelists");
    Ok(())
}

/// Write the run total to `<out_root>/status.txt`
pub fn write_status(out_root: &Path, total: &CoverageStats) -> CatalogResult<()> {
    save_text(&out_root.join(STATUS_FILE), |out| write!(out, "{total}"))
}

/// Rebuild the dictionary from a tree of filelists laid out like the
/// profile's archive directories
pub fn dictionary_from_filelists(
    filelist_root: &Path,
    profile: &GameProfile,
    policy: MissingSourcePolicy,
) -> CatalogResult<Dictionary> {
    let discovery = discover(filelist_root, profile, FILELIST_EXTENSION, policy)?;
    let mut merger = DictionaryMerger::new();

    for file in &discovery.files {
        let bytes = fs::read(&file.path).map_err(|e| CatalogError::io(&file.path, e))?;
        let text = String::from_utf8_lossy(&bytes);
        for name in parse_hints(&text) {
            merger.add(name, NameHash::from_path(name), &file.source);
        }
    }

    let dictionary = merger.finish();
    info!(
        filelists = discovery.files.len(),
        names = dictionary.len(),
        "rebuilt dictionary from filelists"
    );
    Ok(dictionary)
}
