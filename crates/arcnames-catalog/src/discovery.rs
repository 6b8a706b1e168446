//! Archive and filelist discovery under a game or output root

use crate::error::{CatalogError, CatalogResult};
use crate::profile::GameProfile;
use crate::source::{LogicalSource, MissingSourcePolicy};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Extension of archive table files
pub const TAB_EXTENSION: &str = "tab";

/// Extension of archive payload files
pub const ARC_EXTENSION: &str = "arc";

/// One file found in a profile directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Source named after the profile directory and the file stem
    pub source: LogicalSource,
    /// Location on disk
    pub path: PathBuf,
}

/// Files found across all directories of a profile
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Files in directory order, then by file name
    pub files: Vec<SourceFile>,
    /// Directories that did not exist
    pub skipped: Vec<PathBuf>,
}

/// Files directly inside `dir` with the given extension, sorted by name
pub fn list_files(dir: &Path, extension: &str) -> CatalogResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| CatalogError::io(dir, e.into()))?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// Find every `*.<extension>` file in the profile's directories below `root`
pub fn discover(
    root: &Path,
    profile: &GameProfile,
    extension: &str,
    policy: MissingSourcePolicy,
) -> CatalogResult<Discovery> {
    let mut discovery = Discovery::default();

    for directory in profile.directories {
        let dir = root.join(directory.path);
        if !dir.is_dir() {
            policy.handle(&dir, "archive directory")?;
            discovery.skipped.push(dir);
            continue;
        }

        let found = list_files(&dir, extension)?;
        debug!(directory = directory.path, files = found.len(), "scanned directory");

        for path in found {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let source = LogicalSource::for_archive(directory.path, stem, directory.kind);
            discovery.files.push(SourceFile { source, path });
        }
    }

    Ok(discovery)
}
