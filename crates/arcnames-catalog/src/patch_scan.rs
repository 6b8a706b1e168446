//! Patch-delta discovery
//!
//! Entity files (`.ee`) come with a TOC (`.ee.toc`) listing the files they
//! pull in. A TOC record with offset 0 names a file whose current content
//! exists only in a patch archive; those names are often missing from every
//! hint corpus. This pass finds the TOCs through a previous dictionary, reads
//! their windows out of the ARC files and emits the names as hints for the
//! next run.

use crate::dictionary::DictionaryDocument;
use crate::discovery::{ARC_EXTENSION, TAB_EXTENSION};
use crate::error::{CatalogError, CatalogResult};
use crate::hints::write_hints;
use crate::output::save_text;
use crate::profile::GameProfile;
use crate::source::MissingSourcePolicy;
use arcnames_formats::tab::TabReader;
use arcnames_formats::toc::{TocError, TocReader, TocResult};
use arcnames_hash::NameHash;
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Marker of entity file names
pub const ENTITY_MARKER: &str = ".ee";

/// Suffix of TOC file names
pub const TOC_SUFFIX: &str = ".toc";

/// Patched names read from one TOC window
#[derive(Debug, Default)]
pub struct TocWindowScan {
    /// Names carrying the patched sentinel, in stream order
    pub patched: Vec<String>,
    /// Error that ended the window before its last record
    pub error: Option<TocError>,
}

/// Read the TOC window `[offset, offset + size)` and collect the names that
/// carry the patched sentinel.
///
/// A record that fails to decode ends the window; the names collected before
/// it are kept and the failure is returned in [`TocWindowScan::error`].
pub fn scan_toc_window<R: Read + Seek>(
    reader: &mut R,
    offset: u64,
    size: u64,
) -> TocResult<TocWindowScan> {
    reader.seek(SeekFrom::Start(offset))?;
    let mut scan = TocWindowScan::default();
    for entry in TocReader::new(reader, size) {
        match entry {
            Ok(entry) if entry.is_patched() => scan.patched.push(entry.name),
            Ok(_) => {}
            Err(e) => {
                scan.error = Some(e);
                break;
            }
        }
    }
    Ok(scan)
}

/// Outputs of a discovery pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchScanOutput {
    /// `.ee.toc` names derived from entity names
    pub generated: Vec<String>,
    /// Names found with the patched sentinel, first occurrence order
    pub patched: Vec<String>,
    /// TOC windows that were read
    pub tocs_read: usize,
    /// Archives whose TAB or ARC file was missing
    pub skipped: Vec<PathBuf>,
}

impl PatchScanOutput {
    /// Write both hint files
    pub fn save(&self, generated_path: &Path, patched_path: &Path) -> CatalogResult<()> {
        save_text(generated_path, |out| write_hints(out, &self.generated))?;
        save_text(patched_path, |out| write_hints(out, &self.patched))?;
        info!(
            generated = self.generated.len(),
            patched = self.patched.len(),
            "wrote patch discovery hints"
        );
        Ok(())
    }
}

/// Runs the discovery pass over one game installation
#[derive(Debug, Clone)]
pub struct PatchScanner<'a> {
    profile: &'a GameProfile,
    root: PathBuf,
    policy: MissingSourcePolicy,
}

impl<'a> PatchScanner<'a> {
    /// Create a scanner for the installation at `root`
    pub fn new(profile: &'a GameProfile, root: impl Into<PathBuf>) -> Self {
        Self {
            profile,
            root: root.into(),
            policy: MissingSourcePolicy::default(),
        }
    }

    /// Set the missing-archive policy
    pub const fn with_policy(mut self, policy: MissingSourcePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Scan every TOC reachable from `dictionary`
    pub fn run(&self, dictionary: &DictionaryDocument) -> CatalogResult<PatchScanOutput> {
        let (generated, targets) = collect_targets(dictionary);
        let mut output = PatchScanOutput {
            generated,
            ..PatchScanOutput::default()
        };
        let mut seen = HashSet::new();

        for (archive, wanted) in &targets {
            let tab_path = self.root.join(format!("{archive}.{TAB_EXTENSION}"));
            let arc_path = self.root.join(format!("{archive}.{ARC_EXTENSION}"));
            if !tab_path.is_file() || !arc_path.is_file() {
                let missing = if tab_path.is_file() { arc_path } else { tab_path };
                self.policy.handle(&missing, "archive")?;
                output.skipped.push(missing);
                continue;
            }

            let windows = self.find_windows(&tab_path, wanted)?;
            debug!(%archive, tocs = windows.len(), "located TOC windows");
            if windows.is_empty() {
                continue;
            }

            let mut arc = BufReader::new(
                File::open(&arc_path).map_err(|e| CatalogError::io(&arc_path, e))?,
            );
            for (offset, size) in windows {
                let offset = u64::from(offset);
                let scan = match scan_toc_window(&mut arc, offset, u64::from(size)) {
                    Ok(scan) => scan,
                    Err(source) => {
                        let err = toc_error(&arc_path, offset, source);
                        warn!(error = %err, "skipping unreadable TOC");
                        continue;
                    }
                };

                output.tocs_read += 1;
                if let Some(source) = scan.error {
                    let err = toc_error(&arc_path, offset, source);
                    warn!(
                        error = %err,
                        kept = scan.patched.len(),
                        "TOC ends at an unreadable record"
                    );
                }
                for name in scan.patched {
                    if seen.insert(name.clone()) {
                        output.patched.push(name);
                    }
                }
            }
        }

        info!(
            generated = output.generated.len(),
            tocs = output.tocs_read,
            patched = output.patched.len(),
            "patch discovery finished"
        );
        Ok(output)
    }

    /// `(offset, size)` of every TAB record whose hash is wanted
    fn find_windows(
        &self,
        tab_path: &Path,
        wanted: &[NameHash],
    ) -> CatalogResult<Vec<(u32, u32)>> {
        let wanted: HashSet<NameHash> = wanted.iter().copied().collect();
        let tab_error = |e| CatalogError::Tab {
            path: tab_path.to_path_buf(),
            source: e,
        };

        let file = File::open(tab_path).map_err(|e| CatalogError::io(tab_path, e))?;
        let reader =
            TabReader::new(BufReader::new(file), self.profile.format).map_err(tab_error)?;

        let mut windows = Vec::new();
        for record in reader {
            let record = record.map_err(tab_error)?;
            if wanted.contains(&record.hash) {
                debug!(
                    hash = %record.hash,
                    offset = record.offset,
                    size = record.size,
                    "found TOC"
                );
                windows.push((record.offset, record.size));
            }
        }
        Ok(windows)
    }
}

/// Split a dictionary into generated `.toc` names and, per archive, the TOCs
/// to look for. Each TOC is looked for in the archive its entry lists first.
fn collect_targets(
    dictionary: &DictionaryDocument,
) -> (Vec<String>, BTreeMap<String, Vec<NameHash>>) {
    let mut generated = Vec::new();
    let mut targets: BTreeMap<String, Vec<NameHash>> = BTreeMap::new();

    for (name, record) in dictionary {
        let Some(archive) = record.primary_source() else {
            continue;
        };

        let target = if name.contains(TOC_SUFFIX) {
            record.hash.unwrap_or_else(|| NameHash::from_path(name))
        } else if name.contains(ENTITY_MARKER) {
            let toc_name = format!("{name}{TOC_SUFFIX}");
            let hash = NameHash::from_path(&toc_name);
            generated.push(toc_name);
            hash
        } else {
            continue;
        };

        targets.entry(archive.to_owned()).or_default().push(target);
    }

    (generated, targets)
}

fn toc_error(path: &Path, offset: u64, source: TocError) -> CatalogError {
    CatalogError::Toc {
        path: path.to_path_buf(),
        offset,
        source,
    }
}
