//! The recovery run: discover archives, resolve them in parallel, merge
//!
//! ```text
//! hint files ──► HintCorpus ──► HashIndex (read-only)
//!                                   │
//! game root ──► discover ──► [TAB] ─┼─► Resolver (one rayon task per TAB)
//!                                   ▼
//!                     Vec<ArchiveResolution> ──► CoverageReport
//!                                   └──────────► DictionaryMerger ──► Dictionary
//! ```

use crate::coverage::CoverageReport;
use crate::dictionary::{Dictionary, DictionaryMerger};
use crate::discovery::{TAB_EXTENSION, discover};
use crate::error::CatalogResult;
use crate::filelist::{write_filelists, write_status};
use crate::index::HashIndex;
use crate::profile::GameProfile;
use crate::resolver::{ArchiveResolution, Resolver};
use crate::source::MissingSourcePolicy;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Recovers names for every archive of one game installation
#[derive(Debug, Clone)]
pub struct RecoveryPipeline<'a> {
    profile: &'a GameProfile,
    root: PathBuf,
    policy: MissingSourcePolicy,
}

/// Results of a recovery run
#[derive(Debug, Clone, Default)]
pub struct RecoveryOutput {
    /// Per-archive results in discovery order
    pub resolutions: Vec<ArchiveResolution>,
    /// Per-archive and total statistics
    pub coverage: CoverageReport,
    /// Merged, precedence-ordered dictionary
    pub dictionary: Dictionary,
    /// Archive directories that were missing
    pub skipped: Vec<PathBuf>,
}

impl<'a> RecoveryPipeline<'a> {
    /// Create a pipeline for the installation at `root`
    pub fn new(profile: &'a GameProfile, root: impl Into<PathBuf>) -> Self {
        Self {
            profile,
            root: root.into(),
            policy: MissingSourcePolicy::default(),
        }
    }

    /// Set the missing-directory policy
    pub const fn with_policy(mut self, policy: MissingSourcePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Resolve every TAB of the installation against `index`.
    ///
    /// A TAB with the wrong magic aborts the whole run.
    pub fn run(&self, index: &HashIndex) -> CatalogResult<RecoveryOutput> {
        let discovery = discover(&self.root, self.profile, TAB_EXTENSION, self.policy)?;
        info!(
            game = %self.profile.game,
            archives = discovery.files.len(),
            hints = index.len(),
            "resolving archives"
        );

        let resolver = Resolver::new(index);
        let format = self.profile.format;
        let resolutions = discovery
            .files
            .par_iter()
            .map(|file| resolver.resolve_tab(file.source.clone(), &file.path, format))
            .collect::<CatalogResult<Vec<_>>>()?;

        let mut coverage = CoverageReport::default();
        let mut merger = DictionaryMerger::new();
        for resolution in &resolutions {
            coverage.add(resolution.source.name(), resolution.stats);
            merger.add_resolution(resolution);
        }
        let dictionary = merger.finish();

        if !discovery.skipped.is_empty() {
            warn!(
                directories = discovery.skipped.len(),
                "some archive directories were missing"
            );
        }
        let total = &coverage.total;
        info!(
            total = total.total,
            found = total.found,
            not_found = total.not_found,
            names = dictionary.len(),
            "{} hashes, {} found, {} unknown ({}%)",
            total.total,
            total.found,
            total.not_found,
            total.percentage()
        );

        Ok(RecoveryOutput {
            resolutions,
            coverage,
            dictionary,
            skipped: discovery.skipped,
        })
    }
}

impl RecoveryOutput {
    /// Write every filelist and `status.txt` below `out_root`
    pub fn write_filelists(&self, out_root: &Path) -> CatalogResult<()> {
        write_filelists(out_root, &self.resolutions)?;
        write_status(out_root, &self.coverage.total)
    }
}
