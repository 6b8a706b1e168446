//! Per-archive hash resolution

use crate::coverage::CoverageStats;
use crate::error::{CatalogError, CatalogResult};
use crate::index::HashIndex;
use crate::source::LogicalSource;
use arcnames_formats::tab::{TabEntry, TabFormat, TabReader};
use arcnames_hash::NameHash;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

/// A record whose hash resolved to a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    /// Record hash
    pub hash: NameHash,
    /// Recovered path
    pub name: String,
}

/// Everything recovered from one archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveResolution {
    /// Archive the records came from
    pub source: LogicalSource,
    /// Resolved records in table order
    pub names: Vec<ResolvedName>,
    /// Hit/miss counts
    pub stats: CoverageStats,
}

impl ArchiveResolution {
    /// Recovered paths sorted ascending, without duplicates
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.names.iter().map(|n| n.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

/// Looks archive records up in a shared, read-only [`HashIndex`]
///
/// Each call is independent of every other, so one resolver can serve many
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    index: &'a HashIndex,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over `index`
    pub const fn new(index: &'a HashIndex) -> Self {
        Self { index }
    }

    /// Resolve a stream of records belonging to `source`
    pub fn resolve<I, E>(&self, source: LogicalSource, records: I) -> Result<ArchiveResolution, E>
    where
        I: IntoIterator<Item = Result<TabEntry, E>>,
    {
        let mut names = Vec::new();
        let mut stats = CoverageStats::default();

        for record in records {
            let record = record?;
            if let Some(name) = self.index.get(record.hash) {
                debug!(%source, hash = %record.hash, name, "found");
                names.push(ResolvedName {
                    hash: record.hash,
                    name: name.to_owned(),
                });
                stats.record_hit();
            } else {
                stats.record_miss();
            }
        }

        info!(%source, found = stats.found, total = stats.total, "{}", stats);
        Ok(ArchiveResolution {
            source,
            names,
            stats,
        })
    }

    /// Read the TAB file at `path` and resolve its records
    pub fn resolve_tab(
        &self,
        source: LogicalSource,
        path: &Path,
        format: TabFormat,
    ) -> CatalogResult<ArchiveResolution> {
        let file = File::open(path).map_err(|e| CatalogError::io(path, e))?;
        let tab_error = |e| CatalogError::Tab {
            path: path.to_path_buf(),
            source: e,
        };
        let reader = TabReader::new(BufReader::new(file), format).map_err(tab_error)?;
        self.resolve(source, reader).map_err(tab_error)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::source::SourceKind;
    use arcnames_formats::tab::TabError;

    fn records(hashes: &[u32]) -> Vec<Result<TabEntry, TabError>> {
        hashes
            .iter()
            .map(|&h| Ok(TabEntry::new(NameHash::new(h), 0, 0)))
            .collect()
    }

    #[test]
    fn test_counts_hits_and_misses() {
        let index = HashIndex::from_hints(["textures/car.dds"]);
        let source = LogicalSource::new("archives_win64/game0", SourceKind::Base);

        let resolution = Resolver::new(&index)
            .resolve(source, records(&[0x204f_79bf, 1, 2]))
            .unwrap();

        assert_eq!(resolution.stats.found, 1);
        assert_eq!(resolution.stats.not_found, 2);
        assert_eq!(resolution.stats.total, 3);
        assert_eq!(resolution.sorted_names(), ["textures/car.dds"]);
    }

    #[test]
    fn test_error_stops_resolution() {
        let index = HashIndex::default();
        let source = LogicalSource::new("a/b", SourceKind::Base);
        let mut input = records(&[1]);
        input.push(Err(TabError::UnexpectedBlocks(1)));

        assert!(Resolver::new(&index).resolve(source, input).is_err());
    }

    #[test]
    fn test_sorted_names_dedup() {
        let index = HashIndex::from_hints(["b", "a"]);
        let source = LogicalSource::new("a/b", SourceKind::Base);
        let b = NameHash::from_path("b").get();
        let a = NameHash::from_path("a").get();

        let resolution = Resolver::new(&index)
            .resolve(source, records(&[b, a, b]))
            .unwrap();
        assert_eq!(resolution.names.len(), 3);
        assert_eq!(resolution.sorted_names(), ["a", "b"]);
    }
}
