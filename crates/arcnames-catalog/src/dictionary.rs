//! Precedence-ordered dictionary of recovered paths
//!
//! The dictionary is the artifact consumed by catalog viewers. It maps every
//! recovered path to the archives it was found in, highest precedence first:
//!
//! ```json
//! {
//!   "textures/car.dds": {
//!     "path": ["dlc_win64/sky_fortress/game0", "archives_win64/game0"],
//!     "hash": "204f79bf"
//!   }
//! }
//! ```
//!
//! Keys and source lists are sorted, so identical inputs always produce
//! identical bytes.

use crate::error::{CatalogError, CatalogResult};
use crate::output::save_json;
use crate::resolver::ArchiveResolution;
use crate::source::LogicalSource;
use arcnames_hash::NameHash;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use tracing::info;

/// One recovered path with every archive it appears in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveredEntry {
    /// Hash shared by all occurrences
    pub hash: NameHash,
    /// Occurrences in precedence order
    pub sources: Vec<LogicalSource>,
}

/// Collects resolved names from every archive of a run
///
/// Nothing is ordered until [`finish`](Self::finish), which is the only
/// point where all occurrences of a path are known.
#[derive(Debug, Default)]
pub struct DictionaryMerger {
    entries: BTreeMap<String, (NameHash, BTreeSet<LogicalSource>)>,
}

impl DictionaryMerger {
    /// Create an empty merger
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `name` was found in `source`
    pub fn add(&mut self, name: &str, hash: NameHash, source: &LogicalSource) {
        if let Some((_, sources)) = self.entries.get_mut(name) {
            sources.insert(source.clone());
        } else {
            self.entries.insert(
                name.to_owned(),
                (hash, BTreeSet::from([source.clone()])),
            );
        }
    }

    /// Record every name of one archive
    pub fn add_resolution(&mut self, resolution: &ArchiveResolution) {
        for resolved in &resolution.names {
            self.add(&resolved.name, resolved.hash, &resolution.source);
        }
    }

    /// Order occurrences by precedence and produce the dictionary
    pub fn finish(self) -> Dictionary {
        let entries = self
            .entries
            .into_iter()
            .map(|(name, (hash, sources))| {
                let entry = RecoveredEntry {
                    hash,
                    sources: sources.into_iter().collect(),
                };
                (name, entry)
            })
            .collect();
        Dictionary { entries }
    }
}

/// Recovered paths keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: BTreeMap<String, RecoveredEntry>,
}

impl Dictionary {
    /// Entry for `name`
    pub fn get(&self, name: &str) -> Option<&RecoveredEntry> {
        self.entries.get(name)
    }

    /// Number of recovered paths
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was recovered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RecoveredEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Serializable form; `include_hash` controls the `hash` field
    pub fn to_document(&self, include_hash: bool) -> DictionaryDocument {
        self.entries
            .iter()
            .map(|(name, entry)| {
                let record = DictionaryRecord {
                    path: entry.sources.iter().map(|s| s.name().to_owned()).collect(),
                    hash: include_hash.then_some(entry.hash),
                };
                (name.clone(), record)
            })
            .collect()
    }

    /// Write the dictionary as JSON
    pub fn write_json<W: Write>(
        &self,
        writer: W,
        pretty: bool,
        include_hash: bool,
    ) -> serde_json::Result<()> {
        crate::output::write_json(writer, &self.to_document(include_hash), pretty)
    }

    /// Write the dictionary to `path`
    pub fn save(&self, path: &Path, pretty: bool, include_hash: bool) -> CatalogResult<()> {
        save_json(path, &self.to_document(include_hash), pretty)?;
        info!(path = %path.display(), names = self.len(), "wrote dictionary");
        Ok(())
    }
}

/// Stored form of one dictionary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryRecord {
    /// Source names in precedence order
    pub path: Vec<String>,
    /// Name hash, when written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<NameHash>,
}

impl DictionaryRecord {
    /// Archive with the highest precedence
    pub fn primary_source(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }
}

/// Stored dictionary, as read back from disk
pub type DictionaryDocument = BTreeMap<String, DictionaryRecord>;

/// Read a dictionary written by [`Dictionary::save`]
pub fn load_document(path: &Path) -> CatalogResult<DictionaryDocument> {
    let file = File::open(path).map_err(|e| CatalogError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::source::SourceKind;

    fn base() -> LogicalSource {
        LogicalSource::new("archives_win64/game0", SourceKind::Base)
    }

    fn patch() -> LogicalSource {
        LogicalSource::new("patch_win64/game0", SourceKind::Patch)
    }

    fn dlc() -> LogicalSource {
        LogicalSource::new("dlc_win64/sky_fortress/game0", SourceKind::Dlc)
    }

    #[test]
    fn test_precedence_independent_of_insert_order() {
        let hash = NameHash::from_path("textures/car.dds");
        let mut merger = DictionaryMerger::new();
        merger.add("textures/car.dds", hash, &base());
        merger.add("textures/car.dds", hash, &dlc());
        merger.add("textures/car.dds", hash, &patch());

        let dictionary = merger.finish();
        let entry = dictionary.get("textures/car.dds").unwrap();
        assert_eq!(entry.sources, vec![dlc(), patch(), base()]);
        assert_eq!(entry.hash, hash);
    }

    #[test]
    fn test_same_source_recorded_once() {
        let mut merger = DictionaryMerger::new();
        merger.add("a", NameHash::from_path("a"), &base());
        merger.add("a", NameHash::from_path("a"), &base());

        let dictionary = merger.finish();
        assert_eq!(dictionary.get("a").unwrap().sources.len(), 1);
    }

    #[test]
    fn test_json_schema() {
        let mut merger = DictionaryMerger::new();
        merger.add("textures/car.dds", NameHash::new(0x204f_79bf), &base());
        let dictionary = merger.finish();

        let mut out = Vec::new();
        dictionary.write_json(&mut out, false, true).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            r#"{"textures/car.dds":{"path":["archives_win64/game0"],"hash":"204f79bf"}}"#
        );

        let mut out = Vec::new();
        dictionary.write_json(&mut out, false, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            r#"{"textures/car.dds":{"path":["archives_win64/game0"]}}"#
        );
    }

    #[test]
    fn test_document_round_trip() {
        let mut merger = DictionaryMerger::new();
        merger.add("b", NameHash::from_path("b"), &patch());
        merger.add("b", NameHash::from_path("b"), &base());
        let document = merger.finish().to_document(true);

        let text = serde_json::to_string(&document).unwrap();
        let parsed: DictionaryDocument = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, document);
        assert_eq!(parsed["b"].primary_source(), Some("patch_win64/game0"));
    }
}
