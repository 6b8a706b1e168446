//! Hash-keyed lookup artifact
//!
//! The inverse view of the dictionary: `{ "<hash hex>": "<path>" }`, used by
//! tools that start from a hash read out of an archive.

use crate::error::CatalogResult;
use crate::hints::HintCorpus;
use crate::index::HashIndex;
use crate::output::save_json;
use crate::source::MissingSourcePolicy;
use arcnames_hash::NameHash;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Sorted hash-to-path lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameHashLookup {
    entries: BTreeMap<NameHash, String>,
}

impl NameHashLookup {
    /// Snapshot an index
    pub fn from_index(index: &HashIndex) -> Self {
        let entries = index
            .iter()
            .map(|(hash, name)| (hash, name.to_owned()))
            .collect();
        Self { entries }
    }

    /// Build from hint files in order; later files win on collision, so
    /// hand-maintained hints belong last
    pub fn from_hint_files<I, P>(paths: I, policy: MissingSourcePolicy) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let corpus = HintCorpus::load(paths, policy)?;
        Ok(Self::from_index(&HashIndex::from_corpus(&corpus)))
    }

    /// Path for `hash`
    pub fn get(&self, hash: NameHash) -> Option<&str> {
        self.entries.get(&hash).map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lookup is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the lookup to `path`
    pub fn save(&self, path: &Path, pretty: bool) -> CatalogResult<()> {
        save_json(path, self, pretty)?;
        info!(path = %path.display(), names = self.len(), "wrote name hash lookup");
        Ok(())
    }
}
