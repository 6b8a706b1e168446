//! Hash-to-path index

use crate::hints::HintCorpus;
use arcnames_hash::NameHash;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Immutable map from name hash to candidate path
///
/// Built once per run from hints in load order. When two hints share a hash
/// the later one replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct HashIndex {
    names: HashMap<NameHash, String>,
    collisions: usize,
}

impl HashIndex {
    /// Build an index from a corpus
    pub fn from_corpus(corpus: &HintCorpus) -> Self {
        Self::from_hints(corpus.entries())
    }

    /// Build an index from hints in order
    pub fn from_hints<I, S>(hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = HashIndexBuilder::default();
        for hint in hints {
            builder.insert(hint.as_ref());
        }
        builder.build()
    }

    /// Path recorded for `hash`
    pub fn get(&self, hash: NameHash) -> Option<&str> {
        self.names.get(&hash).map(String::as_str)
    }

    /// Number of distinct hashes
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of hints that replaced a different path with the same hash
    pub const fn collisions(&self) -> usize {
        self.collisions
    }

    /// All entries, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (NameHash, &str)> {
        self.names.iter().map(|(hash, name)| (*hash, name.as_str()))
    }
}

/// Incremental construction of a [`HashIndex`]
#[derive(Debug, Default)]
pub struct HashIndexBuilder {
    names: HashMap<NameHash, String>,
    collisions: usize,
}

impl HashIndexBuilder {
    /// Hash `name` and record it, replacing any earlier path with the same
    /// hash
    pub fn insert(&mut self, name: &str) -> NameHash {
        let hash = NameHash::from_path(name);
        if let Some(previous) = self.names.insert(hash, name.to_owned())
            && previous != name
        {
            self.collisions += 1;
            trace!(%hash, %previous, replacement = name, "hash collision");
        }
        hash
    }

    /// Freeze the index
    pub fn build(self) -> HashIndex {
        debug!(
            names = self.names.len(),
            collisions = self.collisions,
            "built hash index"
        );
        HashIndex {
            names: self.names,
            collisions: self.collisions,
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let index = HashIndex::from_hints(["textures/car.dds"]);
        assert_eq!(
            index.get(NameHash::new(0x204f_79bf)),
            Some("textures/car.dds")
        );
        assert_eq!(index.get(NameHash::new(0)), None);
    }

    #[test]
    fn test_collision_last_write_wins() {
        let index = HashIndex::from_hints(["textures/hint_18130.dds", "textures/hint_79585.dds"]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.collisions(), 1);
        assert_eq!(
            index.get(NameHash::new(0x0fe0_8446)),
            Some("textures/hint_79585.dds")
        );

        let reversed =
            HashIndex::from_hints(["textures/hint_79585.dds", "textures/hint_18130.dds"]);
        assert_eq!(
            reversed.get(NameHash::new(0x0fe0_8446)),
            Some("textures/hint_18130.dds")
        );
    }

    #[test]
    fn test_duplicate_hint_is_not_a_collision() {
        let index = HashIndex::from_hints(["a", "a"]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.collisions(), 0);
    }
}
