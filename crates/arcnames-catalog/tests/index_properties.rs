//! Property tests for hash index construction
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use arcnames_catalog::HashIndex;
use arcnames_hash::NameHash;
use proptest::prelude::*;

proptest! {
    #[test]
    fn single_hint_round_trips(path in "[a-z0-9_/]{1,64}\\.[a-z]{2,4}") {
        let index = HashIndex::from_hints([&path]);
        prop_assert_eq!(index.get(NameHash::from_path(&path)), Some(path.as_str()));
    }

    #[test]
    fn latest_hint_wins(hints in prop::collection::vec("[a-c]{1,3}", 1..40)) {
        let index = HashIndex::from_hints(&hints);
        for hint in &hints {
            let hash = NameHash::from_path(hint);
            let expected = hints
                .iter()
                .rev()
                .find(|h| NameHash::from_path(h) == hash)
                .unwrap();
            prop_assert_eq!(index.get(hash), Some(expected.as_str()));
        }
    }
}
