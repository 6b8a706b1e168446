//! Filename recovery for hash-addressed game archives
//!
//! Archive tables only store a lookup3 hash of each contained path. This
//! crate turns hint corpora (lists of candidate paths) into a hash index,
//! resolves every TAB of a game installation against it, and merges the
//! results into a deterministic, precedence-ordered dictionary.
//!
//! # Components
//!
//! - **hints**: ordered hint corpora, `;` comment lines skipped
//! - **index**: immutable hash-to-path map, later hints win on collision
//! - **resolver**: per-archive lookup with [`CoverageStats`]
//! - **dictionary**: precedence merge (DLC over patch over base)
//! - **pipeline**: parallel run over a [`GameProfile`]
//! - **patch_scan**: TOC-based discovery of patch-only names
//!
//! # Example
//!
//! ```
//! use arcnames_catalog::{
//!     DictionaryMerger, HashIndex, LogicalSource, Resolver, SourceKind,
//! };
//! use arcnames_formats::tab::{TabEntry, TabError};
//! use arcnames_hash::NameHash;
//!
//! let index = HashIndex::from_hints(["textures/car.dds"]);
//! let records = [Ok::<_, TabError>(TabEntry::new(NameHash::new(0x204f_79bf), 0x100, 0x40))];
//!
//! let source = LogicalSource::new("archives_win64/game0", SourceKind::Base);
//! let resolution = Resolver::new(&index).resolve(source, records)?;
//! assert_eq!(resolution.stats.to_string(), "1/1 (100.00%)");
//!
//! let mut merger = DictionaryMerger::new();
//! merger.add_resolution(&resolution);
//! let dictionary = merger.finish();
//! assert!(dictionary.get("textures/car.dds").is_some());
//! # Ok::<(), TabError>(())
//! ```

#![warn(missing_docs)]

pub mod coverage;
pub mod dictionary;
pub mod discovery;
pub mod error;
pub mod filelist;
pub mod hints;
pub mod index;
pub mod namehash;
pub mod output;
pub mod patch_scan;
pub mod pipeline;
pub mod profile;
pub mod resolver;
pub mod source;

pub use coverage::{CoverageReport, CoverageStats};
pub use dictionary::{
    Dictionary, DictionaryDocument, DictionaryMerger, DictionaryRecord, RecoveredEntry,
    load_document,
};
pub use error::{CatalogError, CatalogResult};
pub use hints::HintCorpus;
pub use index::{HashIndex, HashIndexBuilder};
pub use namehash::NameHashLookup;
pub use patch_scan::{PatchScanOutput, PatchScanner, TocWindowScan, scan_toc_window};
pub use pipeline::{RecoveryOutput, RecoveryPipeline};
pub use profile::{ArchiveDirectory, Game, GameProfile, ParseGameError};
pub use resolver::{ArchiveResolution, ResolvedName, Resolver};
pub use source::{LogicalSource, MissingSourcePolicy, SourceKind};
