//! Logical archive sources and their precedence

use crate::error::{CatalogError, CatalogResult};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::path::Path;
use tracing::warn;

/// Category of an archive directory
///
/// The category decides which source wins when one file appears in several
/// archives: DLC archives override shared patches, which override the base
/// game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// DLC-specific archives
    Dlc,
    /// Shared patch archives
    Patch,
    /// Base game archives
    Base,
}

impl SourceKind {
    /// Precedence rank; lower ranks are listed first
    pub const fn rank(self) -> u8 {
        match self {
            Self::Dlc => 0,
            Self::Patch => 1,
            Self::Base => 2,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dlc => f.write_str("dlc"),
            Self::Patch => f.write_str("patch"),
            Self::Base => f.write_str("base"),
        }
    }
}

/// A named archive a recovered path was found in, e.g.
/// `patch_win64/game0`
///
/// Sources order by rank first and by name second, so sorting a list of
/// occurrences yields the precedence order directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogicalSource {
    name: String,
    kind: SourceKind,
}

impl LogicalSource {
    /// Create a source
    pub fn new(name: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Name for an archive: `<directory>/<tab stem>`
    pub fn for_archive(directory: &str, stem: &str, kind: SourceKind) -> Self {
        Self::new(format!("{directory}/{stem}"), kind)
    }

    /// Source name as written to artifacts
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source category
    pub const fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Precedence rank of the category
    pub const fn rank(&self) -> u8 {
        self.kind.rank()
    }
}

impl Ord for LogicalSource {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for LogicalSource {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LogicalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Serialize for LogicalSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

/// What to do when a hint file or archive directory does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingSourcePolicy {
    /// Log a warning, record the path and carry on
    #[default]
    Warn,
    /// Abort the run
    Fail,
}

impl MissingSourcePolicy {
    /// Policy for a `--strict` flag
    pub const fn from_strict(strict: bool) -> Self {
        if strict { Self::Fail } else { Self::Warn }
    }

    /// Apply the policy to an absent input described as `what`
    pub fn handle(self, path: &Path, what: &str) -> CatalogResult<()> {
        match self {
            Self::Warn => {
                warn!(path = %path.display(), "skipping missing {what}");
                Ok(())
            }
            Self::Fail => Err(CatalogError::MissingSource(path.to_path_buf())),
        }
    }
}
