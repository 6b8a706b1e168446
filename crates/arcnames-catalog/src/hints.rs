//! Hint corpus loading
//!
//! A hint file is UTF-8 text with one candidate path per line. Lines that
//! start with `;` carry statistics (filelists end with one) and are never
//! hashed. Source order is kept: when two hints share a hash, the later one
//! wins once the index is built.

use crate::error::{CatalogError, CatalogResult};
use crate::source::MissingSourcePolicy;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Prefix of metadata lines in hint files and filelists
pub const COMMENT_MARKER: char = ';';

/// Candidate paths of a hint text, in line order
pub fn parse_hints(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
}

/// Write names as a hint file, one per line
pub fn write_hints<W, I, S>(writer: &mut W, names: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for name in names {
        writeln!(writer, "{}", name.as_ref())?;
    }
    Ok(())
}

/// Ordered candidate paths collected from one or more hint sources
#[derive(Debug, Clone, Default)]
pub struct HintCorpus {
    entries: Vec<String>,
    loaded: Vec<PathBuf>,
    skipped: Vec<PathBuf>,
}

impl HintCorpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Load hint files in order
    pub fn load<I, P>(paths: I, policy: MissingSourcePolicy) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut corpus = Self::new();
        for path in paths {
            corpus.add_file(path.as_ref(), policy)?;
        }
        Ok(corpus)
    }

    /// Append the hints of one file, returning how many were added.
    ///
    /// A missing or unreadable file is handled by `policy`; when it is
    /// skipped the path is remembered and 0 is returned.
    pub fn add_file(&mut self, path: &Path, policy: MissingSourcePolicy) -> CatalogResult<usize> {
        if !path.is_file() {
            policy.handle(path, "hint file")?;
            self.skipped.push(path.to_path_buf());
            return Ok(0);
        }

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => match policy {
                MissingSourcePolicy::Warn => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable hint file");
                    self.skipped.push(path.to_path_buf());
                    return Ok(0);
                }
                MissingSourcePolicy::Fail => return Err(CatalogError::io(path, e)),
            },
        };

        let text = String::from_utf8_lossy(&bytes);
        let before = self.entries.len();
        self.entries.extend(parse_hints(&text).map(str::to_owned));
        let added = self.entries.len() - before;

        debug!(path = %path.display(), hints = added, "loaded hint file");
        self.loaded.push(path.to_path_buf());
        Ok(added)
    }

    /// Append hints that did not come from a file
    pub fn extend<I, S>(&mut self, hints: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.extend(hints.into_iter().map(Into::into));
    }

    /// Hints in load order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of hints
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no hints were loaded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Files that were read
    pub fn loaded(&self) -> &[PathBuf] {
        &self.loaded
    }

    /// Files that were skipped as missing or unreadable
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let text = "textures/car.dds\n\n; 1/2 (50.00%)\r\nmodels/a.rbm  \n";
        let hints: Vec<_> = parse_hints(text).collect();
        assert_eq!(hints, ["textures/car.dds", "models/a.rbm"]);
    }

    #[test]
    fn test_comment_marker_only_at_line_start() {
        let hints: Vec<_> = parse_hints("a;b\n").collect();
        assert_eq!(hints, ["a;b"]);
    }

    #[test]
    fn test_load_keeps_file_order() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        fs::write(&first, "a\nb\n").unwrap();
        fs::write(&second, "c\n").unwrap();

        let corpus = HintCorpus::load([&first, &second], MissingSourcePolicy::Fail).unwrap();
        assert_eq!(corpus.entries(), ["a", "b", "c"]);
        assert_eq!(corpus.loaded().len(), 2);
        assert!(corpus.skipped().is_empty());
    }

    #[test]
    fn test_missing_file_policies() {
        let dir = TempDir::new().unwrap();
        let present = dir.path().join("present.txt");
        let missing = dir.path().join("missing.txt");
        fs::write(&present, "a\n").unwrap();

        let corpus = HintCorpus::load([&missing, &present], MissingSourcePolicy::Warn).unwrap();
        assert_eq!(corpus.entries(), ["a"]);
        assert_eq!(corpus.skipped(), [missing.clone()]);

        let err = HintCorpus::load([&missing, &present], MissingSourcePolicy::Fail).unwrap_err();
        assert!(err.is_missing_source());
    }

    #[test]
    fn test_write_hints() {
        let mut out = Vec::new();
        write_hints(&mut out, ["a.ee.toc", "b.ee.toc"]).unwrap();
        assert_eq!(out, b"a.ee.toc\nb.ee.toc\n");
    }
}
