//! Recovery coverage statistics

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Hit/miss counts for one archive or a whole run
///
/// `found + not_found == total` holds at all times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CoverageStats {
    /// Records examined
    pub total: u64,
    /// Records whose hash resolved to a path
    pub found: u64,
    /// Records left unresolved
    pub not_found: u64,
}

impl CoverageStats {
    /// Count a resolved record
    pub const fn record_hit(&mut self) {
        self.found += 1;
        self.total += 1;
    }

    /// Count an unresolved record
    pub const fn record_miss(&mut self) {
        self.not_found += 1;
        self.total += 1;
    }

    /// Add another set of counts
    pub const fn merge(&mut self, other: &Self) {
        self.total += other.total;
        self.found += other.found;
        self.not_found += other.not_found;
    }

    /// Found ratio in hundredths of a percent, truncated. 0 when empty.
    pub const fn basis_points(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }
        // u128 keeps the product exact for any u64 count
        ((self.found as u128 * 10_000) / self.total as u128) as u64
    }

    /// Found percentage truncated to two decimals, e.g. `"66.66"`
    pub fn percentage(&self) -> String {
        let bp = self.basis_points();
        format!("{}.{:02}", bp / 100, bp % 100)
    }
}

impl fmt::Display for CoverageStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({}%)", self.found, self.total, self.percentage())
    }
}

/// Per-archive statistics plus the run total
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    /// Statistics keyed by source name
    pub archives: BTreeMap<String, CoverageStats>,
    /// Sum over all archives
    pub total: CoverageStats,
}

impl CoverageReport {
    /// Add one archive's statistics
    pub fn add(&mut self, source: impl Into<String>, stats: CoverageStats) {
        self.total.merge(&stats);
        self.archives
            .entry(source.into())
            .and_modify(|existing| existing.merge(&stats))
            .or_insert(stats);
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn stats(found: u64, not_found: u64) -> CoverageStats {
        CoverageStats {
            total: found + not_found,
            found,
            not_found,
        }
    }

    #[test]
    fn test_counts_stay_consistent() {
        let mut s = CoverageStats::default();
        s.record_hit();
        s.record_miss();
        s.record_miss();
        assert_eq!(s, stats(1, 2));
        assert_eq!(s.found + s.not_found, s.total);
    }

    #[test]
    fn test_percentage_truncates() {
        assert_eq!(stats(2, 1).percentage(), "66.66");
        assert_eq!(stats(1, 2).percentage(), "33.33");
        assert_eq!(stats(1, 0).percentage(), "100.00");
        assert_eq!(stats(1, 7).percentage(), "12.50");
        assert_eq!(stats(1, 9999).percentage(), "0.01");
        assert_eq!(stats(1, 19_999).percentage(), "0.00");
    }

    #[test]
    fn test_empty_is_zero() {
        let s = CoverageStats::default();
        assert_eq!(s.basis_points(), 0);
        assert_eq!(s.to_string(), "0/0 (0.00%)");
    }

    #[test]
    fn test_display() {
        assert_eq!(stats(1, 0).to_string(), "1/1 (100.00%)");
    }

    #[test]
    fn test_report_totals() {
        let mut report = CoverageReport::default();
        report.add("archives_win64/game0", stats(3, 1));
        report.add("patch_win64/game0", stats(0, 2));
        assert_eq!(report.total, stats(3, 3));
        assert_eq!(report.archives.len(), 2);
    }
}
