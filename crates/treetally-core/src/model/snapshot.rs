/// Immutable point-in-time copies of the stats aggregate.
use crate::model::stats::ScanCounts;
use compact_str::CompactString;

/// Occurrence count for one distinct extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionCount {
    /// Extension without the leading dot; empty for extensionless files.
    pub extension: CompactString,
    pub count: u64,
}

/// A consistent copy of every counter plus the extensions ranked by count.
///
/// Never mutated after creation. Ranking is descending by count; equal
/// counts keep the order in which the extensions were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub counts: ScanCounts,
    ranked: Vec<ExtensionCount>,
}

impl Snapshot {
    pub(crate) fn new(counts: ScanCounts, ranked: Vec<ExtensionCount>) -> Self {
        Self { counts, ranked }
    }

    #[inline]
    pub fn file_count(&self) -> u64 {
        self.counts.files
    }

    /// All extensions, highest count first.
    pub fn ranked(&self) -> &[ExtensionCount] {
        &self.ranked
    }

    /// The first `k` ranked extensions, or fewer if fewer exist.
    pub fn top(&self, k: usize) -> &[ExtensionCount] {
        &self.ranked[..k.min(self.ranked.len())]
    }

    pub fn distinct_extensions(&self) -> usize {
        self.ranked.len()
    }

    /// Sum of all per-extension counts. Equals `file_count()` for any
    /// snapshot taken from a [`StatsAggregate`](crate::model::StatsAggregate).
    pub fn extension_total(&self) -> u64 {
        self.ranked.iter().map(|e| e.count).sum()
    }

    pub fn count_for(&self, extension: &str) -> Option<u64> {
        self.ranked
            .iter()
            .find(|e| e.extension == extension)
            .map(|e| e.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ext(name: &str, count: u64) -> ExtensionCount {
        ExtensionCount {
            extension: CompactString::new(name),
            count,
        }
    }

    #[test]
    fn top_clamps_to_available() {
        let snap = Snapshot::new(
            ScanCounts {
                files: 3,
                ..Default::default()
            },
            vec![ext("rs", 2), ext("md", 1)],
        );
        assert_eq!(snap.top(10).len(), 2);
        assert_eq!(snap.top(1)[0].extension, "rs");
        assert!(snap.top(0).is_empty());
    }

    #[test]
    fn empty_snapshot_has_no_extensions() {
        let snap = Snapshot::default();
        assert_eq!(snap.distinct_extensions(), 0);
        assert_eq!(snap.extension_total(), 0);
        assert!(snap.top(10).is_empty());
        assert_eq!(snap.count_for("txt"), None);
    }
}
