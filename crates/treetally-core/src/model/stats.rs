/// The shared, concurrently-updated counter set.
///
/// One crawler thread writes, one renderer thread reads. Every mutation and
/// every read goes through a single `parking_lot::Mutex`, so a reader can
/// never see a file counted without its extension (or the reverse). The lock
/// is held only for an increment or a copy; snapshot ranking is done after
/// the lock is released.
use crate::model::entry::EntryKind;
use crate::model::snapshot::{ExtensionCount, Snapshot};
use compact_str::CompactString;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// A stats aggregate shared between the crawler and the renderer.
pub type SharedStats = Arc<StatsAggregate>;

/// Per-kind totals. Each field only ever grows during a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanCounts {
    pub files: u64,
    pub directories: u64,
    pub symlinks: u64,
    pub ghosts: u64,
    pub permission_denied: u64,
}

impl ScanCounts {
    /// Number of entries that were visited and classified.
    /// Permission-denied entries are not part of this total.
    pub fn total_entries(&self) -> u64 {
        self.files + self.directories + self.symlinks + self.ghosts
    }
}

#[derive(Debug, Default)]
struct StatsInner {
    counts: ScanCounts,
    /// Extensions in first-seen order.
    extensions: Vec<ExtensionCount>,
    /// Extension -> position in `extensions`.
    index: HashMap<CompactString, usize>,
}

#[derive(Debug, Default)]
pub struct StatsAggregate {
    inner: Mutex<StatsInner>,
}

impl StatsAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty aggregate behind an `Arc`, ready to hand to both threads.
    pub fn shared() -> SharedStats {
        Arc::new(Self::new())
    }

    /// Count one regular file and its extension as a single atomic step.
    pub fn record_file(&self, extension: &str) {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        inner.counts.files += 1;
        if let Some(&pos) = inner.index.get(extension) {
            inner.extensions[pos].count += 1;
        } else {
            let key = CompactString::new(extension);
            inner.index.insert(key.clone(), inner.extensions.len());
            inner.extensions.push(ExtensionCount {
                extension: key,
                count: 1,
            });
        }
    }

    pub fn record_directory(&self) {
        self.inner.lock().counts.directories += 1;
    }

    pub fn record_symlink(&self) {
        self.inner.lock().counts.symlinks += 1;
    }

    pub fn record_ghost(&self) {
        self.inner.lock().counts.ghosts += 1;
    }

    pub fn record_permission_denied(&self) {
        self.inner.lock().counts.permission_denied += 1;
    }

    /// Route a classified entry to the matching counter.
    pub fn record(&self, kind: &EntryKind) {
        match kind {
            EntryKind::File { extension } => self.record_file(extension),
            EntryKind::Directory => self.record_directory(),
            EntryKind::Symlink => self.record_symlink(),
            EntryKind::Ghost => self.record_ghost(),
        }
    }

    /// Consistent copy of the counters alone.
    pub fn counts(&self) -> ScanCounts {
        self.inner.lock().counts
    }

    /// Consistent copy of all counters and the extension map, ranked
    /// descending by count with ties in first-seen order.
    pub fn snapshot(&self) -> Snapshot {
        let (counts, mut ranked) = {
            let inner = self.inner.lock();
            (inner.counts, inner.extensions.clone())
        };
        // `sort_by` is stable: equal counts stay in first-seen order.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        Snapshot::new(counts, ranked)
    }
}
