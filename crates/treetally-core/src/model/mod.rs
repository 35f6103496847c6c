/// Data model for a crawl: entry kinds, the shared stats aggregate, and
/// the immutable snapshots the dashboard renders from.
pub mod entry;
pub mod format;
pub mod snapshot;
pub mod stats;

pub use entry::{EntryKind, EntryMeta};
pub use snapshot::{ExtensionCount, Snapshot};
pub use stats::{ScanCounts, SharedStats, StatsAggregate};
