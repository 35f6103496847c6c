/// Depth-first tree crawler: the single writer of the stats aggregate.
///
/// Pre-order recursion: each listing entry is stat'ed without following
/// links, classified, recorded, and (if a directory) descended into before
/// its siblings are processed. Symlinks are never followed, so every entry is
/// visited at most once and no cycle detection is needed.
///
/// # Failure handling
///
/// - Access denied while listing, advancing a listing, or stat-ing an entry
///   is counted via `record_permission_denied` and the crawl moves on.
/// - An entry that vanished between listing and stat is a ghost.
/// - Any other I/O error aborts the crawl with a [`ScanError`] naming the path.
use crate::error::ScanError;
use crate::model::{EntryKind, EntryMeta, ScanCounts, StatsAggregate};
use crate::scanner::classify::classify;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Result of a crawl that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlSummary {
    pub root: PathBuf,
    pub duration: Duration,
    pub counts: ScanCounts,
}

/// Crawl everything beneath `root`, recording into `stats`.
///
/// The root itself is not counted. Returns once every reachable entry has
/// been visited, or on the first fatal error.
pub fn crawl(root: &Path, stats: &StatsAggregate) -> Result<CrawlSummary, ScanError> {
    let start = Instant::now();
    info!("Starting crawl of {}", root.display());

    crawl_dir(root, stats)?;

    let summary = CrawlSummary {
        root: root.to_path_buf(),
        duration: start.elapsed(),
        counts: stats.counts(),
    };
    info!(
        "Crawl complete: {} files, {} dirs, {} symlinks, {} ghosts, {} denied in {:?}",
        summary.counts.files,
        summary.counts.directories,
        summary.counts.symlinks,
        summary.counts.ghosts,
        summary.counts.permission_denied,
        summary.duration
    );
    Ok(summary)
}

fn crawl_dir(dir: &Path, stats: &StatsAggregate) -> Result<(), ScanError> {
    // The listing is drained and closed before descending, so open
    // directory handles do not pile up with depth.
    let children = match list_dir(dir, stats)? {
        Some(children) => children,
        None => return Ok(()),
    };

    for path in children {
        let meta = match fs::symlink_metadata(&path) {
            Ok(meta) => Some(EntryMeta::from(meta.file_type())),
            Err(err) => match route_stat_error(&path, err)? {
                StatFailure::Vanished => None,
                StatFailure::Denied => {
                    debug!("Permission denied inspecting {}", path.display());
                    stats.record_permission_denied();
                    continue;
                }
            },
        };

        let kind = match path.file_name() {
            Some(name) => classify(name, meta),
            None => classify(path.as_os_str(), meta),
        };
        stats.record(&kind);

        if kind == EntryKind::Directory {
            crawl_dir(&path, stats)?;
        }
    }

    Ok(())
}

/// Read every entry path of `dir`. `None` when the directory itself cannot
/// be listed for lack of permission (already counted).
fn list_dir(dir: &Path, stats: &StatsAggregate) -> Result<Option<Vec<PathBuf>>, ScanError> {
    let listing = match fs::read_dir(dir) {
        Ok(listing) => listing,
        Err(err) if is_permission_denied(&err) => {
            debug!("Permission denied listing {}", dir.display());
            stats.record_permission_denied();
            return Ok(None);
        }
        Err(source) => {
            return Err(ScanError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })
        }
    };

    let mut children = Vec::new();
    for entry_result in listing {
        match entry_result {
            Ok(entry) => children.push(entry.path()),
            Err(err) if is_permission_denied(&err) => {
                debug!("Permission denied reading an entry of {}", dir.display());
                stats.record_permission_denied();
            }
            Err(source) => {
                return Err(ScanError::ReadEntry {
                    path: dir.to_path_buf(),
                    source,
                })
            }
        }
    }
    Ok(Some(children))
}

/// A stat failure the crawl absorbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatFailure {
    /// Listed a moment ago, gone now: a ghost.
    Vanished,
    /// Counted as permission denied and skipped.
    Denied,
}

/// Decide what a failed `symlink_metadata` means. Anything other than
/// not-found or access-denied aborts the crawl.
fn route_stat_error(path: &Path, err: io::Error) -> Result<StatFailure, ScanError> {
    match err.kind() {
        io::ErrorKind::NotFound => Ok(StatFailure::Vanished),
        io::ErrorKind::PermissionDenied => Ok(StatFailure::Denied),
        _ => Err(ScanError::Inspect {
            path: path.to_path_buf(),
            source: err,
        }),
    }
}

#[inline]
fn is_permission_denied(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::PermissionDenied
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn crawl_counts_nested_entries() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("deep.rs"), b"fn main() {}").unwrap();
        fs::write(tmp.path().join("top.rs"), b"").unwrap();

        let stats = StatsAggregate::new();
        let summary = crawl(tmp.path(), &stats).unwrap();

        assert_eq!(summary.counts.files, 2);
        assert_eq!(summary.counts.directories, 2);
        assert_eq!(summary.root, tmp.path());
        assert_eq!(stats.snapshot().count_for("rs"), Some(2));
    }

    /// A root that disappears before listing is not a permission problem and
    /// must surface as a fatal error.
    #[test]
    fn missing_root_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let gone = tmp.path().join("gone");

        let stats = StatsAggregate::new();
        match crawl(&gone, &stats) {
            Err(ScanError::ReadDir { path, .. }) => assert_eq!(path, gone),
            other => panic!("expected ReadDir error, got {other:?}"),
        }
    }

    // ── Stat error routing ───────────────────────────────────────────────

    #[test]
    fn stat_not_found_is_a_ghost() {
        let err = io::Error::from(io::ErrorKind::NotFound);
        assert_eq!(
            route_stat_error(Path::new("/x/gone.txt"), err).unwrap(),
            StatFailure::Vanished
        );
    }

    #[test]
    fn stat_permission_denied_is_absorbed() {
        let err = io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(
            route_stat_error(Path::new("/x/secret"), err).unwrap(),
            StatFailure::Denied
        );
    }

    #[test]
    fn other_stat_errors_are_fatal() {
        let err = io::Error::new(io::ErrorKind::Other, "I/O error");
        match route_stat_error(Path::new("/x/bad"), err) {
            Err(ScanError::Inspect { path, source }) => {
                assert_eq!(path, Path::new("/x/bad"));
                assert_eq!(source.kind(), io::ErrorKind::Other);
            }
            other => panic!("expected Inspect error, got {other:?}"),
        }
    }

    /// Deep nesting recurses cleanly and counts every level.
    #[test]
    fn deep_tree_is_fully_counted() {
        let tmp = TempDir::new().unwrap();
        let mut dir = tmp.path().to_path_buf();
        for _ in 0..200 {
            dir.push("d");
        }
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("leaf.txt"), b"").unwrap();

        let stats = StatsAggregate::new();
        crawl(tmp.path(), &stats).unwrap();
        let counts = stats.counts();
        assert_eq!(counts.directories, 200);
        assert_eq!(counts.files, 1);
    }
}
