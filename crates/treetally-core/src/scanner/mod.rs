/// Scanner module: runs the tree crawler on a background thread.
///
/// The crawler writes into a **shared `StatsAggregate`** (`Arc`) so the
/// dashboard can sample running totals while the crawl is in progress, and
/// fires a one-shot [`CompletionNotifier`] when it stops for any reason.
pub mod classify;
pub mod completion;
pub mod crawler;

pub use classify::{classify, extension_of};
pub use completion::{completion_channel, CompletionListener, CompletionNotifier};
pub use crawler::{crawl, CrawlSummary};

use crate::error::ScanError;
use crate::model::SharedStats;
use std::path::{Path, PathBuf};
use std::thread;
use tracing::debug;

pub const CRAWLER_THREAD_NAME: &str = "treetally-crawler";

/// Stack size for the crawler thread. Traversal recurses once per directory
/// level, and real trees can nest far deeper than the default 2 MiB allows.
pub const CRAWLER_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Handle to a running or finished crawl.
pub struct CrawlHandle {
    thread: thread::JoinHandle<Result<CrawlSummary, ScanError>>,
}

impl CrawlHandle {
    /// Wait for the crawl to end and return its outcome.
    pub fn join(self) -> Result<CrawlSummary, ScanError> {
        self.thread
            .join()
            .map_err(|_| ScanError::CrawlerPanicked)?
    }
}

/// Check that `path` resolves to a directory before any thread is started.
pub fn validate_root(path: &Path) -> Result<PathBuf, ScanError> {
    if path.is_dir() {
        Ok(path.to_path_buf())
    } else {
        Err(ScanError::NotADirectory(path.to_path_buf()))
    }
}

/// Start a crawl of `root` on a background thread.
///
/// `notifier` fires when the crawl returns, whether it finished or failed.
/// If the thread panics the notifier is dropped, which listeners also read
/// as completion.
pub fn start_crawl(
    root: PathBuf,
    stats: SharedStats,
    notifier: CompletionNotifier,
) -> Result<CrawlHandle, ScanError> {
    let thread = thread::Builder::new()
        .name(CRAWLER_THREAD_NAME.into())
        .stack_size(CRAWLER_STACK_SIZE)
        .spawn(move || {
            let result = crawler::crawl(&root, &stats);
            debug!("Crawler finished (ok = {}), signalling completion", result.is_ok());
            notifier.notify();
            result
        })
        .map_err(|source| ScanError::Spawn {
            thread: CRAWLER_THREAD_NAME,
            source,
        })?;

    Ok(CrawlHandle { thread })
}
