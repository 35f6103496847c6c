/// Error types for crawling.
///
/// Permission-denied conditions are never represented here: the crawler
/// absorbs and counts them. Everything in this enum aborts a scan.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    /// The scan root does not resolve to a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Listing a directory failed for a reason other than access denied.
    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Advancing a directory listing failed mid-iteration.
    #[error("failed to read an entry of {}: {source}", path.display())]
    ReadEntry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Stat-ing a listed entry failed.
    #[error("failed to inspect {}: {source}", path.display())]
    Inspect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to spawn {thread} thread: {source}")]
    Spawn {
        thread: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("crawler thread panicked")]
    CrawlerPanicked,

    #[error("renderer thread panicked")]
    RendererPanicked,
}
