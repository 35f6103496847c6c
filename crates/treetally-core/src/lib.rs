/// treetally Core: crawling, classification, and live statistics.
///
/// This crate contains all business logic with zero terminal dependencies.
/// The dashboard frontend lives in `treetally-term`.
///
/// # Modules
///
/// - [`model`]: Entry kinds, the shared stats aggregate, and snapshots.
/// - [`scanner`]: Depth-first tree crawler, classifier, and completion signal.
/// - [`platform`]: Privilege checks.
/// - [`error`]: The crate's error type.
pub mod error;
pub mod model;
pub mod platform;
pub mod scanner;

pub use error::ScanError;
