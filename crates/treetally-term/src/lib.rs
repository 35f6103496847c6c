/// treetally terminal frontend.
///
/// Renders a periodically refreshed dashboard of a running crawl and wires
/// the crawler and renderer threads together.
///
/// # Modules
///
/// - [`app`]: Starts both threads, joins them, reports the outcome.
/// - [`config`]: Refresh cadence, extension rows, colour/clear switches.
/// - [`dashboard`]: Per-cycle state: snapshot, throughput delta, view.
/// - [`panel`]: Fixed two-column layout of one frame.
/// - [`render_loop`]: The renderer thread body.
/// - [`terminal`]: Screen clearing and frame output.
/// - [`theme`]: Colours for each part of the panel.
pub mod app;
pub mod config;
pub mod dashboard;
pub mod panel;
pub mod render_loop;
pub mod terminal;
pub mod theme;

pub use app::{run, RunReport};
pub use config::DashboardConfig;
