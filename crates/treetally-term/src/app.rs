/// Orchestration: one crawler thread, one renderer thread, one shared
/// aggregate.
///
/// The renderer starts first so the dashboard appears immediately. The
/// crawler fires the completion signal when it returns; the renderer then
/// draws its final frame and exits. Both threads are always joined before
/// an outcome is reported, so a fatal crawl error is never printed over a
/// dashboard that is still redrawing.
use crate::config::DashboardConfig;
use crate::dashboard::Dashboard;
use crate::render_loop::render_loop;
use crate::terminal::FrameWriter;
use anyhow::Context;
use std::io::Write;
use std::path::PathBuf;
use std::thread;
use tracing::{debug, warn};
use treetally_core::model::StatsAggregate;
use treetally_core::platform::is_elevated;
use treetally_core::scanner::{self, completion_channel, CrawlHandle, CrawlSummary};
use treetally_core::ScanError;

pub const RENDERER_THREAD_NAME: &str = "treetally-renderer";

/// Outcome of a finished run.
pub struct RunReport<W> {
    pub summary: CrawlSummary,
    /// Frames drawn, the final one included.
    pub frames: u64,
    /// The output the dashboard was drawn to, handed back.
    pub out: W,
}

/// Crawl `root` while drawing the dashboard to `out`.
///
/// `root` should already have passed [`scanner::validate_root`].
pub fn run<W>(root: PathBuf, config: DashboardConfig, out: W) -> anyhow::Result<RunReport<W>>
where
    W: Write + Send + 'static,
{
    let stats = StatsAggregate::shared();
    let (notifier, listener) = completion_channel();
    let mut dashboard = Dashboard::new(root.clone(), config, is_elevated());

    let renderer = {
        let stats = stats.clone();
        thread::Builder::new()
            .name(RENDERER_THREAD_NAME.into())
            .spawn(move || {
                let mut writer = FrameWriter::new(out, dashboard.config());
                render_loop(&stats, &listener, &mut dashboard, &mut writer)
                    .map(|frames| (frames, writer.into_inner()))
            })
            .map_err(|source| ScanError::Spawn {
                thread: RENDERER_THREAD_NAME,
                source,
            })?
    };

    // If the crawler cannot even be spawned the notifier is dropped with it,
    // which still releases the renderer.
    let crawl_result = scanner::start_crawl(root, stats, notifier).and_then(CrawlHandle::join);
    debug!("Crawler joined (ok = {})", crawl_result.is_ok());

    let render_result = match renderer.join() {
        Ok(result) => result.context("failed to draw the dashboard"),
        Err(_) => Err(ScanError::RendererPanicked.into()),
    };
    if let Err(err) = &render_result {
        warn!("Dashboard renderer failed: {err:#}");
    }

    let summary = crawl_result.context("scan aborted")?;
    let (frames, out) = render_result?;

    Ok(RunReport {
        summary,
        frames,
        out,
    })
}
