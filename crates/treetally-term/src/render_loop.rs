/// The renderer thread body.
///
/// Draws one frame per refresh interval while the crawl runs, waiting on the
/// completion signal between frames. Once completion arrives it draws exactly
/// one final frame and returns.
use crate::dashboard::Dashboard;
use crate::terminal::FrameWriter;
use std::io::{self, Write};
use tracing::debug;
use treetally_core::model::StatsAggregate;
use treetally_core::scanner::CompletionListener;

/// Returns the number of frames drawn.
pub fn render_loop<W: Write>(
    stats: &StatsAggregate,
    completion: &CompletionListener,
    dashboard: &mut Dashboard,
    writer: &mut FrameWriter<W>,
) -> io::Result<u64> {
    let interval = dashboard.config().refresh_interval;

    loop {
        let frame = dashboard.next_frame(stats, false);
        writer.draw(&frame)?;
        if completion.wait_timeout(interval) {
            break;
        }
    }

    let frame = dashboard.next_frame(stats, true);
    writer.draw(&frame)?;

    debug!("Renderer drew {} frames", dashboard.frames());
    Ok(dashboard.frames())
}
