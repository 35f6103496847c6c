/// Per-cycle dashboard state.
///
/// Each cycle takes a fresh snapshot, computes how many files arrived since
/// the previous cycle, and remembers the new file count for the next one.
/// The resulting [`DashboardView`] is handed to the panel layout.
use crate::config::DashboardConfig;
use crate::panel::{self, Line};
use chrono::{DateTime, Local};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use treetally_core::model::{Snapshot, StatsAggregate};

/// Everything one frame shows.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub snapshot: Snapshot,
    pub files_this_period: u64,
    /// `files_this_period` over the time actually elapsed since the previous
    /// cycle. The final cycle is usually cut short by completion.
    pub files_per_second: u64,
    pub elevated: bool,
    pub root: PathBuf,
    pub started_at: DateTime<Local>,
    pub elapsed: Duration,
    /// `true` only for the final frame drawn after the crawl finished.
    pub complete: bool,
}

pub struct Dashboard {
    config: DashboardConfig,
    root: PathBuf,
    elevated: bool,
    started_at: DateTime<Local>,
    started: Instant,
    last_frame_at: Instant,
    files_at_last_snapshot: u64,
    frames: u64,
}

impl Dashboard {
    pub fn new(root: PathBuf, config: DashboardConfig, elevated: bool) -> Self {
        let now = Instant::now();
        Self {
            config,
            root,
            elevated,
            started_at: Local::now(),
            started: now,
            last_frame_at: now,
            files_at_last_snapshot: 0,
            frames: 0,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Number of cycles observed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one cycle against `stats` and return what to draw.
    pub fn observe(&mut self, stats: &StatsAggregate, complete: bool) -> DashboardView {
        self.observe_at(stats, complete, Instant::now())
    }

    fn observe_at(
        &mut self,
        stats: &StatsAggregate,
        complete: bool,
        now: Instant,
    ) -> DashboardView {
        let snapshot = stats.snapshot();
        let files_this_period = snapshot
            .file_count()
            .saturating_sub(self.files_at_last_snapshot);
        self.files_at_last_snapshot = snapshot.file_count();
        let period = now.saturating_duration_since(self.last_frame_at);
        self.last_frame_at = now;
        self.frames += 1;

        DashboardView {
            snapshot,
            files_this_period,
            files_per_second: per_second(files_this_period, period),
            elevated: self.elevated,
            root: self.root.clone(),
            started_at: self.started_at,
            elapsed: now.saturating_duration_since(self.started),
            complete,
        }
    }

    /// Observe and lay out a full frame.
    pub fn next_frame(&mut self, stats: &StatsAggregate, complete: bool) -> Vec<Line> {
        let view = self.observe(stats, complete);
        panel::layout(&view, self.config.top_extensions)
    }
}

/// Files over `period`, scaled to files per second. A period under a
/// millisecond reports the raw count.
fn per_second(files: u64, period: Duration) -> u64 {
    let millis = period.as_millis();
    if millis == 0 {
        return files;
    }
    u64::try_from(u128::from(files) * 1_000 / millis).unwrap_or(u64::MAX)
}
