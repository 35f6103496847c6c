/// Dashboard configuration.
///
/// Nothing here affects the crawl itself: the root path is its only
/// input. These settings shape how the dashboard is drawn.
use std::io::IsTerminal;
use std::time::Duration;

/// How often the dashboard redraws while the crawl runs.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Number of ranked extension rows shown.
pub const DEFAULT_TOP_EXTENSIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub refresh_interval: Duration,
    pub top_extensions: usize,
    /// Emit colour escape codes.
    pub color: bool,
    /// Clear the screen and home the cursor before each frame.
    pub clear_screen: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            top_extensions: DEFAULT_TOP_EXTENSIONS,
            color: true,
            clear_screen: true,
        }
    }
}

impl DashboardConfig {
    /// Defaults, with colour and screen clearing turned off when stdout is
    /// redirected to a file or pipe.
    pub fn for_stdout() -> Self {
        let tty = std::io::stdout().is_terminal();
        Self {
            color: tty,
            clear_screen: tty,
            ..Self::default()
        }
    }

    /// Plain output with no escape codes at all.
    pub fn plain() -> Self {
        Self {
            color: false,
            clear_screen: false,
            ..Self::default()
        }
    }
}
