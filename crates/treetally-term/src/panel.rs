/// Fixed two-column layout of one dashboard frame.
///
/// ```text
///                  Stats                   +-Top Extensions-----------------------+
/// +-Counts---------------------------------+                  txt : 3               |
/// |                     files : 4          |                   md : 1               |
/// |                extensions : 2          |                                        |
/// ...
/// +--------------------------------------------------------------------------------+
///  complete /data | started 10:42:07 | elapsed 0:03
/// ```
///
/// The left column holds the counters, the right column the ranked
/// extensions. Only `min(K, available)` extension rows are filled; the rest
/// are blank. Lines are built as tone-tagged spans so the same layout can
/// be drawn with or without colour.
use crate::dashboard::DashboardView;
use crate::theme::{paint, Tone};
use treetally_core::model::format::{format_count, format_elapsed};
use treetally_core::model::ExtensionCount;

/// Width of the counts column, both borders included.
pub const LEFT_WIDTH: usize = 42;
/// Width of the extensions column, right border included.
pub const RIGHT_WIDTH: usize = 40;
pub const PANEL_WIDTH: usize = LEFT_WIDTH + RIGHT_WIDTH;

const LABEL_WIDTH: usize = 26;
const VALUE_WIDTH: usize = 11;
const EXT_NAME_WIDTH: usize = 20;
const EXT_COUNT_WIDTH: usize = 16;

/// Shown in place of the empty extension.
pub const NO_EXTENSION_LABEL: &str = "(none)";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Span {
    text: String,
    tone: Tone,
}

/// One terminal line made of toned spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    fn push(&mut self, text: impl Into<String>, tone: Tone) {
        self.spans.push(Span {
            text: text.into(),
            tone,
        });
    }

    /// The line's text without any colour.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// The line's text, coloured when `color` is set.
    pub fn render(&self, color: bool) -> String {
        self.spans
            .iter()
            .map(|s| paint(&s.text, s.tone, color))
            .collect()
    }

    /// Visible width in characters.
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| s.text.chars().count()).sum()
    }
}

enum LeftRow {
    Section(&'static str, Tone),
    Stat(&'static str, u64),
}

fn left_rows(view: &DashboardView) -> [LeftRow; 10] {
    let counts = &view.snapshot.counts;
    [
        LeftRow::Section("Counts", Tone::CountsHeader),
        LeftRow::Stat("files", counts.files),
        LeftRow::Stat("extensions", view.snapshot.distinct_extensions() as u64),
        LeftRow::Stat("ghost files", counts.ghosts),
        LeftRow::Stat("symlinks", counts.symlinks),
        LeftRow::Stat("directories", counts.directories),
        LeftRow::Section("Speed", Tone::SpeedHeader),
        LeftRow::Stat("files crawled/s", view.files_per_second),
        LeftRow::Section("Errors", Tone::ErrorsHeader),
        LeftRow::Stat("permission denied", counts.permission_denied),
    ]
}

/// Lay out a complete frame showing up to `top_k` extensions.
pub fn layout(view: &DashboardView, top_k: usize) -> Vec<Line> {
    let left = left_rows(view);
    let top = view.snapshot.top(top_k);
    let body_rows = left.len().max(top_k);

    let mut lines = Vec::with_capacity(body_rows + 3);
    lines.push(title_line(view.elevated));

    for i in 0..body_rows {
        let mut line = Line::default();
        match left.get(i) {
            Some(LeftRow::Section(title, tone)) => {
                push_section_header(&mut line, title, *tone, LEFT_WIDTH)
            }
            Some(LeftRow::Stat(label, value)) => push_stat(&mut line, label, *value),
            None => line.push(format!("|{}|", " ".repeat(LEFT_WIDTH - 2)), Tone::Plain),
        }
        match top.get(i) {
            Some(ext) => push_extension(&mut line, ext),
            None => line.push(format!("{}|", " ".repeat(RIGHT_WIDTH - 1)), Tone::Plain),
        }
        lines.push(line);
    }

    let mut footer = Line::default();
    footer.push(format!("+{}+", "-".repeat(PANEL_WIDTH - 2)), Tone::Plain);
    lines.push(footer);

    lines.push(status_line(view));
    lines
}

fn title_line(elevated: bool) -> Line {
    let title = if elevated { "Stats (sudo)" } else { "Stats" };
    let pad = (LEFT_WIDTH - 1).saturating_sub(title.len());
    let before = pad / 2;

    let mut line = Line::default();
    line.push(" ".repeat(before), Tone::Plain);
    line.push(title, Tone::Title);
    line.push(" ".repeat(pad - before), Tone::Plain);
    push_section_header(&mut line, "Top Extensions", Tone::ExtensionsHeader, RIGHT_WIDTH + 1);
    line
}

/// `+-Title-----+` spanning exactly `width` characters.
fn push_section_header(line: &mut Line, title: &str, tone: Tone, width: usize) {
    let dashes = width.saturating_sub(3 + title.len());
    line.push("+-", Tone::Plain);
    line.push(title, tone);
    line.push(format!("{}+", "-".repeat(dashes)), Tone::Plain);
}

fn push_stat(line: &mut Line, label: &str, value: u64) {
    line.push("|", Tone::Plain);
    line.push(format!("{label:>LABEL_WIDTH$}"), Tone::Label);
    line.push(
        format!(" : {:<VALUE_WIDTH$}|", format_count(value)),
        Tone::Plain,
    );
}

fn push_extension(line: &mut Line, ext: &ExtensionCount) {
    let name = extension_label(&ext.extension);
    line.push(format!("{name:>EXT_NAME_WIDTH$}"), Tone::Extension);
    line.push(
        format!(" : {:<EXT_COUNT_WIDTH$}|", format_count(ext.count)),
        Tone::Plain,
    );
}

/// Display name for an extension, truncated to fit its column.
fn extension_label(extension: &str) -> String {
    if extension.is_empty() {
        return NO_EXTENSION_LABEL.to_string();
    }
    if extension.chars().count() > EXT_NAME_WIDTH {
        let mut short: String = extension.chars().take(EXT_NAME_WIDTH - 1).collect();
        short.push('~');
        return short;
    }
    extension.to_string()
}

fn status_line(view: &DashboardView) -> Line {
    let state = if view.complete { "complete" } else { "scanning" };
    let mut line = Line::default();
    line.push(
        format!(
            " {state} {} | started {} | elapsed {}",
            view.root.display(),
            view.started_at.format("%H:%M:%S"),
            format_elapsed(view.elapsed)
        ),
        Tone::Status,
    );
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::dashboard::Dashboard;
    use std::path::PathBuf;
    use treetally_core::model::StatsAggregate;

    fn view_of(stats: &StatsAggregate, elevated: bool) -> DashboardView {
        Dashboard::new(PathBuf::from("/data"), DashboardConfig::plain(), elevated)
            .observe(stats, false)
    }

    fn plain_lines(lines: &[Line]) -> Vec<String> {
        lines.iter().map(Line::plain).collect()
    }

    /// Every line except the trailing status line spans the full panel width.
    fn assert_aligned(lines: &[Line]) {
        for line in &lines[..lines.len() - 1] {
            assert_eq!(line.width(), PANEL_WIDTH, "misaligned: {:?}", line.plain());
        }
    }

    #[test]
    fn empty_aggregate_renders_zeroes_and_no_extension_rows() {
        let stats = StatsAggregate::new();
        let lines = layout(&view_of(&stats, false), 10);
        let text = plain_lines(&lines);

        // title + 10 body rows + footer + status
        assert_eq!(lines.len(), 13);
        assert_aligned(&lines);
        assert!(text[2].contains("files : 0"));
        assert!(text[3].contains("extensions : 0"));
        assert!(text[10].contains("permission denied : 0"));
        for row in &text[1..11] {
            assert!(row[LEFT_WIDTH..].trim_end_matches('|').trim().is_empty());
        }
    }

    /// Fewer than K extensions must not fail: filled slots first, blanks after.
    #[test]
    fn fewer_extensions_than_slots_pad_with_blank_rows() {
        let stats = StatsAggregate::new();
        for ext in ["txt", "txt", "txt", "md"] {
            stats.record_file(ext);
        }
        let lines = layout(&view_of(&stats, false), 10);
        let text = plain_lines(&lines);
        assert_aligned(&lines);

        assert!(text[1][LEFT_WIDTH..].contains("txt : 3"));
        assert!(text[2][LEFT_WIDTH..].contains("md : 1"));
        for row in &text[3..11] {
            assert!(row[LEFT_WIDTH..].trim_end_matches('|').trim().is_empty());
        }
    }

    #[test]
    fn extensions_beyond_k_are_not_shown() {
        let stats = StatsAggregate::new();
        for i in 0..15 {
            for _ in 0..(20 - i) {
                stats.record_file(&format!("e{i}"));
            }
        }
        let view = view_of(&stats, false);
        let text = plain_lines(&layout(&view, 10));
        let body = text[1..11].join("\n");

        assert!(body.contains("e0 : 20"));
        assert!(body.contains("e9 : 11"));
        assert!(!body.contains("e10 :"));
        assert!(text[3].contains("extensions : 15"));
    }

    /// K larger than the counts column adds rows with a blank left side.
    #[test]
    fn large_k_extends_the_body() {
        let stats = StatsAggregate::new();
        for i in 0..12 {
            stats.record_file(&format!("x{i}"));
        }
        let lines = layout(&view_of(&stats, false), 12);
        assert_eq!(lines.len(), 15);
        assert_aligned(&lines);
        let text = plain_lines(&lines);
        assert!(text[12].starts_with(&format!("|{}|", " ".repeat(LEFT_WIDTH - 2))));
        assert!(text[12].contains("x11 : 1"));
    }

    #[test]
    fn zero_k_shows_counts_only() {
        let stats = StatsAggregate::new();
        stats.record_file("rs");
        let lines = layout(&view_of(&stats, false), 0);
        assert_eq!(lines.len(), 13);
        assert!(!plain_lines(&lines).join("\n").contains("rs :"));
    }

    #[test]
    fn header_marks_elevated_runs() {
        let stats = StatsAggregate::new();
        let normal = layout(&view_of(&stats, false), 10)[0].plain();
        let elevated = layout(&view_of(&stats, true), 10)[0].plain();
        assert!(normal.contains("Stats") && !normal.contains("sudo"));
        assert!(elevated.contains("Stats (sudo)"));
        assert!(elevated.contains("+-Top Extensions-"));
    }

    #[test]
    fn empty_and_long_extensions_are_labelled() {
        assert_eq!(extension_label(""), NO_EXTENSION_LABEL);
        assert_eq!(extension_label("rs"), "rs");
        let long = "a".repeat(30);
        let label = extension_label(&long);
        assert_eq!(label.chars().count(), EXT_NAME_WIDTH);
        assert!(label.ends_with('~'));
    }

    #[test]
    fn counts_use_thousand_separators() {
        let stats = StatsAggregate::new();
        for _ in 0..1_234 {
            stats.record_file("log");
        }
        let text = plain_lines(&layout(&view_of(&stats, false), 10));
        assert!(text[2].contains("files : 1,234"));
        assert!(text[1].contains("log : 1,234"));
    }

    #[test]
    fn status_line_reports_phase_and_root() {
        let stats = StatsAggregate::new();
        let mut dash = Dashboard::new(PathBuf::from("/data"), DashboardConfig::plain(), false);
        let running = status_line(&dash.observe(&stats, false)).plain();
        let done = status_line(&dash.observe(&stats, true)).plain();
        assert!(running.starts_with(" scanning /data"));
        assert!(done.starts_with(" complete /data"));
        assert!(done.contains("elapsed 0:00"));
    }

    #[test]
    fn coloured_render_keeps_plain_text() {
        let stats = StatsAggregate::new();
        let line = &layout(&view_of(&stats, false), 10)[2];
        assert_eq!(line.render(false), line.plain());
        assert!(line.render(true).contains("files"));
        assert_ne!(line.render(true), line.plain());
    }
}
