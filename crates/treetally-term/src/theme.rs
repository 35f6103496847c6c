/// Colours for each part of the dashboard.
use crossterm::style::{style, Color, Stylize};

/// The role a piece of text plays in the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Title,
    ExtensionsHeader,
    CountsHeader,
    SpeedHeader,
    ErrorsHeader,
    Label,
    Extension,
    Status,
}

impl Tone {
    pub fn color(self) -> Option<Color> {
        match self {
            Self::Plain => None,
            Self::Title => Some(Color::Green),
            Self::ExtensionsHeader => Some(Color::Blue),
            Self::CountsHeader => Some(Color::Cyan),
            Self::SpeedHeader => Some(Color::Yellow),
            Self::ErrorsHeader => Some(Color::Red),
            Self::Label => Some(Color::DarkGrey),
            Self::Extension => Some(Color::Cyan),
            Self::Status => Some(Color::DarkGrey),
        }
    }
}

/// Wrap `text` in the tone's colour, or return it untouched when colour is
/// off or the tone has none.
pub fn paint(text: &str, tone: Tone, color: bool) -> String {
    match tone.color() {
        Some(c) if color => style(text).with(c).to_string(),
        _ => text.to_string(),
    }
}
