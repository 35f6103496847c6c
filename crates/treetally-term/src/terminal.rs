/// Frame output: clear the screen, home the cursor, draw the lines.
use crate::config::DashboardConfig;
use crate::panel::Line;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

pub struct FrameWriter<W: Write> {
    out: W,
    color: bool,
    clear_screen: bool,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(out: W, config: &DashboardConfig) -> Self {
        Self {
            out,
            color: config.color,
            clear_screen: config.clear_screen,
        }
    }

    /// Replace whatever is on screen with `lines`.
    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        for line in lines {
            writeln!(self.out, "{}", line.render(self.color))?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
