//! Crossterm rendering of a [`Grid`] plus a status area.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor, event, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use gridpath_core::{Grid, NodeState};
use gridpath_search::SearchResult;

use crate::input::{Action, CELL_WIDTH, action_for};

/// Lines reserved below the grid for status, stats and help.
pub const STATUS_LINES: u16 = 3;

const HELP: &str = "LMB paint  RMB erase  Space A*  d Dijkstra  r reset  c clear  Esc cancel  q quit";

/// Background colour for a cell state.
pub fn state_color(state: NodeState) -> Color {
    match state {
        NodeState::Default => Color::Rgb { r: 236, g: 240, b: 241 },
        NodeState::Open => Color::Rgb { r: 46, g: 204, b: 113 },
        NodeState::Closed => Color::Rgb { r: 231, g: 76, b: 60 },
        NodeState::Barrier => Color::Rgb { r: 44, g: 62, b: 80 },
        NodeState::Start => Color::Rgb { r: 243, g: 156, b: 18 },
        NodeState::End => Color::Rgb { r: 26, g: 188, b: 212 },
        NodeState::Path => Color::Rgb { r: 155, g: 89, b: 182 },
    }
}

/// Glyphs drawn inside a cell (two columns wide).
fn state_glyph(state: NodeState) -> &'static str {
    match state {
        NodeState::Start => "S ",
        NodeState::End => "E ",
        _ => "  ",
    }
}

/// Largest grid side that fits a `cols × rows` terminal, capped at `wanted`.
pub fn fit_rows(cols: u16, rows: u16, wanted: usize) -> usize {
    let by_width = cols as usize / CELL_WIDTH as usize;
    let by_height = rows.saturating_sub(STATUS_LINES) as usize;
    wanted.min(by_width).min(by_height).max(2)
}

/// Format the stats line.
pub fn stats_line(stats: &SearchResult) -> String {
    let mut line = format!(
        "Nodes explored: {}   Path length: {}   Time: {:.2} ms",
        stats.nodes_explored, stats.path_length, stats.time_ms
    );
    if stats.cancelled {
        line.push_str("   (cancelled)");
    }
    line
}

/// A raw-mode, alternate-screen terminal with mouse capture.
///
/// The terminal is restored when the value is dropped.
pub struct Terminal {
    out: Stdout,
    closed: bool,
}

impl Terminal {
    /// Enter raw mode and the alternate screen.
    pub fn init() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        queue!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture,
            terminal::Clear(ClearType::All)
        )?;
        out.flush()?;
        Ok(Self { out, closed: false })
    }

    /// Current terminal size in (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Clear the whole screen, e.g. after a resize or a grid replacement.
    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, ResetColor, terminal::Clear(ClearType::All))?;
        self.out.flush()
    }

    /// Draw every cell of `grid` and the status area below it.
    pub fn draw(&mut self, grid: &Grid, status: &str, stats: &SearchResult) -> io::Result<()> {
        let side = grid.rows() as u16;
        for row in 0..grid.rows() {
            queue!(self.out, cursor::MoveTo(0, row as u16))?;
            for col in 0..grid.rows() {
                let state = grid
                    .get_node(row as i32, col as i32)
                    .map(|n| n.state())
                    .unwrap_or_default();
                queue!(
                    self.out,
                    SetBackgroundColor(state_color(state)),
                    SetForegroundColor(Color::Black),
                    Print(state_glyph(state))
                )?;
            }
        }
        queue!(self.out, ResetColor)?;

        let lines = [status.to_string(), stats_line(stats), HELP.to_string()];
        for (i, line) in lines.iter().enumerate() {
            queue!(
                self.out,
                cursor::MoveTo(0, side + i as u16),
                terminal::Clear(ClearType::CurrentLine),
                Print(line)
            )?;
        }
        self.out.flush()
    }

    /// Wait up to `timeout` for input and return the first mapped action.
    /// Unmapped events are drained and ignored.
    pub fn poll(&mut self, timeout: Duration) -> io::Result<Option<Action>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        while event::poll(Duration::ZERO)? {
            if let Some(action) = action_for(event::read()?) {
                return Ok(Some(action));
            }
        }
        Ok(None)
    }

    /// Leave raw mode and restore the screen. Safe to call more than once.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        let _ = queue!(
            self.out,
            ResetColor,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = self.out.flush();
        let _ = terminal::disable_raw_mode();
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        self.close();
    }
}
