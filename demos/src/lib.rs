//! Terminal front-end for the gridpath visualizer.
//!
//! [`run`] owns the event loop: it maps crossterm input to session commands,
//! redraws after each one, and animates searches through the session's draw
//! callback.

pub mod input;
pub mod term;

use std::error::Error;
use std::io;
use std::time::Duration;

use gridpath_core::Grid;
use gridpath_search::{Algorithm, CancelToken, SearchResult};
use gridpath_session::{Command, Session, SessionConfig};

use crate::input::{Action, CELL_WIDTH};
use crate::term::{Terminal, fit_rows, stats_line};

/// Pause between animated search steps.
pub const STEP_DELAY: Duration = Duration::from_millis(5);

/// How long the idle loop waits for input before polling again.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Run the visualizer until the user quits.
///
/// The grid side is `config.rows`, shrunk to fit the terminal.
pub fn run(config: SessionConfig) -> Result<(), Box<dyn Error>> {
    let mut term = Terminal::init()?;
    let (cols, lines) = term.size()?;
    let side = fit_rows(cols, lines, config.rows);
    let mut app = Pathfinder::new(SessionConfig {
        rows: side,
        grid_width: side as i32 * CELL_WIDTH,
    });
    let res = app.event_loop(&mut term);
    term.close();
    res
}

/// The visualizer state: a session plus the loop that drives it.
pub struct Pathfinder {
    session: Session,
}

impl Pathfinder {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            session: Session::new(config),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn redraw(&self, term: &mut Terminal) -> io::Result<()> {
        term.draw(
            self.session.grid(),
            &self.session.status_text(),
            &self.session.stats(),
        )
    }

    fn event_loop(&mut self, term: &mut Terminal) -> Result<(), Box<dyn Error>> {
        self.redraw(term)?;
        loop {
            let Some(action) = term.poll(IDLE_POLL)? else {
                continue;
            };
            match action {
                Action::Quit | Action::Cancel => return Ok(()),
                Action::Run(alg) => {
                    if self.run_search(term, alg)? {
                        return Ok(());
                    }
                }
                Action::Clear => {
                    self.session.apply(Command::ClearGrid, |_: &Grid| {})?;
                    term.clear()?;
                }
                Action::Redraw => term.clear()?,
                other => self.handle_idle(other)?,
            }
            self.redraw(term)?;
        }
    }

    /// Apply an action that needs no terminal access.
    pub fn handle_idle(&mut self, action: Action) -> Result<(), Box<dyn Error>> {
        match action {
            Action::Paint(p) => self.session.paint_at(p),
            Action::Erase(p) => self.session.erase_at(p),
            Action::Reset => {
                self.session.apply(Command::ResetPath, |_: &Grid| {})?;
            }
            Action::Clear => {
                self.session.apply(Command::ClearGrid, |_: &Grid| {})?;
            }
            Action::Run(_) | Action::Cancel | Action::Quit | Action::Redraw => {}
        }
        Ok(())
    }

    /// Animate a search. Returns `true` if the user asked to quit meanwhile.
    fn run_search(&mut self, term: &mut Terminal, algorithm: Algorithm) -> Result<bool, Box<dyn Error>> {
        let cancel = CancelToken::new();
        let status = Session::running_text(algorithm);
        let blank = SearchResult::default();
        let mut quit = false;
        let mut failure: Option<io::Error> = None;

        let outcome = self.session.run_with_cancel(
            algorithm,
            |grid: &Grid| {
                if failure.is_some() {
                    return;
                }
                std::thread::sleep(STEP_DELAY);
                let step = term
                    .draw(grid, &status, &blank)
                    .and_then(|()| term.poll(Duration::ZERO));
                match step {
                    Ok(Some(Action::Cancel)) => cancel.cancel(),
                    Ok(Some(Action::Quit)) => {
                        quit = true;
                        cancel.cancel();
                    }
                    Ok(_) => {}
                    Err(e) => {
                        cancel.cancel();
                        failure = Some(e);
                    }
                }
            },
            &cancel,
        );

        if let Some(e) = failure {
            return Err(e.into());
        }
        match outcome {
            Ok(r) if r.cancelled => log::info!("{algorithm} cancelled after {} nodes", r.nodes_explored),
            Ok(r) => log::info!("{algorithm} finished: {}", stats_line(&r)),
            // Nothing to animate; the status line already says what is missing.
            Err(e) => log::debug!("{e}"),
        }
        Ok(quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::{Coord, NodeState, Point};

    fn app() -> Pathfinder {
        Pathfinder::new(SessionConfig {
            rows: 5,
            grid_width: 5 * CELL_WIDTH,
        })
    }

    #[test]
    fn clicks_paint_through_the_pixel_mapping() {
        let mut app = app();
        app.handle_idle(Action::Paint(input::to_point(0, 0))).unwrap();
        app.handle_idle(Action::Paint(input::to_point(9, 4))).unwrap();
        app.handle_idle(Action::Paint(input::to_point(4, 2))).unwrap();
        let s = app.session();
        assert_eq!(s.start(), Some(Coord::new(0, 0)));
        assert_eq!(s.end(), Some(Coord::new(4, 4)));
        assert_eq!(s.grid().state(Coord::new(2, 2)), Some(NodeState::Barrier));
    }

    #[test]
    fn clicks_outside_the_grid_are_ignored() {
        let mut app = app();
        // The status area sits below the grid.
        app.handle_idle(Action::Paint(input::to_point(0, 6))).unwrap();
        app.handle_idle(Action::Paint(Point::new(40, 0))).unwrap();
        assert_eq!(app.session().start(), None);
    }

    #[test]
    fn reset_and_clear() {
        let mut app = app();
        app.handle_idle(Action::Paint(input::to_point(0, 0))).unwrap();
        app.handle_idle(Action::Paint(input::to_point(8, 4))).unwrap();
        app.handle_idle(Action::Reset).unwrap();
        assert_eq!(app.session().start(), Some(Coord::new(0, 0)));
        app.handle_idle(Action::Clear).unwrap();
        assert_eq!(app.session().start(), None);
        app.handle_idle(Action::Erase(input::to_point(0, 0))).unwrap();
        assert!(app.session().grid().iter().all(|n| n.state() == NodeState::Default));
    }
}
