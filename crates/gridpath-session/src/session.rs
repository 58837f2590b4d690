use gridpath_core::{Coord, Grid, Point};
use gridpath_search::{Algorithm, CancelToken, SearchResult};

use crate::config::SessionConfig;
use crate::error::{InvalidSearch, SessionError};

/// A front-end action, already mapped from raw input to lattice terms.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Place the start, then the end, then barriers.
    Paint(Coord),
    /// Return a cell to empty, dropping any start/end role it held.
    Erase(Coord),
    /// Run a search between the current start and end.
    Run(Algorithm),
    /// Replace the grid with an empty one.
    ClearGrid,
    /// Remove search marks, keeping start, end and barriers.
    ResetPath,
}

/// Grid plus start/end bookkeeping and the stats of the last run.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    grid: Grid,
    start: Option<Coord>,
    end: Option<Coord>,
    algorithm: Option<Algorithm>,
    stats: SearchResult,
}

impl Session {
    /// Create a session with an empty grid.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            grid: Grid::new(config.rows, config.grid_width),
            start: None,
            end: None,
            algorithm: None,
            stats: SearchResult::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    /// Algorithm of the last run, if any since the last clear.
    #[inline]
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    /// Result of the last run, or all zeros.
    #[inline]
    pub fn stats(&self) -> SearchResult {
        self.stats
    }

    /// Execute `cmd`. `draw` is only called by [`Command::Run`].
    ///
    /// Returns the search result for `Run`, `None` otherwise.
    pub fn apply<D: FnMut(&Grid)>(
        &mut self,
        cmd: Command,
        draw: D,
    ) -> Result<Option<SearchResult>, SessionError> {
        match cmd {
            Command::Paint(c) => self.paint(c),
            Command::Erase(c) => self.erase(c),
            Command::Run(alg) => return self.run(alg, draw).map(Some),
            Command::ClearGrid => self.clear_grid(),
            Command::ResetPath => self.reset_path(),
        }
        Ok(None)
    }

    /// Paint the cell at `c`.
    ///
    /// The first paint places the start, the next one (on another cell)
    /// the end; later paints make barriers. The current start and end are
    /// never painted over. Out-of-bounds coordinates are ignored.
    pub fn paint(&mut self, c: Coord) {
        let Some(node) = self.grid.node_mut(c) else {
            return;
        };
        if self.start.is_none() && self.end != Some(c) {
            node.make_start();
            self.start = Some(c);
        } else if self.end.is_none() && self.start != Some(c) {
            node.make_end();
            self.end = Some(c);
        } else if self.start != Some(c) && self.end != Some(c) {
            node.make_barrier();
        }
    }

    /// Reset the cell at `c` to empty. Out-of-bounds coordinates are ignored.
    pub fn erase(&mut self, c: Coord) {
        let Some(node) = self.grid.node_mut(c) else {
            return;
        };
        node.reset();
        if self.start == Some(c) {
            self.start = None;
        } else if self.end == Some(c) {
            self.end = None;
        }
    }

    /// [`paint`](Self::paint) the cell under pixel `p`.
    pub fn paint_at(&mut self, p: Point) {
        let c = self.grid.coordinate_from_point(p);
        self.paint(c);
    }

    /// [`erase`](Self::erase) the cell under pixel `p`.
    pub fn erase_at(&mut self, p: Point) {
        let c = self.grid.coordinate_from_point(p);
        self.erase(c);
    }

    /// Check that a search can run, returning the start and end cells.
    pub fn validate(&self) -> Result<(Coord, Coord), InvalidSearch> {
        let start = self.start.ok_or(InvalidSearch::MissingStart)?;
        let end = self.end.ok_or(InvalidSearch::MissingEnd)?;
        if start == end {
            return Err(InvalidSearch::SameStartEnd);
        }
        Ok((start, end))
    }

    /// Clear old search marks, refresh adjacency, and run `algorithm`.
    pub fn run<D: FnMut(&Grid)>(
        &mut self,
        algorithm: Algorithm,
        draw: D,
    ) -> Result<SearchResult, SessionError> {
        self.run_with_cancel(algorithm, draw, &CancelToken::new())
    }

    /// Like [`run`](Self::run), stopping early once `cancel` is triggered.
    pub fn run_with_cancel<D: FnMut(&Grid)>(
        &mut self,
        algorithm: Algorithm,
        draw: D,
        cancel: &CancelToken,
    ) -> Result<SearchResult, SessionError> {
        let (start, end) = self.validate().inspect_err(|why| {
            log::debug!("refusing {algorithm} run: {why}");
        })?;

        self.algorithm = Some(algorithm);
        self.reset_path();
        self.grid.update_neighbors();

        log::info!("running {algorithm} from {start} to {end}");
        let result = algorithm.run_with_cancel(&mut self.grid, start, end, draw, cancel);
        self.stats = result;
        Ok(result)
    }

    /// Replace the grid with a fresh one and forget start, end and stats.
    pub fn clear_grid(&mut self) {
        log::info!("clearing {}x{} grid", self.config.rows, self.config.rows);
        self.grid = Grid::new(self.config.rows, self.config.grid_width);
        self.start = None;
        self.end = None;
        self.algorithm = None;
        self.stats = SearchResult::default();
    }

    /// Remove `Open`, `Closed` and `Path` marks and zero the stats.
    pub fn reset_path(&mut self) {
        self.grid.clear_search_marks(self.start, self.end);
        self.stats = SearchResult::default();
    }

    /// Status line for an idle session.
    pub fn status_text(&self) -> String {
        match (self.start, self.end, self.algorithm) {
            (None, _, _) => "Click to place START node".to_string(),
            (_, None, _) => "Click to place END node".to_string(),
            (_, _, Some(alg)) if self.stats.found() => format!("{} Complete!", alg.label()),
            _ => "Draw barriers, then run algorithm".to_string(),
        }
    }

    /// Status line while `algorithm` is running.
    pub fn running_text(algorithm: Algorithm) -> String {
        format!("Running {}...", algorithm.label())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
