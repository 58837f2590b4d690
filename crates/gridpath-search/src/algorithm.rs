use std::fmt;
use std::str::FromStr;

use gridpath_core::{Coord, Grid};

use crate::astar::AStar;
use crate::cancel::CancelToken;
use crate::dijkstra::Dijkstra;
use crate::result::SearchResult;

/// Runtime choice between the available searches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    AStar,
    Dijkstra,
}

impl Algorithm {
    /// All algorithms, in menu order.
    pub const ALL: [Algorithm; 2] = [Algorithm::AStar, Algorithm::Dijkstra];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "A*",
            Self::Dijkstra => "Dijkstra",
        }
    }

    /// Upper-case tag used in status messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::AStar => "ASTAR",
            Self::Dijkstra => "DIJKSTRA",
        }
    }

    /// Run the selected search. See [`AStar::run`].
    pub fn run<D: FnMut(&Grid)>(self, grid: &mut Grid, start: Coord, end: Coord, draw: D) -> SearchResult {
        self.run_with_cancel(grid, start, end, draw, &CancelToken::new())
    }

    /// Run the selected search with a cancellation token.
    pub fn run_with_cancel<D: FnMut(&Grid)>(
        self,
        grid: &mut Grid,
        start: Coord,
        end: Coord,
        draw: D,
        cancel: &CancelToken,
    ) -> SearchResult {
        match self {
            Self::AStar => AStar::run_with_cancel(grid, start, end, draw, cancel),
            Self::Dijkstra => Dijkstra::run_with_cancel(grid, start, end, draw, cancel),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            "dijkstra" => Ok(Self::Dijkstra),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm \u{201c}{}\u{201d} (expected astar or dijkstra)", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::layout;

    #[test]
    fn parse_names() {
        assert_eq!("astar".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!("Dijkstra".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
        let err = "bfs".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, UnknownAlgorithm("bfs".into()));
        assert!(err.to_string().contains("bfs"));
    }

    #[test]
    fn labels() {
        assert_eq!(Algorithm::AStar.label(), "ASTAR");
        assert_eq!(Algorithm::Dijkstra.to_string(), "Dijkstra");
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        let rows = ["S.#", "..#", "..E"];
        for alg in Algorithm::ALL {
            let (mut grid, s, e) = layout(&rows);
            let r = alg.run(&mut grid, s, e, |_: &Grid| {});
            assert_eq!(r.path_length, 4, "{alg}");
        }
    }
}
