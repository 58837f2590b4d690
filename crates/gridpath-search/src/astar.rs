use gridpath_core::{Coord, Grid};

use crate::cancel::CancelToken;
use crate::distance::manhattan;
use crate::engine::search;
use crate::result::SearchResult;
use crate::traits::Heuristic;

/// A* search guided by Manhattan distance.
///
/// Manhattan distance is admissible and consistent on unit-cost 4-connected
/// grids, so the reported path is a shortest one and A* never expands more
/// nodes than [`Dijkstra`](crate::Dijkstra) on the same grid.
#[derive(Copy, Clone, Debug, Default)]
pub struct AStar;

impl Heuristic for AStar {
    #[inline]
    fn estimate(&self, from: Coord, to: Coord) -> u32 {
        manhattan(from, to)
    }
}

impl AStar {
    /// Search from `start` to `end`, calling `draw` after every expansion
    /// and every path step.
    ///
    /// `start` and `end` must differ and the grid's neighbor lists must be
    /// fresh. Finding no path is not an error: the result has
    /// `path_length == 0`.
    pub fn run<D: FnMut(&Grid)>(grid: &mut Grid, start: Coord, end: Coord, draw: D) -> SearchResult {
        Self::run_with_cancel(grid, start, end, draw, &CancelToken::new())
    }

    /// Like [`run`](Self::run), stopping early once `cancel` is triggered.
    pub fn run_with_cancel<D: FnMut(&Grid)>(
        grid: &mut Grid,
        start: Coord,
        end: Coord,
        mut draw: D,
        cancel: &CancelToken,
    ) -> SearchResult {
        search("A*", &AStar, grid, start, end, &mut draw, cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::layout;
    use gridpath_core::NodeState;

    #[test]
    fn two_by_two_diagonal() {
        let (mut grid, s, e) = layout(&["S.", ".E"]);
        let r = AStar::run(&mut grid, s, e, |_: &Grid| {});
        assert_eq!(r.path_length, 2);
        assert!(r.nodes_explored <= 4);
        assert!(r.found());
        assert!(!r.cancelled);
    }

    #[test]
    fn straight_corridor_explores_only_the_corridor() {
        let (mut grid, s, e) = layout(&["S...E", ".....", ".....", ".....", "....."]);
        let r = AStar::run(&mut grid, s, e, |_: &Grid| {});
        assert_eq!(r.path_length, 4);
        // Every node on the corridor has f = 4; nothing off it can tie first.
        assert_eq!(r.nodes_explored, 5);
        for col in 1..4 {
            assert_eq!(grid.state(Coord::new(0, col)), Some(NodeState::Path));
        }
    }

    #[test]
    fn routes_around_a_wall() {
        let (mut grid, s, e) = layout(&["S#...", ".#.#.", ".#.#.", ".#.#.", "...#E"]);
        let r = AStar::run(&mut grid, s, e, |_: &Grid| {});
        assert_eq!(r.path_length, 16);
        assert_eq!(grid.iter().filter(|n| n.is_path()).count(), 15);
    }

    #[test]
    fn leaves_open_and_closed_marks() {
        let (mut grid, s, e) = layout(&["S....", ".....", ".....", ".....", "....E"]);
        AStar::run(&mut grid, s, e, |_: &Grid| {});
        assert!(grid.iter().any(|n| n.is_closed()));
        assert!(grid.iter().all(|n| !n.is_barrier()));
        assert_eq!(grid.state(s), Some(NodeState::Start));
        assert_eq!(grid.state(e), Some(NodeState::End));
    }
}
