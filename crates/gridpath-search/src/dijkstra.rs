use gridpath_core::{Coord, Grid};

use crate::cancel::CancelToken;
use crate::engine::search;
use crate::result::SearchResult;
use crate::traits::Heuristic;

/// Dijkstra's search: A* with a zero estimate.
///
/// With unit edge costs it settles nodes in breadth-first order of distance
/// from the start.
#[derive(Copy, Clone, Debug, Default)]
pub struct Dijkstra;

impl Heuristic for Dijkstra {
    #[inline]
    fn estimate(&self, _from: Coord, _to: Coord) -> u32 {
        0
    }
}

impl Dijkstra {
    /// Search from `start` to `end`, calling `draw` after every expansion
    /// and every path step.
    ///
    /// Same preconditions and result contract as [`AStar::run`](crate::AStar::run).
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
        search("Dijkstra", &Dijkstra, grid, start, end, &mut draw, cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::layout;

    #[test]
    fn two_by_two_diagonal() {
        let (mut grid, s, e) = layout(&["S.", ".E"]);
        let r = Dijkstra::run(&mut grid, s, e, |_: &Grid| {});
        assert_eq!(r.path_length, 2);
        assert_eq!(r.nodes_explored, 4);
    }

    #[test]
    fn explores_every_closer_cell_first() {
        // Everything at distance < 4 from the start is settled before the end.
        let (mut grid, s, e) = layout(&["S...E", ".....", ".....", ".....", "....."]);
        let r = Dijkstra::run(&mut grid, s, e, |_: &Grid| {});
        assert_eq!(r.path_length, 4);
        // 1 + 2 + 3 + 4 cells at distances 0..=3, plus at least the end.
        assert!(r.nodes_explored >= 11);
    }

    #[test]
    fn explores_at_least_as_much_as_astar() {
        let rows = ["S....", ".##..", "...#.", ".#...", "...#E"];
        let (mut g1, s, e) = layout(&rows);
        let (mut g2, _, _) = layout(&rows);
        let d = Dijkstra::run(&mut g1, s, e, |_: &Grid| {});
        let a = crate::AStar::run(&mut g2, s, e, |_: &Grid| {});
        assert_eq!(d.path_length, a.path_length);
        assert!(a.nodes_explored <= d.nodes_explored);
    }
}
