use std::collections::VecDeque;

use gridpath_core::{Coord, Grid};

use crate::distance::UNREACHABLE;

/// Breadth-first step counts from `source` over the grid's cached adjacency.
///
/// Returns one entry per node in arena order; cells that cannot be reached
/// hold [`UNREACHABLE`]. An out-of-bounds source reaches nothing.
pub fn bfs_distances(grid: &Grid, source: Coord) -> Vec<u32> {
    let mut dist = vec![UNREACHABLE; grid.len()];
    let Some(si) = grid.index(source) else {
        return dist;
    };

    let mut queue: VecDeque<usize> = VecDeque::new();
    dist[si] = 0;
    queue.push_back(si);

    while let Some(ci) = queue.pop_front() {
        let next = dist[ci] + 1;
        for &np in grid.node_at(ci).neighbors() {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = next;
            queue.push_back(ni);
        }
    }
    dist
}

/// Length in steps of a shortest path from `start` to `end`, or `None` if
/// `end` cannot be reached.
///
/// This ignores node states other than what the cached neighbor lists
/// encode, so refresh them with [`Grid::update_neighbors`] first.
pub fn bfs_path_len(grid: &Grid, start: Coord, end: Coord) -> Option<usize> {
    let ei = grid.index(end)?;
    match bfs_distances(grid, start)[ei] {
        UNREACHABLE => None,
        d => Some(d as usize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::layout;

    #[test]
    fn distances_on_open_grid_are_manhattan() {
        let (grid, s, _) = layout(&["S..", "...", "..E"]);
        let dist = bfs_distances(&grid, s);
        for (i, &d) in dist.iter().enumerate() {
            let c = grid.coord(i);
            assert_eq!(d, crate::manhattan(s, c));
        }
    }

    #[test]
    fn barriers_are_never_entered() {
        let (grid, s, e) = layout(&["S#.", "##.", "..E"]);
        let dist = bfs_distances(&grid, s);
        assert_eq!(dist.iter().filter(|&&d| d != UNREACHABLE).count(), 1);
        assert_eq!(bfs_path_len(&grid, s, e), None);
    }

    #[test]
    fn path_len_detours() {
        let (grid, s, e) = layout(&["S#.", ".#.", "..E"]);
        assert_eq!(bfs_path_len(&grid, s, e), Some(4));
        assert_eq!(bfs_path_len(&grid, s, Coord::new(9, 9)), None);
    }
}
