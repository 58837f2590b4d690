//! The search loop shared by A* and Dijkstra.

use std::time::Instant;

use gridpath_core::{Coord, Grid};

use crate::cancel::CancelToken;
use crate::distance::UNREACHABLE;
use crate::open_set::OpenSet;
use crate::result::SearchResult;
use crate::traits::Heuristic;

/// Run a best-first search from `start` to `end`, marking progress on `grid`.
///
/// Every popped node counts as explored. After a node's neighbors are
/// relaxed, `draw` is called and the node is marked `Closed`. Start and end
/// cells never lose their roles. On success the path is marked, one `draw`
/// per step, and `path_length` is the number of steps.
pub(crate) fn search<H, D>(
    name: &str,
    heuristic: &H,
    grid: &mut Grid,
    start: Coord,
    end: Coord,
    draw: &mut D,
    cancel: &CancelToken,
) -> SearchResult
where
    H: Heuristic + ?Sized,
    D: FnMut(&Grid) + ?Sized,
{
    let started = Instant::now();
    debug_assert_ne!(start, end, "search needs distinct start and end");
    debug_assert!(
        grid.has_fresh_neighbors(),
        "stale adjacency: call Grid::update_neighbors before searching"
    );

    let (Some(si), Some(ei)) = (grid.index(start), grid.index(end)) else {
        log::debug!("{name}: start {start} or end {end} outside the grid");
        return SearchResult::new(0, 0, started.elapsed());
    };

    let len = grid.len();
    let mut g_score = vec![UNREACHABLE; len];
    let mut came_from: Vec<Option<usize>> = vec![None; len];
    let mut open = OpenSet::new(len);
    let mut nbuf: Vec<Coord> = Vec::with_capacity(4);
    let mut explored = 0usize;

    g_score[si] = 0;
    open.push(si, heuristic.estimate(start, end));

    loop {
        if cancel.is_cancelled() {
            log::debug!("{name}: cancelled after {explored} nodes");
            return SearchResult::cancelled(explored, started.elapsed());
        }
        let Some(ci) = open.pop() else {
            break;
        };
        explored += 1;

        if ci == ei {
            let path_length = reconstruct_path(grid, &came_from, si, ei, draw);
            grid.node_at_mut(ei).make_end();
            grid.node_at_mut(si).make_start();
            let result = SearchResult::new(explored, path_length, started.elapsed());
            log::debug!(
                "{name}: path of {} steps, {} nodes explored in {} ms",
                result.path_length,
                result.nodes_explored,
                result.time_ms
            );
            return result;
        }

        let current = grid.coord(ci);
        let tentative = g_score[ci] + 1;

        nbuf.clear();
        nbuf.extend_from_slice(grid.node_at(ci).neighbors());
        for &np in nbuf.iter() {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if tentative >= g_score[ni] {
                continue;
            }
            came_from[ni] = Some(ci);
            g_score[ni] = tentative;

            // A queued neighbor keeps its original priority.
            if open.contains(ni) {
                continue;
            }
            open.push(ni, tentative + heuristic.estimate(np, end));
            if ni != si && ni != ei {
                grid.node_at_mut(ni).make_open();
            }
        }

        draw(grid);

        if ci != si {
            grid.node_at_mut(ci).make_closed();
        }
        log::trace!("{name}: settled {current} at cost {}", g_score[ci]);
    }

    let result = SearchResult::new(explored, 0, started.elapsed());
    log::debug!(
        "{name}: no path, {} nodes explored in {} ms",
        result.nodes_explored,
        result.time_ms
    );
    result
}

/// Walk predecessors back from `end`, marking every cell but `start` as
/// `Path`. Returns the number of steps.
fn reconstruct_path<D>(
    grid: &mut Grid,
    came_from: &[Option<usize>],
    start: usize,
    end: usize,
    draw: &mut D,
) -> usize
where
    D: FnMut(&Grid) + ?Sized,
{
    let mut steps = 0;
    let mut ci = end;
    while let Some(prev) = came_from[ci] {
        ci = prev;
        if ci != start {
            grid.node_at_mut(ci).make_path();
        }
        steps += 1;
        draw(grid);
    }
    steps
}
