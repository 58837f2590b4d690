//! Shortest-path searches for gridpath lattices.
//!
//! Two searches are provided, both over unit-cost, 4-connected grids:
//!
//! - **A\*** guided by Manhattan distance ([`AStar`])
//! - **Dijkstra**, i.e. A\* with a zero estimate ([`Dijkstra`])
//!
//! Searches mark their progress directly on the [`Grid`](gridpath_core::Grid)
//! (`Open` for the frontier, `Closed` for settled cells, `Path` for the
//! result) and call a caller-supplied `draw` callback after each expanded
//! node, so a front-end can animate them. The callback only gets a shared
//! borrow of the grid and cannot change it mid-search.
//!
//! Callers must call [`Grid::update_neighbors`](gridpath_core::Grid::update_neighbors)
//! before every search and must not pass the same cell as start and end.
//!
//! | Type | Purpose |
//! |---|---|
//! | [`SearchResult`] | explored count, path length, elapsed time |
//! | [`CancelToken`] | cooperative cancellation checked once per expansion |
//! | [`Algorithm`] | runtime selection between the two searches |

mod algorithm;
mod astar;
mod bfs;
mod cancel;
mod dijkstra;
mod distance;
mod engine;
mod open_set;
mod result;
mod traits;

#[cfg(test)]
mod testutil;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use astar::AStar;
pub use bfs::{bfs_distances, bfs_path_len};
pub use cancel::CancelToken;
pub use dijkstra::Dijkstra;
pub use distance::{UNREACHABLE, manhattan};
pub use open_set::OpenSet;
pub use result::SearchResult;
pub use traits::Heuristic;
