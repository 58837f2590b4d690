//! **gridpath-core** — the lattice model behind the gridpath visualizer.
//!
//! This crate provides the types every other gridpath crate builds on:
//! lattice and pixel coordinates, the per-cell [`NodeState`] machine, the
//! [`Node`] cell and the square [`Grid`] arena that owns them.
//!
//! Neighbor lists are cached per node and refreshed explicitly with
//! [`Grid::update_neighbors`]; they must be refreshed after barrier edits and
//! before every search.

pub mod geom;
pub mod grid;
pub mod node;

pub use geom::{Coord, Point};
pub use grid::{Grid, MAX_ROWS};
pub use node::{Node, NodeState};
