//! The [`Grid`] type — a square, row-major arena of [`Node`]s.
//!
//! Nodes never own each other: adjacency is stored as [`Coord`] lists and
//! resolved back through the grid. Those lists are a cache; call
//! [`Grid::update_neighbors`] after any barrier edit and before a search.

use crate::geom::{Coord, Point};
use crate::node::{Node, NodeState};

/// Largest grid side [`Grid::new`] will build.
///
/// Keeps every coordinate within `i32` and the cell count within `usize`.
pub const MAX_ROWS: usize = 1024;

/// An N×N lattice of [`Node`]s.
#[derive(Clone, Debug)]
pub struct Grid {
    nodes: Vec<Node>,
    rows: usize,
    pixel_width: i32,
    gap: i32,
}

impl Grid {
    /// Create a `rows × rows` grid of `Default` nodes. `rows` is clamped to
    /// [`MAX_ROWS`].
    ///
    /// `pixel_width` only determines the per-cell size used by
    /// [`coordinate_from_point`](Grid::coordinate_from_point).
    pub fn new(rows: usize, pixel_width: i32) -> Self {
        let rows = rows.min(MAX_ROWS);
        let gap = if rows == 0 {
            1
        } else {
            (pixel_width / rows as i32).max(1)
        };
        let mut nodes = Vec::with_capacity(rows * rows);
        for row in 0..rows {
            for col in 0..rows {
                nodes.push(Node::new(Coord::new(row as i32, col as i32)));
            }
        }
        Self {
            nodes,
            rows,
            pixel_width,
            gap,
        }
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn pixel_width(&self) -> i32 {
        self.pixel_width
    }

    /// Side length of one cell in pixels.
    #[inline]
    pub fn cell_size(&self) -> i32 {
        self.gap
    }

    /// Total number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `c` lies inside the lattice.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        let n = self.rows as i32;
        c.row >= 0 && c.col >= 0 && c.row < n && c.col < n
    }

    /// Flat arena index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some(c.row as usize * self.rows + c.col as usize)
        } else {
            None
        }
    }

    /// Coordinate of the node at flat index `idx`.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::new((idx / self.rows) as i32, (idx % self.rows) as i32)
    }

    /// Bounds-checked lookup by row and column.
    #[inline]
    pub fn get_node(&self, row: i32, col: i32) -> Option<&Node> {
        self.node(Coord::new(row, col))
    }

    /// Mutable form of [`get_node`](Grid::get_node).
    #[inline]
    pub fn get_node_mut(&mut self, row: i32, col: i32) -> Option<&mut Node> {
        self.node_mut(Coord::new(row, col))
    }

    /// Bounds-checked lookup by coordinate.
    #[inline]
    pub fn node(&self, c: Coord) -> Option<&Node> {
        self.index(c).map(|i| &self.nodes[i])
    }

    #[inline]
    pub fn node_mut(&mut self, c: Coord) -> Option<&mut Node> {
        let i = self.index(c)?;
        Some(&mut self.nodes[i])
    }

    /// Node at flat index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn node_at(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    #[inline]
    pub fn node_at_mut(&mut self, idx: usize) -> &mut Node {
        &mut self.nodes[idx]
    }

    /// State of the node at `c`, or `None` if out of bounds.
    #[inline]
    pub fn state(&self, c: Coord) -> Option<NodeState> {
        self.node(c).map(Node::state)
    }

    /// Map a pixel position to the lattice cell under it.
    ///
    /// The result is not bounds-checked; pass it to
    /// [`node`](Grid::node) to find out whether a cell is there.
    pub fn coordinate_from_point(&self, p: Point) -> Coord {
        Coord::new(p.y.div_euclid(self.gap), p.x.div_euclid(self.gap))
    }

    /// Recompute every node's cached neighbor list from current barriers.
    pub fn update_neighbors(&mut self) {
        let lists: Vec<Vec<Coord>> = self.nodes.iter().map(|n| n.neighbors_of(self)).collect();
        for (node, list) in self.nodes.iter_mut().zip(lists) {
            node.set_neighbors(list);
        }
    }

    /// Whether every cached neighbor list matches the current barrier layout.
    ///
    /// This recomputes adjacency from scratch; it is meant for debug
    /// assertions, not hot paths.
    pub fn has_fresh_neighbors(&self) -> bool {
        self.nodes.iter().all(|n| n.neighbors() == n.neighbors_of(self).as_slice())
    }

    /// Cached neighbors of the node at `c` (empty if out of bounds).
    #[inline]
    pub fn neighbors(&self, c: Coord) -> &[Coord] {
        self.node(c).map(Node::neighbors).unwrap_or(&[])
    }

    /// Reset every `Open`, `Closed` and `Path` node to `Default`, then
    /// re-assert `start` and `end` if given.
    pub fn clear_search_marks(&mut self, start: Option<Coord>, end: Option<Coord>) {
        for node in self.nodes.iter_mut() {
            if node.state().is_search_mark() {
                node.reset();
            }
        }
        if let Some(n) = start.and_then(|c| self.node_mut(c)) {
            n.make_start();
        }
        if let Some(n) = end.and_then(|c| self.node_mut(c)) {
            n.make_end();
        }
    }

    /// Row-major iterator over nodes.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Row-major mutable iterator over nodes.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Node> {
        self.nodes.iter_mut()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
