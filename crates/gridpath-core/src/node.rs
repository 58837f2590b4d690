//! The [`Node`] type — a single lattice cell and its [`NodeState`].

use crate::geom::Coord;
use crate::grid::Grid;

/// The role a cell currently plays. Exactly one at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeState {
    /// Empty, passable cell.
    #[default]
    Default,
    /// Frontier: discovered and queued by a search.
    Open,
    /// Settled: popped and expanded by a search.
    Closed,
    /// Impassable.
    Barrier,
    Start,
    End,
    /// Part of the reconstructed shortest path.
    Path,
}

impl NodeState {
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    #[inline]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }

    #[inline]
    pub const fn is_barrier(self) -> bool {
        matches!(self, Self::Barrier)
    }

    #[inline]
    pub const fn is_start(self) -> bool {
        matches!(self, Self::Start)
    }

    #[inline]
    pub const fn is_end(self) -> bool {
        matches!(self, Self::End)
    }

    #[inline]
    pub const fn is_path(self) -> bool {
        matches!(self, Self::Path)
    }

    /// Whether this state was left behind by a search (`Open`, `Closed` or
    /// `Path`) rather than painted by the user.
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Open | Self::Closed | Self::Path)
    }
}

/// A single grid cell.
///
/// The neighbor list holds coordinates rather than references; they are
/// resolved through the owning [`Grid`] at traversal time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    coord: Coord,
    state: NodeState,
    neighbors: Vec<Coord>,
}

impl Node {
    /// Create a `Default` node at `coord` with no cached neighbors.
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            state: NodeState::Default,
            neighbors: Vec::with_capacity(4),
        }
    }

    /// Lattice position (identity) of this node.
    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.coord.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.coord.col
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> NodeState {
        self.state
    }

    /// Overwrite the state.
    #[inline]
    pub fn set_state(&mut self, state: NodeState) {
        self.state = state;
    }

    /// Cached neighbor list, valid after the last [`Grid::update_neighbors`].
    #[inline]
    pub fn neighbors(&self) -> &[Coord] {
        &self.neighbors
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: Vec<Coord>) {
        self.neighbors = neighbors;
    }

    /// Compute the passable orthogonal neighbors of this node in `grid`.
    ///
    /// Returns in-bounds, non-barrier cells in probe order: down, up, right,
    /// left. Does not touch the cached list.
    pub fn neighbors_of(&self, grid: &Grid) -> Vec<Coord> {
        self.coord
            .neighbors_4()
            .into_iter()
            .filter(|&c| grid.node(c).is_some_and(|n| !n.state.is_barrier()))
            .collect()
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.state.is_barrier()
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.state.is_start()
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.state.is_end()
    }

    #[inline]
    pub fn is_path(&self) -> bool {
        self.state.is_path()
    }

    pub fn reset(&mut self) {
        self.state = NodeState::Default;
    }

    pub fn make_start(&mut self) {
        self.state = NodeState::Start;
    }

    pub fn make_end(&mut self) {
        self.state = NodeState::End;
    }

    pub fn make_barrier(&mut self) {
        self.state = NodeState::Barrier;
    }

    pub fn make_open(&mut self) {
        self.state = NodeState::Open;
    }

    pub fn make_closed(&mut self) {
        self.state = NodeState::Closed;
    }

    pub fn make_path(&mut self) {
        self.state = NodeState::Path;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_returns_every_state_to_default() {
        let mut n = Node::new(Coord::new(0, 0));
        let makers: [fn(&mut Node); 7] = [
            Node::make_open,
            Node::make_closed,
            Node::make_path,
            Node::make_start,
            Node::make_end,
            Node::make_barrier,
            Node::reset,
        ];
        for make in makers {
            make(&mut n);
            n.reset();
            assert_eq!(n.state(), NodeState::Default);
            n.reset();
            assert_eq!(n.state(), NodeState::Default);
        }
    }

    #[test]
    fn transitions_overwrite_unconditionally() {
        let mut n = Node::new(Coord::new(1, 1));
        n.make_start();
        n.make_barrier();
        assert!(n.is_barrier());
        assert!(!n.is_start());
        n.make_end();
        n.make_path();
        assert!(n.is_path());
        assert_eq!(n.coord(), Coord::new(1, 1));
    }

    #[test]
    fn search_marks() {
        assert!(NodeState::Open.is_search_mark());
        assert!(NodeState::Closed.is_search_mark());
        assert!(NodeState::Path.is_search_mark());
        assert!(!NodeState::Start.is_search_mark());
        assert!(!NodeState::Barrier.is_search_mark());
        assert!(!NodeState::Default.is_search_mark());
    }

    #[test]
    fn neighbors_of_skips_barriers_and_edges() {
        let mut g = Grid::new(3, 30);
        let corner = g.node(Coord::new(0, 0)).unwrap().neighbors_of(&g);
        assert_eq!(corner, vec![Coord::new(1, 0), Coord::new(0, 1)]);

        g.node_mut(Coord::new(2, 1)).unwrap().make_barrier();
        let centre = g.node(Coord::new(1, 1)).unwrap().neighbors_of(&g);
        assert_eq!(
            centre,
            vec![Coord::new(0, 1), Coord::new(1, 2), Coord::new(1, 0)]
        );
    }
}
