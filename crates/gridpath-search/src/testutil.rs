//! Grid builders shared by the search tests.

use gridpath_core::{Coord, Grid};
use proptest::prelude::*;

/// Build a grid from ASCII rows: `S` start, `E` end, `#` barrier, anything
/// else is empty. Neighbors are refreshed before returning.
pub(crate) fn layout(rows: &[&str]) -> (Grid, Coord, Coord) {
    let mut grid = Grid::new(rows.len(), rows.len() as i32 * 10);
    let mut start = Coord::ZERO;
    let mut end = Coord::ZERO;
    for (r, line) in rows.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            let coord = Coord::new(r as i32, c as i32);
            let node = grid.node_mut(coord).expect("layout rows must be square");
            match ch {
                'S' => {
                    node.make_start();
                    start = coord;
                }
                'E' => {
                    node.make_end();
                    end = coord;
                }
                '#' => node.make_barrier(),
                _ => {}
            }
        }
    }
    grid.update_neighbors();
    (grid, start, end)
}

/// A square barrier mask produced by [`random_layout`].
#[derive(Clone, Debug)]
pub(crate) struct Walls {
    size: usize,
    cells: Vec<bool>,
}

impl Walls {
    /// Materialize the mask with start and end painted on top.
    pub(crate) fn build(&self, start: Coord, end: Coord) -> (Grid, Coord, Coord) {
        let mut grid = Grid::new(self.size, self.size as i32 * 10);
        for (i, &wall) in self.cells.iter().enumerate() {
            if wall {
                grid.node_at_mut(i).make_barrier();
            }
        }
        grid.node_mut(start).expect("start in bounds").make_start();
        grid.node_mut(end).expect("end in bounds").make_end();
        grid.update_neighbors();
        (grid, start, end)
    }
}

/// Random `size × size` barrier masks with distinct start and end cells.
pub(crate) fn random_layout(size: usize) -> impl Strategy<Value = (Walls, Coord, Coord)> {
    let n = size * size;
    (
        proptest::collection::vec(proptest::bool::weighted(0.3), n),
        0..n,
        0..n,
    )
        .prop_filter("start and end must differ", |(_, s, e)| s != e)
        .prop_map(move |(cells, s, e)| {
            let at = |i: usize| Coord::new((i / size) as i32, (i % size) as i32);
            (Walls { size, cells }, at(s), at(e))
        })
}
