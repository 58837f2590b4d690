use gridpath_core::Coord;

/// Sentinel cost meaning "not reached".
pub const UNREACHABLE: u32 = u32::MAX;

/// Manhattan (L1) distance between two lattice cells.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}
