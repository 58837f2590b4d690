use gridpath_core::Coord;

/// Cost-to-go estimate used to order the open set.
///
/// On a unit-cost 4-connected grid the estimate must never exceed the number
/// of steps between the two cells (admissible) and must change by at most one
/// between adjacent cells (consistent); otherwise the search may settle cells
/// too early and report a longer path than necessary.
pub trait Heuristic {
    /// Estimated number of steps from `from` to `to`.
    fn estimate(&self, from: Coord, to: Coord) -> u32;
}
