/// Adjacency and metric of a grid, as seen by [`PathSearch`](crate::PathSearch).
///
/// Cells are addressed by linear index in `0..size()`.
pub trait Topology {
    /// Number of cells.
    fn size(&self) -> usize;

    /// Append neighbors of `index` into `buf`. The caller clears `buf`
    /// before calling. Topologies without diagonals ignore `diagonal`.
    fn neighbors(&self, index: usize, diagonal: bool, buf: &mut Vec<usize>);

    /// Base cost of stepping from `from` to the adjacent `to`, before the
    /// destination's cost multiplier is applied.
    fn step_cost(&self, from: usize, to: usize) -> f64;

    /// Heuristic estimate of the cost from `from` to `goal`.
    fn estimate(&self, from: usize, goal: usize) -> f64;
}
