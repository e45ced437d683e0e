//! [`Topology`] implementations for the grids of `gridwalk-core`.

use gridwalk_core::{HexGrid, RectGrid};

use crate::distance::{self, DIAGONAL_STEP, ORTHOGONAL_STEP};
use crate::traits::Topology;

impl Topology for RectGrid {
    #[inline]
    fn size(&self) -> usize {
        RectGrid::size(self)
    }

    #[inline]
    fn neighbors(&self, index: usize, diagonal: bool, buf: &mut Vec<usize>) {
        self.neighbors_into(index, diagonal, buf);
    }

    /// Straight when both cells share a row or a column, diagonal otherwise.
    /// Wrapped steps count by rows and columns too, so stepping off the
    /// west edge is still a straight step.
    fn step_cost(&self, from: usize, to: usize) -> f64 {
        let (fr, fc) = self.row_column(from);
        let (tr, tc) = self.row_column(to);
        if fr == tr || fc == tc { ORTHOGONAL_STEP } else { DIAGONAL_STEP }
    }

    /// Octile distance on row and column differences. Ignores wrapping.
    fn estimate(&self, from: usize, goal: usize) -> f64 {
        let (fr, fc) = self.row_column(from);
        let (gr, gc) = self.row_column(goal);
        distance::octile(fr.abs_diff(gr), fc.abs_diff(gc))
    }
}

impl Topology for HexGrid {
    #[inline]
    fn size(&self) -> usize {
        HexGrid::size(self)
    }

    #[inline]
    fn neighbors(&self, index: usize, _diagonal: bool, buf: &mut Vec<usize>) {
        self.neighbors_into(index, buf);
    }

    #[inline]
    fn step_cost(&self, _from: usize, _to: usize) -> f64 {
        ORTHOGONAL_STEP
    }

    fn estimate(&self, from: usize, goal: usize) -> f64 {
        match (self.cube(from), self.cube(goal)) {
            (Some(a), Some(b)) => distance::hex_distance(a, b),
            _ => 0.0,
        }
    }
}
