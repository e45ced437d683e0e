//! The rectangular grid: [`RectGrid`] topology and [`CellAddress`] values.
//!
//! Cells are numbered row-major from the top-left: `index = row * columns +
//! column`. Either axis can wrap toroidally, in which case stepping off one
//! edge lands on the opposite edge of the same row or column.

use crate::direction::Direction;
use crate::error::{GridError, GridResult};
use crate::geom::Point;
use crate::surface::Surface;

// ---------------------------------------------------------------------------
// CellAddress
// ---------------------------------------------------------------------------

/// Every address of one cell of a [`RectGrid`].
///
/// Computed fresh on each query and never cached, so it always reflects the
/// grid's current origin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    pub index: usize,
    pub row: usize,
    pub column: usize,
    /// Left edge in pixels.
    pub x: f64,
    /// Top edge in pixels.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CellAddress {
    /// Top-left corner.
    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether `p` lies inside the half-open cell rectangle.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

// ---------------------------------------------------------------------------
// RectGridConfig
// ---------------------------------------------------------------------------

/// Construction parameters for a [`RectGrid`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RectGridConfig {
    pub columns: usize,
    pub rows: usize,
    pub cell_width: f64,
    pub cell_height: f64,
    pub origin: Point,
    pub wrap_horizontal: bool,
    pub wrap_vertical: bool,
}

impl Default for RectGridConfig {
    fn default() -> Self {
        Self {
            columns: 10,
            rows: 10,
            cell_width: 32.0,
            cell_height: 32.0,
            origin: Point::ZERO,
            wrap_horizontal: false,
            wrap_vertical: false,
        }
    }
}

impl RectGridConfig {
    /// Validate the parameters and build the grid.
    pub fn build(self) -> GridResult<RectGrid> {
        let mut grid = RectGrid::new(self.columns, self.rows, self.cell_width, self.cell_height)?;
        grid.set_origin(self.origin);
        grid.set_wrap(self.wrap_horizontal, self.wrap_vertical);
        Ok(grid)
    }
}

// ---------------------------------------------------------------------------
// RectGrid
// ---------------------------------------------------------------------------

/// A rectangular grid of equally sized cells with optional toroidal wrap.
///
/// Dimensions are fixed at construction; origin and wrap flags may change at
/// any time.
#[derive(Debug, Clone, PartialEq)]
pub struct RectGrid {
    columns: usize,
    rows: usize,
    cell_width: f64,
    cell_height: f64,
    origin: Point,
    wrap_horizontal: bool,
    wrap_vertical: bool,
}

impl RectGrid {
    /// Create a grid with its origin at (0, 0) and wrapping disabled.
    pub fn new(columns: usize, rows: usize, cell_width: f64, cell_height: f64) -> GridResult<Self> {
        if columns == 0 || rows == 0 || columns.checked_mul(rows).is_none() {
            return Err(GridError::InvalidDimensions { columns, rows });
        }
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(cell_width) || !valid(cell_height) {
            return Err(GridError::InvalidCellSize {
                width: cell_width,
                height: cell_height,
            });
        }
        Ok(Self {
            columns,
            rows,
            cell_width,
            cell_height,
            origin: Point::ZERO,
            wrap_horizontal: false,
            wrap_vertical: false,
        })
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.columns * self.rows
    }

    #[inline]
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    #[inline]
    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Pixel width of the whole grid.
    #[inline]
    pub fn width(&self) -> f64 {
        self.columns as f64 * self.cell_width
    }

    /// Pixel height of the whole grid.
    #[inline]
    pub fn height(&self) -> f64 {
        self.rows as f64 * self.cell_height
    }

    /// Top-left corner of the grid in pixels.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    // -----------------------------------------------------------------------
    // Wrapping
    // -----------------------------------------------------------------------

    #[inline]
    pub fn wrap_horizontal(&self) -> bool {
        self.wrap_horizontal
    }

    #[inline]
    pub fn wrap_vertical(&self) -> bool {
        self.wrap_vertical
    }

    pub fn set_wrap(&mut self, horizontal: bool, vertical: bool) {
        self.wrap_horizontal = horizontal;
        self.wrap_vertical = vertical;
    }

    /// Set both wrap flags to the same value.
    pub fn set_wrap_both(&mut self, wrap: bool) {
        self.set_wrap(wrap, wrap);
    }

    /// Flip both wrap flags.
    pub fn toggle_wrap(&mut self) {
        self.wrap_horizontal = !self.wrap_horizontal;
        self.wrap_vertical = !self.wrap_vertical;
    }

    // -----------------------------------------------------------------------
    // Addressing
    // -----------------------------------------------------------------------

    /// Address of the cell at `index`, or `None` if out of range.
    pub fn cell(&self, index: usize) -> Option<CellAddress> {
        if index >= self.size() {
            return None;
        }
        Some(self.address(index / self.columns, index % self.columns))
    }

    /// Address of the cell containing pixel `(x, y)`, or `None` if the point
    /// is outside `[origin, origin + size)`.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<CellAddress> {
        let dx = x - self.origin.x;
        let dy = y - self.origin.y;
        // Written so that NaN fails the check.
        if !(dx >= 0.0 && dx < self.width() && dy >= 0.0 && dy < self.height()) {
            return None;
        }
        let column = ((dx / self.cell_width).floor() as usize).min(self.columns - 1);
        let row = ((dy / self.cell_height).floor() as usize).min(self.rows - 1);
        Some(self.address(row, column))
    }

    /// Address of the cell at `(row, column)`, or `None` if out of range.
    pub fn cell_rc(&self, row: usize, column: usize) -> Option<CellAddress> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(self.address(row, column))
    }

    #[inline]
    fn address(&self, row: usize, column: usize) -> CellAddress {
        CellAddress {
            index: row * self.columns + column,
            row,
            column,
            x: self.origin.x + column as f64 * self.cell_width,
            y: self.origin.y + row as f64 * self.cell_height,
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// `(row, column)` of `index`. The index is not range checked.
    #[inline]
    pub fn row_column(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// Iterator over every cell in index order.
    pub fn cells(&self) -> impl Iterator<Item = CellAddress> + '_ {
        (0..self.size()).map(move |i| self.address(i / self.columns, i % self.columns))
    }

    // -----------------------------------------------------------------------
    // Neighbors
    // -----------------------------------------------------------------------

    /// The cell one row up, wrapping to the bottom row if enabled.
    pub fn neighbor_north(&self, index: usize) -> Option<usize> {
        if index >= self.size() {
            return None;
        }
        if index >= self.columns {
            Some(index - self.columns)
        } else if self.wrap_vertical {
            Some(index + self.size() - self.columns)
        } else {
            None
        }
    }

    /// The cell one column right, wrapping to column 0 if enabled.
    pub fn neighbor_east(&self, index: usize) -> Option<usize> {
        if index >= self.size() {
            return None;
        }
        if index % self.columns + 1 < self.columns {
            Some(index + 1)
        } else if self.wrap_horizontal {
            Some(index + 1 - self.columns)
        } else {
            None
        }
    }

    /// The cell one row down, wrapping to the top row if enabled.
    pub fn neighbor_south(&self, index: usize) -> Option<usize> {
        if index >= self.size() {
            return None;
        }
        if index + self.columns < self.size() {
            Some(index + self.columns)
        } else if self.wrap_vertical {
            Some(index + self.columns - self.size())
        } else {
            None
        }
    }

    /// The cell one column left, wrapping to the last column if enabled.
    pub fn neighbor_west(&self, index: usize) -> Option<usize> {
        if index >= self.size() {
            return None;
        }
        if index % self.columns > 0 {
            Some(index - 1)
        } else if self.wrap_horizontal {
            Some(index + self.columns - 1)
        } else {
            None
        }
    }

    /// Index of the neighbor of `index` in `dir`.
    ///
    /// Diagonals are two hops: the vertical one first, then the horizontal
    /// one from there. If either hop fails the lookup fails.
    pub fn neighbor_index(&self, index: usize, dir: Direction) -> Option<usize> {
        match dir {
            Direction::North => self.neighbor_north(index),
            Direction::East => self.neighbor_east(index),
            Direction::South => self.neighbor_south(index),
            Direction::West => self.neighbor_west(index),
            Direction::NorthEast => self.neighbor_north(index).and_then(|n| self.neighbor_east(n)),
            Direction::SouthEast => self.neighbor_south(index).and_then(|n| self.neighbor_east(n)),
            Direction::SouthWest => self.neighbor_south(index).and_then(|n| self.neighbor_west(n)),
            Direction::NorthWest => self.neighbor_north(index).and_then(|n| self.neighbor_west(n)),
            Direction::Left | Direction::Right => None,
        }
    }

    /// Address of the neighbor of `index` in `dir`.
    pub fn neighbor(&self, index: usize, dir: Direction) -> Option<CellAddress> {
        self.neighbor_index(index, dir).and_then(|n| self.cell(n))
    }

    /// Append the indices of the 4 (or 8 with `diagonal`) neighbors of
    /// `index` to `buf`, in [`Direction::expansion`] order. The caller
    /// clears `buf`.
    pub fn neighbors_into(&self, index: usize, diagonal: bool, buf: &mut Vec<usize>) {
        buf.extend(
            Direction::expansion(diagonal)
                .iter()
                .filter_map(|&d| self.neighbor_index(index, d)),
        );
    }

    /// Indices of the 4 (or 8 with `diagonal`) neighbors of `index`.
    pub fn neighbors(&self, index: usize, diagonal: bool) -> Vec<usize> {
        let mut buf = Vec::with_capacity(8);
        self.neighbors_into(index, diagonal, &mut buf);
        buf
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    /// Outline every cell on `surface`, in index order.
    pub fn draw_outline(&self, surface: &mut impl Surface) {
        for c in self.cells() {
            surface.draw_rect(c.x, c.y, c.width, c.height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    fn grid(columns: usize, rows: usize) -> RectGrid {
        RectGrid::new(columns, rows, 16.0, 8.0).unwrap()
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert_eq!(
            RectGrid::new(0, 5, 1.0, 1.0),
            Err(GridError::InvalidDimensions { columns: 0, rows: 5 })
        );
        assert!(matches!(
            RectGrid::new(5, 5, 0.0, 1.0),
            Err(GridError::InvalidCellSize { .. })
        ));
        assert!(matches!(
            RectGrid::new(5, 5, 1.0, f64::NAN),
            Err(GridError::InvalidCellSize { .. })
        ));
    }

    #[test]
    fn rejects_cell_count_overflow() {
        assert_eq!(
            RectGrid::new(usize::MAX, 2, 1.0, 1.0),
            Err(GridError::InvalidDimensions { columns: usize::MAX, rows: 2 })
        );
        let g = RectGrid::new(usize::MAX, 1, 1.0, 1.0).unwrap();
        assert_eq!(g.size(), usize::MAX);
        assert_eq!(g.cell(0).map(|c| c.column), Some(0));
    }

    #[test]
    fn metrics() {
        let g = grid(4, 3);
        assert_eq!(g.size(), 12);
        assert_eq!(g.width(), 64.0);
        assert_eq!(g.height(), 24.0);
    }

    #[test]
    fn cell_by_index() {
        let mut g = grid(4, 3);
        g.set_origin(Point::new(100.0, 50.0));
        let c = g.cell(6).unwrap();
        assert_eq!((c.row, c.column), (1, 2));
        assert_eq!((c.x, c.y), (132.0, 58.0));
        assert_eq!((c.width, c.height), (16.0, 8.0));
        assert_eq!(c.center(), Point::new(140.0, 62.0));
        assert!(g.cell(12).is_none());
    }

    #[test]
    fn cell_by_point() {
        let mut g = grid(4, 3);
        g.set_origin(Point::new(10.0, 10.0));
        assert_eq!(g.cell_at(10.0, 10.0).unwrap().index, 0);
        assert_eq!(g.cell_at(41.9, 25.0).unwrap().index, 5);
        assert_eq!(g.cell_at(73.99, 33.99).unwrap().index, 11);
        assert!(g.cell_at(9.99, 10.0).is_none());
        assert!(g.cell_at(74.0, 10.0).is_none());
        assert!(g.cell_at(10.0, 34.0).is_none());
        assert!(g.cell_at(f64::NAN, 10.0).is_none());
    }

    #[test]
    fn pixel_round_trip() {
        let mut g = grid(7, 5);
        g.set_origin(Point::new(-32.0, 24.0));
        for i in 0..g.size() {
            let c = g.cell(i).unwrap();
            assert_eq!(c.index, c.row * g.columns() + c.column);
            assert_eq!(g.cell_at(c.x, c.y).unwrap().index, i);
            assert!(c.contains(c.center()));
        }
        assert_eq!(g.cells().count(), 35);
        assert_eq!(g.cell_rc(4, 6).unwrap().index, 34);
        assert!(g.cell_rc(5, 0).is_none());
    }

    #[test]
    fn neighbors_without_wrap() {
        let g = grid(5, 5);
        // Center cell (2, 2) = 12.
        assert_eq!(g.neighbor_index(12, Direction::North), Some(7));
        assert_eq!(g.neighbor_index(12, Direction::East), Some(13));
        assert_eq!(g.neighbor_index(12, Direction::South), Some(17));
        assert_eq!(g.neighbor_index(12, Direction::West), Some(11));
        assert_eq!(g.neighbor_index(12, Direction::NorthEast), Some(8));
        assert_eq!(g.neighbor_index(12, Direction::SouthEast), Some(18));
        assert_eq!(g.neighbor_index(12, Direction::SouthWest), Some(16));
        assert_eq!(g.neighbor_index(12, Direction::NorthWest), Some(6));
        assert_eq!(g.neighbor_index(12, Direction::Left), None);

        assert_eq!(g.neighbor_index(0, Direction::West), None);
        assert_eq!(g.neighbor_index(0, Direction::North), None);
        assert_eq!(g.neighbor_index(4, Direction::East), None);
        assert_eq!(g.neighbor_index(24, Direction::South), None);
        assert_eq!(g.neighbors(0, true), vec![1, 5, 6]);
        assert_eq!(g.neighbors(12, false), vec![7, 13, 17, 11]);
        assert!(g.neighbor(99, Direction::North).is_none());
    }

    #[test]
    fn horizontal_wrap() {
        let mut g = grid(5, 5);
        g.set_wrap(true, false);
        // Column 0 west -> last column of the same row.
        let w = g.neighbor(10, Direction::West).unwrap();
        assert_eq!((w.row, w.column), (2, 4));
        // Last column east -> column 0 of the same row.
        assert_eq!(g.neighbor_index(14, Direction::East), Some(10));
        // Vertical still bounded.
        assert_eq!(g.neighbor_index(2, Direction::North), None);

        g.set_wrap(false, false);
        assert!(g.neighbor(10, Direction::West).is_none());
    }

    #[test]
    fn vertical_wrap() {
        let mut g = grid(4, 3);
        g.set_wrap(false, true);
        assert_eq!(g.neighbor_index(1, Direction::North), Some(9));
        assert_eq!(g.neighbor_index(9, Direction::South), Some(1));
        assert_eq!(g.neighbor_index(3, Direction::East), None);
    }

    #[test]
    fn diagonal_fails_when_first_hop_fails() {
        let mut g = grid(5, 5);
        // North of row 0 is invalid; no fallback to the east hop.
        assert_eq!(g.neighbor_index(2, Direction::NorthEast), None);
        // Second hop invalid.
        assert_eq!(g.neighbor_index(9, Direction::NorthEast), None);
        g.set_wrap(true, false);
        assert_eq!(g.neighbor_index(2, Direction::NorthEast), None);
        assert_eq!(g.neighbor_index(9, Direction::NorthEast), Some(0));
    }

    #[test]
    fn toroidal_corners() {
        let mut g = grid(5, 5);
        g.set_wrap_both(true);
        assert_eq!(g.neighbor_index(0, Direction::NorthWest), Some(24));
        assert_eq!(g.neighbor_index(24, Direction::SouthEast), Some(0));
        assert_eq!(g.neighbor_index(4, Direction::NorthEast), Some(20));
        assert_eq!(g.neighbor_index(20, Direction::SouthWest), Some(4));

        let mut n = g.neighbors(0, true);
        assert_eq!(n.len(), 8);
        n.sort_unstable();
        assert_eq!(n, vec![1, 4, 5, 6, 9, 20, 21, 24]);
    }

    #[test]
    fn toggle_wrap_flips_both() {
        let mut g = grid(3, 3);
        g.toggle_wrap();
        assert!(g.wrap_horizontal() && g.wrap_vertical());
        g.set_wrap(true, false);
        g.toggle_wrap();
        assert!(!g.wrap_horizontal() && g.wrap_vertical());
    }

    #[test]
    fn config_build() {
        let g = RectGridConfig {
            columns: 3,
            rows: 2,
            origin: Point::new(5.0, 5.0),
            wrap_horizontal: true,
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(g.size(), 6);
        assert_eq!(g.origin(), Point::new(5.0, 5.0));
        assert!(g.wrap_horizontal());
        assert!(!g.wrap_vertical());

        let bad = RectGridConfig {
            rows: 0,
            ..Default::default()
        };
        assert!(bad.build().is_err());
    }

    #[test]
    fn outline_draws_every_cell() {
        let g = grid(3, 2);
        let mut s = RecordingSurface::new();
        g.draw_outline(&mut s);
        assert_eq!(s.rects.len(), 6);
        assert_eq!(s.rects[4], [16.0, 8.0, 16.0, 8.0]);
        assert!(s.polygons.is_empty());
    }
}
