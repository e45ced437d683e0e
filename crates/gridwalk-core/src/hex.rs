//! The hexagonal grid: [`HexGrid`] topology and [`HexAddress`] values.
//!
//! Hexes are flat-topped and laid out in offset columns: odd columns sit
//! half a hex lower than even ones. Indices are row-major like
//! [`RectGrid`](crate::RectGrid). Internally every hex also has cube
//! coordinates with `x = column` and `z = row - floor(column / 2)`, which
//! make neighbor and distance arithmetic uniform.
//!
//! Hex grids never wrap.

use std::collections::HashMap;

use crate::direction::HexDirection;
use crate::error::{GridError, GridResult};
use crate::geom::{Cube, Point};
use crate::surface::Surface;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Largest row or column count of a [`HexGrid`]. Cube coordinates of every
/// hex, and their pairwise differences, then fit in an `i32`.
pub const MAX_HEX_SIDE: usize = (i32::MAX / 4) as usize;

/// Vertex offsets from a hex center on the half-radius / half-height
/// lattice, for vertices 0..6 (0°, 60°, ... 300°, clockwise on screen).
const LATTICE_DX: [i64; 6] = [2, 1, -1, -2, -1, 1];
const LATTICE_DY: [i64; 6] = [0, 1, 1, 0, -1, -1];

// ---------------------------------------------------------------------------
// HexAddress
// ---------------------------------------------------------------------------

/// Every address of one hex of a [`HexGrid`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexAddress {
    pub index: usize,
    pub row: usize,
    pub column: usize,
    /// Pixel center.
    pub center: Point,
    pub cube: Cube,
    /// Corners at 0°, 60°, ..., 300° from the center. Angles grow clockwise
    /// on screen, so vertex 0 is the right corner and vertex 1 the lower
    /// right one.
    pub vertices: [Point; 6],
}

// ---------------------------------------------------------------------------
// HexGridConfig
// ---------------------------------------------------------------------------

/// Construction parameters for a [`HexGrid`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HexGridConfig {
    pub columns: usize,
    pub rows: usize,
    pub radius: f64,
    pub origin: Point,
}

impl Default for HexGridConfig {
    fn default() -> Self {
        Self {
            columns: 10,
            rows: 10,
            radius: 16.0,
            origin: Point::ZERO,
        }
    }
}

impl HexGridConfig {
    pub fn build(self) -> GridResult<HexGrid> {
        let mut grid = HexGrid::new(self.columns, self.rows, self.radius)?;
        grid.set_origin(self.origin);
        Ok(grid)
    }
}

// ---------------------------------------------------------------------------
// HexGrid
// ---------------------------------------------------------------------------

/// A rectangular block of flat-top hexes in offset-column layout.
///
/// The origin is the top-left corner of the grid's bounding box. Only the
/// origin can change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct HexGrid {
    columns: usize,
    rows: usize,
    radius: f64,
    origin: Point,
}

impl HexGrid {
    /// Create a grid with its origin at (0, 0). `radius` is the distance
    /// from a hex center to any of its corners.
    pub fn new(columns: usize, rows: usize, radius: f64) -> GridResult<Self> {
        let side = 1..=MAX_HEX_SIDE;
        if !side.contains(&columns)
            || !side.contains(&rows)
            || columns.checked_mul(rows).is_none()
        {
            return Err(GridError::InvalidDimensions { columns, rows });
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GridError::InvalidRadius(radius));
        }
        Ok(Self {
            columns,
            rows,
            radius,
            origin: Point::ZERO,
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

    #[inline]
    pub fn size(&self) -> usize {
        self.columns * self.rows
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Corner-to-corner width of one hex.
    #[inline]
    pub fn hex_width(&self) -> f64 {
        2.0 * self.radius
    }

    /// Edge-to-edge height of one hex.
    #[inline]
    pub fn hex_height(&self) -> f64 {
        SQRT_3 * self.radius
    }

    /// Width of the bounding box of the whole grid.
    pub fn width(&self) -> f64 {
        self.radius * (1.5 * self.columns as f64 + 0.5)
    }

    /// Height of the bounding box of the whole grid.
    pub fn height(&self) -> f64 {
        let shift = if self.columns > 1 { 0.5 } else { 0.0 };
        self.hex_height() * (self.rows as f64 + shift)
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Move the whole grid by `(dx, dy)` pixels.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.origin = self.origin.shift(dx, dy);
    }

    // -----------------------------------------------------------------------
    // Addressing
    // -----------------------------------------------------------------------

    /// Address of the hex at `index`, or `None` if out of range.
    pub fn hex(&self, index: usize) -> Option<HexAddress> {
        if index >= self.size() {
            return None;
        }
        Some(self.address(index / self.columns, index % self.columns))
    }

    /// Address of the hex at `(row, column)`, or `None` if out of range.
    pub fn hex_rc(&self, row: usize, column: usize) -> Option<HexAddress> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(self.address(row, column))
    }

    /// Address of the hex containing pixel `(x, y)`, or `None` if no hex of
    /// the grid contains it.
    pub fn hex_at(&self, x: f64, y: f64) -> Option<HexAddress> {
        let (dx, dy) = (x - self.origin.x, y - self.origin.y);
        // Also rejects NaN.
        if !(dx >= 0.0 && dx < self.width() && dy >= 0.0 && dy < self.height()) {
            return None;
        }
        // Offset from the center of hex (0, 0).
        let px = dx - self.radius;
        let py = dy - self.hex_height() / 2.0;

        let fx = (2.0 / 3.0 * px) / self.radius;
        let fz = (-1.0 / 3.0 * px + SQRT_3 / 3.0 * py) / self.radius;
        let cube = Cube::round(fx, -fx - fz, fz);

        self.index_of(cube).map(|i| self.address(i / self.columns, i % self.columns))
    }

    /// Index of the hex with cube coordinates `cube`, if it is on the grid.
    pub fn index_of(&self, cube: Cube) -> Option<usize> {
        if !cube.is_valid() {
            return None;
        }
        let (row, column) = cube.to_offset();
        let row = usize::try_from(row).ok()?;
        let column = usize::try_from(column).ok()?;
        (row < self.rows && column < self.columns).then(|| row * self.columns + column)
    }

    /// Cube coordinates of `index`, or `None` if out of range.
    pub fn cube(&self, index: usize) -> Option<Cube> {
        if index >= self.size() {
            return None;
        }
        Some(self.cube_unchecked(index))
    }

    #[inline]
    fn cube_unchecked(&self, index: usize) -> Cube {
        Cube::from_offset((index / self.columns) as i32, (index % self.columns) as i32)
    }

    fn center(&self, row: usize, column: usize) -> Point {
        let h = self.hex_height();
        let shift = if column % 2 == 1 { h / 2.0 } else { 0.0 };
        Point::new(
            self.origin.x + self.radius + 1.5 * self.radius * column as f64,
            self.origin.y + h / 2.0 + h * row as f64 + shift,
        )
    }

    fn address(&self, row: usize, column: usize) -> HexAddress {
        let center = self.center(row, column);
        let vertices = std::array::from_fn(|k| center.polar(self.radius, 60.0 * k as f64));
        HexAddress {
            index: row * self.columns + column,
            row,
            column,
            center,
            cube: Cube::from_offset(row as i32, column as i32),
            vertices,
        }
    }

    /// Iterator over every hex in index order.
    pub fn hexes(&self) -> impl Iterator<Item = HexAddress> + '_ {
        (0..self.size()).map(move |i| self.address(i / self.columns, i % self.columns))
    }

    // -----------------------------------------------------------------------
    // Neighbors
    // -----------------------------------------------------------------------

    /// Index of the neighbor of `index` in `dir`, or `None` past the grid
    /// edge.
    pub fn neighbor_index(&self, index: usize, dir: HexDirection) -> Option<usize> {
        let cube = self.cube(index)?;
        self.index_of(cube + dir.offset())
    }

    pub fn neighbor(&self, index: usize, dir: HexDirection) -> Option<HexAddress> {
        self.neighbor_index(index, dir).and_then(|n| self.hex(n))
    }

    /// Append the indices of the neighbors of `index` to `buf`, in
    /// [`HexDirection::ALL`] order. The caller clears `buf`.
    pub fn neighbors_into(&self, index: usize, buf: &mut Vec<usize>) {
        buf.extend(
            HexDirection::ALL
                .iter()
                .filter_map(|&d| self.neighbor_index(index, d)),
        );
    }

    pub fn neighbors(&self, index: usize) -> Vec<usize> {
        let mut buf = Vec::with_capacity(6);
        self.neighbors_into(index, &mut buf);
        buf
    }

    /// Hex steps between two hexes, or `None` if either is out of range.
    pub fn distance(&self, a: usize, b: usize) -> Option<i32> {
        Some(self.cube(a)?.distance(self.cube(b)?))
    }

    // -----------------------------------------------------------------------
    // Outline
    // -----------------------------------------------------------------------

    /// Integer position of vertex `k` of hex `(row, column)` on the lattice
    /// spanned by half a radius horizontally and half a hex height
    /// vertically. Shared corners get identical keys.
    fn vertex_key(row: usize, column: usize, k: usize) -> (i64, i64) {
        let (row, column) = (row as i64, column as i64);
        (
            2 + 3 * column + LATTICE_DX[k],
            1 + 2 * row + (column & 1) + LATTICE_DY[k],
        )
    }

    /// Corners forming the outer boundary of the whole grid, clockwise.
    ///
    /// Starts at the left corner of hex 0 and walks the top row, the right
    /// column, the bottom row backwards and the left column upwards. The
    /// polygon is open: the last point connects back to the first.
    pub fn border_points(&self) -> Vec<Point> {
        // Every exposed edge, keyed by its starting corner.
        let mut edges: HashMap<(i64, i64), (usize, usize)> = HashMap::new();
        for index in 0..self.size() {
            let (row, column) = (index / self.columns, index % self.columns);
            for dir in HexDirection::ALL {
                if self.neighbor_index(index, dir).is_none() {
                    let k = dir.edge();
                    edges.insert(Self::vertex_key(row, column, k), (index, k));
                }
            }
        }

        // Hex 0 is in an even column of the top row, so its north-west edge
        // is always on the boundary.
        let start_k = HexDirection::NorthWest.edge();
        let start = Self::vertex_key(0, 0, start_k);
        let mut points = Vec::with_capacity(edges.len());
        let mut key = start;
        while let Some(&(index, k)) = edges.get(&key) {
            let (row, column) = (index / self.columns, index % self.columns);
            points.push(self.address(row, column).vertices[k]);
            key = Self::vertex_key(row, column, (k + 1) % 6);
            if key == start || points.len() >= edges.len() {
                break;
            }
        }
        log::trace!("hex border: {} points from {} edges", points.len(), edges.len());
        points
    }

    /// Draw the grid boundary as one closed polygon.
    pub fn draw_outline(&self, surface: &mut impl Surface) {
        surface.draw_polygon(&self.border_points());
    }

    /// Draw every hex as its own polygon, in index order.
    pub fn draw_hexes(&self, surface: &mut impl Surface) {
        for h in self.hexes() {
            surface.draw_polygon(&h.vertices);
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = HexGridConfig {
            rows: 4,
            ..Default::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: HexGridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
