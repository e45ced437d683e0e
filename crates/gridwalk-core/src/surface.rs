//! The drawing contract consumed by grid outline helpers.
//!
//! Grids never touch pixels. They hand coordinates to a [`Surface`]
//! implemented by whatever rendering backend the application uses.

use crate::geom::Point;

/// A drawing target able to render axis-aligned rectangles and closed
/// polygons.
pub trait Surface {
    /// Draw the outline of a rectangle with its top-left corner at `(x, y)`.
    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Draw a closed polygon through `points`. The last point connects back
    /// to the first.
    fn draw_polygon(&mut self, points: &[Point]);
}

/// A [`Surface`] that records every primitive it receives.
///
/// Useful for tests and for backends that batch draw calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    pub rects: Vec<[f64; 4]>,
    pub polygons: Vec<Vec<Point>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard everything recorded so far.
    pub fn clear(&mut self) {
        self.rects.clear();
        self.polygons.clear();
    }
}

impl Surface for RecordingSurface {
    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.rects.push([x, y, width, height]);
    }

    fn draw_polygon(&mut self, points: &[Point]) {
        self.polygons.push(points.to_vec());
    }
}
