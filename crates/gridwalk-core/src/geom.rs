//! Geometry primitives: pixel-space [`Point`] and hex [`Cube`] coordinates.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D point in pixel space. X grows right, Y grows down (screen coordinates).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub fn shift(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Point at `radius` from `self` in direction `degrees`, measured
    /// clockwise on screen (Y down) from the positive X axis.
    #[inline]
    pub fn polar(self, radius: f64, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(self.x + radius * cos, self.y + radius * sin)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// ---------------------------------------------------------------------------
// Cube
// ---------------------------------------------------------------------------

/// Cube coordinates of a hex. `x + y + z == 0` for every value produced by
/// this crate.
///
/// See <https://www.redblobgames.com/grids/hexagons/#coordinates-cube>.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cube {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cube {
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    /// Construct from x and z; y is derived so the sum is zero.
    #[inline]
    pub const fn new_xz(x: i32, z: i32) -> Self {
        Self { x, y: -x - z, z }
    }

    /// Cube coordinates of an offset (row, column) in a flat-top,
    /// odd-column-shifted layout.
    #[inline]
    pub const fn from_offset(row: i32, column: i32) -> Self {
        Self::new_xz(column, row - column.div_euclid(2))
    }

    /// Inverse of [`Cube::from_offset`]: returns `(row, column)`.
    ///
    /// Computed in `i64` so that no `Cube` can overflow it.
    #[inline]
    pub const fn to_offset(self) -> (i64, i64) {
        let x = self.x as i64;
        (self.z as i64 + x.div_euclid(2), x)
    }

    /// Round fractional cube coordinates to the nearest hex.
    ///
    /// Each axis is rounded independently, then the axis with the largest
    /// rounding error is recomputed from the other two so the sum stays 0.
    pub fn round(x: f64, y: f64, z: f64) -> Self {
        let mut rx = x.round();
        let mut ry = y.round();
        let mut rz = z.round();

        let dx = (rx - x).abs();
        let dy = (ry - y).abs();
        let dz = (rz - z).abs();

        if dx > dy && dx > dz {
            rx = -ry - rz;
        } else if dy > dz {
            ry = -rx - rz;
        } else {
            rz = -rx - ry;
        }

        Self {
            x: rx as i32,
            y: ry as i32,
            z: rz as i32,
        }
    }

    /// Number of hex steps between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Cube) -> i32 {
        let d = self - other;
        d.x.abs().max(d.y.abs()).max(d.z.abs())
    }

    /// Whether the coordinates satisfy `x + y + z == 0`.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.x as i64 + self.y as i64 + self.z as i64 == 0
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for Cube {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Cube {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Neg for Cube {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 4.5);
        assert_eq!(a + b, Point::new(4.0, 6.5));
        assert_eq!(b - a, Point::new(2.0, 2.5));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(a.shift(-1.0, 1.0), Point::new(0.0, 3.0));
    }

    #[test]
    fn polar_follows_screen_orientation() {
        let c = Point::new(10.0, 10.0);
        assert!(close(c.polar(2.0, 0.0), Point::new(12.0, 10.0)));
        // 90 degrees points down on screen.
        assert!(close(c.polar(2.0, 90.0), Point::new(10.0, 12.0)));
        assert!(close(c.polar(2.0, 180.0), Point::new(8.0, 10.0)));
    }

    #[test]
    fn offset_round_trip() {
        for row in -3..6 {
            for column in -5..7 {
                let c = Cube::from_offset(row, column);
                assert!(c.is_valid());
                assert_eq!(c.x, column);
                assert_eq!(c.to_offset(), (i64::from(row), i64::from(column)));
            }
        }
    }

    #[test]
    fn from_offset_uses_floor_division() {
        assert_eq!(Cube::from_offset(2, 3), Cube { x: 3, y: -4, z: 1 });
        assert_eq!(Cube::from_offset(0, -1), Cube { x: -1, y: 0, z: 1 });
    }

    #[test]
    fn extreme_cubes_do_not_overflow() {
        let c = Cube { x: i32::MAX, y: i32::MAX, z: i32::MIN };
        assert!(!c.is_valid());
        assert_eq!(c.to_offset(), (i64::from(i32::MIN) + i64::from(i32::MAX / 2), i64::from(i32::MAX)));
        // Saturated rounding of a far-away point stays well defined.
        assert!(!Cube::round(1e12, -1e12 - 5.0, 5.0).is_valid());
    }

    #[test]
    fn round_keeps_zero_sum() {
        // Naive rounding of (0.5, 0.5, -1.0) gives (1, 1, -1) which is invalid.
        let c = Cube::round(0.5, 0.5, -1.0);
        assert!(c.is_valid());

        let c = Cube::round(0.4, -0.45, 0.05);
        assert!(c.is_valid());
        assert_eq!(c, Cube::ZERO);

        let c = Cube::round(1.9, -1.2, -0.7);
        assert_eq!(c, Cube { x: 2, y: -1, z: -1 });
    }

    #[test]
    fn cube_distance() {
        let a = Cube::from_offset(0, 0);
        assert_eq!(a.distance(a), 0);
        assert_eq!(a.distance(Cube::from_offset(0, 1)), 1);
        assert_eq!(a.distance(Cube::from_offset(3, 0)), 3);
        assert_eq!(a.distance(Cube::from_offset(0, 4)), 4);
        assert_eq!((a - Cube::from_offset(1, 1)).x, -1);
        assert_eq!(-Cube::new_xz(1, -1), Cube::new_xz(-1, 1));
    }
}
