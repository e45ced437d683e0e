use gridwalk_core::Cube;

/// Base cost of an orthogonal (or hex) step.
pub const ORTHOGONAL_STEP: f64 = 10.0;

/// Base cost of a diagonal step on a rectangular grid.
pub const DIAGONAL_STEP: f64 = 14.0;

/// Octile estimate for a displacement of `dr` rows and `dc` columns:
/// `4 * min + 10 * max`, i.e. diagonal steps for the shared part and
/// straight steps for the rest.
#[inline]
pub fn octile(dr: usize, dc: usize) -> f64 {
    let (lo, hi) = if dr < dc { (dr, dc) } else { (dc, dr) };
    (DIAGONAL_STEP - ORTHOGONAL_STEP) * lo as f64 + ORTHOGONAL_STEP * hi as f64
}

/// Hex-step estimate between two cube positions.
#[inline]
pub fn hex_distance(a: Cube, b: Cube) -> f64 {
    ORTHOGONAL_STEP * a.distance(b) as f64
}
