//! Shared pieces of the gridwalk demo binaries: obstacle generation, ASCII
//! map rendering and a small SVG [`Surface`].

use std::fmt::Write as _;

use gridwalk_core::{Point, RectGrid, Surface};
use log::LevelFilter;
use rand::Rng;
use simple_logger::SimpleLogger;

/// Cost of an ordinary floor cell.
pub const FLOOR: f64 = 1.0;
/// Cost of rough terrain.
pub const ROUGH: f64 = 3.0;
/// Cost of a wall.
pub const WALL: f64 = 0.0;

/// Log to stderr at `warn`, overridable through `RUST_LOG`.
pub fn init_logging() {
    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Warn).env().init() {
        eprintln!("logger already initialised: {e}");
    }
}

/// First command line argument as a seed, or `default`.
pub fn seed_arg(default: u64) -> u64 {
    std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Random cost table: `walls` and `rough` are per-mille densities.
pub fn scatter_costs(size: usize, walls: u32, rough: u32, rng: &mut impl Rng) -> Vec<f64> {
    (0..size)
        .map(|_| {
            let roll = rng.random_range(0..1000);
            if roll < walls {
                WALL
            } else if roll < walls + rough {
                ROUGH
            } else {
                FLOOR
            }
        })
        .collect()
}

/// Render a rectangular map as text, one line per row.
///
/// `#` wall, `~` rough, `.` floor, `*` path, `S`/`G` path endpoints.
pub fn render_ascii(grid: &RectGrid, costs: &[f64], path: &[usize]) -> String {
    let mut out = String::with_capacity((grid.columns() + 1) * grid.rows());
    for c in grid.cells() {
        let ch = if path.first() == Some(&c.index) {
            'S'
        } else if path.last() == Some(&c.index) {
            'G'
        } else if path.contains(&c.index) {
            '*'
        } else {
            match costs.get(c.index) {
                Some(&v) if v <= 0.0 => '#',
                Some(&v) if v > FLOOR => '~',
                _ => '.',
            }
        };
        out.push(ch);
        if c.column + 1 == grid.columns() {
            out.push('\n');
        }
    }
    out
}

// ---------------------------------------------------------------------------
// SvgSurface
// ---------------------------------------------------------------------------

/// A [`Surface`] that accumulates SVG elements.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    body: String,
    stroke: String,
    fill: String,
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self {
            body: String::new(),
            stroke: "black".to_string(),
            fill: "none".to_string(),
        }
    }
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Style applied to shapes drawn from now on.
    pub fn set_style(&mut self, stroke: &str, fill: &str) {
        self.stroke = stroke.to_string();
        self.fill = fill.to_string();
    }

    /// Draw an open polyline, used for paths.
    pub fn draw_polyline(&mut self, points: &[Point]) {
        writeln!(
            self.body,
            r#"<polyline points="{}" stroke="{}" fill="none" stroke-width="3"/>"#,
            points_attr(points),
            self.stroke
        )
        .expect("writing to a String cannot fail");
    }

    /// Wrap everything drawn so far in an `<svg>` document.
    pub fn finish(&self, width: f64, height: f64) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.0}\" height=\"{height:.0}\">\n{}</svg>\n",
            self.body
        )
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

impl Surface for SvgSurface {
    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        writeln!(
            self.body,
            r#"<rect x="{x:.2}" y="{y:.2}" width="{width:.2}" height="{height:.2}" stroke="{}" fill="{}"/>"#,
            self.stroke, self.fill
        )
        .expect("writing to a String cannot fail");
    }

    fn draw_polygon(&mut self, points: &[Point]) {
        writeln!(
            self.body,
            r#"<polygon points="{}" stroke="{}" fill="{}"/>"#,
            points_attr(points),
            self.stroke,
            self.fill
        )
        .expect("writing to a String cannot fail");
    }
}
