//! Hex map with a path, written to stdout as SVG.
//!
//! Run: cargo run --bin hex-path [seed] > hex.svg

use gridwalk_core::{HexGridConfig, Point, Surface};
use gridwalk_demos::{SvgSurface, WALL, init_logging, scatter_costs, seed_arg};
use gridwalk_paths::FindPath;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let seed = seed_arg(2020);
    let mut rng = StdRng::seed_from_u64(seed);

    let grid = HexGridConfig {
        columns: 15,
        rows: 10,
        radius: 20.0,
        origin: Point::new(10.0, 10.0),
    }
    .build()?;

    let start = 0;
    let goal = grid.size() - 1;
    let mut costs = scatter_costs(grid.size(), 200, 0, &mut rng);
    costs[start] = 1.0;
    costs[goal] = 1.0;

    let mut svg = SvgSurface::new();
    svg.set_style("#999", "none");
    grid.draw_hexes(&mut svg);

    svg.set_style("#333", "#333");
    for h in grid.hexes().filter(|h| costs[h.index] == WALL) {
        svg.draw_polygon(&h.vertices);
    }

    svg.set_style("black", "none");
    grid.draw_outline(&mut svg);

    match grid.find_path(start, goal, Some(&costs), false)? {
        Some(path) => {
            log::info!("path of {} hexes", path.len());
            let centers: Vec<Point> = path
                .iter()
                .filter_map(|&i| grid.hex(i).map(|h| h.center))
                .collect();
            svg.set_style("crimson", "none");
            svg.draw_polyline(&centers);
        }
        None => log::warn!("seed {seed}: no path from {start} to {goal}"),
    }

    let origin = grid.origin();
    print!(
        "{}",
        svg.finish(origin.x * 2.0 + grid.width(), origin.y * 2.0 + grid.height())
    );
    Ok(())
}
