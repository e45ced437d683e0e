//! Random rectangular map with a path drawn across it.
//!
//! Run: cargo run --bin rect-path [seed]

use gridwalk_core::RectGridConfig;
use gridwalk_demos::{init_logging, render_ascii, scatter_costs, seed_arg};
use gridwalk_paths::FindPath;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let seed = seed_arg(2020);
    let mut rng = StdRng::seed_from_u64(seed);

    let grid = RectGridConfig {
        columns: 40,
        rows: 16,
        wrap_horizontal: true,
        ..Default::default()
    }
    .build()?;

    let start = 0;
    let goal = grid.size() - 1;
    let mut costs = scatter_costs(grid.size(), 250, 150, &mut rng);
    costs[start] = 1.0;
    costs[goal] = 1.0;

    for diagonal in [false, true] {
        match grid.find_path(start, goal, Some(&costs), diagonal)? {
            Some(path) => {
                println!("seed {seed}, diagonal {diagonal}: {} cells", path.len());
                print!("{}", render_ascii(&grid, &costs, &path));
            }
            None => {
                println!("seed {seed}, diagonal {diagonal}: unreachable");
                print!("{}", render_ascii(&grid, &costs, &[]));
            }
        }
        println!();
    }
    Ok(())
}
