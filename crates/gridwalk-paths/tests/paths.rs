use gridwalk_core::{GridError, HexGrid, Point, RectGrid};
use gridwalk_paths::{FindPath, PathSearch};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn rect(columns: usize, rows: usize) -> RectGrid {
    RectGrid::new(columns, rows, 16.0, 16.0).unwrap()
}

#[test]
fn five_by_five_with_diagonals() {
    let g = rect(5, 5);
    let path = g.find_path(0, 24, None, true).unwrap().unwrap();
    assert_eq!(path.len(), 5);
    for w in path.windows(2) {
        let (a, b) = (g.cell(w[0]).unwrap(), g.cell(w[1]).unwrap());
        assert!(b.row > a.row);
        assert!(b.column > a.column);
    }
}

#[test]
fn five_by_five_without_diagonals() {
    let g = rect(5, 5);
    let path = g.find_path(0, 24, None, false).unwrap().unwrap();
    assert_eq!(path.len(), 9);
}

#[test]
fn single_cell_path() {
    let g = rect(5, 5);
    assert_eq!(g.find_path(7, 7, None, false).unwrap(), Some(vec![7]));
}

#[test]
fn blocked_goal() {
    let g = rect(5, 5);
    let mut costs = vec![1.0; 25];
    costs[24] = 0.0;
    assert_eq!(g.find_path(0, 24, Some(&costs), true), Ok(None));
}

#[test]
fn out_of_range_endpoint() {
    let g = rect(5, 5);
    assert!(matches!(
        g.find_path(0, 25, None, true),
        Err(GridError::InvalidRange { index: 25, .. })
    ));
}

#[test]
fn open_grid_path_lengths_are_optimal() {
    let g = rect(12, 9);
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let start = rng.random_range(0..g.size());
        let goal = rng.random_range(0..g.size());
        let (a, b) = (g.cell(start).unwrap(), g.cell(goal).unwrap());
        let dr = a.row.abs_diff(b.row);
        let dc = a.column.abs_diff(b.column);

        let diag = g.find_path(start, goal, None, true).unwrap().unwrap();
        assert_eq!(diag.len(), dr.max(dc) + 1, "{start} -> {goal} diagonal");
        assert_eq!(diag.first(), Some(&start));
        assert_eq!(diag.last(), Some(&goal));

        let straight = g.find_path(start, goal, None, false).unwrap().unwrap();
        assert_eq!(straight.len(), dr + dc + 1, "{start} -> {goal} straight");
        assert!(
            straight
                .windows(2)
                .all(|w| g.neighbors(w[0], false).contains(&w[1]))
        );
    }
}

#[test]
fn hex_path_lengths_are_optimal() {
    let g = HexGrid::new(9, 7, 12.0).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let start = rng.random_range(0..g.size());
        let goal = rng.random_range(0..g.size());
        let path = g.find_path(start, goal, None, false).unwrap().unwrap();
        assert_eq!(path.len() as i32, g.distance(start, goal).unwrap() + 1);
    }
}

#[test]
fn random_obstacles_give_valid_repeatable_paths() {
    let mut g = rect(16, 12);
    g.set_wrap(true, false);
    let mut rng = StdRng::seed_from_u64(42);
    let costs: Vec<f64> = (0..g.size())
        .map(|_| match rng.random_range(0..10) {
            0..=1 => 0.0,
            2 => 4.0,
            _ => 1.0,
        })
        .collect();

    for _ in 0..50 {
        let start = rng.random_range(0..g.size());
        let goal = rng.random_range(0..g.size());
        let first = g.find_path(start, goal, Some(&costs), true).unwrap();
        let again = PathSearch::new(&g)
            .costs(&costs)
            .diagonal(true)
            .run(start, goal)
            .unwrap();
        assert_eq!(first, again);

        if let Some(path) = first {
            assert_eq!(path[0], start);
            assert_eq!(path[path.len() - 1], goal);
            // Every entered cell is passable; the start may not be.
            assert!(path[1..].iter().all(|&i| costs[i] > 0.0));
            assert!(
                path.windows(2)
                    .all(|w| g.neighbors(w[0], true).contains(&w[1]))
            );
        }
    }
}

#[test]
fn pick_then_path() {
    // Hit-test two pixels, then path between the cells under them.
    let mut g = rect(8, 8);
    g.set_origin(Point::new(100.0, 100.0));
    let from = g.cell_at(101.0, 101.0).unwrap();
    let to = g.cell_at(100.0 + 16.0 * 7.5, 100.0 + 16.0 * 3.5).unwrap();
    let path = g.find_path(from.index, to.index, None, true).unwrap().unwrap();
    assert_eq!(path.len(), 8);
}
