//! A* pathfinding over `gridwalk-core` grids.
//!
//! [`PathSearch`] runs a classic cell-cost A* over anything implementing
//! [`Topology`]. Both [`RectGrid`](gridwalk_core::RectGrid) and
//! [`HexGrid`](gridwalk_core::HexGrid) implement it, and the [`FindPath`]
//! extension trait gives every topology a one-call `find_path`.
//!
//! Searches share no state: each call builds its own node arena and drops
//! it on return, and the grid is only borrowed immutably.
//!
//! # Costs
//!
//! Straight steps cost 10 and diagonal steps 14, each multiplied by the
//! per-cell cost of the cell being entered. Cells with a cost of zero or
//! less are impassable.
//!
//! ```
//! use gridwalk_core::RectGrid;
//! use gridwalk_paths::FindPath;
//!
//! let grid = RectGrid::new(5, 5, 16.0, 16.0).unwrap();
//! let mut costs = vec![1.0; grid.size()];
//! costs[24] = 0.0;
//! assert_eq!(grid.find_path(0, 24, Some(&costs), true).unwrap(), None);
//! assert_eq!(grid.find_path(0, 4, None, false).unwrap().map(|p| p.len()), Some(5));
//! ```

mod distance;
mod search;
mod topology;
mod traits;

pub use distance::{DIAGONAL_STEP, ORTHOGONAL_STEP, hex_distance, octile};
pub use search::{FindPath, Node, NodeStatus, PathSearch};
pub use traits::Topology;
