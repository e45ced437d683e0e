//! **gridwalk-core**: addressing for tile-based 2D worlds.
//!
//! This crate maps between the different addresses of a grid cell: its
//! linear index, its row and column, its pixel position and, for hex grids,
//! its cube coordinates. Two topologies are provided:
//!
//! - [`RectGrid`]: rectangular cells with optional toroidal wrap on either
//!   axis, 4- or 8-way neighbors.
//! - [`HexGrid`]: flat-top hexes in offset columns, 6-way neighbors, no wrap.
//!
//! Address lookups return `Option`; constructors return [`GridResult`].
//! Pathfinding over both topologies lives in the `gridwalk-paths` crate.

pub mod direction;
pub mod error;
pub mod geom;
pub mod hex;
pub mod rect;
pub mod surface;

pub use direction::{Direction, HexDirection};
pub use error::{GridError, GridResult};
pub use geom::{Cube, Point};
pub use hex::{HexAddress, HexGrid, HexGridConfig, MAX_HEX_SIDE};
pub use rect::{CellAddress, RectGrid, RectGridConfig};
pub use surface::{RecordingSurface, Surface};
