//! Direction enumerations for rectangular and hexagonal grids.

use crate::geom::Cube;

/// Compass direction on a rectangular grid.
///
/// `Left` and `Right` are symbolic values for UI code; grids never resolve
/// them to a neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
    Left,
    Right,
}

impl Direction {
    /// The four orthogonal directions, in neighbor expansion order.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// All eight compass directions: the cardinal ones first, then the
    /// diagonals clockwise from north-east.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Directions used for neighbor expansion.
    #[inline]
    pub fn expansion(diagonal: bool) -> &'static [Direction] {
        if diagonal { &Self::ALL } else { &Self::CARDINAL }
    }

    /// Whether this is one of the four diagonal directions.
    #[inline]
    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::NorthEast
                | Direction::SouthEast
                | Direction::SouthWest
                | Direction::NorthWest
        )
    }

    /// The direction pointing the other way. `Left` and `Right` swap.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
            Direction::NorthWest => Direction::SouthEast,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Neighbor direction on a flat-top hex grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HexDirection {
    North,
    NorthEast,
    SouthEast,
    South,
    SouthWest,
    NorthWest,
}

impl HexDirection {
    /// All six directions, clockwise from north.
    pub const ALL: [HexDirection; 6] = [
        HexDirection::North,
        HexDirection::NorthEast,
        HexDirection::SouthEast,
        HexDirection::South,
        HexDirection::SouthWest,
        HexDirection::NorthWest,
    ];

    /// Unit cube offset for this direction.
    pub const fn offset(self) -> Cube {
        match self {
            HexDirection::North => Cube::new_xz(0, -1),
            HexDirection::NorthEast => Cube::new_xz(1, -1),
            HexDirection::SouthEast => Cube::new_xz(1, 0),
            HexDirection::South => Cube::new_xz(0, 1),
            HexDirection::SouthWest => Cube::new_xz(-1, 1),
            HexDirection::NorthWest => Cube::new_xz(-1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            HexDirection::North => HexDirection::South,
            HexDirection::NorthEast => HexDirection::SouthWest,
            HexDirection::SouthEast => HexDirection::NorthWest,
            HexDirection::South => HexDirection::North,
            HexDirection::SouthWest => HexDirection::NorthEast,
            HexDirection::NorthWest => HexDirection::SouthEast,
        }
    }

    /// Edge of a hexagon facing this direction, as an index `k` such that
    /// the edge runs from vertex `k` to vertex `k + 1` (mod 6).
    pub(crate) const fn edge(self) -> usize {
        match self {
            HexDirection::SouthEast => 0,
            HexDirection::South => 1,
            HexDirection::SouthWest => 2,
            HexDirection::NorthWest => 3,
            HexDirection::North => 4,
            HexDirection::NorthEast => 5,
        }
    }
}
