//! Integer room lattice.
//!
//! Rooms live on an integer 3D grid. Positions are plain value types created
//! per path step; they carry no identity beyond their coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A position on the room lattice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomPosition {
    /// East-west axis.
    pub x: i32,
    /// Vertical axis.
    pub y: i32,
    /// North-south axis.
    pub z: i32,
}

impl RoomPosition {
    /// Creates a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The origin.
    pub const ZERO: Self = Self::new(0, 0, 0);
    /// One step up.
    pub const UP: Self = Self::new(0, 1, 0);
    /// One step down.
    pub const DOWN: Self = Self::new(0, -1, 0);
    /// One step north.
    pub const NORTH: Self = Self::new(0, 0, 1);
    /// One step south.
    pub const SOUTH: Self = Self::new(0, 0, -1);
    /// One step east.
    pub const EAST: Self = Self::new(1, 0, 0);
    /// One step west.
    pub const WEST: Self = Self::new(-1, 0, 0);

    /// The adjacent position in the given direction.
    #[must_use]
    pub fn neighbour(self, direction: Direction) -> Self {
        self + direction.offset()
    }

    /// The direction leading from `self` to `other`, if the two are lattice
    /// neighbours.
    #[must_use]
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| self.neighbour(*direction) == other)
    }

    /// Number of unit steps between two positions when only axis-aligned
    /// moves are allowed.
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) + self.z.abs_diff(other.z)
    }
}

impl Add for RoomPosition {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for RoomPosition {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for RoomPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{x:{}, y:{}, z:{}}}", self.x, self.y, self.z)
    }
}

/// The six lattice directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Positive y.
    Up,
    /// Negative y.
    Down,
    /// Positive z.
    North,
    /// Negative z.
    South,
    /// Positive x.
    East,
    /// Negative x.
    West,
}

impl Direction {
    /// All directions, in the order neighbour checks probe them.
    pub const ALL: [Self; 6] = [
        Self::Up,
        Self::North,
        Self::East,
        Self::South,
        Self::West,
        Self::Down,
    ];

    /// The unit offset this direction moves by.
    #[must_use]
    pub const fn offset(self) -> RoomPosition {
        match self {
            Self::Up => RoomPosition::UP,
            Self::Down => RoomPosition::DOWN,
            Self::North => RoomPosition::NORTH,
            Self::South => RoomPosition::SOUTH,
            Self::East => RoomPosition::EAST,
            Self::West => RoomPosition::WEST,
        }
    }

    /// The direction pointing the opposite way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }
}
