use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

use crate::byte_operations::PacketWriter;
use crate::error::CommandError;

/// Byte written in place of a direction when none applies
/// (e.g. "the tile I am standing on").
pub const NO_DIRECTION: u8 = 10;

/// Compass directions in server index order. North points towards negative y.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    pub fn from_index(index: u8) -> Result<Self, CommandError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(CommandError::InvalidDirection(index))
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Unit step `(dx, dy)` taken when moving one tile in this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Inverse of [`Direction::offset`]. `(0, 0)` and anything further than one
    /// tile map to `None`.
    pub fn from_offset(dx: i32, dy: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.offset() == (dx, dy))
    }

    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_ubyte(self.index())
    }

    /// Writes `direction`, or [`NO_DIRECTION`] when it is absent.
    pub fn encode_optional<W: PacketWriter + ?Sized>(
        direction: Option<Direction>,
        writer: &mut W,
    ) -> io::Result<()> {
        writer.write_ubyte(direction.map_or(NO_DIRECTION, Direction::index))
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::NorthEast => "NorthEast",
            Direction::East => "East",
            Direction::SouthEast => "SouthEast",
            Direction::South => "South",
            Direction::SouthWest => "SouthWest",
            Direction::West => "West",
            Direction::NorthWest => "NorthWest",
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = CommandError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Direction::from_index(index)
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction.index()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
