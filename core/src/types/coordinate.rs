use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

use super::Direction;
use crate::byte_operations::PacketWriter;
use crate::error::CommandError;

/// A map position as the server addresses it: tile x, tile y and level z.
///
/// This is the only coordinate type on the wire; older "location" values
/// are converted into it before a command is built.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ServerCoordinate {
    x: i16,
    y: i16,
    z: i16,
}

impl ServerCoordinate {
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        ServerCoordinate { x, y, z }
    }

    pub const fn x(&self) -> i16 {
        self.x
    }

    pub const fn y(&self) -> i16 {
        self.y
    }

    pub const fn z(&self) -> i16 {
        self.z
    }

    /// Direction of the tile `target` as seen from `self`.
    ///
    /// Returns `Ok(None)` for the same tile and `Ok(Some(_))` for one of the
    /// eight neighbours on the same level.
    pub fn direction_to(
        &self,
        target: &ServerCoordinate,
    ) -> Result<Option<Direction>, CommandError> {
        let dx = target.x as i32 - self.x as i32;
        let dy = target.y as i32 - self.y as i32;

        if target.z != self.z || dx.abs() > 1 || dy.abs() > 1 {
            return Err(CommandError::NotAdjacent {
                from: *self,
                to: *target,
            });
        }

        Ok(Direction::from_offset(dx, dy))
    }

    /// Writes x, y, z through [`PacketWriter::write_location`].
    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_location(self)
    }
}

impl fmt::Display for ServerCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_x_y_z_in_order() {
        let mut out = Vec::new();
        ServerCoordinate::new(1, -2, 3).encode(&mut out).unwrap();
        assert_eq!(out, [0x00, 0x01, 0xFF, 0xFE, 0x00, 0x03]);
    }

    #[test]
    fn direction_to_neighbour() {
        let here = ServerCoordinate::new(10, 10, 0);
        assert_eq!(here.direction_to(&here), Ok(None));
        assert_eq!(
            here.direction_to(&ServerCoordinate::new(10, 9, 0)),
            Ok(Some(Direction::North))
        );
        assert_eq!(
            here.direction_to(&ServerCoordinate::new(9, 11, 0)),
            Ok(Some(Direction::SouthWest))
        );
    }

    #[test]
    fn direction_to_rejects_distant_or_other_level() {
        let here = ServerCoordinate::new(10, 10, 0);
        assert!(here.direction_to(&ServerCoordinate::new(12, 10, 0)).is_err());
        assert!(here.direction_to(&ServerCoordinate::new(10, 10, 1)).is_err());
    }

    #[test]
    fn extreme_axes_do_not_overflow() {
        let a = ServerCoordinate::new(i16::MIN, 0, 0);
        let b = ServerCoordinate::new(i16::MAX, 0, 0);
        assert!(a.direction_to(&b).is_err());
    }
}
