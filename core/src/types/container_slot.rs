use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

use crate::byte_operations::PacketWriter;

/// One slot of an open container (bag, chest, merchant showcase).
///
/// Neither value is range checked; the game-state layer hands out ids and
/// slots the server told it about.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerSlot {
    pub container_id: u8,
    pub slot: u16,
}

impl ContainerSlot {
    pub const fn new(container_id: u8, slot: u16) -> Self {
        ContainerSlot { container_id, slot }
    }

    /// Container id first, then slot index.
    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_ubyte(self.container_id)?;
        writer.write_ushort(self.slot)
    }
}

impl fmt::Display for ContainerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container {} slot {}", self.container_id, self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_precedes_slot() {
        let mut out = Vec::new();
        ContainerSlot::new(4, 0x0102).encode(&mut out).unwrap();
        assert_eq!(out, [0x04, 0x01, 0x02]);
    }
}
