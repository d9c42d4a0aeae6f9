use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

use crate::byte_operations::PacketWriter;

/// Server-assigned identifier of an in-world actor (player, NPC or monster).
///
/// The client never interprets the value; it only echoes ids it received.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CharacterId(u32);

impl CharacterId {
    pub const fn new(value: u32) -> Self {
        CharacterId(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Writes the id as a fixed 4-byte field.
    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_uint(self.0)
    }
}

impl From<u32> for CharacterId {
    fn from(value: u32) -> Self {
        CharacterId(value)
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_as_four_big_endian_bytes() {
        let mut out = Vec::new();
        CharacterId::new(0x0102_0304).encode(&mut out).unwrap();
        assert_eq!(out, [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn full_range_survives_encoding() {
        let mut out = Vec::new();
        CharacterId::new(u32::MAX).encode(&mut out).unwrap();
        assert_eq!(out, [0xFF; 4]);
    }

    #[test]
    fn display_is_prefixed() {
        assert_eq!(CharacterId::new(42).to_string(), "#42");
    }
}
