use std::fmt;
use std::io;

use realm_core::types::{CharacterId, ContainerSlot, ServerCoordinate};
use realm_core::PacketWriter;
use serde::{Deserialize, Serialize};

/// How openly a character is being looked at.
///
/// A stare returns more detail but the server tells the target about it; a
/// polite look stays unnoticed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum LookAtMode {
    #[default]
    Polite = 0,
    Stare = 1,
}

impl LookAtMode {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// `CL_LOOKAT_CHARACTER`: `[char_id u32][mode u8]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookAtCharacterCmd {
    char_id: CharacterId,
    mode: LookAtMode,
}

impl LookAtCharacterCmd {
    pub const PAYLOAD_LEN: usize = 5;

    pub fn new(char_id: CharacterId, mode: LookAtMode) -> Self {
        log::debug!(
            "Building look-at-character command: char_id={}, mode={:?}",
            char_id,
            mode
        );
        Self { char_id, mode }
    }

    pub fn polite(char_id: CharacterId) -> Self {
        Self::new(char_id, LookAtMode::Polite)
    }

    pub fn stare(char_id: CharacterId) -> Self {
        Self::new(char_id, LookAtMode::Stare)
    }

    pub fn char_id(&self) -> CharacterId {
        self.char_id
    }

    pub fn mode(&self) -> LookAtMode {
        self.mode
    }

    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.char_id.encode(writer)?;
        writer.write_ubyte(self.mode.code())
    }
}

impl fmt::Display for LookAtCharacterCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LookAtCharacterCmd(char_id={}, mode={:?})",
            self.char_id, self.mode
        )
    }
}

/// `CL_LOOKAT_TILE`: describes the ground at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookAtTileCmd {
    coordinate: ServerCoordinate,
}

impl LookAtTileCmd {
    pub const PAYLOAD_LEN: usize = 6;

    pub fn new(coordinate: ServerCoordinate) -> Self {
        log::debug!("Building look-at-tile command: {}", coordinate);
        Self { coordinate }
    }

    pub fn coordinate(&self) -> ServerCoordinate {
        self.coordinate
    }

    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.coordinate.encode(writer)
    }
}

impl fmt::Display for LookAtTileCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LookAtTileCmd(coordinate={})", self.coordinate)
    }
}

/// `CL_LOOKAT_MAP_ITEM`: `[coordinate][stack_position u8]`, where the stack
/// position picks one item out of a pile on that tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookAtMapItemCmd {
    coordinate: ServerCoordinate,
    stack_position: u8,
}

impl LookAtMapItemCmd {
    pub const PAYLOAD_LEN: usize = 7;

    pub fn new(coordinate: ServerCoordinate, stack_position: u8) -> Self {
        log::debug!(
            "Building look-at-map-item command: {}, stack_position={}",
            coordinate,
            stack_position
        );
        Self {
            coordinate,
            stack_position,
        }
    }

    pub fn coordinate(&self) -> ServerCoordinate {
        self.coordinate
    }

    pub fn stack_position(&self) -> u8 {
        self.stack_position
    }

    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.coordinate.encode(writer)?;
        writer.write_ubyte(self.stack_position)
    }
}

impl fmt::Display for LookAtMapItemCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LookAtMapItemCmd(coordinate={}, stack_position={})",
            self.coordinate, self.stack_position
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookAtInventorySlotCmd {
    slot: u8,
}

impl LookAtInventorySlotCmd {
    pub const PAYLOAD_LEN: usize = 1;

    pub fn new(slot: u8) -> Self {
        log::debug!("Building look-at-inventory command: slot={}", slot);
        Self { slot }
    }

    pub fn slot(&self) -> u8 {
        self.slot
    }

    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_ubyte(self.slot)
    }
}

impl fmt::Display for LookAtInventorySlotCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LookAtInventorySlotCmd(slot={})", self.slot)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookAtContainerSlotCmd {
    slot: ContainerSlot,
}

impl LookAtContainerSlotCmd {
    pub const PAYLOAD_LEN: usize = 3;

    pub fn new(slot: ContainerSlot) -> Self {
        log::debug!("Building look-at-container command: {}", slot);
        Self { slot }
    }

    pub fn slot(&self) -> ContainerSlot {
        self.slot
    }

    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.slot.encode(writer)
    }
}

impl fmt::Display for LookAtContainerSlotCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LookAtContainerSlotCmd(slot={})", self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(encode: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> Vec<u8> {
        let mut out = Vec::new();
        encode(&mut out).unwrap();
        out
    }

    #[test]
    /// Polite and stare differ only in the trailing mode byte.
    fn character_modes() {
        let polite = LookAtCharacterCmd::polite(CharacterId::new(0x0102));
        let stare = LookAtCharacterCmd::stare(CharacterId::new(0x0102));
        assert_eq!(encoded(|w| polite.encode(w)), [0, 0, 1, 2, 0]);
        assert_eq!(encoded(|w| stare.encode(w)), [0, 0, 1, 2, 1]);
        assert_ne!(polite, stare);
    }

    #[test]
    fn map_item_appends_stack_position() {
        let cmd = LookAtMapItemCmd::new(ServerCoordinate::new(1, 2, 3), 9);
        let bytes = encoded(|w| cmd.encode(w));
        assert_eq!(bytes, [0, 1, 0, 2, 0, 3, 9]);
        assert_eq!(bytes.len(), LookAtMapItemCmd::PAYLOAD_LEN);
    }

    #[test]
    fn slot_look_ats() {
        let inventory = LookAtInventorySlotCmd::new(17);
        assert_eq!(encoded(|w| inventory.encode(w)), [17]);

        let container = LookAtContainerSlotCmd::new(ContainerSlot::new(2, 0x0103));
        assert_eq!(encoded(|w| container.encode(w)), [2, 1, 3]);

        let tile = LookAtTileCmd::new(ServerCoordinate::new(-1, 0, 7));
        assert_eq!(encoded(|w| tile.encode(w)), [0xFF, 0xFF, 0, 0, 0, 7]);
    }

    #[test]
    fn mode_deserializes_from_snake_case() {
        let mode: LookAtMode = serde_json::from_str("\"stare\"").unwrap();
        assert_eq!(mode, LookAtMode::Stare);
    }
}
