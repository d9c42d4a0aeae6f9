use std::fmt;
use std::io;

use realm_core::types::{CharacterId, Direction};
use realm_core::PacketWriter;
use serde::{Deserialize, Serialize};

/// How a character moves for one step.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum MoveMode {
    Walk = 0x0B,
    /// Shove whatever stands on the target tile.
    Push = 0x0C,
    Run = 0x0D,
}

impl MoveMode {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// `CL_MOVE`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCmd {
    char_id: CharacterId,
    direction: Option<Direction>,
    mode: MoveMode,
}

impl MoveCmd {
    pub const PAYLOAD_LEN: usize = 6;

    /// `direction == None` moves onto the current tile, which the server
    /// treats as "stay" for the given mode.
    pub fn new(char_id: CharacterId, mode: MoveMode, direction: Option<Direction>) -> Self {
        log::trace!(
            "Building move command: char_id={}, mode={:?}, direction={:?}",
            char_id,
            mode,
            direction
        );
        Self {
            char_id,
            direction,
            mode,
        }
    }

    pub fn char_id(&self) -> CharacterId {
        self.char_id
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn mode(&self) -> MoveMode {
        self.mode
    }

    /// `[char_id u32][direction u8][mode u8]`
    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.char_id.encode(writer)?;
        Direction::encode_optional(self.direction, writer)?;
        writer.write_ubyte(self.mode.code())
    }
}

impl fmt::Display for MoveCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveCmd(char_id={}, direction=", self.char_id)?;
        match self.direction {
            Some(direction) => write!(f, "{direction}")?,
            None => f.write_str("none")?,
        }
        write!(f, ", mode={:?})", self.mode)
    }
}

/// `CL_TURN`: face a direction without moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnCmd {
    direction: Direction,
}

impl TurnCmd {
    pub const PAYLOAD_LEN: usize = 1;

    pub fn new(direction: Direction) -> Self {
        log::debug!("Building turn command: direction={}", direction);
        Self { direction }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.direction.encode(writer)
    }
}

impl fmt::Display for TurnCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TurnCmd(direction={})", self.direction)
    }
}
