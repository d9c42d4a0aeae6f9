use std::fmt;
use std::io;

use realm_core::types::CharacterId;
use realm_core::PacketWriter;

/// `CL_ATTACK`: start attacking a character. `StandDown` ends it and carries
/// no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackCmd {
    char_id: CharacterId,
}

impl AttackCmd {
    pub const PAYLOAD_LEN: usize = 4;

    pub fn new(char_id: CharacterId) -> Self {
        log::debug!("Building attack command: char_id={}", char_id);
        Self { char_id }
    }

    pub fn char_id(&self) -> CharacterId {
        self.char_id
    }

    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.char_id.encode(writer)
    }
}

impl fmt::Display for AttackCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AttackCmd(char_id={})", self.char_id)
    }
}
