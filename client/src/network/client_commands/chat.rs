use std::fmt;
use std::io;

use realm_core::constants::{CL_SAY, CL_SHOUT, CL_WHISPER};
use realm_core::types::{CharacterId, WireText};
use realm_core::{CommandError, PacketWriter};
use serde::{Deserialize, Serialize};

/// How far a line of speech carries. Each mode has its own opcode.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SpeechMode {
    Say,
    Shout,
    Whisper,
}

impl SpeechMode {
    pub fn from_u8(value: u8) -> Result<Self, CommandError> {
        match value {
            0 => Ok(SpeechMode::Say),
            1 => Ok(SpeechMode::Shout),
            2 => Ok(SpeechMode::Whisper),
            _ => Err(CommandError::UnsupportedSpeechMode(value)),
        }
    }

    pub fn opcode(self) -> u8 {
        match self {
            SpeechMode::Say => CL_SAY,
            SpeechMode::Shout => CL_SHOUT,
            SpeechMode::Whisper => CL_WHISPER,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpeechMode::Say => "SayCmd",
            SpeechMode::Shout => "ShoutCmd",
            SpeechMode::Whisper => "WhisperCmd",
        }
    }
}

/// Say, shout or whisper a line. The payload is the text alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechCmd {
    mode: SpeechMode,
    text: WireText,
}

impl SpeechCmd {
    pub fn new(mode: SpeechMode, text: &str) -> Result<Self, CommandError> {
        let text = WireText::new(text)?;
        log::debug!("Building speech command: mode={:?}, {} bytes", mode, text.as_str().len());
        Ok(Self { mode, text })
    }

    pub fn say(text: &str) -> Result<Self, CommandError> {
        Self::new(SpeechMode::Say, text)
    }

    pub fn shout(text: &str) -> Result<Self, CommandError> {
        Self::new(SpeechMode::Shout, text)
    }

    pub fn whisper(text: &str) -> Result<Self, CommandError> {
        Self::new(SpeechMode::Whisper, text)
    }

    pub fn opcode(&self) -> u8 {
        self.mode.opcode()
    }

    pub fn mode(&self) -> SpeechMode {
        self.mode
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn payload_len(&self) -> usize {
        self.text.encoded_len()
    }

    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.text.encode(writer)
    }
}

impl fmt::Display for SpeechCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(text={})", self.mode.name(), self.text)
    }
}

/// `CL_NAME_PLAYER`: attaches a private nickname to another character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePlayerCmd {
    char_id: CharacterId,
    name: WireText,
}

impl NamePlayerCmd {
    pub fn new(char_id: CharacterId, name: &str) -> Result<Self, CommandError> {
        let name = WireText::new(name)?;
        log::debug!("Building name-player command: char_id={}, name={}", char_id, name);
        Ok(Self { char_id, name })
    }

    pub fn char_id(&self) -> CharacterId {
        self.char_id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn payload_len(&self) -> usize {
        4 + self.name.encoded_len()
    }

    /// `[char_id u32][name string]`
    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.char_id.encode(writer)?;
        self.name.encode(writer)
    }
}

impl fmt::Display for NamePlayerCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NamePlayerCmd(char_id={}, name={})",
            self.char_id, self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speech_mode_from_raw_value() {
        assert_eq!(SpeechMode::from_u8(0), Ok(SpeechMode::Say));
        assert_eq!(SpeechMode::from_u8(2), Ok(SpeechMode::Whisper));
        assert_eq!(
            SpeechMode::from_u8(3),
            Err(CommandError::UnsupportedSpeechMode(3))
        );
    }

    #[test]
    fn each_mode_has_its_own_opcode() {
        assert_eq!(SpeechCmd::say("hi").unwrap().opcode(), CL_SAY);
        assert_eq!(SpeechCmd::shout("hi").unwrap().opcode(), CL_SHOUT);
        assert_eq!(SpeechCmd::whisper("hi").unwrap().opcode(), CL_WHISPER);
    }

    #[test]
    fn speech_payload_is_the_text() {
        let cmd = SpeechCmd::shout("héllo").unwrap();
        let mut out = Vec::new();
        cmd.encode(&mut out).unwrap();
        assert_eq!(&out[..2], &[0, 6]);
        assert_eq!(&out[2..], "héllo".as_bytes());
        assert_eq!(out.len(), cmd.payload_len());
        assert_eq!(cmd.to_string(), "ShoutCmd(text=\"héllo\")");
    }

    #[test]
    fn name_player_layout() {
        let cmd = NamePlayerCmd::new(CharacterId::new(3), "Bob").unwrap();
        let mut out = Vec::new();
        cmd.encode(&mut out).unwrap();
        assert_eq!(out, [0, 0, 0, 3, 0, 3, b'B', b'o', b'b']);
        assert_eq!(out.len(), cmd.payload_len());
    }
}
