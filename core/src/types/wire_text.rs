use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

use crate::byte_operations::PacketWriter;
use crate::error::CommandError;
use crate::string_operations::{fits_wire_string, wire_string_len};

/// Text that is known to fit the wire string encoding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "String", into = "String")]
pub struct WireText(String);

impl WireText {
    pub fn new(text: impl Into<String>) -> Result<Self, CommandError> {
        let text = text.into();
        if !fits_wire_string(&text) {
            return Err(CommandError::TextTooLong { len: text.len() });
        }
        Ok(WireText(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Bytes this text occupies on the wire, length prefix included.
    pub fn encoded_len(&self) -> usize {
        wire_string_len(&self.0)
    }

    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_string(&self.0)
    }
}

impl TryFrom<String> for WireText {
    type Error = CommandError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        WireText::new(text)
    }
}

impl TryFrom<&str> for WireText {
    type Error = CommandError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        WireText::new(text)
    }
}

impl From<WireText> for String {
    fn from(text: WireText) -> Self {
        text.0
    }
}

impl fmt::Display for WireText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_longest_encodable_text() {
        let text = "a".repeat(u16::MAX as usize);
        let wire = WireText::new(text).unwrap();
        assert_eq!(wire.encoded_len(), 2 + u16::MAX as usize);
    }

    #[test]
    fn rejects_text_past_the_length_prefix() {
        let text = "a".repeat(u16::MAX as usize + 1);
        assert_eq!(
            WireText::new(text),
            Err(CommandError::TextTooLong {
                len: u16::MAX as usize + 1
            })
        );
    }

    #[test]
    fn length_counts_utf8_bytes_not_chars() {
        let wire = WireText::new("né").unwrap();
        assert_eq!(wire.encoded_len(), 2 + 3);
    }

    #[test]
    fn display_quotes_the_text() {
        assert_eq!(WireText::new("hi").unwrap().to_string(), "\"hi\"");
    }
}
