use std::fmt;
use std::io;

use realm_core::constants::{DIALOG_CANCELLED, DIALOG_SUCCESS};
use realm_core::types::WireText;
use realm_core::{CommandError, PacketWriter};

fn success_flag(success: bool) -> u8 {
    if success {
        DIALOG_SUCCESS
    } else {
        DIALOG_CANCELLED
    }
}

/// `CL_CLOSE_DIALOG_INPUT`: answers a text-input dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseDialogInputCmd {
    dialog_id: i32,
    text: WireText,
    success: bool,
}

impl CloseDialogInputCmd {
    pub fn new(dialog_id: i32, text: &str, success: bool) -> Result<Self, CommandError> {
        let text = WireText::new(text)?;
        log::debug!(
            "Building close-dialog-input command: dialog_id={}, success={}",
            dialog_id,
            success
        );
        Ok(Self {
            dialog_id,
            text,
            success,
        })
    }

    pub fn dialog_id(&self) -> i32 {
        self.dialog_id
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn payload_len(&self) -> usize {
        4 + 1 + self.text.encoded_len()
    }

    /// `[dialog_id i32][flag u8][text string]`
    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_int(self.dialog_id)?;
        writer.write_ubyte(success_flag(self.success))?;
        self.text.encode(writer)
    }
}

impl fmt::Display for CloseDialogInputCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CloseDialogInputCmd(dialog_id={}, text={}, success={})",
            self.dialog_id, self.text, self.success
        )
    }
}

/// `CL_CLOSE_DIALOG_MESSAGE`: dismisses a message box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseDialogMessageCmd {
    dialog_id: i32,
}

impl CloseDialogMessageCmd {
    pub const PAYLOAD_LEN: usize = 4;

    pub fn new(dialog_id: i32) -> Self {
        log::debug!("Building close-dialog-message command: dialog_id={}", dialog_id);
        Self { dialog_id }
    }

    pub fn dialog_id(&self) -> i32 {
        self.dialog_id
    }

    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_int(self.dialog_id)
    }
}

impl fmt::Display for CloseDialogMessageCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CloseDialogMessageCmd(dialog_id={})", self.dialog_id)
    }
}

/// `CL_CLOSE_DIALOG_SELECTION`: picks one entry of a selection dialog, or
/// cancels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseDialogSelectionCmd {
    dialog_id: i32,
    selected_index: u8,
    success: bool,
}

impl CloseDialogSelectionCmd {
    pub const PAYLOAD_LEN: usize = 6;

    pub fn new(dialog_id: i32, selected_index: u8, success: bool) -> Self {
        log::debug!(
            "Building close-dialog-selection command: dialog_id={}, selected_index={}, success={}",
            dialog_id,
            selected_index,
            success
        );
        Self {
            dialog_id,
            selected_index,
            success,
        }
    }

    pub fn dialog_id(&self) -> i32 {
        self.dialog_id
    }

    pub fn selected_index(&self) -> u8 {
        self.selected_index
    }

    pub fn success(&self) -> bool {
        self.success
    }

    /// `[dialog_id i32][flag u8][selected_index u8]`
    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_int(self.dialog_id)?;
        writer.write_ubyte(success_flag(self.success))?;
        writer.write_ubyte(self.selected_index)
    }
}

impl fmt::Display for CloseDialogSelectionCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CloseDialogSelectionCmd(dialog_id={}, selected_index={}, success={})",
            self.dialog_id, self.selected_index, self.success
        )
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
    fn selection_confirmed_and_cancelled() {
        let ok = CloseDialogSelectionCmd::new(10, 3, true);
        assert_eq!(encoded(|w| ok.encode(w)), [0, 0, 0, 10, 0xFF, 0x03]);

        let cancelled = CloseDialogSelectionCmd::new(10, 3, false);
        assert_eq!(encoded(|w| cancelled.encode(w)), [0, 0, 0, 10, 0x00, 0x03]);
    }

    #[test]
    fn input_carries_the_text_after_the_flag() {
        let cmd = CloseDialogInputCmd::new(2, "yes", true).unwrap();
        let bytes = encoded(|w| cmd.encode(w));
        assert_eq!(bytes, [0, 0, 0, 2, 0xFF, 0, 3, b'y', b'e', b's']);
        assert_eq!(bytes.len(), cmd.payload_len());
    }

    #[test]
    fn cancelled_input_may_be_empty() {
        let cmd = CloseDialogInputCmd::new(2, "", false).unwrap();
        assert_eq!(encoded(|w| cmd.encode(w)), [0, 0, 0, 2, 0x00, 0, 0]);
    }

    #[test]
    fn input_rejects_oversized_text() {
        let text = "a".repeat(65_536);
        assert_eq!(
            CloseDialogInputCmd::new(2, &text, true),
            Err(CommandError::TextTooLong { len: 65_536 })
        );
    }

    #[test]
    fn message_is_the_dialog_id() {
        let cmd = CloseDialogMessageCmd::new(-1);
        assert_eq!(encoded(|w| cmd.encode(w)), [0xFF; 4]);
    }
}
