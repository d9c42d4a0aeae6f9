//! Helpers for the wire string layout: a big-endian `u16` byte count followed
//! by the UTF-8 bytes, no terminator.

/// Longest string body the length prefix can describe.
pub const MAX_WIRE_STRING_LEN: usize = u16::MAX as usize;

/// Whether `text` can be written as a wire string.
pub fn fits_wire_string(text: &str) -> bool {
    text.len() <= MAX_WIRE_STRING_LEN
}

/// Total bytes `text` occupies on the wire, prefix included.
pub fn wire_string_len(text: &str) -> usize {
    2 + text.len()
}
