use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

use crate::byte_operations::PacketWriter;
use crate::error::CommandError;

/// A validated stack quantity.
///
/// The wire field is an unsigned 16-bit value; zero is never a meaningful
/// amount to move, buy or sell, so the valid range is `1..=65535`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u32", into = "u32")]
pub struct ItemCount(u16);

impl ItemCount {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = u16::MAX as u32;

    /// Validates `value` against the count field range.
    pub fn new(value: u32) -> Result<Self, CommandError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(CommandError::InvalidItemCount(value));
        }
        Ok(ItemCount(value as u16))
    }

    pub const fn value(self) -> u16 {
        self.0
    }

    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_ushort(self.0)
    }
}

impl TryFrom<u32> for ItemCount {
    type Error = CommandError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        ItemCount::new(value)
    }
}

impl From<ItemCount> for u32 {
    fn from(count: ItemCount) -> Self {
        count.0 as u32
    }
}

impl fmt::Display for ItemCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_ends_of_the_range() {
        let mut out = Vec::new();
        ItemCount::new(1).unwrap().encode(&mut out).unwrap();
        ItemCount::new(65_535).unwrap().encode(&mut out).unwrap();
        assert_eq!(out, [0x00, 0x01, 0xFF, 0xFF]);
    }

    #[test]
    fn rejects_zero_and_overflow_at_construction() {
        assert_eq!(ItemCount::new(0), Err(CommandError::InvalidItemCount(0)));
        assert_eq!(
            ItemCount::new(65_536),
            Err(CommandError::InvalidItemCount(65_536))
        );
    }

    #[test]
    fn deserialization_goes_through_validation() {
        let count: ItemCount = serde_json::from_str("12").unwrap();
        assert_eq!(count.value(), 12);
        assert!(serde_json::from_str::<ItemCount>("0").is_err());
    }
}
