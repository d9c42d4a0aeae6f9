//! Construction-time errors for client commands and the value types they carry.
//!
//! Encoding itself only fails with `std::io::Error`; everything a command
//! could get wrong is rejected here, before the command exists.

use crate::types::ServerCoordinate;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Item quantities must fit the 16-bit count field and be at least one.
    #[error("item count {0} is outside 1..=65535")]
    InvalidItemCount(u32),

    #[error("direction index {0} is outside 0..=7")]
    InvalidDirection(u8),

    #[error("speech mode {0} is not supported")]
    UnsupportedSpeechMode(u8),

    /// The string would overflow the 16-bit length prefix.
    #[error("text of {len} bytes does not fit the wire string length prefix")]
    TextTooLong { len: usize },

    #[error("{to} is not on or next to {from}")]
    NotAdjacent {
        from: ServerCoordinate,
        to: ServerCoordinate,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            CommandError::InvalidItemCount(70_000).to_string(),
            "item count 70000 is outside 1..=65535"
        );
        assert_eq!(
            CommandError::InvalidDirection(9).to_string(),
            "direction index 9 is outside 0..=7"
        );
        assert_eq!(
            CommandError::NotAdjacent {
                from: ServerCoordinate::new(1, 1, 0),
                to: ServerCoordinate::new(4, 1, 0),
            }
            .to_string(),
            "(4, 1, 0) is not on or next to (1, 1, 0)"
        );
    }
}
