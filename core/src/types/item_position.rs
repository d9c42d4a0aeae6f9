use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

use super::{ContainerSlot, ServerCoordinate};
use crate::byte_operations::PacketWriter;
use crate::constants::{USE_TARGET_CONTAINER, USE_TARGET_INVENTORY, USE_TARGET_MAP};

/// Where an item sits: an inventory slot, a map tile, or a container slot.
///
/// Used as drag source/destination and as the target of the use command.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ItemPosition {
    Inventory(u8),
    Map(ServerCoordinate),
    Container(ContainerSlot),
}

impl ItemPosition {
    /// Bytes written by [`ItemPosition::encode`].
    pub const fn encoded_len(&self) -> usize {
        match self {
            ItemPosition::Inventory(_) => 1,
            ItemPosition::Map(_) => 6,
            ItemPosition::Container(_) => 3,
        }
    }

    /// Selector byte that prefixes a use target.
    pub const fn use_target_kind(&self) -> u8 {
        match self {
            ItemPosition::Inventory(_) => USE_TARGET_INVENTORY,
            ItemPosition::Map(_) => USE_TARGET_MAP,
            ItemPosition::Container(_) => USE_TARGET_CONTAINER,
        }
    }

    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        match self {
            ItemPosition::Inventory(slot) => writer.write_ubyte(*slot),
            ItemPosition::Map(coordinate) => coordinate.encode(writer),
            ItemPosition::Container(slot) => slot.encode(writer),
        }
    }
}

impl fmt::Display for ItemPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemPosition::Inventory(slot) => write!(f, "inventory slot {slot}"),
            ItemPosition::Map(coordinate) => write!(f, "map {coordinate}"),
            ItemPosition::Container(slot) => write!(f, "{slot}"),
        }
    }
}
