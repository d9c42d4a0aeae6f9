use std::fmt;
use std::io;

use realm_core::constants::*;
use realm_core::types::{ItemCount, ItemPosition};
use realm_core::PacketWriter;

/// Drag-and-drop of an item stack between inventory, map and containers.
///
/// Every source/destination pairing has its own opcode; the payload is the
/// source fields, the destination fields, then the quantity. Slot indices are
/// passed through as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragCmd {
    source: ItemPosition,
    destination: ItemPosition,
    count: ItemCount,
}

impl DragCmd {
    pub fn new(source: ItemPosition, destination: ItemPosition, count: ItemCount) -> Self {
        log::debug!(
            "Building drag command: source={}, destination={}, count={}",
            source,
            destination,
            count
        );
        Self {
            source,
            destination,
            count,
        }
    }

    pub fn source(&self) -> ItemPosition {
        self.source
    }

    pub fn destination(&self) -> ItemPosition {
        self.destination
    }

    pub fn count(&self) -> ItemCount {
        self.count
    }

    pub fn opcode(&self) -> u8 {
        use ItemPosition::*;
        match (self.source, self.destination) {
            (Inventory(_), Inventory(_)) => CL_DRAG_INV_INV,
            (Inventory(_), Map(_)) => CL_DRAG_INV_MAP,
            (Inventory(_), Container(_)) => CL_DRAG_INV_CONTAINER,
            (Map(_), Inventory(_)) => CL_DRAG_MAP_INV,
            (Map(_), Map(_)) => CL_DRAG_MAP_MAP,
            (Map(_), Container(_)) => CL_DRAG_MAP_CONTAINER,
            (Container(_), Inventory(_)) => CL_DRAG_CONTAINER_INV,
            (Container(_), Map(_)) => CL_DRAG_CONTAINER_MAP,
            (Container(_), Container(_)) => CL_DRAG_CONTAINER_CONTAINER,
        }
    }

    pub fn name(&self) -> &'static str {
        use ItemPosition::*;
        match (self.source, self.destination) {
            (Inventory(_), Inventory(_)) => "DragInvInvCmd",
            (Inventory(_), Map(_)) => "DragInvMapCmd",
            (Inventory(_), Container(_)) => "DragInvContainerCmd",
            (Map(_), Inventory(_)) => "DragMapInvCmd",
            (Map(_), Map(_)) => "DragMapMapCmd",
            (Map(_), Container(_)) => "DragMapContainerCmd",
            (Container(_), Inventory(_)) => "DragContainerInvCmd",
            (Container(_), Map(_)) => "DragContainerMapCmd",
            (Container(_), Container(_)) => "DragContainerContainerCmd",
        }
    }

    pub fn payload_len(&self) -> usize {
        self.source.encoded_len() + self.destination.encoded_len() + 2
    }

    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.source.encode(writer)?;
        self.destination.encode(writer)?;
        self.count.encode(writer)
    }
}

impl fmt::Display for DragCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(source={}, destination={}, count={})",
            self.name(),
            self.source,
            self.destination,
            self.count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use realm_core::types::{ContainerSlot, ServerCoordinate};

    fn count(n: u32) -> ItemCount {
        ItemCount::new(n).unwrap()
    }

    fn payload(cmd: &DragCmd) -> Vec<u8> {
        let mut out = Vec::new();
        cmd.encode(&mut out).unwrap();
        out
    }

    #[test]
    fn inventory_to_inventory() {
        let cmd = DragCmd::new(
            ItemPosition::Inventory(3),
            ItemPosition::Inventory(7),
            count(5),
        );
        assert_eq!(cmd.opcode(), CL_DRAG_INV_INV);
        assert_eq!(payload(&cmd), [0x03, 0x07, 0x00, 0x05]);
    }

    #[test]
    fn map_to_container_writes_source_then_destination_then_count() {
        let cmd = DragCmd::new(
            ItemPosition::Map(ServerCoordinate::new(1, 2, 3)),
            ItemPosition::Container(ContainerSlot::new(9, 4)),
            count(300),
        );
        assert_eq!(cmd.opcode(), CL_DRAG_MAP_CONTAINER);
        assert_eq!(
            payload(&cmd),
            [0, 1, 0, 2, 0, 3, 9, 0, 4, 0x01, 0x2C]
        );
    }

    #[test]
    fn every_pairing_has_a_distinct_opcode_and_matching_length() {
        let positions = [
            ItemPosition::Inventory(1),
            ItemPosition::Map(ServerCoordinate::new(0, 0, 0)),
            ItemPosition::Container(ContainerSlot::new(1, 1)),
        ];

        let mut opcodes = Vec::new();
        for source in positions {
            for destination in positions {
                let cmd = DragCmd::new(source, destination, count(1));
                assert_eq!(payload(&cmd).len(), cmd.payload_len(), "{cmd}");
                opcodes.push(cmd.opcode());
            }
        }

        opcodes.sort_unstable();
        opcodes.dedup();
        assert_eq!(opcodes.len(), 9);
    }

    #[test]
    fn display_names_the_pairing() {
        let cmd = DragCmd::new(
            ItemPosition::Container(ContainerSlot::new(2, 5)),
            ItemPosition::Inventory(0),
            count(1),
        );
        assert_eq!(
            cmd.to_string(),
            "DragContainerInvCmd(source=container 2 slot 5, destination=inventory slot 0, count=1)"
        );
    }
}
