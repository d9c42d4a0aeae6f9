use std::fmt;
use std::io;

use realm_core::constants::*;
use realm_core::types::{ContainerSlot, ItemCount};
use realm_core::PacketWriter;
use serde::{Deserialize, Serialize};

/// Which list of a merchant dialog an item index refers to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum MerchantList {
    Selling = 0,
    BuyingPrimary = 1,
    BuyingSecondary = 2,
}

/// What to do inside an open merchant dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeAction {
    Close,
    SellInventory { slot: u16, count: ItemCount },
    SellContainer { slot: ContainerSlot, count: ItemCount },
    Buy { index: u8, count: ItemCount },
    LookAt { list: MerchantList, slot: u8 },
}

impl TradeAction {
    /// Second-level opcode written after the dialog id. Both sell actions
    /// share one sub-command and differ in their source byte.
    pub fn sub_command(&self) -> u8 {
        match self {
            TradeAction::Close => TRADE_SUB_CLOSE,
            TradeAction::SellInventory { .. } | TradeAction::SellContainer { .. } => {
                TRADE_SUB_SELL
            }
            TradeAction::Buy { .. } => TRADE_SUB_BUY,
            TradeAction::LookAt { .. } => TRADE_SUB_LOOK_AT,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TradeAction::Close => "CloseDialogTradingCmd",
            TradeAction::SellInventory { .. } => "SellInventoryItemCmd",
            TradeAction::SellContainer { .. } => "SellContainerItemCmd",
            TradeAction::Buy { .. } => "BuyTradingItemCmd",
            TradeAction::LookAt { .. } => "LookAtMerchantItemCmd",
        }
    }

    fn fields_len(&self) -> usize {
        match self {
            TradeAction::Close => 0,
            TradeAction::SellInventory { .. } => 5,
            TradeAction::SellContainer { .. } => 6,
            TradeAction::Buy { .. } => 3,
            TradeAction::LookAt { .. } => 2,
        }
    }

    fn encode_fields<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        match self {
            TradeAction::Close => Ok(()),
            TradeAction::SellInventory { slot, count } => {
                writer.write_ubyte(TRADE_SOURCE_INVENTORY)?;
                writer.write_ushort(*slot)?;
                count.encode(writer)
            }
            TradeAction::SellContainer { slot, count } => {
                writer.write_ubyte(TRADE_SOURCE_CONTAINER)?;
                slot.encode(writer)?;
                count.encode(writer)
            }
            TradeAction::Buy { index, count } => {
                writer.write_ubyte(*index)?;
                count.encode(writer)
            }
            TradeAction::LookAt { list, slot } => {
                writer.write_ubyte(*list as u8)?;
                writer.write_ubyte(*slot)
            }
        }
    }
}

/// `CL_TRADE_ITEM`: one interaction with an open merchant dialog.
///
/// Payload is `[dialog_id i32][sub-command u8]` followed by the action's own
/// fields. Both sells start with a source selector, so an inventory sell is
/// `[0][slot u16][count]` and a container sell is
/// `[1][container u8][slot u16][count]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeItemCmd {
    dialog_id: i32,
    action: TradeAction,
}

impl TradeItemCmd {
    fn new(dialog_id: i32, action: TradeAction) -> Self {
        log::debug!(
            "Building trade command: dialog_id={}, action={:?}",
            dialog_id,
            action
        );
        Self { dialog_id, action }
    }

    pub fn close(dialog_id: i32) -> Self {
        Self::new(dialog_id, TradeAction::Close)
    }

    pub fn sell_inventory_item(dialog_id: i32, slot: u16, count: ItemCount) -> Self {
        Self::new(dialog_id, TradeAction::SellInventory { slot, count })
    }

    pub fn sell_container_item(dialog_id: i32, slot: ContainerSlot, count: ItemCount) -> Self {
        Self::new(dialog_id, TradeAction::SellContainer { slot, count })
    }

    pub fn buy(dialog_id: i32, index: u8, count: ItemCount) -> Self {
        Self::new(dialog_id, TradeAction::Buy { index, count })
    }

    pub fn look_at_merchant_item(dialog_id: i32, list: MerchantList, slot: u8) -> Self {
        Self::new(dialog_id, TradeAction::LookAt { list, slot })
    }

    pub fn dialog_id(&self) -> i32 {
        self.dialog_id
    }

    pub fn action(&self) -> &TradeAction {
        &self.action
    }

    pub fn payload_len(&self) -> usize {
        4 + 1 + self.action.fields_len()
    }

    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_int(self.dialog_id)?;
        writer.write_ubyte(self.action.sub_command())?;
        self.action.encode_fields(writer)
    }
}

impl fmt::Display for TradeItemCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(dialog_id={}", self.action.name(), self.dialog_id)?;
        match self.action {
            TradeAction::Close => {}
            TradeAction::SellInventory { slot, count } => {
                write!(f, ", slot={slot}, count={count}")?
            }
            TradeAction::SellContainer { slot, count } => {
                write!(f, ", slot={slot}, count={count}")?
            }
            TradeAction::Buy { index, count } => write!(f, ", index={index}, count={count}")?,
            TradeAction::LookAt { list, slot } => write!(f, ", list={list:?}, slot={slot}")?,
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(n: u32) -> ItemCount {
        ItemCount::new(n).unwrap()
    }

    fn payload(cmd: &TradeItemCmd) -> Vec<u8> {
        let mut out = Vec::new();
        cmd.encode(&mut out).unwrap();
        assert_eq!(out.len(), cmd.payload_len());
        out
    }

    #[test]
    fn sell_from_inventory() {
        let cmd = TradeItemCmd::sell_inventory_item(5, 2, count(1));
        assert_eq!(payload(&cmd), [0, 0, 0, 5, 1, 0, 0, 2, 0, 1]);
    }

    #[test]
    fn sell_from_container_writes_selector_then_slot() {
        let cmd = TradeItemCmd::sell_container_item(5, ContainerSlot::new(3, 10), count(20));
        assert_eq!(payload(&cmd), [0, 0, 0, 5, 1, 1, 3, 0, 10, 0, 20]);
    }

    #[test]
    /// Container 0 is an ordinary container here, as in drag and look-at.
    fn sell_from_container_zero_is_not_the_inventory() {
        let slot = ContainerSlot::new(0, 5);
        let from_container = payload(&TradeItemCmd::sell_container_item(5, slot, count(1)));
        let from_inventory = payload(&TradeItemCmd::sell_inventory_item(5, 5, count(1)));

        assert_eq!(from_container, [0, 0, 0, 5, 1, 1, 0, 0, 5, 0, 1]);
        assert_ne!(from_container, from_inventory);

        let mut slot_bytes = Vec::new();
        slot.encode(&mut slot_bytes).unwrap();
        assert_eq!(&from_container[6..9], slot_bytes.as_slice());
    }

    #[test]
    fn buy_close_and_look_at() {
        assert_eq!(
            payload(&TradeItemCmd::buy(-1, 4, count(2))),
            [0xFF, 0xFF, 0xFF, 0xFF, 2, 4, 0, 2]
        );
        assert_eq!(payload(&TradeItemCmd::close(9)), [0, 0, 0, 9, 0]);
        assert_eq!(
            payload(&TradeItemCmd::look_at_merchant_item(
                9,
                MerchantList::BuyingSecondary,
                6
            )),
            [0, 0, 0, 9, 3, 2, 6]
        );
    }

    #[test]
    fn dialog_id_precedes_sub_command_for_every_action() {
        let commands = [
            TradeItemCmd::close(0x01020304),
            TradeItemCmd::sell_inventory_item(0x01020304, 1, count(1)),
            TradeItemCmd::sell_container_item(0x01020304, ContainerSlot::new(1, 1), count(1)),
            TradeItemCmd::buy(0x01020304, 1, count(1)),
            TradeItemCmd::look_at_merchant_item(0x01020304, MerchantList::Selling, 1),
        ];
        for cmd in commands {
            let bytes = payload(&cmd);
            assert_eq!(&bytes[..4], &[1, 2, 3, 4]);
            assert_eq!(bytes[4], cmd.action().sub_command());
        }
    }

    #[test]
    fn display_uses_the_action_name() {
        let cmd = TradeItemCmd::buy(3, 1, count(10));
        assert_eq!(cmd.to_string(), "BuyTradingItemCmd(dialog_id=3, index=1, count=10)");
    }
}
