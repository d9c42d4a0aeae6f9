//! JSON command scripts.
//!
//! A script is an array of entries, each naming one command and the
//! arguments of its constructor:
//!
//! ```json
//! [
//!   { "command": "login", "name": "Hero", "password": "secret" },
//!   { "command": "move", "char_id": 42, "mode": "walk", "direction": 2 },
//!   { "command": "drag", "source": { "inventory": 3 },
//!     "destination": { "inventory": 7 }, "count": 5 }
//! ]
//! ```
//!
//! Raw numbers for counts and directions are validated by the same
//! constructors the game uses, so a bad script fails with a [`CommandError`].

use std::fs;
use std::path::Path;

use anyhow::Context;
use realm_core::types::{
    CharacterId, ContainerSlot, Direction, ItemCount, ItemPosition, ServerCoordinate,
};
use realm_core::CommandError;
use serde::{Deserialize, Serialize};

use crate::network::client_commands::*;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ScriptEntry {
    Login {
        name: String,
        password: String,
        /// Defaults to the configured client version.
        #[serde(default)]
        version: Option<u8>,
    },
    Logout,
    KeepAlive,
    Introduce,
    RequestAppearance {
        char_id: CharacterId,
    },
    Move {
        char_id: CharacterId,
        mode: MoveMode,
        #[serde(default)]
        direction: Option<u8>,
    },
    Turn {
        direction: u8,
    },
    Drag {
        source: ItemPosition,
        destination: ItemPosition,
        count: u32,
    },
    OpenBag,
    OpenOnMap {
        player: ServerCoordinate,
        target: ServerCoordinate,
    },
    OpenInContainer {
        slot: ContainerSlot,
    },
    CloseContainer {
        container_id: u8,
    },
    PickUp {
        coordinate: ServerCoordinate,
    },
    PickUpAll,
    Use {
        target: ItemPosition,
    },
    CloseTrade {
        dialog_id: i32,
    },
    SellInventoryItem {
        dialog_id: i32,
        slot: u16,
        count: u32,
    },
    SellContainerItem {
        dialog_id: i32,
        slot: ContainerSlot,
        count: u32,
    },
    BuyItem {
        dialog_id: i32,
        index: u8,
        count: u32,
    },
    LookAtMerchantItem {
        dialog_id: i32,
        list: MerchantList,
        slot: u8,
    },
    CloseCrafting {
        dialog_id: i32,
    },
    Craft {
        dialog_id: i32,
        item_index: u8,
        count: u32,
    },
    LookAtCraftingItem {
        dialog_id: i32,
        item_index: u8,
    },
    LookAtCraftingIngredient {
        dialog_id: i32,
        item_index: u8,
        ingredient_index: u8,
    },
    CloseDialogInput {
        dialog_id: i32,
        text: String,
        success: bool,
    },
    CloseDialogMessage {
        dialog_id: i32,
    },
    CloseDialogSelection {
        dialog_id: i32,
        selected_index: u8,
        success: bool,
    },
    LookAtCharacter {
        char_id: CharacterId,
        #[serde(default)]
        mode: LookAtMode,
    },
    LookAtTile {
        coordinate: ServerCoordinate,
    },
    LookAtMapItem {
        coordinate: ServerCoordinate,
        stack_position: u8,
    },
    LookAtInventorySlot {
        slot: u8,
    },
    LookAtContainerSlot {
        slot: ContainerSlot,
    },
    Attack {
        char_id: CharacterId,
    },
    StandDown,
    NamePlayer {
        char_id: CharacterId,
        name: String,
    },
    Say {
        text: String,
    },
    Shout {
        text: String,
    },
    Whisper {
        text: String,
    },
    /// Speech with the mode given as its raw protocol number.
    Speech {
        mode: u8,
        text: String,
    },
}

impl ScriptEntry {
    /// Runs the entry through its command constructor.
    pub fn build(&self, client_version: u8) -> Result<Command, CommandError> {
        let command = match self {
            ScriptEntry::Login {
                name,
                password,
                version,
            } => LoginCmd::new(name, password, version.unwrap_or(client_version))?.into(),
            ScriptEntry::Logout => Command::Logout,
            ScriptEntry::KeepAlive => Command::KeepAlive,
            ScriptEntry::Introduce => Command::Introduce,
            ScriptEntry::RequestAppearance { char_id } => {
                RequestAppearanceCmd::new(*char_id).into()
            }
            ScriptEntry::Move {
                char_id,
                mode,
                direction,
            } => {
                let direction = direction.map(Direction::from_index).transpose()?;
                MoveCmd::new(*char_id, *mode, direction).into()
            }
            ScriptEntry::Turn { direction } => {
                TurnCmd::new(Direction::from_index(*direction)?).into()
            }
            ScriptEntry::Drag {
                source,
                destination,
                count,
            } => DragCmd::new(*source, *destination, ItemCount::new(*count)?).into(),
            ScriptEntry::OpenBag => Command::OpenBag,
            ScriptEntry::OpenOnMap { player, target } => OpenOnMapCmd::new(player, target)?.into(),
            ScriptEntry::OpenInContainer { slot } => OpenInContainerCmd::new(*slot).into(),
            ScriptEntry::CloseContainer { container_id } => {
                CloseContainerCmd::new(*container_id).into()
            }
            ScriptEntry::PickUp { coordinate } => PickUpCmd::new(*coordinate).into(),
            ScriptEntry::PickUpAll => Command::PickUpAll,
            ScriptEntry::Use { target } => UseCmd::new(*target).into(),
            ScriptEntry::CloseTrade { dialog_id } => TradeItemCmd::close(*dialog_id).into(),
            ScriptEntry::SellInventoryItem {
                dialog_id,
                slot,
                count,
            } => TradeItemCmd::sell_inventory_item(*dialog_id, *slot, ItemCount::new(*count)?)
                .into(),
            ScriptEntry::SellContainerItem {
                dialog_id,
                slot,
                count,
            } => TradeItemCmd::sell_container_item(*dialog_id, *slot, ItemCount::new(*count)?)
                .into(),
            ScriptEntry::BuyItem {
                dialog_id,
                index,
                count,
            } => TradeItemCmd::buy(*dialog_id, *index, ItemCount::new(*count)?).into(),
            ScriptEntry::LookAtMerchantItem {
                dialog_id,
                list,
                slot,
            } => TradeItemCmd::look_at_merchant_item(*dialog_id, *list, *slot).into(),
            ScriptEntry::CloseCrafting { dialog_id } => CraftingCmd::close(*dialog_id).into(),
            ScriptEntry::Craft {
                dialog_id,
                item_index,
                count,
            } => CraftingCmd::craft(*dialog_id, *item_index, ItemCount::new(*count)?).into(),
            ScriptEntry::LookAtCraftingItem {
                dialog_id,
                item_index,
            } => CraftingCmd::look_at_item(*dialog_id, *item_index).into(),
            ScriptEntry::LookAtCraftingIngredient {
                dialog_id,
                item_index,
                ingredient_index,
            } => CraftingCmd::look_at_ingredient(*dialog_id, *item_index, *ingredient_index).into(),
            ScriptEntry::CloseDialogInput {
                dialog_id,
                text,
                success,
            } => CloseDialogInputCmd::new(*dialog_id, text, *success)?.into(),
            ScriptEntry::CloseDialogMessage { dialog_id } => {
                CloseDialogMessageCmd::new(*dialog_id).into()
            }
            ScriptEntry::CloseDialogSelection {
                dialog_id,
                selected_index,
                success,
            } => CloseDialogSelectionCmd::new(*dialog_id, *selected_index, *success).into(),
            ScriptEntry::LookAtCharacter { char_id, mode } => {
                LookAtCharacterCmd::new(*char_id, *mode).into()
            }
            ScriptEntry::LookAtTile { coordinate } => LookAtTileCmd::new(*coordinate).into(),
            ScriptEntry::LookAtMapItem {
                coordinate,
                stack_position,
            } => LookAtMapItemCmd::new(*coordinate, *stack_position).into(),
            ScriptEntry::LookAtInventorySlot { slot } => LookAtInventorySlotCmd::new(*slot).into(),
            ScriptEntry::LookAtContainerSlot { slot } => LookAtContainerSlotCmd::new(*slot).into(),
            ScriptEntry::Attack { char_id } => AttackCmd::new(*char_id).into(),
            ScriptEntry::StandDown => Command::StandDown,
            ScriptEntry::NamePlayer { char_id, name } => NamePlayerCmd::new(*char_id, name)?.into(),
            ScriptEntry::Say { text } => SpeechCmd::say(text)?.into(),
            ScriptEntry::Shout { text } => SpeechCmd::shout(text)?.into(),
            ScriptEntry::Whisper { text } => SpeechCmd::whisper(text)?.into(),
            ScriptEntry::Speech { mode, text } => {
                SpeechCmd::new(SpeechMode::from_u8(*mode)?, text)?.into()
            }
        };
        Ok(command)
    }
}

pub fn parse_script(json: &str) -> serde_json::Result<Vec<ScriptEntry>> {
    serde_json::from_str(json)
}

pub fn load_script(path: &Path) -> anyhow::Result<Vec<ScriptEntry>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read command script {:?}", path))?;
    let entries =
        parse_script(&json).with_context(|| format!("malformed command script {:?}", path))?;
    log::info!("Loaded {} script entries from {:?}", entries.len(), path);
    Ok(entries)
}

/// Builds every entry in order, stopping at the first one a constructor
/// rejects.
pub fn build_commands(entries: &[ScriptEntry], client_version: u8) -> anyhow::Result<Vec<Command>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .build(client_version)
                .with_context(|| format!("script entry {index} ({:?}) is invalid", entry))
        })
        .collect()
}
