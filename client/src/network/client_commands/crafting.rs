use std::fmt;
use std::io;

use realm_core::constants::*;
use realm_core::types::ItemCount;
use realm_core::PacketWriter;

/// What to do inside an open crafting dialog. Indices refer to the recipe
/// list the server sent when the dialog opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CraftingAction {
    Close,
    Craft { item_index: u8, count: ItemCount },
    LookAtItem { item_index: u8 },
    LookAtIngredient { item_index: u8, ingredient_index: u8 },
}

impl CraftingAction {
    pub fn sub_command(&self) -> u8 {
        match self {
            CraftingAction::Close => CRAFT_SUB_CLOSE,
            CraftingAction::Craft { .. } => CRAFT_SUB_CRAFT,
            CraftingAction::LookAtItem { .. } => CRAFT_SUB_LOOK_AT_ITEM,
            CraftingAction::LookAtIngredient { .. } => CRAFT_SUB_LOOK_AT_INGREDIENT,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CraftingAction::Close => "CloseDialogCraftingCmd",
            CraftingAction::Craft { .. } => "CraftItemCmd",
            CraftingAction::LookAtItem { .. } => "LookAtCraftingItemCmd",
            CraftingAction::LookAtIngredient { .. } => "LookAtCraftingIngredientCmd",
        }
    }

    fn fields_len(&self) -> usize {
        match self {
            CraftingAction::Close => 0,
            CraftingAction::Craft { .. } => 3,
            CraftingAction::LookAtItem { .. } => 1,
            CraftingAction::LookAtIngredient { .. } => 2,
        }
    }
}

/// `CL_CRAFT_ITEM`: `[dialog_id i32][sub-command u8]` then the action fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CraftingCmd {
    dialog_id: i32,
    action: CraftingAction,
}

impl CraftingCmd {
    fn new(dialog_id: i32, action: CraftingAction) -> Self {
        log::debug!(
            "Building crafting command: dialog_id={}, action={:?}",
            dialog_id,
            action
        );
        Self { dialog_id, action }
    }

    pub fn close(dialog_id: i32) -> Self {
        Self::new(dialog_id, CraftingAction::Close)
    }

    pub fn craft(dialog_id: i32, item_index: u8, count: ItemCount) -> Self {
        Self::new(dialog_id, CraftingAction::Craft { item_index, count })
    }

    pub fn look_at_item(dialog_id: i32, item_index: u8) -> Self {
        Self::new(dialog_id, CraftingAction::LookAtItem { item_index })
    }

    pub fn look_at_ingredient(dialog_id: i32, item_index: u8, ingredient_index: u8) -> Self {
        Self::new(
            dialog_id,
            CraftingAction::LookAtIngredient {
                item_index,
                ingredient_index,
            },
        )
    }

    pub fn dialog_id(&self) -> i32 {
        self.dialog_id
    }

    pub fn action(&self) -> &CraftingAction {
        &self.action
    }

    pub fn payload_len(&self) -> usize {
        4 + 1 + self.action.fields_len()
    }

    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_int(self.dialog_id)?;
        writer.write_ubyte(self.action.sub_command())?;
        match self.action {
            CraftingAction::Close => Ok(()),
            CraftingAction::Craft { item_index, count } => {
                writer.write_ubyte(item_index)?;
                count.encode(writer)
            }
            CraftingAction::LookAtItem { item_index } => writer.write_ubyte(item_index),
            CraftingAction::LookAtIngredient {
                item_index,
                ingredient_index,
            } => {
                writer.write_ubyte(item_index)?;
                writer.write_ubyte(ingredient_index)
            }
        }
    }
}

impl fmt::Display for CraftingCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(dialog_id={}", self.action.name(), self.dialog_id)?;
        match self.action {
            CraftingAction::Close => {}
            CraftingAction::Craft { item_index, count } => {
                write!(f, ", item_index={item_index}, count={count}")?
            }
            CraftingAction::LookAtItem { item_index } => write!(f, ", item_index={item_index}")?,
            CraftingAction::LookAtIngredient {
                item_index,
                ingredient_index,
            } => write!(
                f,
                ", item_index={item_index}, ingredient_index={ingredient_index}"
            )?,
        }
        f.write_str(")")
    }
}
