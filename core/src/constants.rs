//! Constants module - protocol constants shared with the game server

// =============================================================================
// Protocol
// =============================================================================

/// Client protocol version sent with the login command.
pub const CLIENT_VERSION: u8 = 100;

/// Flag byte written for a confirmed dialog, `0x00` for a cancelled one.
pub const DIALOG_SUCCESS: u8 = 0xFF;
pub const DIALOG_CANCELLED: u8 = 0x00;

// =============================================================================
// Client Command Opcodes (first byte of every client frame)
// =============================================================================

// Session
pub const CL_LOGIN: u8 = 0x0D;
pub const CL_REQUEST_APPEARANCE: u8 = 0x0E;
pub const CL_LOGOUT: u8 = 0x0F;
pub const CL_KEEPALIVE: u8 = 0xD8;

// Movement / identity
pub const CL_MOVE: u8 = 0x10;
pub const CL_TURN: u8 = 0x11;
pub const CL_INTRODUCE: u8 = 0x12;
pub const CL_NAME_PLAYER: u8 = 0x13;

// Look-at
pub const CL_LOOKAT_CHARACTER: u8 = 0x18;
pub const CL_LOOKAT_TILE: u8 = 0x19;
pub const CL_LOOKAT_MAP_ITEM: u8 = 0x1A;
pub const CL_LOOKAT_INVENTORY: u8 = 0x1B;
pub const CL_LOOKAT_CONTAINER: u8 = 0x1C;

// Drag and drop, source then destination
pub const CL_DRAG_INV_INV: u8 = 0x20;
pub const CL_DRAG_INV_MAP: u8 = 0x21;
pub const CL_DRAG_INV_CONTAINER: u8 = 0x22;
pub const CL_DRAG_MAP_INV: u8 = 0x23;
pub const CL_DRAG_MAP_MAP: u8 = 0x24;
pub const CL_DRAG_MAP_CONTAINER: u8 = 0x25;
pub const CL_DRAG_CONTAINER_INV: u8 = 0x26;
pub const CL_DRAG_CONTAINER_MAP: u8 = 0x27;
pub const CL_DRAG_CONTAINER_CONTAINER: u8 = 0x28;

// Containers and items
pub const CL_OPEN_BAG: u8 = 0x30;
pub const CL_OPEN_ON_MAP: u8 = 0x31;
pub const CL_OPEN_IN_CONTAINER: u8 = 0x32;
pub const CL_CLOSE_CONTAINER: u8 = 0x33;
pub const CL_PICK_UP: u8 = 0x34;
pub const CL_PICK_UP_ALL: u8 = 0x35;
pub const CL_USE: u8 = 0x36;

// Combat
pub const CL_ATTACK: u8 = 0x40;
pub const CL_STAND_DOWN: u8 = 0x41;

// Dialogs
pub const CL_CLOSE_DIALOG_INPUT: u8 = 0x50;
pub const CL_CLOSE_DIALOG_MESSAGE: u8 = 0x51;
pub const CL_TRADE_ITEM: u8 = 0x52;
pub const CL_CLOSE_DIALOG_SELECTION: u8 = 0x53;
pub const CL_CRAFT_ITEM: u8 = 0x54;

// Speech
pub const CL_SAY: u8 = 0xF0;
pub const CL_SHOUT: u8 = 0xF1;
pub const CL_WHISPER: u8 = 0xF2;

// =============================================================================
// Sub-commands (byte following the dialog id)
// =============================================================================

pub const TRADE_SUB_CLOSE: u8 = 0;
pub const TRADE_SUB_SELL: u8 = 1;
pub const TRADE_SUB_BUY: u8 = 2;
pub const TRADE_SUB_LOOK_AT: u8 = 3;

pub const CRAFT_SUB_CLOSE: u8 = 0;
pub const CRAFT_SUB_CRAFT: u8 = 1;
pub const CRAFT_SUB_LOOK_AT_ITEM: u8 = 2;
pub const CRAFT_SUB_LOOK_AT_INGREDIENT: u8 = 3;

/// Source selector written before the slot of a sold item.
pub const TRADE_SOURCE_INVENTORY: u8 = 0;
pub const TRADE_SOURCE_CONTAINER: u8 = 1;

// =============================================================================
// Use targets (first payload byte of CL_USE)
// =============================================================================

pub const USE_TARGET_MAP: u8 = 1;
pub const USE_TARGET_INVENTORY: u8 = 2;
pub const USE_TARGET_CONTAINER: u8 = 3;
