//! Commands the client sends to the game server.
//!
//! Each command is an immutable value. Anything that could make it invalid is
//! checked by its constructor, so encoding only fails when the writer does.
//! A frame on the wire is the opcode byte followed by the payload; the payload
//! layout of every command is fixed by the server and documented on the
//! command's `encode`.

mod chat;
mod combat;
mod container;
mod crafting;
mod dialog;
mod drag;
mod look_at;
mod movement;
mod session;
mod trade;

use std::fmt;
use std::io;

use realm_core::byte_operations::CountingWriter;
use realm_core::constants::*;
use realm_core::PacketWriter;

pub use chat::{NamePlayerCmd, SpeechCmd, SpeechMode};
pub use combat::AttackCmd;
pub use container::{CloseContainerCmd, OpenInContainerCmd, OpenOnMapCmd, PickUpCmd, UseCmd};
pub use crafting::{CraftingAction, CraftingCmd};
pub use dialog::{CloseDialogInputCmd, CloseDialogMessageCmd, CloseDialogSelectionCmd};
pub use drag::DragCmd;
pub use look_at::{
    LookAtCharacterCmd, LookAtContainerSlotCmd, LookAtInventorySlotCmd, LookAtMapItemCmd,
    LookAtMode, LookAtTileCmd,
};
pub use movement::{MoveCmd, MoveMode, TurnCmd};
pub use session::{LoginCmd, RequestAppearanceCmd};
pub use trade::{MerchantList, TradeAction, TradeItemCmd};

/// Every command the client can put on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login(LoginCmd),
    Logout,
    KeepAlive,
    Introduce,
    RequestAppearance(RequestAppearanceCmd),
    Move(MoveCmd),
    Turn(TurnCmd),
    Drag(DragCmd),
    OpenBag,
    OpenOnMap(OpenOnMapCmd),
    OpenInContainer(OpenInContainerCmd),
    CloseContainer(CloseContainerCmd),
    PickUp(PickUpCmd),
    PickUpAll,
    Use(UseCmd),
    TradeItem(TradeItemCmd),
    Crafting(CraftingCmd),
    CloseDialogInput(CloseDialogInputCmd),
    CloseDialogMessage(CloseDialogMessageCmd),
    CloseDialogSelection(CloseDialogSelectionCmd),
    LookAtCharacter(LookAtCharacterCmd),
    LookAtTile(LookAtTileCmd),
    LookAtMapItem(LookAtMapItemCmd),
    LookAtInventorySlot(LookAtInventorySlotCmd),
    LookAtContainerSlot(LookAtContainerSlotCmd),
    Attack(AttackCmd),
    StandDown,
    NamePlayer(NamePlayerCmd),
    Speech(SpeechCmd),
}

impl Command {
    /// First byte of the frame.
    pub fn opcode(&self) -> u8 {
        match self {
            Command::Login(_) => CL_LOGIN,
            Command::Logout => CL_LOGOUT,
            Command::KeepAlive => CL_KEEPALIVE,
            Command::Introduce => CL_INTRODUCE,
            Command::RequestAppearance(_) => CL_REQUEST_APPEARANCE,
            Command::Move(_) => CL_MOVE,
            Command::Turn(_) => CL_TURN,
            Command::Drag(cmd) => cmd.opcode(),
            Command::OpenBag => CL_OPEN_BAG,
            Command::OpenOnMap(_) => CL_OPEN_ON_MAP,
            Command::OpenInContainer(_) => CL_OPEN_IN_CONTAINER,
            Command::CloseContainer(_) => CL_CLOSE_CONTAINER,
            Command::PickUp(_) => CL_PICK_UP,
            Command::PickUpAll => CL_PICK_UP_ALL,
            Command::Use(_) => CL_USE,
            Command::TradeItem(_) => CL_TRADE_ITEM,
            Command::Crafting(_) => CL_CRAFT_ITEM,
            Command::CloseDialogInput(_) => CL_CLOSE_DIALOG_INPUT,
            Command::CloseDialogMessage(_) => CL_CLOSE_DIALOG_MESSAGE,
            Command::CloseDialogSelection(_) => CL_CLOSE_DIALOG_SELECTION,
            Command::LookAtCharacter(_) => CL_LOOKAT_CHARACTER,
            Command::LookAtTile(_) => CL_LOOKAT_TILE,
            Command::LookAtMapItem(_) => CL_LOOKAT_MAP_ITEM,
            Command::LookAtInventorySlot(_) => CL_LOOKAT_INVENTORY,
            Command::LookAtContainerSlot(_) => CL_LOOKAT_CONTAINER,
            Command::Attack(_) => CL_ATTACK,
            Command::StandDown => CL_STAND_DOWN,
            Command::NamePlayer(_) => CL_NAME_PLAYER,
            Command::Speech(cmd) => cmd.opcode(),
        }
    }

    /// Writes the payload only. The opcode is the framing layer's job, see
    /// [`Command::encode_frame`].
    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        match self {
            Command::Login(cmd) => cmd.encode(writer),
            Command::RequestAppearance(cmd) => cmd.encode(writer),
            Command::Move(cmd) => cmd.encode(writer),
            Command::Turn(cmd) => cmd.encode(writer),
            Command::Drag(cmd) => cmd.encode(writer),
            Command::OpenOnMap(cmd) => cmd.encode(writer),
            Command::OpenInContainer(cmd) => cmd.encode(writer),
            Command::CloseContainer(cmd) => cmd.encode(writer),
            Command::PickUp(cmd) => cmd.encode(writer),
            Command::Use(cmd) => cmd.encode(writer),
            Command::TradeItem(cmd) => cmd.encode(writer),
            Command::Crafting(cmd) => cmd.encode(writer),
            Command::CloseDialogInput(cmd) => cmd.encode(writer),
            Command::CloseDialogMessage(cmd) => cmd.encode(writer),
            Command::CloseDialogSelection(cmd) => cmd.encode(writer),
            Command::LookAtCharacter(cmd) => cmd.encode(writer),
            Command::LookAtTile(cmd) => cmd.encode(writer),
            Command::LookAtMapItem(cmd) => cmd.encode(writer),
            Command::LookAtInventorySlot(cmd) => cmd.encode(writer),
            Command::LookAtContainerSlot(cmd) => cmd.encode(writer),
            Command::Attack(cmd) => cmd.encode(writer),
            Command::NamePlayer(cmd) => cmd.encode(writer),
            Command::Speech(cmd) => cmd.encode(writer),
            Command::Logout
            | Command::KeepAlive
            | Command::Introduce
            | Command::OpenBag
            | Command::PickUpAll
            | Command::StandDown => Ok(()),
        }
    }

    /// Writes one complete frame: opcode, then payload.
    pub fn encode_frame<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_ubyte(self.opcode())?;

        let mut counted = CountingWriter::new(writer);
        self.encode(&mut counted)?;
        debug_assert_eq!(
            counted.written(),
            self.payload_len(),
            "{self} wrote a payload of unexpected length"
        );

        Ok(())
    }

    /// One frame as an owned buffer.
    pub fn to_bytes(&self) -> io::Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(1 + self.payload_len());
        self.encode_frame(&mut bytes)?;
        Ok(bytes)
    }

    /// Exact number of payload bytes [`Command::encode`] writes.
    pub fn payload_len(&self) -> usize {
        match self {
            Command::Login(cmd) => cmd.payload_len(),
            Command::RequestAppearance(_) => RequestAppearanceCmd::PAYLOAD_LEN,
            Command::Move(_) => MoveCmd::PAYLOAD_LEN,
            Command::Turn(_) => TurnCmd::PAYLOAD_LEN,
            Command::Drag(cmd) => cmd.payload_len(),
            Command::OpenOnMap(_) => OpenOnMapCmd::PAYLOAD_LEN,
            Command::OpenInContainer(_) => OpenInContainerCmd::PAYLOAD_LEN,
            Command::CloseContainer(_) => CloseContainerCmd::PAYLOAD_LEN,
            Command::PickUp(_) => PickUpCmd::PAYLOAD_LEN,
            Command::Use(cmd) => cmd.payload_len(),
            Command::TradeItem(cmd) => cmd.payload_len(),
            Command::Crafting(cmd) => cmd.payload_len(),
            Command::CloseDialogInput(cmd) => cmd.payload_len(),
            Command::CloseDialogMessage(_) => CloseDialogMessageCmd::PAYLOAD_LEN,
            Command::CloseDialogSelection(_) => CloseDialogSelectionCmd::PAYLOAD_LEN,
            Command::LookAtCharacter(_) => LookAtCharacterCmd::PAYLOAD_LEN,
            Command::LookAtTile(_) => LookAtTileCmd::PAYLOAD_LEN,
            Command::LookAtMapItem(_) => LookAtMapItemCmd::PAYLOAD_LEN,
            Command::LookAtInventorySlot(_) => LookAtInventorySlotCmd::PAYLOAD_LEN,
            Command::LookAtContainerSlot(_) => LookAtContainerSlotCmd::PAYLOAD_LEN,
            Command::Attack(_) => AttackCmd::PAYLOAD_LEN,
            Command::NamePlayer(cmd) => cmd.payload_len(),
            Command::Speech(cmd) => cmd.payload_len(),
            Command::Logout
            | Command::KeepAlive
            | Command::Introduce
            | Command::OpenBag
            | Command::PickUpAll
            | Command::StandDown => 0,
        }
    }

    /// Payload length for commands without string fields, whose size depends
    /// only on the kinds of their fields. `None` for string-bearing commands.
    pub fn fixed_payload_len(&self) -> Option<usize> {
        match self {
            Command::Login(_)
            | Command::CloseDialogInput(_)
            | Command::NamePlayer(_)
            | Command::Speech(_) => None,
            _ => Some(self.payload_len()),
        }
    }

    /// Type name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Login(_) => "LoginCmd",
            Command::Logout => "LogoutCmd",
            Command::KeepAlive => "KeepAliveCmd",
            Command::Introduce => "IntroduceCmd",
            Command::RequestAppearance(_) => "RequestAppearanceCmd",
            Command::Move(_) => "MoveCmd",
            Command::Turn(_) => "TurnCmd",
            Command::Drag(cmd) => cmd.name(),
            Command::OpenBag => "OpenBagCmd",
            Command::OpenOnMap(_) => "OpenOnMapCmd",
            Command::OpenInContainer(_) => "OpenInContainerCmd",
            Command::CloseContainer(_) => "CloseContainerCmd",
            Command::PickUp(_) => "PickUpCmd",
            Command::PickUpAll => "PickUpAllCmd",
            Command::Use(_) => "UseCmd",
            Command::TradeItem(cmd) => cmd.action().name(),
            Command::Crafting(cmd) => cmd.action().name(),
            Command::CloseDialogInput(_) => "CloseDialogInputCmd",
            Command::CloseDialogMessage(_) => "CloseDialogMessageCmd",
            Command::CloseDialogSelection(_) => "CloseDialogSelectionCmd",
            Command::LookAtCharacter(_) => "LookAtCharacterCmd",
            Command::LookAtTile(_) => "LookAtTileCmd",
            Command::LookAtMapItem(_) => "LookAtMapItemCmd",
            Command::LookAtInventorySlot(_) => "LookAtInventorySlotCmd",
            Command::LookAtContainerSlot(_) => "LookAtContainerSlotCmd",
            Command::Attack(_) => "AttackCmd",
            Command::StandDown => "StandDownCmd",
            Command::NamePlayer(_) => "NamePlayerCmd",
            Command::Speech(cmd) => cmd.mode().name(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Login(cmd) => fmt::Display::fmt(cmd, f),
            Command::RequestAppearance(cmd) => fmt::Display::fmt(cmd, f),
            Command::Move(cmd) => fmt::Display::fmt(cmd, f),
            Command::Turn(cmd) => fmt::Display::fmt(cmd, f),
            Command::Drag(cmd) => fmt::Display::fmt(cmd, f),
            Command::OpenOnMap(cmd) => fmt::Display::fmt(cmd, f),
            Command::OpenInContainer(cmd) => fmt::Display::fmt(cmd, f),
            Command::CloseContainer(cmd) => fmt::Display::fmt(cmd, f),
            Command::PickUp(cmd) => fmt::Display::fmt(cmd, f),
            Command::Use(cmd) => fmt::Display::fmt(cmd, f),
            Command::TradeItem(cmd) => fmt::Display::fmt(cmd, f),
            Command::Crafting(cmd) => fmt::Display::fmt(cmd, f),
            Command::CloseDialogInput(cmd) => fmt::Display::fmt(cmd, f),
            Command::CloseDialogMessage(cmd) => fmt::Display::fmt(cmd, f),
            Command::CloseDialogSelection(cmd) => fmt::Display::fmt(cmd, f),
            Command::LookAtCharacter(cmd) => fmt::Display::fmt(cmd, f),
            Command::LookAtTile(cmd) => fmt::Display::fmt(cmd, f),
            Command::LookAtMapItem(cmd) => fmt::Display::fmt(cmd, f),
            Command::LookAtInventorySlot(cmd) => fmt::Display::fmt(cmd, f),
            Command::LookAtContainerSlot(cmd) => fmt::Display::fmt(cmd, f),
            Command::Attack(cmd) => fmt::Display::fmt(cmd, f),
            Command::NamePlayer(cmd) => fmt::Display::fmt(cmd, f),
            Command::Speech(cmd) => fmt::Display::fmt(cmd, f),
            Command::Logout
            | Command::KeepAlive
            | Command::Introduce
            | Command::OpenBag
            | Command::PickUpAll
            | Command::StandDown => write!(f, "{}", self.name()),
        }
    }
}

macro_rules! impl_into_command {
    ($($cmd:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$cmd> for Command {
                fn from(cmd: $cmd) -> Self {
                    Command::$variant(cmd)
                }
            }
        )+
    };
}

impl_into_command! {
    LoginCmd => Login,
    RequestAppearanceCmd => RequestAppearance,
    MoveCmd => Move,
    TurnCmd => Turn,
    DragCmd => Drag,
    OpenOnMapCmd => OpenOnMap,
    OpenInContainerCmd => OpenInContainer,
    CloseContainerCmd => CloseContainer,
    PickUpCmd => PickUp,
    UseCmd => Use,
    TradeItemCmd => TradeItem,
    CraftingCmd => Crafting,
    CloseDialogInputCmd => CloseDialogInput,
    CloseDialogMessageCmd => CloseDialogMessage,
    CloseDialogSelectionCmd => CloseDialogSelection,
    LookAtCharacterCmd => LookAtCharacter,
    LookAtTileCmd => LookAtTile,
    LookAtMapItemCmd => LookAtMapItem,
    LookAtInventorySlotCmd => LookAtInventorySlot,
    LookAtContainerSlotCmd => LookAtContainerSlot,
    AttackCmd => Attack,
    NamePlayerCmd => NamePlayer,
    SpeechCmd => Speech,
}

#[cfg(test)]
mod tests {
    use super::*;
    use realm_core::types::{
        CharacterId, ContainerSlot, Direction, ItemCount, ItemPosition, ServerCoordinate,
    };

    fn sample_commands() -> Vec<Command> {
        let count = ItemCount::new(2).unwrap();
        let here = ServerCoordinate::new(10, 10, 0);
        vec![
            LoginCmd::new("Hero", "secret", CLIENT_VERSION).unwrap().into(),
            Command::Logout,
            Command::KeepAlive,
            Command::Introduce,
            RequestAppearanceCmd::new(CharacterId::new(1)).into(),
            MoveCmd::new(CharacterId::new(1), MoveMode::Walk, Some(Direction::East)).into(),
            TurnCmd::new(Direction::North).into(),
            DragCmd::new(
                ItemPosition::Map(here),
                ItemPosition::Container(ContainerSlot::new(1, 2)),
                count,
            )
            .into(),
            Command::OpenBag,
            OpenOnMapCmd::new(&here, &ServerCoordinate::new(11, 10, 0)).unwrap().into(),
            OpenInContainerCmd::new(ContainerSlot::new(1, 2)).into(),
            CloseContainerCmd::new(1).into(),
            PickUpCmd::new(here).into(),
            Command::PickUpAll,
            UseCmd::new(ItemPosition::Inventory(4)).into(),
            TradeItemCmd::buy(3, 1, count).into(),
            CraftingCmd::craft(3, 1, count).into(),
            CloseDialogInputCmd::new(3, "ok", true).unwrap().into(),
            CloseDialogMessageCmd::new(3).into(),
            CloseDialogSelectionCmd::new(3, 0, false).into(),
            LookAtCharacterCmd::stare(CharacterId::new(5)).into(),
            LookAtTileCmd::new(here).into(),
            LookAtMapItemCmd::new(here, 0).into(),
            LookAtInventorySlotCmd::new(0).into(),
            LookAtContainerSlotCmd::new(ContainerSlot::new(1, 2)).into(),
            AttackCmd::new(CharacterId::new(5)).into(),
            Command::StandDown,
            NamePlayerCmd::new(CharacterId::new(5), "Foe").unwrap().into(),
            SpeechCmd::whisper("psst").unwrap().into(),
        ]
    }

    #[test]
    /// Every frame is the opcode followed by exactly `payload_len` bytes.
    fn frames_match_declared_lengths() {
        for command in sample_commands() {
            let frame = command.to_bytes().unwrap();
            assert_eq!(frame[0], command.opcode(), "{command}");
            assert_eq!(frame.len(), 1 + command.payload_len(), "{command}");

            let mut payload = Vec::new();
            command.encode(&mut payload).unwrap();
            assert_eq!(&frame[1..], payload.as_slice(), "{command}");
        }
    }

    #[test]
    fn fixed_length_only_for_string_free_commands() {
        for command in sample_commands() {
            let has_strings = matches!(
                command,
                Command::Login(_)
                    | Command::CloseDialogInput(_)
                    | Command::NamePlayer(_)
                    | Command::Speech(_)
            );
            assert_eq!(command.fixed_payload_len().is_none(), has_strings, "{command}");
        }
    }

    #[test]
    fn opcodes_are_unique_per_command_kind() {
        let mut opcodes: Vec<u8> = sample_commands().iter().map(Command::opcode).collect();
        let total = opcodes.len();
        opcodes.sort_unstable();
        opcodes.dedup();
        assert_eq!(opcodes.len(), total);
    }

    #[test]
    fn field_less_commands_display_their_name() {
        assert_eq!(Command::KeepAlive.to_string(), "KeepAliveCmd");
        assert_eq!(Command::StandDown.to_string(), "StandDownCmd");
        assert_eq!(Command::PickUpAll.to_bytes().unwrap(), [CL_PICK_UP_ALL]);
    }

    #[test]
    fn nested_commands_are_named_after_their_action() {
        let count = ItemCount::new(1).unwrap();
        assert_eq!(
            Command::from(TradeItemCmd::sell_inventory_item(1, 1, count)).name(),
            "SellInventoryItemCmd"
        );
        assert_eq!(Command::from(CraftingCmd::close(1)).name(), "CloseDialogCraftingCmd");
        assert_eq!(Command::from(SpeechCmd::say("x").unwrap()).name(), "SayCmd");
    }
}
