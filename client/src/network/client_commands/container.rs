use std::fmt;
use std::io;

use realm_core::types::{ContainerSlot, Direction, ItemPosition, ServerCoordinate};
use realm_core::{CommandError, PacketWriter};

/// `CL_OPEN_ON_MAP`: open the container lying on or next to the player.
///
/// The server only accepts a direction relative to the player, so the
/// constructor takes the player's position as it is at the moment the
/// command is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenOnMapCmd {
    direction: Option<Direction>,
}

impl OpenOnMapCmd {
    pub const PAYLOAD_LEN: usize = 1;

    pub fn new(player: &ServerCoordinate, target: &ServerCoordinate) -> Result<Self, CommandError> {
        let direction = player.direction_to(target)?;
        log::debug!(
            "Building open-on-map command: player={}, target={}, direction={:?}",
            player,
            target,
            direction
        );
        Ok(Self { direction })
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        Direction::encode_optional(self.direction, writer)
    }
}

impl fmt::Display for OpenOnMapCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Some(direction) => write!(f, "OpenOnMapCmd(direction={direction})"),
            None => f.write_str("OpenOnMapCmd(direction=none)"),
        }
    }
}

/// `CL_OPEN_IN_CONTAINER`: open a bag that sits inside another container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenInContainerCmd {
    slot: ContainerSlot,
}

impl OpenInContainerCmd {
    pub const PAYLOAD_LEN: usize = 3;

    pub fn new(slot: ContainerSlot) -> Self {
        log::debug!("Building open-in-container command: {}", slot);
        Self { slot }
    }

    pub fn slot(&self) -> ContainerSlot {
        self.slot
    }

    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.slot.encode(writer)
    }
}

impl fmt::Display for OpenInContainerCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpenInContainerCmd(slot={})", self.slot)
    }
}

/// `CL_CLOSE_CONTAINER`: close an open showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseContainerCmd {
    container_id: u8,
}

impl CloseContainerCmd {
    pub const PAYLOAD_LEN: usize = 1;

    pub fn new(container_id: u8) -> Self {
        log::debug!("Building close-container command: container_id={}", container_id);
        Self { container_id }
    }

    pub fn container_id(&self) -> u8 {
        self.container_id
    }

    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_ubyte(self.container_id)
    }
}

impl fmt::Display for CloseContainerCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CloseContainerCmd(container_id={})", self.container_id)
    }
}

/// `CL_PICK_UP`: pick up the top item of a map tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickUpCmd {
    coordinate: ServerCoordinate,
}

impl PickUpCmd {
    pub const PAYLOAD_LEN: usize = 6;

    pub fn new(coordinate: ServerCoordinate) -> Self {
        log::debug!("Building pick-up command: coordinate={}", coordinate);
        Self { coordinate }
    }

    pub fn coordinate(&self) -> ServerCoordinate {
        self.coordinate
    }

    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.coordinate.encode(writer)
    }
}

impl fmt::Display for PickUpCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PickUpCmd(coordinate={})", self.coordinate)
    }
}

/// `CL_USE`: use the item at `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseCmd {
    target: ItemPosition,
}

impl UseCmd {
    pub fn new(target: ItemPosition) -> Self {
        log::debug!("Building use command: target={}", target);
        Self { target }
    }

    pub fn target(&self) -> ItemPosition {
        self.target
    }

    pub fn payload_len(&self) -> usize {
        1 + self.target.encoded_len()
    }

    /// `[target kind u8][target fields]`
    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_ubyte(self.target.use_target_kind())?;
        self.target.encode(writer)
    }
}

impl fmt::Display for UseCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UseCmd(target={})", self.target)
    }
}
