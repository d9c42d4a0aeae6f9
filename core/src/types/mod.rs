//! Value types carried by client commands. Each one knows its own wire form.

mod character_id;
mod container_slot;
mod coordinate;
mod direction;
mod item_count;
mod item_position;
mod wire_text;

pub use character_id::CharacterId;
pub use container_slot::ContainerSlot;
pub use coordinate::ServerCoordinate;
pub use direction::{Direction, NO_DIRECTION};
pub use item_count::ItemCount;
pub use item_position::ItemPosition;
pub use wire_text::WireText;
