//! Client side of the game protocol: typed commands, their wire encoding and
//! the tooling around them.

pub mod network;
pub mod script;
pub mod settings;
