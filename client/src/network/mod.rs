//! Outbound half of the client protocol: the command catalog and the queue
//! that frames commands for the socket.

pub mod client_commands;
mod outbound;

pub use client_commands::Command;
pub use outbound::OutboundQueue;
