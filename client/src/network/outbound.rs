use std::io::{self, Write};

use super::client_commands::Command;

/// Frames waiting to be written to the server connection.
///
/// Commands are framed as soon as they are pushed, so the queue only holds
/// bytes. Frames are flushed in the order they were pushed.
#[derive(Debug, Default)]
pub struct OutboundQueue {
    buffer: Vec<u8>,
    frames: usize,
}

impl OutboundQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one frame. On error the buffer is left exactly as it was.
    pub fn push(&mut self, command: &Command) -> io::Result<()> {
        let start = self.buffer.len();
        if let Err(e) = command.encode_frame(&mut self.buffer) {
            self.buffer.truncate(start);
            return Err(e);
        }
        self.frames += 1;

        log::trace!(
            "Queued {} ({} bytes, {} frames pending)",
            command,
            self.buffer.len() - start,
            self.frames
        );
        Ok(())
    }

    pub fn pending_bytes(&self) -> usize {
        self.buffer.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Queued bytes, in wire order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Writes every queued frame to `sink` and returns the byte count.
    ///
    /// The queue is only cleared once the whole buffer was accepted and the
    /// sink flushed; after an error everything stays queued.
    pub fn flush_to<W: Write + ?Sized>(&mut self, sink: &mut W) -> io::Result<usize> {
        if self.buffer.is_empty() {
            return Ok(0);
        }

        sink.write_all(&self.buffer)?;
        sink.flush()?;

        let written = self.buffer.len();
        log::debug!("Flushed {} frames ({} bytes)", self.frames, written);
        self.buffer.clear();
        self.frames = 0;
        Ok(written)
    }
}
