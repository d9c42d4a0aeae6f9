//! Typed, ordered writes into an outbound byte stream.
//!
//! Every multi-byte value is big-endian. The server reads fields back in the
//! exact order they were written, so each call appends directly after the
//! previous one and nothing is buffered or reordered here.

use std::io::{self, Write};

use crate::string_operations::fits_wire_string;
use crate::types::ServerCoordinate;

/// Sink for protocol primitives.
///
/// Implemented for every [`std::io::Write`], which makes a `Vec<u8>` frame
/// buffer and a socket equally valid targets. Errors from the underlying
/// writer are returned as-is.
pub trait PacketWriter {
    /// Appends raw bytes. Every other method is expressed through this one.
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()>;

    fn write_byte(&mut self, value: i8) -> io::Result<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    fn write_ubyte(&mut self, value: u8) -> io::Result<()> {
        self.write_bytes(&[value])
    }

    fn write_short(&mut self, value: i16) -> io::Result<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    fn write_ushort(&mut self, value: u16) -> io::Result<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    fn write_int(&mut self, value: i32) -> io::Result<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    fn write_uint(&mut self, value: u32) -> io::Result<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    /// `u16` byte length, then the UTF-8 bytes.
    fn write_string(&mut self, text: &str) -> io::Result<()> {
        if !fits_wire_string(text) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("string of {} bytes exceeds the u16 length prefix", text.len()),
            ));
        }
        self.write_ushort(text.len() as u16)?;
        self.write_bytes(text.as_bytes())
    }

    /// Three consecutive `i16` fields: x, y, z.
    fn write_location(&mut self, coordinate: &ServerCoordinate) -> io::Result<()> {
        self.write_short(coordinate.x())?;
        self.write_short(coordinate.y())?;
        self.write_short(coordinate.z())
    }
}

impl<W: Write + ?Sized> PacketWriter for W {
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.write_all(bytes)
    }
}

/// Forwards writes to another [`PacketWriter`] and counts the bytes that went
/// through. Framing uses it to check payload lengths.
pub struct CountingWriter<'a, W: PacketWriter + ?Sized> {
    inner: &'a mut W,
    written: usize,
}

impl<'a, W: PacketWriter + ?Sized> CountingWriter<'a, W> {
    pub fn new(inner: &'a mut W) -> Self {
        CountingWriter { inner, written: 0 }
    }

    pub fn written(&self) -> usize {
        self.written
    }
}

impl<W: PacketWriter + ?Sized> Write for CountingWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write_bytes(buf)?;
        self.written += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_bytes_signed_and_unsigned() {
        let mut out = Vec::new();
        out.write_byte(-1).unwrap();
        out.write_byte(127).unwrap();
        out.write_ubyte(200).unwrap();
        assert_eq!(out, [0xFF, 0x7F, 0xC8]);
    }

    #[test]
    fn test_write_short_big_endian() {
        let mut out = Vec::new();
        out.write_short(-2).unwrap();
        out.write_ushort(0x0201).unwrap();
        assert_eq!(out, [0xFF, 0xFE, 0x02, 0x01]);
    }

    #[test]
    fn test_write_int_big_endian() {
        let mut out = Vec::new();
        out.write_int(10).unwrap();
        out.write_uint(0x0403_0201).unwrap();
        out.write_int(i32::MIN).unwrap();
        assert_eq!(
            out,
            [0, 0, 0, 10, 0x04, 0x03, 0x02, 0x01, 0x80, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_write_string_length_prefixed() {
        let mut out = Vec::new();
        out.write_string("Hero").unwrap();
        out.write_string("").unwrap();
        assert_eq!(out, [0x00, 0x04, b'H', b'e', b'r', b'o', 0x00, 0x00]);
    }

    #[test]
    fn test_write_string_rejects_oversized_text_without_writing() {
        let mut out = Vec::new();
        let text = "x".repeat(u16::MAX as usize + 1);
        let err = out.write_string(&text).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_location_order() {
        let mut out = Vec::new();
        out.write_location(&ServerCoordinate::new(0x0102, 0x0304, -1))
            .unwrap();
        assert_eq!(out, [0x01, 0x02, 0x03, 0x04, 0xFF, 0xFF]);
    }

    #[test]
    fn test_mixed_writes_keep_call_order() {
        let mut out = Vec::new();
        out.write_ubyte(0x42).unwrap();
        out.write_ushort(0x1234).unwrap();
        out.write_string("a").unwrap();
        out.write_int(-1).unwrap();
        assert_eq!(
            out,
            [0x42, 0x12, 0x34, 0x00, 0x01, b'a', 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_io_errors_propagate() {
        let mut sink = FailingSink;
        let err = sink.write_uint(7).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_counting_writer_tracks_forwarded_bytes() {
        let mut out = Vec::new();
        let mut counted = CountingWriter::new(&mut out);
        counted.write_ubyte(1).unwrap();
        counted.write_string("ab").unwrap();
        assert_eq!(counted.written(), 5);
        assert_eq!(out, [0x01, 0x00, 0x02, b'a', b'b']);
    }
}
