use bytes::{Buf, Bytes};

use crate::CodecError;

/// Little-endian reader over an inbound packet body.
///
/// Every read is bounds-checked; a short payload yields
/// [`CodecError::UnexpectedEof`] instead of panicking.
#[derive(Debug, Clone)]
pub struct PacketReader {
    buf: Bytes,
}

impl PacketReader {
    pub fn new(buf: impl Into<Bytes>) -> Self {
        Self { buf: buf.into() }
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    /// Fail unless exactly `expected` bytes remain.
    pub fn expect_len(&self, expected: usize) -> Result<(), CodecError> {
        let actual = self.remaining();
        if actual != expected {
            return Err(CodecError::InvalidLength { expected, actual });
        }
        Ok(())
    }

    pub fn read_u16_le(&mut self) -> Result<u16, CodecError> {
        self.ensure(2)?;
        Ok(self.buf.get_u16_le())
    }

    pub fn read_i32_le(&mut self) -> Result<i32, CodecError> {
        self.ensure(4)?;
        Ok(self.buf.get_i32_le())
    }

    pub fn read_i64_le(&mut self) -> Result<i64, CodecError> {
        self.ensure(8)?;
        Ok(self.buf.get_i64_le())
    }

    /// Remaining bytes, consuming the reader.
    pub fn into_remaining(self) -> Bytes {
        self.buf
    }

    fn ensure(&self, needed: usize) -> Result<(), CodecError> {
        let remaining = self.remaining();
        if remaining < needed {
            return Err(CodecError::UnexpectedEof { needed, remaining });
        }
        Ok(())
    }
}
