use bytes::{BufMut, Bytes, BytesMut};

use crate::ChannelPacketCode;

/// Builds an outbound packet: packet code first, then little-endian fields.
#[derive(Debug, Clone)]
pub struct PacketWriter {
    buf: BytesMut,
}

impl PacketWriter {
    /// Start a packet with the given code.
    pub fn new(code: ChannelPacketCode) -> Self {
        let mut buf = BytesMut::with_capacity(32);
        buf.put_u16_le(code as u16);
        Self { buf }
    }

    pub fn write_i32_le(&mut self, value: i32) -> &mut Self {
        self.buf.put_i32_le(value);
        self
    }

    pub fn write_i64_le(&mut self, value: i64) -> &mut Self {
        self.buf.put_i64_le(value);
        self
    }

    pub fn write_bytes(&mut self, value: &[u8]) -> &mut Self {
        self.buf.put_slice(value);
        self
    }

    /// Length including the packet code.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }
}

#[cfg(test)]
mod tests {
    use crate::PacketReader;

    use super::*;

    #[test]
    fn test_code_is_written_first() {
        let mut writer = PacketWriter::new(ChannelPacketCode::EntrustRewardUpdate);
        writer.write_i64_le(-1).write_i32_le(1).write_i32_le(2);
        assert_eq!(writer.len(), 2 + 8 + 4 + 4);

        let mut reader = PacketReader::new(writer.freeze());
        assert_eq!(
            ChannelPacketCode::from_u16(reader.read_u16_le().unwrap()),
            Some(ChannelPacketCode::EntrustRewardUpdate)
        );
        assert_eq!(reader.read_i64_le().unwrap(), -1);
    }
}
