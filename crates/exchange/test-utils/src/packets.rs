use bazaar_net_codec::{ChannelPacketCode, CodecError, PacketReader};
use bytes::Bytes;

/// Decoded entrust reward acknowledgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AckPacket {
    pub object_id: i64,
    pub reward_type: i32,
    pub offset: i32,
    pub status: i32,
}

impl AckPacket {
    pub fn decode(packet: Bytes) -> Result<Self, CodecError> {
        let mut reader = PacketReader::new(packet);
        expect_code(&mut reader, ChannelPacketCode::EntrustRewardUpdate)?;
        let ack = Self {
            object_id: reader.read_i64_le()?,
            reward_type: reader.read_i32_le()?,
            offset: reader.read_i32_le()?,
            status: reader.read_i32_le()?,
        };
        reader.expect_len(0)?;
        Ok(ack)
    }

    pub fn is_success(&self) -> bool {
        self.status == 0
    }
}

/// Decoded entrust reward notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyPacket {
    pub reward_type: i32,
    pub offset: i32,
    pub object_id: i64,
    pub detail: Bytes,
}

impl NotifyPacket {
    pub fn decode(packet: Bytes) -> Result<Self, CodecError> {
        let mut reader = PacketReader::new(packet);
        expect_code(&mut reader, ChannelPacketCode::EntrustRewardUpdated)?;
        Ok(Self {
            reward_type: reader.read_i32_le()?,
            offset: reader.read_i32_le()?,
            object_id: reader.read_i64_le()?,
            detail: reader.into_remaining(),
        })
    }
}

fn expect_code(reader: &mut PacketReader, expected: ChannelPacketCode) -> Result<(), CodecError> {
    let code = reader.read_u16_le()?;
    if code != expected as u16 {
        return Err(CodecError::UnknownPacketCode(code));
    }
    Ok(())
}
