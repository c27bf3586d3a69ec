//! Packet codes.

/// Codes sent by the client to the channel server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::FromRepr)]
#[repr(u16)]
pub enum ClientPacketCode {
    /// Place or clear an item in an entrust reward slot.
    EntrustRewardUpdate = 0x0180,
}

/// Codes sent by the channel server to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::FromRepr)]
#[repr(u16)]
pub enum ChannelPacketCode {
    /// Acknowledgement of a reward slot update, sent to the requester.
    EntrustRewardUpdate = 0x0181,
    /// Reward slot changed by the other party.
    EntrustRewardUpdated = 0x0182,
}

impl ClientPacketCode {
    pub fn from_u16(code: u16) -> Option<Self> {
        Self::from_repr(code)
    }
}

impl ChannelPacketCode {
    pub fn from_u16(code: u16) -> Option<Self> {
        Self::from_repr(code)
    }
}
