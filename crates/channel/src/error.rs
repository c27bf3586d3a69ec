use bazaar_exchange_entrust::EntrustError;
use bazaar_net_codec::{ClientPacketCode, CodecError};

/// Errors raised while dispatching a client packet.
///
/// None of them close the connection; the offending frame is dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChannelError {
    #[error("frame too short for a packet code: {0}")]
    Frame(#[from] CodecError),

    #[error("unknown packet code {0:#06x}")]
    UnknownPacketCode(u16),

    #[error("no parser registered for {0}")]
    Unhandled(ClientPacketCode),

    #[error(transparent)]
    Entrust(#[from] EntrustError),

    #[error("inbound buffer must hold at least one frame")]
    ZeroInboundBuffer,
}
