/// Errors raised while reading a packet body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Fixed-size body with the wrong length.
    #[error("invalid payload length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Read past the end of the payload.
    #[error("unexpected end of payload: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    /// Packet code not known to this server.
    #[error("unknown packet code {0:#06x}")]
    UnknownPacketCode(u16),
}
