//! Packet encoding primitives for the channel protocol.
//!
//! Channel packets are a little-endian `u16` packet code followed by a
//! fixed-layout body. Framing (length prefixes, encryption) belongs to the
//! transport and is not handled here.
//!
//! # Components
//!
//! - [`PacketWriter`] - Builds an outbound packet: code, then body fields
//! - [`PacketReader`] - Bounds-checked reads over an inbound payload
//! - [`ClientPacketCode`] / [`ChannelPacketCode`] - Known packet codes per direction

mod code;
mod error;
mod reader;
mod writer;

pub use code::{ChannelPacketCode, ClientPacketCode};
pub use error::CodecError;
pub use reader::PacketReader;
pub use writer::PacketWriter;
