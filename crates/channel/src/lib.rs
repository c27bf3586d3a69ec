//! Channel server connection handling.
//!
//! Each connected party runs its own task ([`spawn_connection`]) that drains
//! inbound frames, keeps the party's [`ClientState`] and routes packets by
//! code through a shared [`PacketRouter`]. The two parties of one exchange
//! therefore race on the shared session from independent tasks.

pub mod args;
mod connection;
mod error;
mod router;
mod state;

pub use args::ChannelArgs;
pub use connection::{ConnectionHandle, Inbound, spawn_connection};
pub use error::ChannelError;
pub use router::{EntrustRewardUpdateParser, PacketParser, PacketRouter, split_frame};
pub use state::ClientState;
