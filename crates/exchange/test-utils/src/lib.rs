//! Test fixtures for exchange protocols.
//!
//! [`ExchangeFixture`] wires two connected parties, a live exchange session
//! and the in-memory registries together. Outbound packets land in each
//! [`TestParty`]'s queue and can be decoded with [`AckPacket`] and
//! [`NotifyPacket`].

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

mod fixture;
mod packets;

pub use bazaar_observability::init_test_tracing;
pub use fixture::{ExchangeFixture, NON_TRADEABLE, TRADEABLE, TestParty};
pub use packets::{AckPacket, NotifyPacket};
