//! Interfaces between exchange protocols and the rest of the channel server.
//!
//! Exchange handlers never own items, catalogs or connections. They reach
//! them through the traits defined here:
//!
//! - [`ItemCatalog`] - Item definition flags (tradeability)
//! - [`ObjectIdentity`] - Per-party object id namespaces
//! - [`SessionRegistry`] - Entity id to live [`PartyHandle`]
//! - [`ItemDetailFormatter`] - Opaque item detail block for notifications
//! - [`EntrustConfig`] - Runtime knobs for the entrust protocol

mod party;
mod traits;

pub use party::{PartyGone, PartyHandle};
pub use traits::{
    DefaultEntrustConfig, EntrustConfig, ItemCatalog, ItemDetailFormatter, ObjectIdentity,
    SessionRegistry,
};
