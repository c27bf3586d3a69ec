//! In-memory implementations of the exchange collaborator traits.
//!
//! - [`ObjectRegistry`] - Persistent item lookup plus per-party [`ObjectIdTable`]s
//! - [`PartyRegistry`] - Entity id to [`PartyHandle`](bazaar_exchange_api::PartyHandle)
//! - [`StaticItemCatalog`] - Item definitions loaded from TOML
//! - [`PlainItemDetailFormatter`] - Fixed-size item detail block

mod catalog;
mod detail;
mod object;
mod party;

pub use catalog::{CatalogError, ItemDefinition, ItemFlags, StaticItemCatalog};
pub use detail::{ITEM_DETAIL_LEN, PlainItemDetailFormatter};
pub use object::{ObjectIdTable, ObjectRegistry};
pub use party::{PartyRegistry, RegisterResult};
