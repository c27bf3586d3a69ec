use auto_impl::auto_impl;
use bazaar_exchange_primitives::{EntityId, Item, ItemRef, ItemType, ObjectId};
use bytes::Bytes;

use crate::PartyHandle;

/// Item definition lookup.
#[auto_impl(&, Arc, Box)]
pub trait ItemCatalog: Send + Sync {
    /// Whether items of this type may change hands. Unknown types are not tradeable.
    fn is_tradeable(&self, item_type: ItemType) -> bool;
}

/// Translation between items and party-local object ids.
#[auto_impl(&, Arc, Box)]
pub trait ObjectIdentity: Send + Sync {
    /// Item addressed by `object_id` in `party`'s namespace.
    fn resolve(&self, party: EntityId, object_id: ObjectId) -> Option<ItemRef>;

    /// Object id of `item` in `party`'s namespace, allocating one if the
    /// party has never seen the item. Never returns [`ObjectId::NONE`].
    fn translate(&self, item: &Item, party: EntityId) -> ObjectId;
}

/// Live connections by entity id.
#[auto_impl(&, Arc, Box)]
pub trait SessionRegistry: Send + Sync {
    fn resolve_party(&self, entity: EntityId) -> Option<PartyHandle>;
}

/// Produces the item detail block appended to reward notifications.
#[auto_impl(&, Arc, Box)]
pub trait ItemDetailFormatter: Send + Sync {
    /// Detail block for `item`, or the empty-slot block for `None`.
    fn format(&self, item: Option<&Item>) -> Bytes;
}

/// Entrust protocol configuration.
#[auto_impl(&, Arc, Box)]
pub trait EntrustConfig: Send + Sync {
    /// Emit trade audit entries for rejected reward updates.
    fn audit_trade_errors(&self) -> bool;
}

/// Default entrust configuration: audit entries enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEntrustConfig;

impl EntrustConfig for DefaultEntrustConfig {
    fn audit_trade_errors(&self) -> bool {
        true
    }
}
