//! Object identity: items by uuid and per-party object id namespaces.

use std::collections::HashMap;

use bazaar_exchange_api::ObjectIdentity;
use bazaar_exchange_primitives::{EntityId, Item, ItemRef, ItemUuid, ObjectId};
use parking_lot::RwLock;

/// Bidirectional ObjectId ↔ ItemUuid mapping for one party.
///
/// Ids are allocated sequentially from 1 the first time the party sees an
/// item and stay stable until the item is removed.
#[derive(Debug)]
pub struct ObjectIdTable {
    next_id: i64,
    by_object: HashMap<ObjectId, ItemUuid>,
    by_item: HashMap<ItemUuid, ObjectId>,
}

impl Default for ObjectIdTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectIdTable {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            by_object: HashMap::new(),
            by_item: HashMap::new(),
        }
    }

    /// Object id for `item`, allocating one on first sight.
    pub fn object_id(&mut self, item: ItemUuid) -> ObjectId {
        if let Some(id) = self.by_item.get(&item) {
            return *id;
        }

        let id = ObjectId::new(self.next_id);
        self.next_id += 1;
        self.by_item.insert(item, id);
        self.by_object.insert(id, item);
        id
    }

    pub fn get_object_id(&self, item: &ItemUuid) -> Option<ObjectId> {
        self.by_item.get(item).copied()
    }

    pub fn resolve(&self, object_id: ObjectId) -> Option<ItemUuid> {
        self.by_object.get(&object_id).copied()
    }

    pub fn remove_item(&mut self, item: &ItemUuid) -> Option<ObjectId> {
        let id = self.by_item.remove(item)?;
        self.by_object.remove(&id);
        Some(id)
    }

    pub fn len(&self) -> usize {
        self.by_item.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Live items plus one [`ObjectIdTable`] per party.
///
/// Lock order is `parties` then `items`; neither lock is held while the other
/// is acquired on the read paths.
#[derive(Debug, Default)]
pub struct ObjectRegistry {
    items: RwLock<HashMap<ItemUuid, ItemRef>>,
    parties: RwLock<HashMap<EntityId, ObjectIdTable>>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make an item resolvable. Replaces any item with the same id.
    pub fn insert_item(&self, item: Item) -> ItemRef {
        let item = ItemRef::new(item);
        self.items.write().insert(item.id(), ItemRef::clone(&item));
        item
    }

    pub fn item(&self, id: &ItemUuid) -> Option<ItemRef> {
        self.items.read().get(id).cloned()
    }

    /// Forget an item and its object id in every namespace.
    pub fn remove_item(&self, id: &ItemUuid) -> Option<ItemRef> {
        for table in self.parties.write().values_mut() {
            table.remove_item(id);
        }
        self.items.write().remove(id)
    }

    /// Object id of `item` for `party`, allocating on first sight.
    pub fn object_id(&self, party: EntityId, item: ItemUuid) -> ObjectId {
        self.parties
            .write()
            .entry(party)
            .or_default()
            .object_id(item)
    }

    pub fn item_count(&self) -> usize {
        self.items.read().len()
    }
}

impl ObjectIdentity for ObjectRegistry {
    fn resolve(&self, party: EntityId, object_id: ObjectId) -> Option<ItemRef> {
        let object_id = object_id.into_option()?;
        let uuid = self.parties.read().get(&party)?.resolve(object_id)?;
        self.item(&uuid)
    }

    fn translate(&self, item: &Item, party: EntityId) -> ObjectId {
        self.object_id(party, item.id())
    }
}
