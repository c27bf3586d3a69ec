use std::sync::Arc;

use crate::{ItemBoxId, ItemType, ItemUuid};

/// A persistent item as seen by the exchange layer.
///
/// The owning inventory holds the item; exchange sessions only keep
/// [`ItemRef`]s to it. Two references denote the same item when their ids
/// match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    id: ItemUuid,
    item_type: ItemType,
    item_box: ItemBoxId,
}

/// Shared, non-owning handle to an [`Item`].
pub type ItemRef = Arc<Item>;

impl Item {
    pub fn new(id: ItemUuid, item_type: ItemType, item_box: ItemBoxId) -> Self {
        Self {
            id,
            item_type,
            item_box,
        }
    }

    pub fn id(&self) -> ItemUuid {
        self.id
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    /// Container the item currently resides in.
    pub fn item_box(&self) -> ItemBoxId {
        self.item_box
    }

    pub fn is_in(&self, item_box: ItemBoxId) -> bool {
        self.item_box == item_box
    }
}
