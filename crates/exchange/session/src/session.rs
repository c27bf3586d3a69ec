use bazaar_exchange_primitives::{
    EntityId, ItemRef, ItemUuid, REWARD_REGION, RewardSlot, SESSION_SLOT_COUNT,
};
use tracing::trace;

use crate::SessionError;

/// State of one active two-party exchange.
///
/// Slots `[0, 10)` hold direct trade items, slots `[10, 22)` form the reward
/// grid addressed by [`RewardSlot`]. The session keeps references only; items
/// stay in their owners' containers.
#[derive(Debug, Clone)]
pub struct ExchangeSession {
    source_entity_id: EntityId,
    other_entity_id: EntityId,
    items: [Option<ItemRef>; SESSION_SLOT_COUNT],
}

impl ExchangeSession {
    /// New session between the party that opened it and its counterpart.
    pub fn new(source_entity_id: EntityId, other_entity_id: EntityId) -> Self {
        Self {
            source_entity_id,
            other_entity_id,
            items: std::array::from_fn(|_| None),
        }
    }

    pub fn source_entity_id(&self) -> EntityId {
        self.source_entity_id
    }

    pub fn other_entity_id(&self) -> EntityId {
        self.other_entity_id
    }

    /// The counterpart of `entity`, or `None` if `entity` is not a party.
    pub fn peer_of(&self, entity: EntityId) -> Option<EntityId> {
        if entity == self.source_entity_id {
            Some(self.other_entity_id)
        } else if entity == self.other_entity_id {
            Some(self.source_entity_id)
        } else {
            None
        }
    }

    pub fn items(&self) -> &[Option<ItemRef>] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&ItemRef> {
        self.items.get(index).and_then(Option::as_ref)
    }

    /// Set any slot directly, returning the previous occupant.
    pub fn set_item(
        &mut self,
        index: usize,
        item: Option<ItemRef>,
    ) -> Result<Option<ItemRef>, SessionError> {
        let entry = self
            .items
            .get_mut(index)
            .ok_or(SessionError::SlotOutOfRange(index))?;
        Ok(std::mem::replace(entry, item))
    }

    pub fn reward_item(&self, slot: RewardSlot) -> Option<&ItemRef> {
        self.item(slot.index())
    }

    /// Occupied reward slots in index order.
    pub fn reward_items(&self) -> impl Iterator<Item = (RewardSlot, &ItemRef)> {
        RewardSlot::all()
            .filter_map(move |slot| self.reward_item(slot).map(|item| (slot, item)))
    }

    /// Reward slot currently holding the item with this id, if any.
    pub fn reward_slot_of(&self, item: ItemUuid) -> Option<RewardSlot> {
        self.reward_items()
            .find(|(_, occupant)| occupant.id() == item)
            .map(|(slot, _)| slot)
    }

    /// Place `item` into a reward slot, or clear it with `None`.
    ///
    /// An occupied slot is overwritten; the displaced reference is returned.
    /// Duplicate placement is not checked here.
    pub fn assign_reward(&mut self, slot: RewardSlot, item: Option<ItemRef>) -> Option<ItemRef> {
        let index = slot.index();
        debug_assert!(REWARD_REGION.contains(&index));

        trace!(
            slot = index,
            item = ?item.as_ref().map(|i| i.id()),
            "assigning reward slot"
        );

        self.items
            .get_mut(index)
            .and_then(|entry| std::mem::replace(entry, item))
    }
}
