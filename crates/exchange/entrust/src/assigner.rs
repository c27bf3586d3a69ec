use bazaar_exchange_primitives::{ItemRef, RewardSlot, SlotError};
use bazaar_exchange_session::ExchangeSession;
use tracing::debug;

/// Maps `(reward_type, offset)` onto the reward region and performs the
/// single session mutation of an accepted update.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotAssigner;

impl SlotAssigner {
    /// `10 + reward_type * 4 + offset`, or an error for coordinates outside
    /// the 3 x 4 grid.
    pub fn slot_index(reward_type: i32, offset: i32) -> Result<usize, SlotError> {
        RewardSlot::new(reward_type, offset).map(RewardSlot::index)
    }

    /// Set or clear the slot, returning the previous occupant.
    ///
    /// An occupied slot is overwritten. Re-assigning the same item is a no-op.
    pub fn assign(
        session: &mut ExchangeSession,
        slot: RewardSlot,
        item: Option<ItemRef>,
    ) -> Option<ItemRef> {
        let incoming = item.as_ref().map(|item| item.id());
        let displaced = session.assign_reward(slot, item);

        if let Some(previous) = displaced.as_ref().filter(|d| Some(d.id()) != incoming) {
            debug!(
                slot = slot.index(),
                displaced = %previous.id(),
                item_type = %previous.item_type(),
                "Entrust: reward slot overwritten"
            );
        }

        displaced
    }
}
