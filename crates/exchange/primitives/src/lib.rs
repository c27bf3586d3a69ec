//! Core primitive types for two-party item exchanges.
//!
//! Identifiers, the shared item reference and the reward-region slot grid are
//! kept here so that the session, codec-facing and service crates agree on
//! them without depending on each other.

mod ids;
mod item;
mod slot;

pub use ids::{AccountId, EntityId, ItemBoxId, ItemType, ItemUuid, ObjectId};
pub use item::{Item, ItemRef};
pub use slot::{
    REWARD_OFFSET_COUNT, REWARD_REGION, REWARD_REGION_END, REWARD_REGION_START, REWARD_TYPE_COUNT,
    RewardSlot, SESSION_SLOT_COUNT, SlotError, TRADE_SLOT_COUNT,
};
