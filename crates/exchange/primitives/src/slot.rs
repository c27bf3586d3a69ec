//! Exchange slot layout.
//!
//! ```text
//! index   0 ..  9   direct trade items
//! index  10 .. 21   reward region: 3 reward types x 4 offsets
//! slot = 10 + reward_type * 4 + offset
//! ```

use std::ops::Range;

/// Slots reserved for direct trade items.
pub const TRADE_SLOT_COUNT: usize = 10;

/// Number of reward types (rows of the reward grid).
pub const REWARD_TYPE_COUNT: usize = 3;

/// Number of offsets per reward type (columns of the reward grid).
pub const REWARD_OFFSET_COUNT: usize = 4;

/// First slot of the reward region.
pub const REWARD_REGION_START: usize = TRADE_SLOT_COUNT;

/// One past the last slot of the reward region.
pub const REWARD_REGION_END: usize = REWARD_REGION_START + REWARD_TYPE_COUNT * REWARD_OFFSET_COUNT;

/// The reward region as an index range.
pub const REWARD_REGION: Range<usize> = REWARD_REGION_START..REWARD_REGION_END;

/// Total number of item slots in an exchange session.
pub const SESSION_SLOT_COUNT: usize = REWARD_REGION_END;

/// Rejected `(reward_type, offset)` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    #[error("reward type {0} outside [0, {max})", max = REWARD_TYPE_COUNT)]
    RewardTypeOutOfRange(i32),
    #[error("reward offset {0} outside [0, {max})", max = REWARD_OFFSET_COUNT)]
    OffsetOutOfRange(i32),
}

/// A validated position in the reward grid.
///
/// Only constructible from in-range coordinates, so [`RewardSlot::index`]
/// always lands inside [`REWARD_REGION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RewardSlot {
    reward_type: u8,
    offset: u8,
}

impl RewardSlot {
    /// Validate wire coordinates. Out-of-range values are rejected, never clamped.
    pub fn new(reward_type: i32, offset: i32) -> Result<Self, SlotError> {
        let reward_type = u8::try_from(reward_type)
            .ok()
            .filter(|t| usize::from(*t) < REWARD_TYPE_COUNT)
            .ok_or(SlotError::RewardTypeOutOfRange(reward_type))?;
        let offset = u8::try_from(offset)
            .ok()
            .filter(|o| usize::from(*o) < REWARD_OFFSET_COUNT)
            .ok_or(SlotError::OffsetOutOfRange(offset))?;

        Ok(Self {
            reward_type,
            offset,
        })
    }

    /// Inverse of [`RewardSlot::index`]. `None` outside the reward region.
    pub fn from_index(index: usize) -> Option<Self> {
        if !REWARD_REGION.contains(&index) {
            return None;
        }
        let relative = index - REWARD_REGION_START;
        Some(Self {
            reward_type: (relative / REWARD_OFFSET_COUNT) as u8,
            offset: (relative % REWARD_OFFSET_COUNT) as u8,
        })
    }

    /// Absolute index into the session's item slots.
    pub const fn index(self) -> usize {
        REWARD_REGION_START + self.reward_type as usize * REWARD_OFFSET_COUNT + self.offset as usize
    }

    pub const fn reward_type(self) -> i32 {
        self.reward_type as i32
    }

    pub const fn offset(self) -> i32 {
        self.offset as i32
    }

    /// Every slot of the reward region, in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        REWARD_REGION.filter_map(Self::from_index)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_region_bounds() {
        assert_eq!(REWARD_REGION, 10..22);
        assert_eq!(SESSION_SLOT_COUNT, 22);
        assert_eq!(RewardSlot::all().count(), 12);
    }

    #[test]
    fn test_known_indices() {
        assert_eq!(RewardSlot::new(0, 0).unwrap().index(), 10);
        assert_eq!(RewardSlot::new(1, 0).unwrap().index(), 14);
        assert_eq!(RewardSlot::new(1, 2).unwrap().index(), 16);
        assert_eq!(RewardSlot::new(1, 3).unwrap().index(), 17);
        assert_eq!(RewardSlot::new(2, 3).unwrap().index(), 21);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            RewardSlot::new(3, 0),
            Err(SlotError::RewardTypeOutOfRange(3))
        );
        assert_eq!(
            RewardSlot::new(-1, 0),
            Err(SlotError::RewardTypeOutOfRange(-1))
        );
        assert_eq!(RewardSlot::new(0, 4), Err(SlotError::OffsetOutOfRange(4)));
        assert_eq!(RewardSlot::new(0, -1), Err(SlotError::OffsetOutOfRange(-1)));
        // (0, 12) would alias slot 22 / (2, 4) slot 22 without the offset check
        assert!(RewardSlot::new(0, 12).is_err());
        assert!(RewardSlot::new(i32::MAX, i32::MIN).is_err());
    }

    #[test]
    fn test_from_index_outside_region() {
        assert_eq!(RewardSlot::from_index(9), None);
        assert_eq!(RewardSlot::from_index(22), None);
    }

    proptest! {
        #[test]
        fn prop_valid_coordinates_stay_in_region(reward_type in any::<i32>(), offset in any::<i32>()) {
            match RewardSlot::new(reward_type, offset) {
                Ok(slot) => {
                    prop_assert!(REWARD_REGION.contains(&slot.index()));
                    prop_assert_eq!(slot.reward_type(), reward_type);
                    prop_assert_eq!(slot.offset(), offset);
                    prop_assert_eq!(RewardSlot::from_index(slot.index()), Some(slot));
                }
                Err(_) => {
                    prop_assert!(
                        !(0..REWARD_TYPE_COUNT as i32).contains(&reward_type)
                            || !(0..REWARD_OFFSET_COUNT as i32).contains(&offset)
                    );
                }
            }
        }
    }
}
