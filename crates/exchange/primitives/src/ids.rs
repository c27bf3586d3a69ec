//! Identifier newtypes.

use derive_more::{Display, From, Into};
use uuid::Uuid;

/// Entity id of a connected character, unique per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(i32);

impl EntityId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

/// Account that owns a character. Named in audit entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccountId(Uuid);

impl AccountId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Persistent identity of an item, the same for every party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemUuid(Uuid);

impl ItemUuid {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

/// Persistent identity of an item container (inventory, storage, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemBoxId(Uuid);

impl ItemBoxId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

/// Item definition key used for catalog lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemType(u32);

impl ItemType {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Party-local numeric handle for an item.
///
/// The same item has a different object id in each party's namespace; `-1`
/// on the wire means "no item".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectId(i64);

impl ObjectId {
    /// Wire sentinel for "no item".
    pub const NONE: Self = Self(-1);

    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    /// `None` for the sentinel, the id otherwise.
    pub const fn into_option(self) -> Option<Self> {
        if self.is_none() { None } else { Some(self) }
    }
}
