//! Static item catalog.
//!
//! Definitions are loaded from TOML:
//!
//! ```toml
//! [[item]]
//! type = 1101
//! name = "Silver Ring"
//! flags = 1 # ItemFlags::TRADE
//! ```

use std::collections::HashMap;

use bazaar_exchange_api::ItemCatalog;
use bazaar_exchange_primitives::ItemType;
use serde::{Deserialize, Serialize};

/// Item definition flag bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemFlags(u16);

impl ItemFlags {
    pub const NONE: Self = Self(0);
    /// Item may change hands through trades and entrust rewards.
    pub const TRADE: Self = Self(0x0001);

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for ItemFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub flags: ItemFlags,
}

impl ItemDefinition {
    pub fn new(item_type: ItemType, name: impl Into<String>, flags: ItemFlags) -> Self {
        Self {
            item_type,
            name: name.into(),
            flags,
        }
    }
}

/// Errors loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate definition for item type {0}")]
    DuplicateType(ItemType),

    #[error("item type {0} does not fit the wire's i32 item type")]
    TypeOutOfRange(ItemType),
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "item")]
    items: Vec<ItemDefinition>,
}

/// Immutable set of item definitions.
#[derive(Debug, Clone, Default)]
pub struct StaticItemCatalog {
    definitions: HashMap<ItemType, ItemDefinition>,
}

impl StaticItemCatalog {
    pub fn new(definitions: impl IntoIterator<Item = ItemDefinition>) -> Result<Self, CatalogError> {
        let mut map = HashMap::new();
        for definition in definitions {
            let item_type = definition.item_type;
            if i32::try_from(item_type.get()).is_err() {
                return Err(CatalogError::TypeOutOfRange(item_type));
            }
            if map.insert(item_type, definition).is_some() {
                return Err(CatalogError::DuplicateType(item_type));
            }
        }
        Ok(Self { definitions: map })
    }

    pub fn from_toml_str(input: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(input)?;
        Self::new(file.items)
    }

    pub fn definition(&self, item_type: ItemType) -> Option<&ItemDefinition> {
        self.definitions.get(&item_type)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl ItemCatalog for StaticItemCatalog {
    fn is_tradeable(&self, item_type: ItemType) -> bool {
        self.definition(item_type)
            .is_some_and(|definition| definition.flags.contains(ItemFlags::TRADE))
    }
}
