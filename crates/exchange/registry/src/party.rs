//! Registry of connected parties.

use std::collections::HashMap;

use bazaar_exchange_api::{PartyHandle, SessionRegistry};
use bazaar_exchange_primitives::EntityId;
use parking_lot::RwLock;
use tracing::debug;

/// Result of a party registration.
#[derive(Debug, Clone)]
pub enum RegisterResult {
    New,
    /// A previous connection for the same entity was displaced.
    Replaced { old: PartyHandle },
}

/// Entity id → party handle (RwLock-protected).
#[derive(Debug, Default)]
pub struct PartyRegistry {
    parties: RwLock<HashMap<EntityId, PartyHandle>>,
}

impl PartyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, party: PartyHandle) -> RegisterResult {
        let entity = party.entity_id();
        match self.parties.write().insert(entity, party) {
            Some(old) => {
                debug!(%entity, "party connection replaced");
                RegisterResult::Replaced { old }
            }
            None => RegisterResult::New,
        }
    }

    pub fn unregister(&self, entity: &EntityId) -> Option<PartyHandle> {
        self.parties.write().remove(entity)
    }

    pub fn contains(&self, entity: &EntityId) -> bool {
        self.parties.read().contains_key(entity)
    }

    pub fn len(&self) -> usize {
        self.parties.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionRegistry for PartyRegistry {
    /// Registered and still connected.
    fn resolve_party(&self, entity: EntityId) -> Option<PartyHandle> {
        self.parties
            .read()
            .get(&entity)
            .filter(|party| party.is_connected())
            .cloned()
    }
}
