//! Acceptance rules for reward updates.
//!
//! Rules are applied in order and the first failure is terminal:
//!
//! 1. a referenced item resolves and its type is tradeable
//! 2. a referenced item sits in the requester's own inventory
//! 3. `(reward_type, offset)` addresses the reward region
//! 4. the exchange peer resolves to a live party
//! 5. a referenced item does not already occupy a reward slot
//!
//! A clear request (`object_id == -1`) skips the item rules.

use std::sync::Arc;

use bazaar_exchange_api::{ItemCatalog, ObjectIdentity, PartyHandle, SessionRegistry};
use bazaar_exchange_primitives::{EntityId, Item, ItemRef, ObjectId, RewardSlot};
use bazaar_exchange_session::{ExchangeSession, SessionHandle};

use crate::{Rejection, Requester, RewardUpdateRequest};

/// A request that passed the lock-free rules.
#[derive(Debug, Clone)]
pub struct PreparedUpdate {
    pub slot: RewardSlot,
    /// `None` clears the slot.
    pub item: Option<ItemRef>,
}

/// Enforces slot range, tradeability, ownership, peer and duplicate rules.
#[derive(Clone)]
pub struct RewardUpdateValidator {
    catalog: Arc<dyn ItemCatalog>,
    identity: Arc<dyn ObjectIdentity>,
    registry: Arc<dyn SessionRegistry>,
}

impl RewardUpdateValidator {
    pub fn new(
        catalog: Arc<dyn ItemCatalog>,
        identity: Arc<dyn ObjectIdentity>,
        registry: Arc<dyn SessionRegistry>,
    ) -> Self {
        Self {
            catalog,
            identity,
            registry,
        }
    }

    /// Item, ownership and slot rules. Touches no session state.
    pub fn prepare(
        &self,
        requester: &Requester,
        request: &RewardUpdateRequest,
    ) -> Result<PreparedUpdate, Rejection> {
        let item = match request.object_id.into_option() {
            Some(object_id) => Some(self.owned_tradeable(requester, object_id)?),
            None => None,
        };
        let slot = RewardSlot::new(request.reward_type, request.offset)?;

        Ok(PreparedUpdate { slot, item })
    }

    fn owned_tradeable(
        &self,
        requester: &Requester,
        object_id: ObjectId,
    ) -> Result<ItemRef, Rejection> {
        let item = self
            .identity
            .resolve(requester.entity_id(), object_id)
            .ok_or(Rejection::UnknownItem(object_id))?;

        if !self.catalog.is_tradeable(item.item_type()) {
            return Err(Rejection::NotTradeable(item.item_type()));
        }

        if !item.is_in(requester.inventory) {
            return Err(Rejection::NotOwned);
        }

        Ok(item)
    }

    /// The requester's exchange session and its counterpart as a live party.
    pub fn resolve_peer<'r>(
        &self,
        requester: &'r Requester,
    ) -> Result<(&'r SessionHandle, PartyHandle), Rejection> {
        let session = requester
            .exchange
            .as_ref()
            .ok_or(Rejection::PeerUnavailable)?;
        let peer = peer_of(session, requester)?;

        let party = self
            .registry
            .resolve_party(peer)
            .ok_or(Rejection::PeerUnavailable)?;
        Ok((session, party))
    }

    /// Duplicate placement rule. Must run under the same session guard as the
    /// assignment that follows it.
    pub fn check_unplaced(session: &ExchangeSession, item: Option<&Item>) -> Result<(), Rejection> {
        match item.and_then(|item| session.reward_slot_of(item.id())) {
            Some(existing) => Err(Rejection::DuplicatePlacement(existing)),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for RewardUpdateValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewardUpdateValidator").finish_non_exhaustive()
    }
}

fn peer_of(session: &SessionHandle, requester: &Requester) -> Result<EntityId, Rejection> {
    session
        .lock()
        .peer_of(requester.entity_id())
        .ok_or(Rejection::PeerUnavailable)
}
