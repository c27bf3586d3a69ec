//! Request handling: validate, assign, respond.

use std::sync::Arc;

use bazaar_exchange_api::{
    EntrustConfig, ItemCatalog, ItemDetailFormatter, ObjectIdentity, PartyHandle, SessionRegistry,
};
use bazaar_exchange_primitives::{AccountId, EntityId, ItemBoxId, ItemRef, RewardSlot};
use bazaar_exchange_session::SessionHandle;
use bytes::Bytes;
use tracing::{debug, trace};

use crate::{
    EntrustError, Rejection, ResponseDispatcher, RewardStatus, RewardUpdateRequest,
    RewardUpdateValidator, SlotAssigner, audit, metrics::EntrustMetrics,
};

/// The party submitting a reward update.
#[derive(Debug, Clone)]
pub struct Requester {
    pub party: PartyHandle,
    /// The requester's own inventory container.
    pub inventory: ItemBoxId,
    /// Exchange the requester is currently part of.
    pub exchange: Option<SessionHandle>,
}

impl Requester {
    pub fn new(party: PartyHandle, inventory: ItemBoxId, exchange: Option<SessionHandle>) -> Self {
        Self {
            party,
            inventory,
            exchange,
        }
    }

    pub fn entity_id(&self) -> EntityId {
        self.party.entity_id()
    }

    pub fn account_id(&self) -> AccountId {
        self.party.account_id()
    }
}

/// Details of an accepted update.
#[derive(Debug, Clone)]
pub struct AcceptedUpdate {
    pub slot: RewardSlot,
    /// Item now in the slot; `None` if it was cleared.
    pub item: Option<ItemRef>,
    /// Previous occupant of the slot, if overwritten or cleared.
    pub displaced: Option<ItemRef>,
    pub peer: EntityId,
    /// Whether the peer notification was queued.
    pub peer_notified: bool,
}

/// Result of one well-formed request.
#[derive(Debug, Clone)]
pub struct RewardUpdateOutcome {
    pub request: RewardUpdateRequest,
    pub result: Result<AcceptedUpdate, Rejection>,
}

impl RewardUpdateOutcome {
    pub fn status(&self) -> RewardStatus {
        match self.result {
            Ok(_) => RewardStatus::Success,
            Err(_) => RewardStatus::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        self.result.as_ref().err()
    }
}

/// Entrust reward update handler.
///
/// Cheap to clone; both parties' connection tasks may call
/// [`EntrustRewardService::handle`] concurrently. Per-session atomicity comes
/// from the session lock, held from the duplicate scan through the
/// assignment and the queuing of both response packets.
#[derive(Clone)]
pub struct EntrustRewardService {
    validator: RewardUpdateValidator,
    dispatcher: ResponseDispatcher,
    config: Arc<dyn EntrustConfig>,
    metrics: EntrustMetrics,
}

impl EntrustRewardService {
    pub fn new(
        catalog: Arc<dyn ItemCatalog>,
        identity: Arc<dyn ObjectIdentity>,
        registry: Arc<dyn SessionRegistry>,
        formatter: Arc<dyn ItemDetailFormatter>,
        config: Arc<dyn EntrustConfig>,
    ) -> Self {
        Self {
            validator: RewardUpdateValidator::new(catalog, Arc::clone(&identity), registry),
            dispatcher: ResponseDispatcher::new(identity, formatter),
            config,
            metrics: EntrustMetrics::default(),
        }
    }

    /// Decode and process one request body.
    ///
    /// A malformed body is returned as [`EntrustError::Framing`] and nothing
    /// is sent. Every well-formed request is acknowledged.
    pub fn handle(
        &self,
        requester: &Requester,
        payload: Bytes,
    ) -> Result<RewardUpdateOutcome, EntrustError> {
        let request = RewardUpdateRequest::decode(payload).inspect_err(|_| {
            self.metrics.inc_malformed();
        })?;
        Ok(self.process(requester, request))
    }

    /// Process a decoded request.
    pub fn process(
        &self,
        requester: &Requester,
        request: RewardUpdateRequest,
    ) -> RewardUpdateOutcome {
        trace!(
            entity = %requester.entity_id(),
            object_id = %request.object_id,
            reward_type = request.reward_type,
            offset = request.offset,
            "Entrust: reward update requested"
        );

        let result = self.apply(requester, &request);

        match &result {
            Ok(accepted) => {
                self.metrics.inc_accepted(accepted.item.is_none());
                debug!(
                    entity = %requester.entity_id(),
                    peer = %accepted.peer,
                    slot = accepted.slot.index(),
                    cleared = accepted.item.is_none(),
                    "Entrust: reward slot updated"
                );
            }
            Err(rejection) => self.reject(requester, &request, rejection),
        }

        RewardUpdateOutcome { request, result }
    }

    fn apply(
        &self,
        requester: &Requester,
        request: &RewardUpdateRequest,
    ) -> Result<AcceptedUpdate, Rejection> {
        let prepared = self.validator.prepare(requester, request)?;
        let (session, peer) = self.validator.resolve_peer(requester)?;

        let mut guard = session.lock();
        if !peer.is_connected() {
            return Err(Rejection::PeerUnavailable);
        }
        RewardUpdateValidator::check_unplaced(&guard, prepared.item.as_deref())?;

        let displaced = SlotAssigner::assign(&mut guard, prepared.slot, prepared.item.clone());

        // Queued under the guard: the peer sees updates in mutation order.
        self.dispatcher
            .acknowledge(&requester.party, request, RewardStatus::Success);
        let peer_notified = self
            .dispatcher
            .notify(&peer, prepared.slot, prepared.item.as_deref());
        drop(guard);

        Ok(AcceptedUpdate {
            slot: prepared.slot,
            item: prepared.item,
            displaced,
            peer: peer.entity_id(),
            peer_notified,
        })
    }

    fn reject(&self, requester: &Requester, request: &RewardUpdateRequest, rejection: &Rejection) {
        debug!(
            entity = %requester.entity_id(),
            reason = %rejection,
            "Entrust: reward update rejected"
        );

        if rejection.is_audited() && self.config.audit_trade_errors() {
            audit::record(requester, rejection);
        }
        self.metrics.inc_rejected(rejection);
        self.dispatcher
            .acknowledge(&requester.party, request, RewardStatus::Failure);
    }
}

impl std::fmt::Debug for EntrustRewardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntrustRewardService")
            .field("validator", &self.validator)
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}
