//! Typed handle to a connected party.

use bazaar_exchange_primitives::{AccountId, EntityId};
use bytes::Bytes;
use tokio::sync::mpsc;

/// The party's connection has gone away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("party {0} disconnected")]
pub struct PartyGone(pub EntityId);

/// Handle to a connected party. Cheap to clone.
///
/// Outbound packets are queued on an unbounded channel drained by the
/// party's connection task, so [`PartyHandle::send`] never blocks.
#[derive(Debug, Clone)]
pub struct PartyHandle {
    entity_id: EntityId,
    account_id: AccountId,
    outbound: mpsc::UnboundedSender<Bytes>,
}

impl PartyHandle {
    pub fn new(
        entity_id: EntityId,
        account_id: AccountId,
        outbound: mpsc::UnboundedSender<Bytes>,
    ) -> Self {
        Self {
            entity_id,
            account_id,
            outbound,
        }
    }

    /// Create a handle together with the receiving end of its outbound queue.
    pub fn channel(
        entity_id: EntityId,
        account_id: AccountId,
    ) -> (Self, mpsc::UnboundedReceiver<Bytes>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(entity_id, account_id, tx), rx)
    }

    pub fn entity_id(&self) -> EntityId {
        self.entity_id
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Queue a packet for delivery.
    pub fn send(&self, packet: Bytes) -> Result<(), PartyGone> {
        self.outbound
            .send(packet)
            .map_err(|_| PartyGone(self.entity_id))
    }

    pub fn is_connected(&self) -> bool {
        !self.outbound.is_closed()
    }
}
