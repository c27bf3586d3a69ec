//! Acknowledgements and peer notifications.

use std::sync::Arc;

use bazaar_exchange_api::{ItemDetailFormatter, ObjectIdentity, PartyHandle};
use bazaar_exchange_primitives::{Item, ObjectId, RewardSlot};
use bazaar_net_codec::{ChannelPacketCode, PacketWriter};
use bytes::Bytes;
use tracing::{debug, warn};

use crate::RewardUpdateRequest;

/// Status carried in the acknowledgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::FromRepr)]
#[repr(i32)]
pub enum RewardStatus {
    Success = 0,
    Failure = -1,
}

impl RewardStatus {
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

/// Builds and sends entrust reward packets.
///
/// Acknowledgement, to the requester:
/// `code, i64 object_id, i32 reward_type, i32 offset, i32 status`, echoing
/// the request as received.
///
/// Notification, to the peer, on success only:
/// `code, i32 reward_type, i32 offset, i64 object_id, item detail`, with the
/// object id in the peer's namespace (`-1` when the slot was cleared).
#[derive(Clone)]
pub struct ResponseDispatcher {
    identity: Arc<dyn ObjectIdentity>,
    formatter: Arc<dyn ItemDetailFormatter>,
}

impl ResponseDispatcher {
    pub fn new(identity: Arc<dyn ObjectIdentity>, formatter: Arc<dyn ItemDetailFormatter>) -> Self {
        Self {
            identity,
            formatter,
        }
    }

    pub fn ack_packet(request: &RewardUpdateRequest, status: RewardStatus) -> Bytes {
        let mut packet = PacketWriter::new(ChannelPacketCode::EntrustRewardUpdate);
        packet
            .write_i64_le(request.object_id.get())
            .write_i32_le(request.reward_type)
            .write_i32_le(request.offset)
            .write_i32_le(status as i32);
        packet.freeze()
    }

    /// Notification for `peer`, translating `item` into its namespace.
    pub fn notify_packet(&self, peer: &PartyHandle, slot: RewardSlot, item: Option<&Item>) -> Bytes {
        let object_id = item
            .map(|item| self.identity.translate(item, peer.entity_id()))
            .unwrap_or(ObjectId::NONE);

        let mut packet = PacketWriter::new(ChannelPacketCode::EntrustRewardUpdated);
        packet
            .write_i32_le(slot.reward_type())
            .write_i32_le(slot.offset())
            .write_i64_le(object_id.get())
            .write_bytes(&self.formatter.format(item));
        packet.freeze()
    }

    /// Send the acknowledgement. A requester that already left is only logged.
    pub fn acknowledge(
        &self,
        requester: &PartyHandle,
        request: &RewardUpdateRequest,
        status: RewardStatus,
    ) {
        if let Err(e) = requester.send(Self::ack_packet(request, status)) {
            debug!(error = %e, %status, "Entrust: requester gone before acknowledgement");
        }
    }

    /// Send the peer notification. Returns whether it was queued.
    pub fn notify(&self, peer: &PartyHandle, slot: RewardSlot, item: Option<&Item>) -> bool {
        match peer.send(self.notify_packet(peer, slot, item)) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, slot = slot.index(), "Entrust: peer gone after reward update");
                false
            }
        }
    }
}

impl std::fmt::Debug for ResponseDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseDispatcher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use bazaar_net_codec::PacketReader;

    use super::*;

    #[test]
    fn test_ack_layout() {
        let request = RewardUpdateRequest::new(ObjectId::new(9), 1, 3);
        let mut reader = PacketReader::new(ResponseDispatcher::ack_packet(
            &request,
            RewardStatus::Failure,
        ));

        assert_eq!(
            reader.read_u16_le().unwrap(),
            ChannelPacketCode::EntrustRewardUpdate as u16
        );
        assert_eq!(reader.read_i64_le().unwrap(), 9);
        assert_eq!(reader.read_i32_le().unwrap(), 1);
        assert_eq!(reader.read_i32_le().unwrap(), 3);
        assert_eq!(reader.read_i32_le().unwrap(), -1);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_status_repr() {
        assert_eq!(RewardStatus::Success as i32, 0);
        assert_eq!(RewardStatus::from_repr(-1), Some(RewardStatus::Failure));
        assert!(RewardStatus::Success.is_success());
    }
}
