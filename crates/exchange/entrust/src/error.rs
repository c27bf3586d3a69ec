use bazaar_exchange_primitives::{ItemType, ObjectId, RewardSlot, SlotError};
use bazaar_net_codec::CodecError;

/// Caller-visible failure: the request could not be parsed. Nothing is sent
/// back to the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntrustError {
    #[error("malformed entrust reward update: {0}")]
    Framing(#[from] CodecError),
}

/// Why a well-formed reward update was refused.
///
/// Every rejection is answered with a failure acknowledgement and leaves the
/// session untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Rejection {
    #[error("invalid reward slot: {0}")]
    InvalidSlot(#[from] SlotError),

    #[error("object {0} does not resolve to an item")]
    UnknownItem(ObjectId),

    #[error("item type {0} is not tradeable")]
    NotTradeable(ItemType),

    #[error("item is not in the requester's inventory")]
    NotOwned,

    #[error("exchange peer unavailable")]
    PeerUnavailable,

    #[error("item already placed in reward slot {}", .0.index())]
    DuplicatePlacement(RewardSlot),
}

impl Rejection {
    /// Rejections that indicate a client trying to cheat and get a trade audit entry.
    pub fn is_audited(&self) -> bool {
        matches!(
            self,
            Self::UnknownItem(_) | Self::NotTradeable(_) | Self::DuplicatePlacement(_)
        )
    }

    /// Short label for metrics.
    pub fn label(&self) -> &'static str {
        self.into()
    }
}
