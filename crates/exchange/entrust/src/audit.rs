//! Trade audit entries for anti-cheat review.

use tracing::warn;

use crate::{Rejection, Requester};

/// Tracing target of trade audit entries.
pub const AUDIT_TARGET: &str = "bazaar::trade_audit";

/// Emit the audit entry for an audited rejection. Other rejections are ignored.
pub(crate) fn record(requester: &Requester, rejection: &Rejection) {
    let account = requester.account_id();
    let entity = requester.entity_id();

    match rejection {
        Rejection::UnknownItem(object_id) => warn!(
            target: AUDIT_TARGET,
            %account,
            %entity,
            %object_id,
            "player attempted to add an unknown item to an entrust reward"
        ),
        Rejection::NotTradeable(item_type) => warn!(
            target: AUDIT_TARGET,
            %account,
            %entity,
            %item_type,
            "player attempted to add a non-trade item to an entrust reward"
        ),
        Rejection::DuplicatePlacement(slot) => warn!(
            target: AUDIT_TARGET,
            %account,
            %entity,
            slot = slot.index(),
            "player attempted to add an entrust reward item more than once"
        ),
        Rejection::InvalidSlot(_) | Rejection::NotOwned | Rejection::PeerUnavailable => {}
    }
}
