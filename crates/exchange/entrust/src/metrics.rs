//! Entrust reward update metrics.

use metrics::Counter;

use crate::Rejection;

#[derive(Clone, Debug)]
pub(crate) struct EntrustMetrics {
    /// Accepted updates that placed an item
    placed_total: Counter,
    /// Accepted updates that cleared a slot
    cleared_total: Counter,
    /// Requests dropped for malformed bodies
    malformed_total: Counter,
}

impl Default for EntrustMetrics {
    fn default() -> Self {
        Self {
            placed_total: metrics::counter!("entrust.reward_updates.placed_total"),
            cleared_total: metrics::counter!("entrust.reward_updates.cleared_total"),
            malformed_total: metrics::counter!("entrust.reward_updates.malformed_total"),
        }
    }
}

impl EntrustMetrics {
    pub(crate) fn inc_accepted(&self, cleared: bool) {
        if cleared {
            self.cleared_total.increment(1);
        } else {
            self.placed_total.increment(1);
        }
    }

    pub(crate) fn inc_rejected(&self, rejection: &Rejection) {
        metrics::counter!("entrust.reward_updates.rejected_total", "reason" => rejection.label())
            .increment(1);
    }

    pub(crate) fn inc_malformed(&self) {
        self.malformed_total.increment(1);
    }
}
