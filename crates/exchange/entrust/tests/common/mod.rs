#![allow(dead_code, unreachable_pub)]

use std::sync::Arc;

use bazaar_exchange_api::{DefaultEntrustConfig, EntrustConfig};
use bazaar_exchange_entrust::{AUDIT_TARGET, EntrustRewardService, Requester};
use bazaar_exchange_test_utils::{ExchangeFixture, TestParty};
use parking_lot::Mutex;
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    Layer,
    layer::{Context, SubscriberExt},
};

pub fn service(fx: &ExchangeFixture) -> EntrustRewardService {
    service_with_config(fx, DefaultEntrustConfig)
}

pub fn service_with_config(
    fx: &ExchangeFixture,
    config: impl EntrustConfig + 'static,
) -> EntrustRewardService {
    EntrustRewardService::new(
        fx.catalog.clone(),
        fx.objects.clone(),
        fx.parties.clone(),
        fx.formatter.clone(),
        Arc::new(config),
    )
}

pub fn requester(fx: &ExchangeFixture, party: &TestParty) -> Requester {
    Requester::new(
        party.handle.clone(),
        party.inventory,
        Some(fx.session.clone()),
    )
}

/// Collects the messages of trade audit events.
#[derive(Clone, Default)]
pub struct AuditCapture(Arc<Mutex<Vec<String>>>);

impl AuditCapture {
    /// Run `f` with this capture as the thread's subscriber.
    pub fn capture<R>(&self, f: impl FnOnce() -> R) -> R {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().clone()
    }
}

impl<S: Subscriber> Layer<S> for AuditCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target() != AUDIT_TARGET {
            return;
        }
        let mut visitor = AuditVisitor::default();
        event.record(&mut visitor);
        self.0.lock().push(format!("{}{}", visitor.message, visitor.fields));
    }
}

#[derive(Default)]
struct AuditVisitor {
    message: String,
    fields: String,
}

impl tracing::field::Visit for AuditVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push_str(&format!(" {}={:?}", field.name(), value));
        }
    }
}
