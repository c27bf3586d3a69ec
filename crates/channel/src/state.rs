use bazaar_exchange_api::PartyHandle;
use bazaar_exchange_entrust::Requester;
use bazaar_exchange_primitives::{AccountId, EntityId, ItemBoxId};
use bazaar_exchange_session::SessionHandle;

/// Per-connection state owned by the connection task.
#[derive(Debug, Clone)]
pub struct ClientState {
    party: PartyHandle,
    inventory: ItemBoxId,
    exchange: Option<SessionHandle>,
}

impl ClientState {
    pub fn new(party: PartyHandle, inventory: ItemBoxId) -> Self {
        Self {
            party,
            inventory,
            exchange: None,
        }
    }

    pub fn entity_id(&self) -> EntityId {
        self.party.entity_id()
    }

    pub fn account_id(&self) -> AccountId {
        self.party.account_id()
    }

    pub fn party(&self) -> &PartyHandle {
        &self.party
    }

    pub fn inventory(&self) -> ItemBoxId {
        self.inventory
    }

    pub fn exchange(&self) -> Option<&SessionHandle> {
        self.exchange.as_ref()
    }

    /// Attach the exchange this party has joined, returning any previous one.
    pub fn set_exchange(&mut self, exchange: Option<SessionHandle>) -> Option<SessionHandle> {
        std::mem::replace(&mut self.exchange, exchange)
    }

    /// Requester view for exchange handlers.
    pub fn requester(&self) -> Requester {
        Requester::new(self.party.clone(), self.inventory, self.exchange.clone())
    }
}

#[cfg(test)]
mod tests {
    use bazaar_exchange_session::ExchangeSession;

    use super::*;

    #[test]
    fn test_exchange_attach_and_detach() {
        let (party, _rx) = PartyHandle::channel(EntityId::new(1), AccountId::random());
        let mut state = ClientState::new(party, ItemBoxId::random());
        assert!(state.requester().exchange.is_none());

        let session = SessionHandle::new(ExchangeSession::new(EntityId::new(1), EntityId::new(2)));
        assert!(state.set_exchange(Some(session.clone())).is_none());

        let requester = state.requester();
        assert!(requester.exchange.as_ref().is_some_and(|s| s.ptr_eq(&session)));
        assert_eq!(requester.inventory, state.inventory());

        assert!(state.set_exchange(None).is_some());
        assert!(state.exchange().is_none());
    }
}
