use std::sync::Arc;

use bazaar_exchange_api::{ObjectIdentity, PartyHandle};
use bazaar_exchange_primitives::{
    AccountId, EntityId, Item, ItemBoxId, ItemRef, ItemType, ItemUuid, ObjectId,
};
use bazaar_exchange_registry::{
    ItemDefinition, ItemFlags, ObjectRegistry, PartyRegistry, PlainItemDetailFormatter,
    StaticItemCatalog,
};
use bazaar_exchange_session::{ExchangeSession, SessionHandle};
use bytes::Bytes;
use tokio::sync::mpsc::{UnboundedReceiver, error::TryRecvError};

use crate::{AckPacket, NotifyPacket};

/// Item type flagged tradeable in the fixture catalog.
pub const TRADEABLE: ItemType = ItemType::new(1101);

/// Item type present in the fixture catalog without the trade flag.
pub const NON_TRADEABLE: ItemType = ItemType::new(2202);

/// A connected party and the receiving end of its outbound queue.
#[derive(Debug)]
pub struct TestParty {
    pub handle: PartyHandle,
    pub outbound: UnboundedReceiver<Bytes>,
    pub inventory: ItemBoxId,
}

impl TestParty {
    pub fn new(entity: EntityId) -> Self {
        let (handle, outbound) = PartyHandle::channel(entity, AccountId::random());
        Self {
            handle,
            outbound,
            inventory: ItemBoxId::random(),
        }
    }

    pub fn entity_id(&self) -> EntityId {
        self.handle.entity_id()
    }

    pub fn try_next_packet(&mut self) -> Option<Bytes> {
        match self.outbound.try_recv() {
            Ok(packet) => Some(packet),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Next queued packet decoded as an acknowledgement. Panics otherwise.
    pub fn expect_ack(&mut self) -> AckPacket {
        let packet = self.try_next_packet().expect("no packet queued");
        AckPacket::decode(packet).expect("not an acknowledgement")
    }

    /// Next queued packet decoded as a notification. Panics otherwise.
    pub fn expect_notify(&mut self) -> NotifyPacket {
        let packet = self.try_next_packet().expect("no packet queued");
        NotifyPacket::decode(packet).expect("not a notification")
    }

    pub fn assert_no_packets(&mut self) {
        if let Some(packet) = self.try_next_packet() {
            panic!("unexpected packet queued: {packet:?}");
        }
    }

    /// Drain every queued packet.
    pub fn drain(&mut self) -> Vec<Bytes> {
        std::iter::from_fn(|| self.try_next_packet()).collect()
    }
}

/// Two parties in one exchange session, registered with in-memory collaborators.
#[derive(Debug)]
pub struct ExchangeFixture {
    pub objects: Arc<ObjectRegistry>,
    pub parties: Arc<PartyRegistry>,
    pub catalog: Arc<StaticItemCatalog>,
    pub formatter: Arc<PlainItemDetailFormatter>,
    pub session: SessionHandle,
    /// Party that opened the exchange.
    pub source: TestParty,
    /// Counterpart.
    pub other: TestParty,
}

impl Default for ExchangeFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl ExchangeFixture {
    pub fn new() -> Self {
        let source = TestParty::new(EntityId::new(100));
        let other = TestParty::new(EntityId::new(200));

        let parties = PartyRegistry::new();
        parties.register(source.handle.clone());
        parties.register(other.handle.clone());

        let catalog = StaticItemCatalog::new([
            ItemDefinition::new(TRADEABLE, "Silver Ring", ItemFlags::TRADE),
            ItemDefinition::new(NON_TRADEABLE, "Quest Key", ItemFlags::NONE),
        ])
        .expect("unique item types");

        Self {
            objects: Arc::new(ObjectRegistry::new()),
            parties: Arc::new(parties),
            catalog: Arc::new(catalog),
            formatter: Arc::new(PlainItemDetailFormatter),
            session: SessionHandle::new(ExchangeSession::new(
                source.entity_id(),
                other.entity_id(),
            )),
            source,
            other,
        }
    }

    /// Create an item of `item_type` in `owner`'s inventory and return it with
    /// its object id in the owner's namespace.
    pub fn give_item(&self, owner: &TestParty, item_type: ItemType) -> (ItemRef, ObjectId) {
        self.create_item(owner.entity_id(), item_type, owner.inventory)
    }

    /// Create an item in `container` that `viewer` can address by object id.
    pub fn create_item(
        &self,
        viewer: EntityId,
        item_type: ItemType,
        container: ItemBoxId,
    ) -> (ItemRef, ObjectId) {
        let item = self
            .objects
            .insert_item(Item::new(ItemUuid::random(), item_type, container));
        let object_id = self.objects.translate(&item, viewer);
        (item, object_id)
    }

    /// Snapshot of every session slot.
    pub fn slots(&self) -> Vec<Option<ItemRef>> {
        self.session.lock().items().to_vec()
    }

    /// Drop `other`'s connection: it stays registered but no longer resolves.
    pub fn disconnect_other(&mut self) {
        self.other.outbound.close();
    }
}
