mod common;

use std::collections::HashSet;

use bazaar_exchange_entrust::RewardUpdateRequest;
use bazaar_exchange_primitives::{ItemRef, ObjectId, REWARD_REGION};
use bazaar_exchange_test_utils::{ExchangeFixture, NON_TRADEABLE, TRADEABLE};
use proptest::prelude::*;

use common::{requester, service};

#[derive(Debug, Clone)]
struct Op {
    from_source: bool,
    /// Index into the requester's items; `None` clears.
    item: Option<usize>,
    reward_type: i32,
    offset: i32,
}

fn op() -> impl Strategy<Value = Op> {
    (any::<bool>(), proptest::option::of(0usize..4), -1i32..4, -1i32..5).prop_map(
        |(from_source, item, reward_type, offset)| Op {
            from_source,
            item,
            reward_type,
            offset,
        },
    )
}

fn assert_unique_rewards(slots: &[Option<ItemRef>]) {
    let mut seen = HashSet::new();
    for item in slots[REWARD_REGION].iter().flatten() {
        assert!(seen.insert(item.id()), "item {} placed twice", item.id());
        assert_ne!(item.item_type(), NON_TRADEABLE);
    }
}

proptest! {
    #[test]
    fn reward_region_stays_consistent(ops in proptest::collection::vec(op(), 1..40)) {
        let mut fx = ExchangeFixture::new();
        let service = service(&fx);

        // three tradeable items and one non-tradeable per party
        let items = |party_is_source: bool| -> Vec<ObjectId> {
            let party = if party_is_source { &fx.source } else { &fx.other };
            [TRADEABLE, TRADEABLE, TRADEABLE, NON_TRADEABLE]
                .into_iter()
                .map(|item_type| fx.give_item(party, item_type).1)
                .collect()
        };
        let source_items = items(true);
        let other_items = items(false);

        for op in ops {
            let (ids, party) = if op.from_source {
                (&source_items, &fx.source)
            } else {
                (&other_items, &fx.other)
            };
            let object_id = op.item.map_or(ObjectId::NONE, |i| ids[i]);
            let requester = requester(&fx, party);
            let before = fx.slots();

            let outcome = service.process(
                &requester,
                RewardUpdateRequest::new(object_id, op.reward_type, op.offset),
            );
            let after = fx.slots();
            assert_unique_rewards(&after);

            let in_range = (0..3).contains(&op.reward_type) && (0..4).contains(&op.offset);
            if !in_range {
                prop_assert!(!outcome.is_success());
            }
            if !outcome.is_success() {
                prop_assert_eq!(&before, &after);
            }

            let (own, peer) = if op.from_source {
                (&mut fx.source, &mut fx.other)
            } else {
                (&mut fx.other, &mut fx.source)
            };
            let ack = own.expect_ack();
            prop_assert_eq!(ack.is_success(), outcome.is_success());
            prop_assert_eq!(ack.object_id, object_id.get());
            own.assert_no_packets();

            if outcome.is_success() {
                let notify = peer.expect_notify();
                prop_assert_eq!((notify.reward_type, notify.offset), (op.reward_type, op.offset));
                prop_assert_eq!(notify.object_id == -1, object_id.is_none());
            }
            peer.assert_no_packets();
        }
    }
}
