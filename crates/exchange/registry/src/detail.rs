use bazaar_exchange_api::ItemDetailFormatter;
use bazaar_exchange_primitives::Item;
use bytes::{BufMut, Bytes, BytesMut};

/// Length of the block written by [`PlainItemDetailFormatter`].
pub const ITEM_DETAIL_LEN: usize = 4 + 16 + 16;

/// Writes `i32 item_type, [u8; 16] item id, [u8; 16] item box id`.
///
/// An empty slot is `-1` followed by zeroed ids. Item types beyond
/// `i32::MAX` saturate so they never read as an empty slot; the catalog
/// refuses to define them.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainItemDetailFormatter;

impl ItemDetailFormatter for PlainItemDetailFormatter {
    fn format(&self, item: Option<&Item>) -> Bytes {
        let mut buf = BytesMut::with_capacity(ITEM_DETAIL_LEN);
        match item {
            Some(item) => {
                let item_type = i32::try_from(item.item_type().get()).unwrap_or(i32::MAX);
                buf.put_i32_le(item_type);
                buf.put_slice(item.id().as_bytes());
                buf.put_slice(item.item_box().as_bytes());
            }
            None => {
                buf.put_i32_le(-1);
                buf.put_bytes(0, 32);
            }
        }
        buf.freeze()
    }
}
