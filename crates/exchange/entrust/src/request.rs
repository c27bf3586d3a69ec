use bazaar_exchange_primitives::ObjectId;
use bazaar_net_codec::{CodecError, PacketReader};
use bytes::{BufMut, Bytes, BytesMut};

/// Size of the reward update request body.
pub const REQUEST_LEN: usize = 16;

/// Client request to place or clear an entrust reward item.
///
/// Wire layout: `i64 object_id, i32 reward_type, i32 offset`, little-endian.
/// `object_id == -1` clears the slot. Coordinates are kept as sent so the
/// acknowledgement can echo them; range checks happen during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardUpdateRequest {
    pub object_id: ObjectId,
    pub reward_type: i32,
    pub offset: i32,
}

impl RewardUpdateRequest {
    pub fn new(object_id: ObjectId, reward_type: i32, offset: i32) -> Self {
        Self {
            object_id,
            reward_type,
            offset,
        }
    }

    /// Decode a request body. Rejects any length other than [`REQUEST_LEN`]
    /// before reading a field.
    pub fn decode(payload: impl Into<Bytes>) -> Result<Self, CodecError> {
        let mut reader = PacketReader::new(payload);
        reader.expect_len(REQUEST_LEN)?;

        Ok(Self {
            object_id: ObjectId::new(reader.read_i64_le()?),
            reward_type: reader.read_i32_le()?,
            offset: reader.read_i32_le()?,
        })
    }

    /// Encode the request body (client side, used by tooling and tests).
    pub fn encode(&self) -> Bytes {
        let mut body = BytesMut::with_capacity(REQUEST_LEN);
        body.put_i64_le(self.object_id.get());
        body.put_i32_le(self.reward_type);
        body.put_i32_le(self.offset);
        body.freeze()
    }

    /// Whether the request clears the slot.
    pub fn is_clear(&self) -> bool {
        self.object_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_fields() {
        let mut body = BytesMut::new();
        body.put_i64_le(42);
        body.put_i32_le(2);
        body.put_i32_le(3);

        let request = RewardUpdateRequest::decode(body.freeze()).unwrap();
        assert_eq!(
            request.encode(),
            Bytes::from_static(&[42, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0])
        );
        assert_eq!(request, RewardUpdateRequest::new(ObjectId::new(42), 2, 3));
        assert!(!request.is_clear());
    }

    #[test]
    fn test_decode_clear() {
        let request = RewardUpdateRequest::new(ObjectId::NONE, 1, 2);
        let decoded = RewardUpdateRequest::decode(request.encode()).unwrap();
        assert!(decoded.is_clear());
        assert_eq!(decoded.reward_type, 1);
        assert_eq!(decoded.offset, 2);
    }

    #[test]
    fn test_decode_keeps_out_of_range_coordinates() {
        let request = RewardUpdateRequest::new(ObjectId::new(1), 7, -3);
        assert_eq!(RewardUpdateRequest::decode(request.encode()).unwrap(), request);
    }

    #[test]
    fn test_wrong_length_is_framing_error() {
        for len in [0usize, 15, 17, 32] {
            assert_eq!(
                RewardUpdateRequest::decode(vec![0u8; len]),
                Err(CodecError::InvalidLength {
                    expected: REQUEST_LEN,
                    actual: len
                })
            );
        }
    }
}
