use bazaar_exchange_primitives::SESSION_SLOT_COUNT;

/// Errors raised by direct slot access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("slot {0} outside [0, {max})", max = SESSION_SLOT_COUNT)]
    SlotOutOfRange(usize),
}
