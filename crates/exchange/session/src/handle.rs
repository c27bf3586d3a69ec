use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::ExchangeSession;

/// Handle to a live exchange session. Cheap to clone.
///
/// Both parties' connection tasks hold a clone. All slot reads and writes go
/// through [`SessionHandle::lock`], so a check-then-assign sequence performed
/// under one guard is atomic with respect to the other party.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    inner: Arc<Mutex<ExchangeSession>>,
}

impl SessionHandle {
    pub fn new(session: ExchangeSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Exclusive access to the session for the lifetime of the guard.
    pub fn lock(&self) -> MutexGuard<'_, ExchangeSession> {
        self.inner.lock()
    }

    /// Whether both handles refer to the same session.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<ExchangeSession> for SessionHandle {
    fn from(session: ExchangeSession) -> Self {
        Self::new(session)
    }
}
