//! Exchange session state shared between the two parties of an exchange.
//!
//! # Components
//!
//! - [`ExchangeSession`] - Party linkage and the fixed item slot array
//! - [`SessionHandle`] - Cloneable handle; one mutex per session
//!
//! Sessions are created and torn down by the exchange state machine. Protocol
//! handlers only read and mutate slots through a [`SessionHandle`] while the
//! session is live.

mod error;
mod handle;
mod session;

pub use error::SessionError;
pub use handle::SessionHandle;
pub use session::ExchangeSession;
