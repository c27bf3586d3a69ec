//! Entrust reward slot synchronization.
//!
//! One party of an exchange places an item into (or clears) one of the twelve
//! reward slots. The server validates the proposal, mutates the shared
//! session once, acknowledges the requester and, on success, notifies the
//! other party in its own object id namespace.
//!
//! # Flow
//!
//! 1. [`RewardUpdateRequest::decode`] - 16-byte body; any other length is a framing error
//! 2. [`RewardUpdateValidator`] - slot range, item resolution, tradeability, ownership
//! 3. Peer resolution through the session linkage and the party registry
//! 4. Duplicate scan and [`SlotAssigner`] under the session lock
//! 5. [`ResponseDispatcher`] - ack to the requester, notification to the peer on success
//!
//! Rejections are ordinary outcomes ([`Rejection`]); only framing failures are
//! returned as errors ([`EntrustError`]).

pub mod args;
mod assigner;
mod audit;
mod error;
mod metrics;
mod request;
mod response;
mod service;
mod validator;

pub use args::EntrustArgs;
pub use assigner::SlotAssigner;
pub use audit::AUDIT_TARGET;
pub use error::{EntrustError, Rejection};
pub use request::{REQUEST_LEN, RewardUpdateRequest};
pub use response::{RewardStatus, ResponseDispatcher};
pub use service::{AcceptedUpdate, EntrustRewardService, Requester, RewardUpdateOutcome};
pub use validator::{PreparedUpdate, RewardUpdateValidator};
