//! Logging for bazaar services.
//!
//! [`init_logging`] installs a global `tracing` subscriber from [`LogArgs`].
//! Trade audit entries are emitted on their own target
//! (`bazaar::trade_audit`) and can be filtered independently, e.g.
//! `RUST_LOG=info,bazaar::trade_audit=warn`.

mod args;
mod logging;

pub use args::{LogArgs, LogFormat};
pub use logging::{init_logging, init_test_tracing};
