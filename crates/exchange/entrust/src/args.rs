//! CLI arguments for the entrust protocol.

use bazaar_exchange_api::EntrustConfig;
use clap::Args;
use serde::{Deserialize, Serialize};

/// Entrust protocol CLI arguments.
#[derive(Debug, Args, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[command(next_help_heading = "Entrust")]
#[serde(default)]
pub struct EntrustArgs {
    /// Emit trade audit entries for rejected reward updates
    #[arg(
        long = "entrust.audit",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub audit: bool,
}

impl Default for EntrustArgs {
    fn default() -> Self {
        Self { audit: true }
    }
}

impl EntrustConfig for EntrustArgs {
    fn audit_trade_errors(&self) -> bool {
        self.audit
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        entrust: EntrustArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["bazaar"]);
        assert_eq!(cli.entrust, EntrustArgs::default());
        assert!(cli.entrust.audit_trade_errors());
    }

    #[test]
    fn test_disable_audit() {
        let cli = Cli::parse_from(["bazaar", "--entrust.audit", "false"]);
        assert!(!cli.entrust.audit_trade_errors());
    }
}
