//! CLI arguments for connection handling.

use clap::Args;
use serde::{Deserialize, Serialize};

use crate::ChannelError;

/// Default number of inbound frames buffered per connection.
pub const DEFAULT_INBOUND_BUFFER: usize = 64;

/// Channel connection CLI arguments.
#[derive(Debug, Args, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[command(next_help_heading = "Channel")]
#[serde(default)]
pub struct ChannelArgs {
    /// Inbound frames buffered per connection before the reader is back-pressured
    #[arg(long = "channel.inbound-buffer", default_value_t = DEFAULT_INBOUND_BUFFER)]
    pub inbound_buffer: usize,
}

impl Default for ChannelArgs {
    fn default() -> Self {
        Self {
            inbound_buffer: DEFAULT_INBOUND_BUFFER,
        }
    }
}

impl ChannelArgs {
    pub fn validate(&self) -> Result<(), ChannelError> {
        if self.inbound_buffer == 0 {
            return Err(ChannelError::ZeroInboundBuffer);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        channel: ChannelArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["bazaar"]);
        assert_eq!(cli.channel, ChannelArgs::default());
        assert!(cli.channel.validate().is_ok());
    }

    #[test]
    fn test_zero_buffer_rejected() {
        let cli = Cli::parse_from(["bazaar", "--channel.inbound-buffer", "0"]);
        assert_eq!(cli.channel.validate(), Err(ChannelError::ZeroInboundBuffer));
    }
}
