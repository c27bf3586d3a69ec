use eyre::WrapErr;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{LogArgs, LogFormat};

/// Install the global subscriber. `RUST_LOG` takes precedence over
/// [`LogArgs::filter`].
pub fn init_logging(args: &LogArgs) -> eyre::Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&args.filter)
            .wrap_err_with(|| format!("invalid log filter {:?}", args.filter))?,
    };

    let layer = fmt::layer().with_target(true);
    let layer = match args.format {
        LogFormat::Terminal => layer.with_ansi(args.color).boxed(),
        LogFormat::Json => layer.json().with_ansi(false).boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter)
        .try_init()
        .wrap_err("failed to install tracing subscriber")?;

    tracing::info!(filter = %args.filter, format = %args.format, "Logging initialised");
    Ok(())
}

/// Subscriber writing through the test harness. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_error() {
        let args = LogArgs {
            filter: "bazaar=loud".to_string(),
            ..LogArgs::default()
        };
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(init_logging(&args).is_err());
        }
    }
}
