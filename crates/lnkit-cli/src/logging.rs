//! Tracing subscriber setup

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set. Otherwise `--verbose` selects `debug`, and
/// failing that the configured level is used. Logs go to stderr so command
/// output on stdout stays clean.
pub fn init(
    verbose: bool,
    configured: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (filter, rejected) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => {
            let (level, rejected) = default_level(verbose, configured);
            (EnvFilter::default().add_directive(level.into()), rejected)
        }
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    if let Some(raw) = rejected {
        tracing::warn!(level = %raw, "Invalid log level in config, using info");
    }
    tracing::debug!("Verbose mode enabled");
    Ok(())
}

/// Level used when `RUST_LOG` is not set, plus the configured value if it
/// had to be rejected.
fn default_level(verbose: bool, configured: &str) -> (LevelFilter, Option<String>) {
    if verbose {
        return (LevelFilter::DEBUG, None);
    }
    match configured.trim().parse::<LevelFilter>() {
        Ok(level) => (level, None),
        Err(_) => (LevelFilter::INFO, Some(configured.to_string())),
    }
}
