use std::{io, str::FromStr};

use anyhow::{anyhow, Context};
use tracing::Level;
use tracing_subscriber::fmt::Subscriber;

pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Picks the max log level: `--verbose` wins, then `LOG_LEVEL`, then WARN.
pub fn log_level(verbose: bool, env_level: Option<&str>) -> Level {
    if verbose {
        return Level::DEBUG;
    }

    env_level
        .ok_or_else(|| anyhow!("{} environment variable is not set", LOG_LEVEL_VAR))
        .and_then(|l| Level::from_str(l).map_err(|e| anyhow!("Invalid log level: {}", e)))
        .unwrap_or(Level::WARN)
}

/// Installs a global fmt subscriber writing to stderr, keeping stdout for results.
pub fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let env_level = std::env::var(LOG_LEVEL_VAR).ok();
    let level = log_level(verbose, env_level.as_deref());

    let subscriber = Subscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set global default subscriber")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_overrides_env() {
        assert_eq!(log_level(true, Some("error")), Level::DEBUG);
    }

    #[test]
    fn env_level_or_warn() {
        assert_eq!(log_level(false, Some("trace")), Level::TRACE);
        assert_eq!(log_level(false, Some("INFO")), Level::INFO);
        assert_eq!(log_level(false, Some("loud")), Level::WARN);
        assert_eq!(log_level(false, None), Level::WARN);
    }
}
