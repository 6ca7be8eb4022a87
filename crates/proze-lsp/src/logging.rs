//! Diagnostic logging for stdio hosts.
//!
//! stdout carries the LSP stream, so log output goes to stderr.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Failure installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The fallback directive does not parse.
    #[error("invalid log directive: {0}")]
    Directive(#[from] ParseError),
    /// A global subscriber is already set.
    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled,
}

/// Build the filter from `RUST_LOG`, falling back to `default_directive`.
pub fn env_filter(default_directive: &str) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(default_directive)?),
    }
}

/// Install a global stderr subscriber.
pub fn init_stderr_logging(default_directive: &str) -> Result<(), LoggingError> {
    let filter = env_filter(default_directive)?;
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_directive_must_parse() {
        if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
            return;
        }
        assert!(env_filter("proze_core=debug,info").is_ok());
        assert!(matches!(
            env_filter("proze_core=loud"),
            Err(LoggingError::Directive(_))
        ));
    }

    #[test]
    fn test_second_install_is_reported() {
        let first = init_stderr_logging("warn");
        let second = init_stderr_logging("warn");
        assert!(first.is_ok() || matches!(first, Err(LoggingError::AlreadyInstalled)));
        assert!(matches!(second, Err(LoggingError::AlreadyInstalled)));
    }
}
