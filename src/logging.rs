//! # Structured Logging Module
//!
//! Environment-aware tracing initialization: human-readable console output
//! in development and test, JSON in production. Initialization is
//! idempotent and tolerates an already-installed global subscriber from an
//! embedding application.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::constants::env;

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let log_level = get_log_level(&environment);

        let registry = tracing_subscriber::registry();
        let result = if environment == "production" {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_ansi(false)
                        .json()
                        .with_filter(EnvFilter::new(log_level)),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_ansi(true)
                        .with_filter(EnvFilter::new(log_level)),
                )
                .try_init()
        };

        // An embedding application may have installed a subscriber already
        if result.is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        }
    });
}

/// Get current environment from environment variables
fn get_environment() -> String {
    std::env::var(env::PREPMATE_ENV)
        .or_else(|_| std::env::var(env::APP_ENV))
        .unwrap_or_else(|_| "development".to_string())
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> String {
    match environment {
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_logging();
        init_logging();
    }

    #[test]
    fn test_environment_detection() {
        std::env::set_var(env::PREPMATE_ENV, "test_override");
        let environment = get_environment();
        assert_eq!(environment, "test_override");
        std::env::remove_var(env::PREPMATE_ENV);
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(get_log_level("test"), "debug");
        assert_eq!(get_log_level("development"), "debug");
        assert_eq!(get_log_level("production"), "info");
        assert_eq!(get_log_level("unknown"), "debug");
    }
}
