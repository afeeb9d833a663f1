//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::str::FromStr;
use std::sync::Once;

use serde::Deserialize;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

use crate::errors::{ExError, ExErrorKind};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Human-readable output for development
    #[default]
    #[serde(alias = "dev")]
    Development,
    /// JSON structured output for production
    #[serde(alias = "prod")]
    Production,
    /// Bare registry; tests install their own capture layer
    Test,
}

impl FromStr for Profile {
    type Err = ExError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            other => Err(ExError::new(ExErrorKind::InvalidInput)
                .with_op("parse_log_profile")
                .with_message(format!("Unknown logging profile '{}'", other))),
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Only the first call has any effect. Log output goes to stderr so that
/// command output on stdout stays machine-readable.
///
/// # Profiles
///
/// - **Development**: Human-readable logs, `deptrec=debug` unless `RUST_LOG` is set
/// - **Production**: JSON structured logs, `deptrec=info` unless `RUST_LOG` is set
/// - **Test**: No output layer
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("deptrec=debug")),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("deptrec=info")),
                )
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init(Profile::Test);
        init(Profile::Test);
        init(Profile::Test);
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!("development".parse::<Profile>().unwrap(), Profile::Development);
        assert_eq!("PROD".parse::<Profile>().unwrap(), Profile::Production);
        assert_eq!("test".parse::<Profile>().unwrap(), Profile::Test);

        let err = "verbose".parse::<Profile>().unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    }

    #[test]
    fn test_profile_default() {
        assert_eq!(Profile::default(), Profile::Development);
    }
}
