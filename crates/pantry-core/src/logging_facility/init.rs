//! Logging initialization

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Bare registry; tests install their own capture layer
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Call once at startup. Later calls, or a subscriber installed elsewhere,
/// leave the existing one in place. `RUST_LOG` overrides the
/// profile's default filter.
///
/// - **Development**: human-readable, `pantry=debug`
/// - **Production**: JSON, `pantry=info`
/// - **Test**: no output
///
/// Logs go to stderr so command output on stdout stays clean.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("pantry=debug")),
                )
                .try_init()
                .ok();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("pantry=info")),
                )
                .try_init()
                .ok();
        }
        Profile::Test => {
            tracing_subscriber::registry().try_init().ok();
        }
    });
}
