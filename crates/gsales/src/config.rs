//! Configuration for the gsales client

use std::env;

use crate::error::{Error, Result};

/// Environment variable enabling [`ClientConfig::trace_calls`].
pub const ENV_TRACE_CALLS: &str = "GSALES_TRACE_CALLS";

/// Environment variable enabling [`ClientConfig::log_payloads`].
pub const ENV_LOG_PAYLOADS: &str = "GSALES_LOG_PAYLOADS";

/// Configuration for the gsales client.
///
/// The transport itself is configured by whoever builds it; these options
/// only control what the SDK logs about the calls it dispatches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Wrap the transport in a [`gsales_transport::TracingTransport`], logging
    /// every remote call with its latency
    pub trace_calls: bool,

    /// Log full request parameters and results at `trace` level
    pub log_payloads: bool,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// This will look for:
    /// - `GSALES_TRACE_CALLS` to log every remote call
    /// - `GSALES_LOG_PAYLOADS` to log request and response payloads
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if a variable is set to something that
    /// is not a boolean.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = read_flag(ENV_TRACE_CALLS)? {
            config.trace_calls = value;
        }
        if let Some(value) = read_flag(ENV_LOG_PAYLOADS)? {
            config.log_payloads = value;
        }

        Ok(config)
    }

    /// Merge this configuration with another; options enabled in either stay enabled.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        self.trace_calls |= other.trace_calls;
        self.log_payloads |= other.log_payloads;
        self
    }
}

fn read_flag(name: &str) -> Result<Option<bool>> {
    match env::var(name) {
        Ok(raw) => parse_flag(&raw)
            .map(Some)
            .ok_or_else(|| Error::InvalidConfig(format!("{name}={raw:?} is not a boolean"))),
        Err(_) => Ok(None),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
