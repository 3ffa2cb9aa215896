// SPDX-License-Identifier: MPL-2.0
//! Runtime configuration.
//!
//! The only configurable value is the extraction-service endpoint. It is
//! resolved exactly once at startup from the environment and treated as an
//! opaque string afterwards: no validation, no re-reads, no persistence.
//!
//! # Resolution
//!
//! 1. `GEOLOCATOR_API_URL` environment variable, when set and non-empty
//! 2. Falls back to `http://localhost:8000/upload`

pub mod defaults;

// Re-export the endpoint constants alongside the config type
pub use defaults::{DEFAULT_ENDPOINT, ENV_ENDPOINT};

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Extraction-service endpoint URL.
    pub endpoint: String,
}

impl Config {
    /// Resolves configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            endpoint: resolve_endpoint(std::env::var(ENV_ENDPOINT).ok()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// Picks the endpoint from an optional override value.
///
/// An empty override counts as absent, so an accidentally blank variable
/// cannot produce requests against an empty URL.
#[must_use]
pub fn resolve_endpoint(override_value: Option<String>) -> String {
    match override_value {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_ENDPOINT.to_string(),
    }
}
