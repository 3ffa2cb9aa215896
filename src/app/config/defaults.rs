// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for runtime configuration.
//!
//! This module is the single source of truth for the extraction-service
//! endpoint and the environment variable that overrides it.

// ==========================================================================
// Endpoint Defaults
// ==========================================================================

/// Default extraction-service endpoint when no override is provided.
///
/// Matches the address the service binds to when run locally alongside
/// this client.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/upload";

/// Environment variable that overrides the extraction-service endpoint.
pub const ENV_ENDPOINT: &str = "GEOLOCATOR_API_URL";

// ==========================================================================
// Compile-Time Validation
// ==========================================================================

const _: () = {
    assert!(!DEFAULT_ENDPOINT.is_empty());
    assert!(!ENV_ENDPOINT.is_empty());
};
