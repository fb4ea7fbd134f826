// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Service Defaults
// ==========================================================================

/// Gallery API base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Default per-request timeout (in seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Minimum request timeout (in seconds).
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_TIMEOUT_SECS: u64 = 120;

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "GALLERY_ADMIN_API_URL";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_is_within_bounds() {
        assert!((MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&DEFAULT_TIMEOUT_SECS));
    }
}
