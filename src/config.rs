use std::time::Duration;

// =============================================================================
// Package index
// =============================================================================

/// Default base URL of the ALT Linux repository database API
pub const DEFAULT_BASE_URL: &str = "https://rdb.altlinux.org/api";

/// Environment variable overriding the package index base URL
pub const BASE_URL_ENV: &str = "ALT_RDB_URL";

/// User agent sent with every request to the package index
pub const USER_AGENT: &str = concat!("alt-branch-diff/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Time-related constants
// =============================================================================

/// Budget shared by both listing fetches, in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: &str = "30";

/// Parses a `--timeout` value given in (fractional) seconds.
///
/// Accepts any finite, strictly positive number of seconds.
pub fn parse_timeout(value: &str) -> Result<Duration, String> {
    let secs: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("`{value}` is not a number of seconds"))?;

    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("timeout must be a positive number, got `{value}`"));
    }

    Duration::try_from_secs_f64(secs).map_err(|e| e.to_string())
}
