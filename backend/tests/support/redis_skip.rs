//! Helpers for controlling live Redis test behaviour.
//!
//! Suites that need a real server read its address from `REDIS_URL`. When the
//! variable is unset the suite is skipped with a marker line. When it is set
//! but the server cannot be reached, the suite fails unless
//! `SKIP_TEST_REDIS` is truthy, so CI breakage is not masked.

/// Returns true when the `SKIP_TEST_REDIS` environment variable is set to a
/// truthy value.
///
/// Truthy values: "1", "true", "yes" (case-insensitive).
pub fn should_skip_test_redis() -> bool {
    std::env::var("SKIP_TEST_REDIS")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// The configured Redis URL, or `None` after printing a skip marker.
pub fn redis_url_or_skip() -> Option<String> {
    match std::env::var("REDIS_URL") {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("SKIP-TEST-REDIS: REDIS_URL is not set");
            None
        }
    }
}

/// Handles Redis setup failures consistently across integration tests.
///
/// When `SKIP_TEST_REDIS` is truthy, prints a skip marker and returns `None`.
/// Otherwise, panics with a clear failure message.
pub fn handle_redis_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_redis() {
        eprintln!("SKIP-TEST-REDIS: {reason}");
        None
    } else {
        panic!("Redis setup failed: {reason}. Set SKIP_TEST_REDIS=1 to skip.");
    }
}
