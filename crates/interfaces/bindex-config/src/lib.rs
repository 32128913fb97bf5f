//! Central configuration constants for runtime limits and defaults.

use std::time::Duration;

/// Minimum time an explicit refresh keeps the loading indicator visible,
/// independent of actual fetch latency. Purely for perceptible feedback.
pub const MIN_REFRESH_VISIBLE_MS: u64 = 300;

/// [`MIN_REFRESH_VISIBLE_MS`] as a [`Duration`].
pub const fn min_refresh_visible() -> Duration {
    Duration::from_millis(MIN_REFRESH_VISIBLE_MS)
}

/// Capacity of the kernel's domain-event channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Platform REST API version the live client speaks by default.
pub const DEFAULT_API_VERSION: &str = "v60.0";

/// Environment variable consulted for the platform bearer token when the
/// settings file does not name another one.
pub const DEFAULT_TOKEN_ENV: &str = "BINDEX_ACCESS_TOKEN";

/// Overall request timeout for platform HTTP calls, in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Connect timeout for platform HTTP calls, in seconds.
pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
