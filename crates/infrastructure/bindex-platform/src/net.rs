use std::time::Duration;

/// HTTP client shared by all platform calls. Falls back to the library
/// default if the configured builder is rejected.
pub fn default_http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("bindex/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(bindex_config::HTTP_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(bindex_config::HTTP_CONNECT_TIMEOUT_SECS))
        .build()
}
