//! Application state shared across all request handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;

/// Timeout applied to every backend API request.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared application state available to all request handlers.
///
/// Immutable after startup: a connection-pooling HTTP client and the
/// configuration. There is deliberately no response cache; every page load
/// reflects the backend as of that request.
#[derive(Clone)]
pub struct AppState {
    /// HTTP client for backend API requests.
    pub http: reqwest::Client,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()?;

        tracing::info!(
            api_base_url = %config.api_base_url,
            timeout_secs = UPSTREAM_TIMEOUT.as_secs(),
            "application state initialized"
        );

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }
}
