//! Application configuration loaded from environment variables.

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Base URL of the backend API serving post data and uploaded media.
    /// e.g., "http://127.0.0.1:8000" or "https://api.example.com"
    pub api_base_url: String,

    /// Site name shown in page titles.
    pub site_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (all have defaults for local development)
    ///
    /// Optional:
    /// - `CHRONICLE_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `CHRONICLE_API_BASE_URL`: Backend API base URL
    ///   (default: "http://127.0.0.1:8000", trailing slash stripped)
    /// - `CHRONICLE_SITE_NAME`: Site name (default: "Chronicle")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("CHRONICLE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let api_base_url = std::env::var("CHRONICLE_API_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string())
            .trim_end_matches('/')
            .to_string();

        let site_name =
            std::env::var("CHRONICLE_SITE_NAME").unwrap_or_else(|_| "Chronicle".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            api_base_url = %api_base_url,
            site_name = %site_name,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            api_base_url,
            site_name,
        })
    }
}
