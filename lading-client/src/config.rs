//! Client configuration

fn default_base_url() -> String {
    std::env::var("LADING_API_URL").unwrap_or_else(|_| {
        tracing::debug!("LADING_API_URL not set, using development default");
        "http://127.0.0.1:4000".to_string()
    })
}

/// Client configuration for connecting to the shipping API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "https://shipping.example.com")
    pub base_url: String,

    /// Bearer token for authentication, if the deployment requires one
    pub token: Option<String>,

    /// Request timeout in seconds. `None` means no client-side timeout;
    /// a request in flight cannot be aborted once started.
    pub timeout: Option<u64>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: None,
        }
    }

    /// Create a configuration from the `LADING_API_URL` environment variable
    pub fn from_env() -> Self {
        Self::new(default_base_url())
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
