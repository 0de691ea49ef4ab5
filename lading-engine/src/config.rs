//! Engine configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Shipments fetched per page when loading incrementally.
pub const DEFAULT_PAGE_LIMIT: u32 = 30;

fn default_base_url() -> String {
    std::env::var("LADING_API_URL").unwrap_or_else(|_| {
        tracing::debug!("LADING_API_URL not set, using development default");
        "http://127.0.0.1:4000".to_string()
    })
}

fn default_page_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Shipping API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token, if the deployment requires one
    #[serde(default)]
    pub token: Option<String>,
    /// Request timeout in seconds (`None` = no client-side timeout)
    #[serde(default)]
    pub timeout: Option<u64>,
    /// Shipments per page for incremental loading
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout: None,
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file, falling back to defaults when
    /// the file does not exist yet.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content).map_err(|e| EngineError::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), EngineError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| EngineError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Derive the HTTP client configuration.
    pub fn client_config(&self) -> lading_client::ClientConfig {
        let mut config = lading_client::ClientConfig::new(&self.base_url);
        if let Some(token) = &self.token {
            config = config.with_token(token);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        config
    }
}
