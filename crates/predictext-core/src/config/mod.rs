//! Configuration loaded from TOML. Every table and field is optional.
//!
//! # Examples
//!
//! ```
//! use predictext_core::config::PredictextConfig;
//! use predictext_core::models::RequestMethod;
//!
//! let config = PredictextConfig::from_toml("[transport]\nmethod = \"get\"").unwrap();
//! assert_eq!(config.transport.method, RequestMethod::Get);
//! assert_eq!(config.transport.prediction_path, "/prediction");
//! ```

pub mod defaults;
mod observability_config;
mod panel_config;
mod transport_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use panel_config::PanelConfig;
pub use transport_config::TransportConfig;

use crate::errors::{PredictextError, PredictextResult};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictextConfig {
    pub transport: TransportConfig,
    pub panel: PanelConfig,
    pub observability: ObservabilityConfig,
}

impl PredictextConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(s: &str) -> PredictextResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> PredictextResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Reject values the transport cannot work with.
    pub fn validate(&self) -> PredictextResult<()> {
        let url = self.transport.api_url.trim();
        if url.is_empty() {
            return Err(config_err("transport.api_url must not be empty"));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(config_err(format!(
                "transport.api_url must be an http(s) address, got {url}"
            )));
        }
        if self.transport.timeout_ms == 0 {
            return Err(config_err("transport.timeout_ms must be positive"));
        }
        Ok(())
    }
}

fn config_err(reason: impl Into<String>) -> PredictextError {
    PredictextError::ConfigError {
        reason: reason.into(),
    }
}
