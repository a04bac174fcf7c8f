use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::RequestMethod;

/// Where and how prediction requests are sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Endpoint base address. The prediction path is appended to it.
    pub api_url: String,
    /// Path of the prediction resource. Default: "/prediction".
    pub prediction_path: String,
    /// GET with a query string or POST with a JSON body. Default: POST.
    pub method: RequestMethod,
    /// Request timeout in milliseconds. Default: 30_000.
    pub timeout_ms: u64,
}

impl TransportConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Full prediction URL, tolerating surrounding whitespace and a trailing
    /// slash on the base address.
    pub fn prediction_url(&self) -> String {
        let base = self.api_url.trim().trim_end_matches('/');
        let path = self.prediction_path.trim().trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            api_url: defaults::DEFAULT_API_URL.to_string(),
            prediction_path: defaults::DEFAULT_PREDICTION_PATH.to_string(),
            method: RequestMethod::default(),
            timeout_ms: defaults::DEFAULT_TIMEOUT_MS,
        }
    }
}
