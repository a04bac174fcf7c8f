use std::path::PathBuf;

use clap::Parser;
use predictext_core::config::PredictextConfig;
use predictext_core::errors::PredictextResult;
use predictext_core::models::{RequestMethod, StatusPolicy, TriggerMode};

/// Type text, get predictions.
#[derive(Parser, Debug)]
#[command(name = "predictext", author, version, about)]
pub struct Args {
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Endpoint base address; the prediction path is appended to it
    #[arg(long, env = "API_URL")]
    pub api_url: Option<String>,

    /// Request method: get or post
    #[arg(long)]
    pub method: Option<RequestMethod>,

    /// Trigger mode: button, keystroke, or whitespace
    #[arg(long)]
    pub trigger: Option<TriggerMode>,

    /// Leave the panel untouched on non-200 responses
    #[arg(long)]
    pub ignore_status: bool,

    /// Submit one input, print the result, and exit
    #[arg(long)]
    pub once: Option<String>,

    /// Log level, overridden by PREDICTEXT_LOG
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl Args {
    /// Load the config file (or defaults) and apply command-line overrides.
    pub fn resolve_config(&self) -> PredictextResult<PredictextConfig> {
        let mut config = match &self.config {
            Some(path) => PredictextConfig::from_file(path)?,
            None => PredictextConfig::default(),
        };

        if let Some(url) = &self.api_url {
            config.transport.api_url = url.trim().to_string();
        }
        if let Some(method) = self.method {
            config.transport.method = method;
        }
        if let Some(trigger) = self.trigger {
            config.panel.trigger_mode = trigger;
        }
        if self.ignore_status {
            config.panel.status_policy = StatusPolicy::Ignore;
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
        if self.json_logs {
            config.observability.json_logs = true;
        }

        config.validate()?;
        Ok(config)
    }
}
