use super::TransportError;

/// Top-level error for the predictext workspace.
#[derive(Debug, thiserror::Error)]
pub enum PredictextError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("invalid configuration: {reason}")]
    ConfigError { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for PredictextError {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigError {
            reason: e.to_string(),
        }
    }
}

pub type PredictextResult<T> = Result<T, PredictextError>;
