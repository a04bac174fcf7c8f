/// Failures of a single prediction request.
///
/// The `Display` text of each variant is what the panel shows in its error
/// container.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {reason}")]
    NetworkFailure { reason: String },

    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("malformed prediction payload: {reason}")]
    MalformedPayload { reason: String },
}

impl TransportError {
    /// Whether the server answered with a status other than 200.
    pub fn is_status(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { .. })
    }
}
