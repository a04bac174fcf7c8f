use crate::errors::TransportError;
use crate::models::{PredictionRequest, PredictionResponse};

/// Sends one prediction request and reads the answer.
pub trait IPredictionTransport: Send + Sync {
    /// Fetch predictions for `request`.
    ///
    /// `Ok(None)` means the server answered 200 without a payload.
    fn fetch(
        &self,
        request: &PredictionRequest,
    ) -> Result<Option<PredictionResponse>, TransportError>;

    /// Address the transport sends to, for logging.
    fn endpoint(&self) -> &str;
}

impl<T: IPredictionTransport + ?Sized> IPredictionTransport for std::sync::Arc<T> {
    fn fetch(
        &self,
        request: &PredictionRequest,
    ) -> Result<Option<PredictionResponse>, TransportError> {
        (**self).fetch(request)
    }

    fn endpoint(&self) -> &str {
        (**self).endpoint()
    }
}
