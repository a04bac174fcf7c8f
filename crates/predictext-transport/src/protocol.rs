//! Response decoding shared by both request variants.

use predictext_core::errors::TransportError;
use predictext_core::models::PredictionResponse;
use serde_json::Value;
use tracing::debug;

/// Decode the body of a 200 response.
///
/// An empty body, a JSON `null`, or valid JSON that does not have the
/// response shape is an absent payload (`Ok(None)`). Only a body that is not
/// JSON at all is malformed.
pub fn decode_response(body: &str) -> Result<Option<PredictionResponse>, TransportError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let value: Value = serde_json::from_str(body).map_err(|e| TransportError::MalformedPayload {
        reason: e.to_string(),
    })?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value::<PredictionResponse>(value) {
        Ok(response) => Ok(Some(response)),
        Err(e) => {
            debug!(error = %e, "payload does not have the prediction shape, ignoring");
            Ok(None)
        }
    }
}
