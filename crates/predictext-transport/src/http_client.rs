//! Blocking HTTP client for the prediction endpoint.

use predictext_core::config::TransportConfig;
use predictext_core::errors::{PredictextResult, TransportError};
use predictext_core::models::{PredictionRequest, PredictionResponse, RequestMethod};
use predictext_core::traits::IPredictionTransport;
use reqwest::StatusCode;

use crate::protocol::decode_response;

/// Convert any displayable failure into a `TransportError::NetworkFailure`.
fn net_err(e: impl std::fmt::Display) -> TransportError {
    TransportError::NetworkFailure {
        reason: e.to_string(),
    }
}

/// HTTP transport. Wraps a reqwest blocking client bound to one endpoint.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    url: String,
    method: RequestMethod,
}

impl HttpTransport {
    pub fn new(config: &TransportConfig) -> PredictextResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .gzip(true)
            .build()
            .map_err(net_err)?;

        Ok(Self {
            client,
            url: config.prediction_url(),
            method: config.method,
        })
    }
}

impl IPredictionTransport for HttpTransport {
    fn fetch(
        &self,
        request: &PredictionRequest,
    ) -> Result<Option<PredictionResponse>, TransportError> {
        let builder = match self.method {
            RequestMethod::Post => self.client.post(&self.url).json(request),
            RequestMethod::Get => self
                .client
                .get(&self.url)
                .query(&[("input", request.input.as_str())]),
        };

        tracing::debug!(method = %self.method, url = %self.url, "sending prediction request");
        let resp = builder.send().map_err(net_err)?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(TransportError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = resp.text().map_err(net_err)?;
        decode_response(&body)
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}
