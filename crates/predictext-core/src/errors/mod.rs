//! Error types for every layer of the panel.

mod predictext_error;
mod transport_error;

pub use predictext_error::{PredictextError, PredictextResult};
pub use transport_error::TransportError;
