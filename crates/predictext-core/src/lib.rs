//! # predictext-core
//!
//! Foundation crate for the predictext panel.
//! Defines the wire models, UI state, errors, config, constants, and the
//! transport/view traits. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PredictextConfig;
pub use errors::{PredictextError, PredictextResult, TransportError};
pub use models::{
    InputEvent, Key, PredictionRequest, PredictionResponse, RequestMethod, StatusPolicy,
    TriggerMode, UiState,
};
pub use traits::{IPanelView, IPredictionTransport};
