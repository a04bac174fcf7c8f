mod input_event;
mod options;
mod prediction;
mod ui_state;

pub use input_event::{InputEvent, Key};
pub use options::{RequestMethod, StatusPolicy, TriggerMode};
pub use prediction::{PredictionRequest, PredictionResponse};
pub use ui_state::UiState;
