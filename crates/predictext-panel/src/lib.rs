//! # predictext-panel
//!
//! The prediction panel: captures input, submits it through an
//! [`IPredictionTransport`](predictext_core::IPredictionTransport), and
//! renders predictions or an error into an
//! [`IPanelView`](predictext_core::IPanelView).
//!
//! ## State transitions
//!
//! | From | Event | To |
//! |------|-------|----|
//! | any | blank input | Idle |
//! | any | 200 with predictions | ResultsShown |
//! | any | 200 without predictions | unchanged |
//! | any | network failure, bad payload, non-200 | ErrorShown |
//!
//! Overlapping submissions are not sequenced: the last one to resolve
//! decides what is shown.

pub mod panel;
pub mod render;
pub mod trigger;
pub mod view;

pub use panel::{PredictionPanel, SubmitOutcome};
pub use trigger::TriggerDecision;
pub use view::{ConsoleView, MemoryView, PanelSnapshot};
