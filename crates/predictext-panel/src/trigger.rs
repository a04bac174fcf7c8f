//! Mapping of input events to panel actions for each trigger mode.

use predictext_core::models::{InputEvent, TriggerMode};

/// What the panel should do with an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerDecision {
    Submit,
    Reset,
    Ignore,
}

impl TriggerDecision {
    pub fn decide(mode: TriggerMode, event: &InputEvent) -> Self {
        let (key, text) = match event {
            InputEvent::ButtonPressed { .. } => return Self::Submit,
            InputEvent::KeyReleased { key, text } => (*key, text.as_str()),
        };

        match mode {
            TriggerMode::ExplicitButton => Self::Ignore,
            TriggerMode::EveryKeystroke => {
                if text.trim().is_empty() {
                    Self::Reset
                } else {
                    Self::Submit
                }
            }
            TriggerMode::WhitespaceKeyOnly => {
                if text.is_empty() {
                    Self::Reset
                } else if key.is_word_break() {
                    Self::Submit
                } else {
                    Self::Ignore
                }
            }
        }
    }
}
