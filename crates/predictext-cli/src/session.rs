//! Feeding terminal input into a panel.

use std::io::BufRead;

use predictext_core::models::{InputEvent, Key, TriggerMode, UiState};
use predictext_core::traits::{IPanelView, IPredictionTransport};
use predictext_panel::{PredictionPanel, SubmitOutcome};
use tracing::{debug, info};

/// Turn one line of terminal input into a panel event.
///
/// A line ends with Enter, so it is a key release carrying the whole line.
/// In button mode pressing Enter stands in for the button.
pub fn line_event(mode: TriggerMode, line: &str) -> InputEvent {
    let text = line.trim_end_matches(['\r', '\n']).to_string();
    match mode {
        TriggerMode::ExplicitButton => InputEvent::ButtonPressed { text },
        _ => InputEvent::KeyReleased {
            key: Key::Enter,
            text,
        },
    }
}

/// Read lines until EOF, dispatching each as an input event.
///
/// Submissions run concurrently; all of them have resolved when this
/// returns. Returns the final panel state.
pub fn run_interactive<T, V, R>(panel: &PredictionPanel<T, V>, input: R) -> std::io::Result<UiState>
where
    T: IPredictionTransport + 'static,
    V: IPanelView + 'static,
    R: BufRead,
{
    let mode = panel.config().trigger_mode;
    let mut pending = Vec::new();

    for line in input.lines() {
        let line = line?;
        if let Some(handle) = panel.handle_event(line_event(mode, &line)) {
            pending.push(handle);
        }
    }

    debug!(pending = pending.len(), "input closed, waiting for submissions");
    for handle in pending {
        if handle.join().is_err() {
            tracing::error!("submission thread panicked");
        }
    }

    let state = panel.state();
    info!(?state, "session finished");
    Ok(state)
}

/// Submit a single input and wait for it.
pub fn run_once<T, V>(panel: &PredictionPanel<T, V>, text: &str) -> SubmitOutcome
where
    T: IPredictionTransport + 'static,
    V: IPanelView + 'static,
{
    panel.submit(text)
}
