//! PredictionPanel — submits input and renders the outcome.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;

use predictext_core::config::PanelConfig;
use predictext_core::models::{InputEvent, PredictionRequest, StatusPolicy, UiState};
use predictext_core::traits::{IPanelView, IPredictionTransport};
use tracing::{debug, warn};

use crate::render;
use crate::trigger::TriggerDecision;

/// What a single submission did to the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input: both containers hidden, nothing sent.
    Reset,
    /// Predictions rendered, in order.
    Rendered { items: Vec<String> },
    /// Response carried nothing to show; panel left as it was.
    Unchanged,
    /// Error container shown with this message.
    Failed { message: String },
}

struct Surface<V> {
    view: V,
    state: UiState,
}

struct Shared<T, V> {
    transport: T,
    surface: Mutex<Surface<V>>,
    config: PanelConfig,
    submissions: AtomicU64,
}

/// The prediction panel.
///
/// Cheap to clone; clones share the same view and transport. The view lock
/// is held only while a transition is applied, never across a request.
pub struct PredictionPanel<T, V> {
    shared: Arc<Shared<T, V>>,
}

impl<T, V> Clone for PredictionPanel<T, V> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T, V> PredictionPanel<T, V>
where
    T: IPredictionTransport + 'static,
    V: IPanelView + 'static,
{
    /// Bind a panel to its view and transport. Starts Idle with the input
    /// cleared.
    pub fn new(mut view: V, transport: T, config: PanelConfig) -> Self {
        view.clear_input();
        view.set_results_visible(false);
        view.set_error_visible(false);
        view.commit();

        Self {
            shared: Arc::new(Shared {
                transport,
                surface: Mutex::new(Surface {
                    view,
                    state: UiState::Idle,
                }),
                config,
                submissions: AtomicU64::new(0),
            }),
        }
    }

    pub fn state(&self) -> UiState {
        self.surface().state
    }

    pub fn config(&self) -> &PanelConfig {
        &self.shared.config
    }

    /// Read the view while no transition is being applied.
    pub fn with_view<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.surface().view)
    }

    /// Submit `text` and apply the result. Blocks for the duration of the
    /// request.
    pub fn submit(&self, text: &str) -> SubmitOutcome {
        let submission = self.shared.submissions.fetch_add(1, Ordering::Relaxed) + 1;

        let Some(request) = PredictionRequest::from_raw(text) else {
            debug!(submission, "blank input, resetting panel");
            self.reset();
            return SubmitOutcome::Reset;
        };

        debug!(
            submission,
            endpoint = self.shared.transport.endpoint(),
            "submitting prediction request"
        );

        match self.shared.transport.fetch(&request) {
            Ok(Some(response)) if !response.is_empty() => {
                let echo = if response.input.is_empty() {
                    request.input.as_str()
                } else {
                    response.input.as_str()
                };
                let items = render::render_items(echo, &response.predictions);
                self.show_results(&items);
                debug!(submission, count = items.len(), "predictions rendered");
                SubmitOutcome::Rendered { items }
            }
            Ok(_) => {
                debug!(submission, "response carried no predictions, panel unchanged");
                SubmitOutcome::Unchanged
            }
            Err(e) if e.is_status() && self.shared.config.status_policy == StatusPolicy::Ignore => {
                debug!(submission, error = %e, "ignoring non-200 response");
                SubmitOutcome::Unchanged
            }
            Err(e) => {
                let message = e.to_string();
                warn!(submission, error = %message, "prediction request failed");
                self.show_error(&message);
                SubmitOutcome::Failed { message }
            }
        }
    }

    /// Run [`submit`](Self::submit) on its own thread.
    pub fn spawn_submit(&self, text: impl Into<String>) -> JoinHandle<SubmitOutcome> {
        let panel = self.clone();
        let text = text.into();
        std::thread::spawn(move || panel.submit(&text))
    }

    /// Apply the configured trigger mode to an input event.
    ///
    /// Returns the handle of the scheduled submission, if one was scheduled.
    /// Resets happen immediately.
    pub fn handle_event(&self, event: InputEvent) -> Option<JoinHandle<SubmitOutcome>> {
        match TriggerDecision::decide(self.shared.config.trigger_mode, &event) {
            TriggerDecision::Submit if event.text().trim().is_empty() => {
                self.reset();
                None
            }
            TriggerDecision::Submit => Some(self.spawn_submit(event.text())),
            TriggerDecision::Reset => {
                self.reset();
                None
            }
            TriggerDecision::Ignore => None,
        }
    }

    /// Hide both containers.
    pub fn reset(&self) {
        let mut surface = self.surface();
        surface.view.set_results_visible(false);
        surface.view.set_error_visible(false);
        surface.state = UiState::Idle;
        surface.view.commit();
    }

    fn show_results(&self, items: &[String]) {
        let mut surface = self.surface();
        surface.view.clear_results();
        for item in items {
            surface.view.append_result(item);
        }
        surface.view.set_results_visible(true);
        surface.view.set_error_visible(false);
        surface.state = UiState::ResultsShown;
        surface.view.commit();
    }

    fn show_error(&self, message: &str) {
        let mut surface = self.surface();
        surface.view.set_results_visible(false);
        surface.view.set_error_visible(true);
        surface.view.set_error_message(message);
        surface.state = UiState::ErrorShown;
        surface.view.commit();
    }

    fn surface(&self) -> MutexGuard<'_, Surface<V>> {
        self.shared
            .surface
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
