use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use predictext_core::config::PanelConfig;
use predictext_core::errors::TransportError;
use predictext_core::models::{PredictionRequest, PredictionResponse, UiState};
use predictext_core::traits::IPredictionTransport;
use predictext_panel::{MemoryView, PredictionPanel, SubmitOutcome};
use proptest::prelude::*;

/// Answers every request with the same reply and counts calls.
struct FixedTransport {
    reply: Result<Option<PredictionResponse>, TransportError>,
    calls: AtomicUsize,
}

impl FixedTransport {
    fn new(reply: Result<Option<PredictionResponse>, TransportError>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
        })
    }
}

impl IPredictionTransport for FixedTransport {
    fn fetch(
        &self,
        _request: &PredictionRequest,
    ) -> Result<Option<PredictionResponse>, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }

    fn endpoint(&self) -> &str {
        "mock://prediction"
    }
}

fn panel(transport: &Arc<FixedTransport>) -> PredictionPanel<Arc<FixedTransport>, MemoryView> {
    PredictionPanel::new(MemoryView::new(), Arc::clone(transport), PanelConfig::default())
}

proptest! {
    #[test]
    fn blank_input_never_calls_transport(input in "[ \t\n\r]{0,20}") {
        let transport = FixedTransport::new(Ok(None));
        let panel = panel(&transport);

        prop_assert_eq!(panel.submit(&input), SubmitOutcome::Reset);
        prop_assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
        prop_assert_eq!(panel.state(), UiState::Idle);
        let snap = panel.with_view(|v| v.snapshot());
        prop_assert!(!snap.results_visible);
        prop_assert!(!snap.error_visible);
    }

    #[test]
    fn one_item_per_non_blank_prediction_in_order(
        input in "[a-z]{1,8}( [a-z]{1,8}){0,3}",
        predictions in proptest::collection::vec("[a-z ]{0,6}", 1..8),
    ) {
        let transport = FixedTransport::new(Ok(Some(PredictionResponse::new(
            input.clone(),
            predictions.clone(),
        ))));
        let panel = panel(&transport);

        panel.submit(&input);

        let expected: Vec<String> = predictions
            .iter()
            .filter(|p| !p.trim().is_empty())
            .map(|p| format!("{input} {p}"))
            .collect();
        let snap = panel.with_view(|v| v.snapshot());
        prop_assert_eq!(snap.results, expected);
        prop_assert!(snap.results_visible);
        prop_assert!(!snap.error_visible);
    }

    #[test]
    fn failure_message_is_the_error_text(reason in "[ -~]{1,40}") {
        let failure = TransportError::NetworkFailure { reason };
        let transport = FixedTransport::new(Err(failure.clone()));
        let panel = panel(&transport);

        panel.submit("x");

        let snap = panel.with_view(|v| v.snapshot());
        prop_assert!(snap.error_visible);
        prop_assert!(!snap.results_visible);
        prop_assert_eq!(snap.error_message, failure.to_string());
    }

    #[test]
    fn visibility_is_never_both(steps in proptest::collection::vec(0u8..4, 1..12)) {
        let ok = FixedTransport::new(Ok(Some(PredictionResponse::new("a", vec!["b".into()]))));
        let empty = FixedTransport::new(Ok(None));
        let failing = FixedTransport::new(Err(TransportError::NetworkFailure {
            reason: "down".into(),
        }));
        let view_panel = PredictionPanel::new(
            MemoryView::new(),
            Arc::clone(&ok),
            PanelConfig::default(),
        );
        let empty_panel = panel(&empty);
        let failing_panel = panel(&failing);

        for step in steps {
            let p = match step {
                0 => { view_panel.submit("a"); &view_panel }
                1 => { view_panel.submit(" "); &view_panel }
                2 => { empty_panel.submit("a"); &empty_panel }
                _ => { failing_panel.submit("a"); &failing_panel }
            };
            let snap = p.with_view(|v| v.snapshot());
            prop_assert!(!(snap.results_visible && snap.error_visible));
            prop_assert_eq!(snap.results_visible, p.state().results_visible());
            prop_assert_eq!(snap.error_visible, p.state().error_visible());
        }
    }
}
