use std::sync::{mpsc, Mutex};
use std::time::{Duration, Instant};

use predictext_core::config::{PanelConfig, TransportConfig};
use predictext_core::models::{RequestMethod, UiState};
use predictext_panel::{MemoryView, PredictionPanel, SubmitOutcome};
use predictext_transport::HttpTransport;
use test_fixtures::{unreachable_base_url, StubResponse, StubServer};

fn http_panel(
    base_url: &str,
    method: RequestMethod,
) -> PredictionPanel<HttpTransport, MemoryView> {
    let transport = HttpTransport::new(&TransportConfig {
        api_url: base_url.to_string(),
        method,
        timeout_ms: 5_000,
        ..Default::default()
    })
    .unwrap();
    PredictionPanel::new(MemoryView::new(), transport, PanelConfig::default())
}

#[test]
fn post_round_trip_renders_predictions() {
    let server = StubServer::fixed(StubResponse::fixture("responses/hello_world.json"));
    let panel = http_panel(&server.base_url(), RequestMethod::Post);

    panel.submit("hello world");

    let snap = panel.with_view(|v| v.snapshot());
    assert_eq!(snap.results, vec!["hello world foo", "hello world bar"]);
    assert!(snap.results_visible);
    assert!(!snap.error_visible);
}

#[test]
fn get_round_trip_renders_predictions() {
    let server = StubServer::fixed(StubResponse::fixture("responses/hello_world.json"));
    let panel = http_panel(&server.base_url(), RequestMethod::Get);

    panel.submit("hello world");

    assert_eq!(panel.state(), UiState::ResultsShown);
    assert_eq!(
        server.requests()[0].query_param("input").as_deref(),
        Some("hello world")
    );
}

#[test]
fn whitespace_input_never_reaches_server() {
    let server = StubServer::fixed(StubResponse::fixture("responses/hello_world.json"));
    let panel = http_panel(&server.base_url(), RequestMethod::Post);

    assert_eq!(panel.submit(" \t "), SubmitOutcome::Reset);
    assert_eq!(server.request_count(), 0);
}

#[test]
fn http_500_shows_error() {
    let server = StubServer::fixed(StubResponse::status(500));
    let panel = http_panel(&server.base_url(), RequestMethod::Post);

    let outcome = panel.submit("x");

    let SubmitOutcome::Failed { message } = outcome else {
        panic!("expected a failed submission");
    };
    assert!(message.contains("500"));
    let snap = panel.with_view(|v| v.snapshot());
    assert!(snap.error_visible);
    assert!(!snap.results_visible);
    assert_eq!(snap.error_message, message);
}

#[test]
fn empty_predictions_fixture_is_a_no_op() {
    let server = StubServer::start(|req| {
        if req.input().as_deref() == Some("x") {
            StubResponse::fixture("responses/empty_predictions.json")
        } else {
            StubResponse::fixture("responses/hello_world.json")
        }
    });
    let panel = http_panel(&server.base_url(), RequestMethod::Post);
    panel.submit("hello world");
    let before = panel.with_view(|v| v.snapshot());

    assert_eq!(panel.submit("x"), SubmitOutcome::Unchanged);
    assert_eq!(panel.with_view(|v| v.snapshot()), before);
}

#[test]
fn wrong_shape_payloads_leave_results_in_place() {
    let server = StubServer::start(|req| match req.input().as_deref() {
        Some("string") => StubResponse::ok(r#"{"input":"x","predictions":"foo"}"#),
        Some("numbers") => StubResponse::ok(r#"{"input":"x","predictions":[1,2]}"#),
        Some("null echo") => StubResponse::ok(r#"{"input":null,"predictions":["a"]}"#),
        _ => StubResponse::fixture("responses/hello_world.json"),
    });
    let panel = http_panel(&server.base_url(), RequestMethod::Post);
    panel.submit("hello world");
    let before = panel.with_view(|v| v.snapshot());

    for input in ["string", "numbers", "null echo"] {
        assert_eq!(panel.submit(input), SubmitOutcome::Unchanged, "input: {input}");
        assert_eq!(panel.with_view(|v| v.snapshot()), before);
        assert_eq!(panel.state(), UiState::ResultsShown);
    }
}

#[test]
fn non_json_payload_shows_error() {
    let server = StubServer::fixed(StubResponse::fixture("responses/malformed.txt"));
    let panel = http_panel(&server.base_url(), RequestMethod::Post);

    assert!(matches!(panel.submit("x"), SubmitOutcome::Failed { .. }));
    assert_eq!(panel.state(), UiState::ErrorShown);
}

#[test]
fn missing_predictions_fixture_is_a_no_op() {
    let server = StubServer::fixed(StubResponse::fixture("responses/missing_predictions.json"));
    let panel = http_panel(&server.base_url(), RequestMethod::Post);

    assert_eq!(panel.submit("x"), SubmitOutcome::Unchanged);
    assert_eq!(panel.state(), UiState::Idle);
}

#[test]
fn blank_predictions_fixture_skips_blank_items() {
    let server = StubServer::fixed(StubResponse::fixture("responses/blank_predictions.json"));
    let panel = http_panel(&server.base_url(), RequestMethod::Post);

    panel.submit("the quick");

    assert_eq!(
        panel.with_view(|v| v.snapshot()).results,
        vec!["the quick brown", "the quick fox"]
    );
}

#[test]
fn unreachable_endpoint_shows_network_error() {
    let panel = http_panel(&unreachable_base_url(), RequestMethod::Post);

    let outcome = panel.submit("x");

    assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
    let snap = panel.with_view(|v| v.snapshot());
    assert!(snap.error_visible);
    assert!(snap.error_message.starts_with("network error"));
}

#[test]
fn last_resolved_submission_wins() {
    // "slow" is sent first but held until "fast" has been answered.
    let (release, gate) = mpsc::channel::<()>();
    let gate = Mutex::new(gate);
    let server = StubServer::start(move |req| match req.input().as_deref() {
        Some("slow") => {
            let _ = gate.lock().unwrap().recv_timeout(Duration::from_secs(5));
            StubResponse::ok(r#"{"input":"slow","predictions":["one"]}"#)
        }
        _ => StubResponse::ok(r#"{"input":"fast","predictions":["two"]}"#),
    });
    let panel = http_panel(&server.base_url(), RequestMethod::Post);

    let slow = panel.spawn_submit("slow");
    let deadline = Instant::now() + Duration::from_secs(5);
    while server.request_count() == 0 && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(server.requests()[0].input().as_deref(), Some("slow"));

    let fast = panel.spawn_submit("fast");
    fast.join().unwrap();
    assert_eq!(panel.with_view(|v| v.snapshot()).results, vec!["fast two"]);

    release.send(()).unwrap();
    slow.join().unwrap();
    assert_eq!(panel.with_view(|v| v.snapshot()).results, vec!["slow one"]);
    assert_eq!(server.request_count(), 2);
}
