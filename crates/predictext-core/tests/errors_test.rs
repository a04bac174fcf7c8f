use predictext_core::errors::*;

#[test]
fn network_failure_carries_reason() {
    let err = TransportError::NetworkFailure {
        reason: "connection refused".into(),
    };
    assert_eq!(err.to_string(), "network error: connection refused");
    assert!(!err.is_status());
}

#[test]
fn unexpected_status_carries_code_and_url() {
    let err = TransportError::UnexpectedStatus {
        status: 500,
        url: "http://localhost:8080/prediction".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("500"));
    assert!(msg.contains("http://localhost:8080/prediction"));
    assert!(err.is_status());
}

#[test]
fn malformed_payload_carries_reason() {
    let err = TransportError::MalformedPayload {
        reason: "expected value at line 1".into(),
    };
    assert!(err.to_string().contains("expected value at line 1"));
}

// --- From impls ---

#[test]
fn transport_error_converts_transparently() {
    let inner = TransportError::NetworkFailure {
        reason: "timed out".into(),
    };
    let expected = inner.to_string();
    let err: PredictextError = inner.into();
    assert!(matches!(err, PredictextError::Transport(_)));
    assert_eq!(err.to_string(), expected);
}

#[test]
fn io_error_converts() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: PredictextError = io_err.into();
    assert!(matches!(err, PredictextError::Io(_)));
}
