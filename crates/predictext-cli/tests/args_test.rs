use std::io::Write;

use clap::Parser;
use predictext_cli::Args;
use predictext_core::models::{RequestMethod, StatusPolicy, TriggerMode};

fn parse(args: &[&str]) -> Args {
    let mut argv = vec!["predictext"];
    argv.extend_from_slice(args);
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn flags_override_defaults() {
    let args = parse(&[
        "--api-url",
        " https://predict.example.com ",
        "--method",
        "get",
        "--trigger",
        "whitespace",
        "--ignore-status",
    ]);

    let config = args.resolve_config().unwrap();
    assert_eq!(config.transport.api_url, "https://predict.example.com");
    assert_eq!(config.transport.method, RequestMethod::Get);
    assert_eq!(config.panel.trigger_mode, TriggerMode::WhitespaceKeyOnly);
    assert_eq!(config.panel.status_policy, StatusPolicy::Ignore);
}

#[test]
fn flags_override_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[transport]\napi_url = \"http://from-file:9000\"\nmethod = \"get\"\n\n[observability]\nlog_level = \"warn\""
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let args = parse(&["--config", &path, "--method", "post", "--log-level", "debug"]);

    let config = args.resolve_config().unwrap();
    assert_eq!(config.transport.method, RequestMethod::Post);
    assert_eq!(config.observability.log_level, "debug");
    // Untouched by flags.
    assert_eq!(config.transport.timeout_ms, 30_000);
}

#[test]
fn invalid_api_url_is_rejected() {
    let args = parse(&["--api-url", "localhost:8080"]);
    assert!(args.resolve_config().is_err());
}

#[test]
fn unknown_method_fails_to_parse() {
    assert!(Args::try_parse_from(["predictext", "--method", "delete"]).is_err());
}
