use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the prediction request is sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestMethod {
    /// `GET {endpoint}/prediction?input=...`
    Get,
    /// `POST {endpoint}/prediction` with a JSON body.
    #[default]
    Post,
}

/// Which input events trigger a submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerMode {
    /// Only the submit button submits.
    ExplicitButton,
    /// Every key release submits the current input.
    #[default]
    EveryKeystroke,
    /// Space or Enter submits; clearing the input resets.
    WhitespaceKeyOnly,
}

/// What to do with a response whose status is not 200.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Show the error container, same as a network failure.
    #[default]
    Surface,
    /// Leave the panel untouched.
    Ignore,
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

impl FromStr for RequestMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(Self::Get),
            "post" => Ok(Self::Post),
            other => Err(format!("unknown request method: {other}")),
        }
    }
}

impl FromStr for TriggerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "button" | "explicit_button" => Ok(Self::ExplicitButton),
            "keystroke" | "every_keystroke" => Ok(Self::EveryKeystroke),
            "whitespace" | "whitespace_key_only" => Ok(Self::WhitespaceKeyOnly),
            other => Err(format!("unknown trigger mode: {other}")),
        }
    }
}
