use serde::{Deserialize, Deserializer, Serialize};

/// Body of a prediction request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Trimmed, non-empty input text.
    pub input: String,
}

impl PredictionRequest {
    /// Build a request from raw input text.
    ///
    /// Returns `None` when the text is empty after trimming.
    pub fn from_raw(text: &str) -> Option<Self> {
        let input = text.trim();
        if input.is_empty() {
            return None;
        }
        Some(Self {
            input: input.to_string(),
        })
    }
}

/// Body of a successful prediction response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Input echoed back by the server. Empty when the server omitted it.
    #[serde(default)]
    pub input: String,
    /// Predictions in server order. Absent and `null` both read as empty.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub predictions: Vec<String>,
}

impl PredictionResponse {
    pub fn new(input: impl Into<String>, predictions: Vec<String>) -> Self {
        Self {
            input: input.into(),
            predictions,
        }
    }

    /// Whether there is anything to render.
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}

fn nullable_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
