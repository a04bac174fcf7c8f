use serde::{Deserialize, Serialize};

/// Visible state of the panel. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiState {
    /// Results and error containers both hidden.
    #[default]
    Idle,
    /// Results container visible, error hidden.
    ResultsShown,
    /// Error container visible, results hidden.
    ErrorShown,
}

impl UiState {
    pub fn results_visible(self) -> bool {
        matches!(self, Self::ResultsShown)
    }

    pub fn error_visible(self) -> bool {
        matches!(self, Self::ErrorShown)
    }
}
