use serde::{Deserialize, Serialize};

use crate::models::{StatusPolicy, TriggerMode};

/// Behavior of the prediction panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Which input events submit. Default: every keystroke.
    pub trigger_mode: TriggerMode,
    /// Handling of non-200 responses. Default: surface as an error.
    pub status_policy: StatusPolicy,
}
