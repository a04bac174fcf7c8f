// Single source of truth for all default values.

// --- Transport ---
pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_PREDICTION_PATH: &str = "/prediction";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
