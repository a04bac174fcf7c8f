/// predictext version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "PREDICTEXT_LOG";

/// Separator between the echoed input and a prediction in a rendered item.
pub const ITEM_SEPARATOR: &str = " ";
