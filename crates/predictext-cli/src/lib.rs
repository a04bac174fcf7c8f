//! Terminal host for the prediction panel.
//!
//! Each line read from stdin is the new content of the input box. The panel
//! output is drawn to stdout; logs go to stderr.

pub mod args;
pub mod session;
pub mod tracing_setup;

pub use args::Args;
