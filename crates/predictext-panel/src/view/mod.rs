//! Ready-made [`IPanelView`](predictext_core::IPanelView) implementations.

mod console;
mod memory;

pub use console::ConsoleView;
pub use memory::{MemoryView, PanelSnapshot};
