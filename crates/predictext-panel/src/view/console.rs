use std::io::Write;

use predictext_core::traits::IPanelView;

use super::memory::{MemoryView, PanelSnapshot};

/// A view that redraws the visible panel to a writer after each transition.
///
/// Nothing is written when a transition leaves the visible output unchanged.
pub struct ConsoleView<W: Write + Send> {
    out: W,
    staged: MemoryView,
    last_drawn: Option<PanelSnapshot>,
}

impl<W: Write + Send> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            staged: MemoryView::new(),
            last_drawn: None,
        }
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        self.staged.snapshot()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, snapshot: &PanelSnapshot) -> std::io::Result<()> {
        if snapshot.error_visible {
            writeln!(self.out, "error: {}", snapshot.error_message)?;
        } else if snapshot.results_visible {
            for item in &snapshot.results {
                writeln!(self.out, "  {item}")?;
            }
            if snapshot.results.is_empty() {
                writeln!(self.out, "  (no predictions)")?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write + Send> IPanelView for ConsoleView<W> {
    fn clear_input(&mut self) {
        self.staged.clear_input();
    }

    fn clear_results(&mut self) {
        self.staged.clear_results();
    }

    fn append_result(&mut self, text: &str) {
        self.staged.append_result(text);
    }

    fn set_results_visible(&mut self, visible: bool) {
        self.staged.set_results_visible(visible);
    }

    fn set_error_visible(&mut self, visible: bool) {
        self.staged.set_error_visible(visible);
    }

    fn set_error_message(&mut self, message: &str) {
        self.staged.set_error_message(message);
    }

    fn commit(&mut self) {
        self.staged.commit();
        let snapshot = self.staged.snapshot();
        if self.last_drawn.as_ref() == Some(&snapshot) {
            return;
        }
        if let Err(e) = self.draw(&snapshot) {
            tracing::warn!(error = %e, "failed to draw panel");
        }
        self.last_drawn = Some(snapshot);
    }
}
