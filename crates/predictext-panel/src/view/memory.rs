use predictext_core::traits::IPanelView;

/// Everything a view displays at one moment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelSnapshot {
    pub input: String,
    pub results: Vec<String>,
    pub results_visible: bool,
    pub error_visible: bool,
    pub error_message: String,
}

/// A view that keeps its elements in memory.
#[derive(Debug, Default)]
pub struct MemoryView {
    current: PanelSnapshot,
    commits: usize,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the user typing into the input element.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.current.input = text.into();
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        self.current.clone()
    }

    /// Number of completed transitions.
    pub fn commits(&self) -> usize {
        self.commits
    }
}

impl IPanelView for MemoryView {
    fn clear_input(&mut self) {
        self.current.input.clear();
    }

    fn clear_results(&mut self) {
        self.current.results.clear();
    }

    fn append_result(&mut self, text: &str) {
        self.current.results.push(text.to_string());
    }

    fn set_results_visible(&mut self, visible: bool) {
        self.current.results_visible = visible;
    }

    fn set_error_visible(&mut self, visible: bool) {
        self.current.error_visible = visible;
    }

    fn set_error_message(&mut self, message: &str) {
        self.current.error_message = message.to_string();
    }

    fn commit(&mut self) {
        self.commits += 1;
    }
}
