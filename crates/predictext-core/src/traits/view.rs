/// The surface a panel renders into.
///
/// Mirrors the four page elements: the text input, the results container
/// with its nested list, and the error container. Calls arrive in batches,
/// each batch ending with [`commit`](IPanelView::commit).
pub trait IPanelView: Send {
    fn clear_input(&mut self);

    fn clear_results(&mut self);
    fn append_result(&mut self, text: &str);
    fn set_results_visible(&mut self, visible: bool);

    fn set_error_visible(&mut self, visible: bool);
    fn set_error_message(&mut self, message: &str);

    /// End of one state transition. Hosts that redraw do it here.
    fn commit(&mut self) {}
}
