//! Composition of result list items.

use predictext_core::constants::ITEM_SEPARATOR;

/// Compose one list item from the echoed input and a prediction.
pub fn render_item(echo: &str, prediction: &str) -> String {
    format!("{echo}{ITEM_SEPARATOR}{prediction}")
}

/// Render every non-blank prediction, in order.
pub fn render_items(echo: &str, predictions: &[String]) -> Vec<String> {
    predictions
        .iter()
        .filter(|p| !p.trim().is_empty())
        .map(|p| render_item(echo, p))
        .collect()
}
