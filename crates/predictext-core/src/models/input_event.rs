/// A key released in the text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Space,
    Enter,
    /// Any other key, including deletions.
    Other,
}

impl Key {
    /// Space and Enter end a word.
    pub fn is_word_break(self) -> bool {
        matches!(self, Self::Space | Self::Enter)
    }
}

/// An event raised by the hosting surface.
///
/// Both variants carry the full input content at the time of the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    ButtonPressed { text: String },
    KeyReleased { key: Key, text: String },
}

impl InputEvent {
    pub fn text(&self) -> &str {
        match self {
            Self::ButtonPressed { text } | Self::KeyReleased { text, .. } => text,
        }
    }
}
