//! Text input state
//!
//! A single-line editable buffer with a cursor. The cursor counts characters,
//! not bytes, so multi-byte input such as `₹` edits cleanly.

/// A single-line text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position, in characters
    cursor: usize,
    /// Placeholder text shown while empty
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Split the content around the cursor: text before, the character under
    /// the cursor (if any), and the rest
    pub fn split_at_cursor(&self) -> (&str, Option<char>, &str) {
        let at = self.byte_index(self.cursor);
        let (before, rest) = self.content.split_at(at);
        let mut chars = rest.chars();
        let under = chars.next();
        (before, under, chars.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::new();
        for c in text.chars() {
            input.insert(c);
        }
        input
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "Rent".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "Rent");

        input.backspace();
        assert_eq!(input.value(), "Ren");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_cursor_editing() {
        let mut input = typed("-50");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "50");

        input.move_end();
        input.insert('0');
        assert_eq!(input.value(), "500");

        input.move_left();
        input.move_left();
        input.insert('.');
        assert_eq!(input.value(), "5.00");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::new();
        input.insert('₹');
        input.insert('5');
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "5");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_split_at_cursor() {
        let mut input = typed("abc");
        input.move_left();
        assert_eq!(input.split_at_cursor(), ("ab", Some('c'), ""));

        input.move_end();
        assert_eq!(input.split_at_cursor(), ("abc", None, ""));
    }

    #[test]
    fn test_clear() {
        let mut input = typed("Freelance");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = typed("x");
        input.move_start();
        input.backspace();
        assert_eq!(input.value(), "x");
    }
}
