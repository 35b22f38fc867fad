//! Single-line text input used while naming a note or typing a query.

/// Maximum number of characters accepted by the input.
pub const CHAR_LIMIT: usize = 156;

/// Placeholder shown while the input is empty.
pub const PLACEHOLDER: &str = "Maths";

/// Editable single-line buffer with a character cursor.
///
/// The cursor is a character index in `0..=len`, never a byte offset, so
/// multi-byte input such as `é` moves and deletes as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    chars: Vec<char>,
    cursor: usize,
}

impl TextInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Cursor position in characters.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Inserts `c` at the cursor. Ignored once [`CHAR_LIMIT`] is reached.
    pub fn insert(&mut self, c: char) {
        if self.chars.len() >= CHAR_LIMIT {
            return;
        }
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Removes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
    }

    /// Removes the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.chars.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }

    /// Empties the buffer and resets the cursor.
    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    /// Returns the contents and clears the input.
    pub fn take(&mut self) -> String {
        let value = self.value();
        self.clear();
        value
    }
}
