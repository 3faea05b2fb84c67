//! Editable single-line search text with a grapheme cursor.

use unicode_segmentation::UnicodeSegmentation;

/// The search term as typed, plus the cursor position in graphemes.
///
/// Every mutator reports whether the text changed so callers can decide
/// whether a new search cycle is due.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDraft {
    text: String,
    cursor: usize,
}

impl SearchDraft {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor.saturating_add(1);
        self.cursor = self.clamp_cursor(cursor_moved_right);
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    pub fn enter_char(&mut self, new_char: char) -> bool {
        let index = self.byte_index();
        self.text.insert(index, new_char);
        self.cursor = self.cursor_after_insert(index + new_char.len_utf8());
        true
    }

    pub fn enter_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let index = self.byte_index();
        self.text.insert_str(index, text);
        self.cursor = self.cursor_after_insert(index + text.len());
        true
    }

    pub fn delete_char(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        let start = self.byte_index_at(self.cursor - 1);
        let end = self.byte_index_at(self.cursor);
        self.text.replace_range(start..end, "");
        self.move_cursor_left();
        true
    }

    pub fn delete_char_forward(&mut self) -> bool {
        if self.cursor >= self.grapheme_count() {
            return false;
        }

        let start = self.byte_index_at(self.cursor);
        let end = self.byte_index_at(self.cursor + 1);
        self.text.replace_range(start..end, "");
        true
    }

    pub fn delete_word_backwards(&mut self) -> bool {
        let before = self.cursor;

        while self.cursor > 0 && self.grapheme_is_whitespace(self.cursor - 1) {
            self.delete_char();
        }
        while self.cursor > 0 && !self.grapheme_is_whitespace(self.cursor - 1) {
            self.delete_char();
        }

        self.cursor != before
    }

    pub fn clear(&mut self) -> bool {
        if self.text.is_empty() {
            return false;
        }
        self.text.clear();
        self.cursor = 0;
        true
    }

    /// Replace the whole text and park the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        let changed = text != self.text;
        self.text = text;
        self.cursor = self.grapheme_count();
        changed
    }

    #[must_use]
    pub fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    /// Text before the cursor, used to place the terminal cursor.
    #[must_use]
    pub fn text_before_cursor(&self) -> &str {
        &self.text[..self.byte_index()]
    }

    fn grapheme_is_whitespace(&self, index: usize) -> bool {
        self.text
            .graphemes(true)
            .nth(index)
            .is_some_and(|grapheme| grapheme.chars().all(char::is_whitespace))
    }

    fn byte_index(&self) -> usize {
        self.byte_index_at(self.cursor)
    }

    fn byte_index_at(&self, grapheme_index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    // Inserted text may merge into the grapheme before it (combining marks).
    fn cursor_after_insert(&self, end: usize) -> usize {
        self.text[..end].graphemes(true).count()
    }

    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.min(self.grapheme_count())
    }
}
