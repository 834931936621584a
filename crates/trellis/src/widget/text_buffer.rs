//! Editable single-line text with a grapheme cursor.

use unicode_segmentation::UnicodeSegmentation;

/// A line of text and a cursor measured in grapheme clusters.
///
/// The cursor sits *between* graphemes: `0` is before the first one and
/// `len()` after the last. All edits keep it inside that range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    /// Create a buffer with the cursor at the end of `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.graphemes(true).count();
        Self { text, cursor }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length in graphemes.
    pub fn len(&self) -> usize {
        self.text.graphemes(true).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset of the grapheme boundary at `index`.
    fn byte_offset(&self, index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }

    /// The text that would result from inserting `s` at the cursor.
    pub fn with_insertion(&self, s: &str) -> String {
        let at = self.byte_offset(self.cursor);
        let mut candidate = String::with_capacity(self.text.len() + s.len());
        candidate.push_str(&self.text[..at]);
        candidate.push_str(s);
        candidate.push_str(&self.text[at..]);
        candidate
    }

    /// The text that would result from removing the grapheme at `index`.
    fn without(&self, index: usize) -> String {
        let start = self.byte_offset(index);
        let end = self.byte_offset(index + 1);
        let mut candidate = self.text.clone();
        candidate.replace_range(start..end, "");
        candidate
    }

    /// Text after a backspace, if there is anything before the cursor.
    pub fn with_backspace(&self) -> Option<String> {
        (self.cursor > 0).then(|| self.without(self.cursor - 1))
    }

    /// Text after a forward delete, if there is anything after the cursor.
    pub fn with_delete(&self) -> Option<String> {
        (self.cursor < self.len()).then(|| self.without(self.cursor))
    }

    /// Insert `s` at the cursor and move the cursor past it.
    pub fn insert(&mut self, s: &str) {
        let inserted = s.graphemes(true).count();
        self.text = self.with_insertion(s);
        self.cursor += inserted;
    }

    /// Remove the grapheme before the cursor.
    pub fn backspace(&mut self) -> bool {
        match self.with_backspace() {
            Some(text) => {
                self.text = text;
                self.cursor -= 1;
                true
            }
            None => false,
        }
    }

    /// Remove the grapheme after the cursor.
    pub fn delete(&mut self) -> bool {
        match self.with_delete() {
            Some(text) => {
                self.text = text;
                true
            }
            None => false,
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.move_to(self.cursor.saturating_sub(1))
    }

    pub fn move_right(&mut self) -> bool {
        self.move_to(self.cursor + 1)
    }

    pub fn move_home(&mut self) -> bool {
        self.move_to(0)
    }

    pub fn move_end(&mut self) -> bool {
        self.move_to(self.len())
    }

    /// Move the cursor, clamped to the text. Returns whether it moved.
    pub fn move_to(&mut self, index: usize) -> bool {
        let index = index.min(self.len());
        let moved = index != self.cursor;
        self.cursor = index;
        moved
    }

    /// Replace the whole text and put the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        *self = Self::new(text);
    }

    /// The text before the cursor, for placing a caret.
    pub fn before_cursor(&self) -> &str {
        &self.text[..self.byte_offset(self.cursor)]
    }

    /// One `mask` per grapheme.
    pub fn masked(&self, mask: char) -> String {
        std::iter::repeat_n(mask, self.len()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_at_cursor() {
        let mut buf = TextBuffer::new("ac");
        buf.move_left();
        buf.insert("b");
        assert_eq!(buf.text(), "abc");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_graphemes_are_atomic() {
        // "e" + combining acute accent is one grapheme
        let mut buf = TextBuffer::new("ae\u{301}");
        assert_eq!(buf.len(), 2);
        assert!(buf.backspace());
        assert_eq!(buf.text(), "a");
        assert_eq!(buf.masked('*'), "*");
    }

    #[test]
    fn test_delete_and_bounds() {
        let mut buf = TextBuffer::new("xy");
        assert!(!buf.delete());
        assert!(!buf.move_right());
        buf.move_home();
        assert!(!buf.backspace());
        assert!(buf.delete());
        assert_eq!(buf.text(), "y");
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_candidates_do_not_mutate() {
        let buf = TextBuffer::new("12");
        assert_eq!(buf.with_insertion("3"), "123");
        assert_eq!(buf.with_backspace().as_deref(), Some("1"));
        assert_eq!(buf.with_delete(), None);
        assert_eq!(buf.text(), "12");
    }

    #[test]
    fn test_before_cursor() {
        let mut buf = TextBuffer::new("hello");
        buf.move_to(2);
        assert_eq!(buf.before_cursor(), "he");
    }
}
