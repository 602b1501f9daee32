//! Single-line text field for the command palette query.
//!
//! Stores a `String` and a character-offset cursor. Control characters
//! and newlines are never inserted: the query is always one line.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Default, Clone)]
pub struct InputLine {
    content: String,
    /// Cursor position as a character offset (0 = before first char).
    cursor: usize,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Terminal column of the cursor relative to the field start.
    pub fn cursor_column(&self) -> u16 {
        let before = &self.content[..self.byte_offset()];
        before.width().min(u16::MAX as usize) as u16
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        let byte_offset = self.byte_offset();
        self.content.insert(byte_offset, ch);
        self.cursor += 1;
    }

    /// Backspace.
    pub fn delete_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.remove_at_cursor();
    }

    /// Delete key.
    pub fn delete_forward(&mut self) {
        self.remove_at_cursor();
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    /// Delete the word before the cursor (Ctrl+W / Ctrl+Backspace).
    pub fn delete_word_back(&mut self) {
        let chars: Vec<char> = self.content.chars().collect();
        let mut pos = self.cursor;
        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        let start = self.char_to_byte(pos);
        let end = self.byte_offset();
        self.content.replace_range(start..end, "");
        self.cursor = pos;
    }

    /// Handle a key event. Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('w') if ctrl => self.delete_word_back(),
            KeyCode::Char('u') if ctrl => self.clear(),
            KeyCode::Backspace if ctrl => self.delete_word_back(),
            KeyCode::Char(_) if ctrl => return false,
            KeyCode::Char(ch) => self.insert_char(ch),
            KeyCode::Backspace => self.delete_back(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    fn remove_at_cursor(&mut self) {
        let byte_offset = self.byte_offset();
        if let Some(ch) = self.content[byte_offset..].chars().next() {
            self.content
                .replace_range(byte_offset..byte_offset + ch.len_utf8(), "");
        }
    }

    fn byte_offset(&self) -> usize {
        self.char_to_byte(self.cursor)
    }

    fn char_to_byte(&self, char_pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}
