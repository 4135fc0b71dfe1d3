/// Single-line input buffer with a char-boundary-safe cursor. Item titles
/// never contain newlines, so there is no multi-line handling here.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn set<T: Into<String>>(&mut self, value: T) {
        self.text = value.into();
        self.cursor = self.text.len();
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        let mut buf = [0u8; 4];
        let encoded = ch.encode_utf8(&mut buf);
        self.text.insert_str(self.cursor, encoded);
        self.cursor += encoded.len();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut iter = self.text[..self.cursor].char_indices().rev();
        if let Some((idx, _ch)) = iter.next() {
            self.text.drain(idx..self.cursor);
            self.cursor = idx;
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor >= self.text.len() {
            return;
        }
        let mut iter = self.text[self.cursor..].char_indices();
        if let Some((idx, ch)) = iter.next() {
            let end = self.cursor + idx + ch.len_utf8();
            self.text.drain(self.cursor..end);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut iter = self.text[..self.cursor].char_indices().rev();
        if let Some((idx, _)) = iter.next() {
            self.cursor = idx;
        } else {
            self.cursor = 0;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor >= self.text.len() {
            return;
        }
        let mut iter = self.text[self.cursor..].char_indices();
        if let Some((idx, ch)) = iter.next() {
            self.cursor += idx + ch.len_utf8();
        } else {
            self.cursor = self.text.len();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Cursor position in chars, for terminal cursor placement.
    pub fn cursor_col(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_places_cursor_at_end() {
        let mut buffer = TextBuffer::new();
        buffer.set("hello");

        assert_eq!(buffer.as_str(), "hello");
        assert_eq!(buffer.cursor_col(), 5);
    }

    #[test]
    fn edits_respect_char_boundaries() {
        let mut buffer = TextBuffer::new();
        buffer.set("café");

        buffer.backspace();
        assert_eq!(buffer.as_str(), "caf");

        buffer.insert_char('é');
        buffer.move_left();
        buffer.move_left();
        buffer.delete_char();
        assert_eq!(buffer.as_str(), "caé");
        assert_eq!(buffer.cursor_col(), 2);
    }

    #[test]
    fn control_characters_are_ignored() {
        let mut buffer = TextBuffer::new();
        buffer.insert_char('\r');
        buffer.insert_char('\n');
        buffer.insert_char('a');

        assert_eq!(buffer.as_str(), "a");
    }

    #[test]
    fn home_and_end_clamp_the_cursor() {
        let mut buffer = TextBuffer::new();
        buffer.set("todo");

        buffer.move_home();
        assert_eq!(buffer.cursor_col(), 0);
        buffer.move_end();
        assert_eq!(buffer.cursor_col(), 4);
    }
}
