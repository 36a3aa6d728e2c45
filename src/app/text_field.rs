//! Editable text buffer with a char-indexed cursor.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    content: String,
    /// Cursor position in chars, `0..=char_count`.
    cursor: usize,
    multiline: bool,
}

pub fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(byte_idx, _)| byte_idx)
}

pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

impl TextField {
    pub fn single_line(content: impl Into<String>) -> Self {
        Self::with_content(content.into(), false)
    }

    pub fn multi_line(content: impl Into<String>) -> Self {
        Self::with_content(content.into(), true)
    }

    fn with_content(content: String, multiline: bool) -> Self {
        let content = if multiline {
            content
        } else {
            flatten_newlines(&content)
        };
        let cursor = char_count(&content);
        Self {
            content,
            cursor,
            multiline,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Replaces the content and moves the cursor to the end.
    pub fn set(&mut self, content: &str) {
        *self = Self::with_content(content.to_string(), self.multiline);
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' && !self.multiline {
            return;
        }
        let byte_idx = char_to_byte_index(&self.content, self.cursor);
        self.content.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Pasted text; single-line fields turn line breaks into spaces.
    pub fn insert_str(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let text = if self.multiline {
            text
        } else {
            flatten_newlines(&text)
        };
        let byte_idx = char_to_byte_index(&self.content, self.cursor);
        self.content.insert_str(byte_idx, &text);
        self.cursor += char_count(&text);
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = char_to_byte_index(&self.content, self.cursor);
            self.content.remove(byte_idx);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < char_count(&self.content) {
            let byte_idx = char_to_byte_index(&self.content, self.cursor);
            self.content.remove(byte_idx);
        }
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        let total_chars = char_count(&self.content);
        let lines = self.line_spans();
        let (current_line, current_col) = self.cursor_position();

        self.cursor = match movement {
            CursorMove::Left => self.cursor.saturating_sub(1),
            CursorMove::Right => (self.cursor + 1).min(total_chars),
            CursorMove::Home => lines.get(current_line).map_or(0, |(s, _)| *s),
            CursorMove::End => lines
                .get(current_line)
                .map_or(total_chars, |(s, l)| s + l),
            CursorMove::Up => {
                if current_line == 0 {
                    self.cursor
                } else {
                    let (prev_start, prev_len) = lines[current_line - 1];
                    prev_start + current_col.min(prev_len)
                }
            }
            CursorMove::Down => {
                if current_line + 1 >= lines.len() {
                    self.cursor
                } else {
                    let (next_start, next_len) = lines[current_line + 1];
                    next_start + current_col.min(next_len)
                }
            }
        };
    }

    /// Cursor as `(line, column)`, both in chars.
    pub fn cursor_position(&self) -> (usize, usize) {
        for (i, (start, len)) in self.line_spans().iter().enumerate() {
            if self.cursor >= *start && self.cursor <= start + len {
                return (i, self.cursor - start);
            }
        }
        (0, self.cursor)
    }

    /// `(start_char, len_chars)` per `\n`-separated line; always at least one entry.
    fn line_spans(&self) -> Vec<(usize, usize)> {
        let mut spans = Vec::new();
        let mut start = 0;
        for line in self.content.split('\n') {
            let len = char_count(line);
            spans.push((start, len));
            start += len + 1;
        }
        spans
    }
}

fn flatten_newlines(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}
