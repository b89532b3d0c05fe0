use crossterm::event::KeyCode;
use unicode_width::UnicodeWidthStr;

/// Search input state for the TUI
pub struct SearchState {
    pub query: String,
    /// Byte offset into `query`, always on a char boundary
    pub cursor_pos: usize,
    pub focused: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            cursor_pos: 0,
            focused: true,
        }
    }
}

impl SearchState {
    /// Apply an editing key. Returns true if the query text changed.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char(c) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => {
                if self.cursor_pos == 0 {
                    return false;
                }
                let prev = self.prev_boundary();
                self.query.remove(prev);
                self.cursor_pos = prev;
                true
            }
            KeyCode::Delete => {
                if self.cursor_pos >= self.query.len() {
                    return false;
                }
                self.query.remove(self.cursor_pos);
                true
            }
            KeyCode::Left => {
                self.cursor_pos = self.prev_boundary();
                false
            }
            KeyCode::Right => {
                self.cursor_pos = self.next_boundary();
                false
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                false
            }
            KeyCode::End => {
                self.cursor_pos = self.query.len();
                false
            }
            _ => false,
        }
    }

    pub fn insert(&mut self, c: char) {
        self.query.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    /// Clear the query. Returns true if there was anything to clear.
    pub fn clear(&mut self) -> bool {
        let had_text = !self.query.is_empty();
        self.query.clear();
        self.cursor_pos = 0;
        had_text
    }

    /// Display columns between the start of the query and the cursor
    pub fn cursor_width(&self) -> usize {
        self.query[..self.cursor_pos].width()
    }

    fn prev_boundary(&self) -> usize {
        self.query[..self.cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.query[self.cursor_pos..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor_pos + i)
            .unwrap_or(self.query.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> SearchState {
        let mut state = SearchState::default();
        for c in text.chars() {
            state.handle_key(KeyCode::Char(c));
        }
        state
    }

    #[test]
    fn typing_appends_and_moves_cursor() {
        let state = typed("héllo");
        assert_eq!(state.query, "héllo");
        assert_eq!(state.cursor_pos, "héllo".len());
    }

    #[test]
    fn backspace_removes_whole_char() {
        let mut state = typed("ké");
        assert!(state.handle_key(KeyCode::Backspace));
        assert_eq!(state.query, "k");
        assert!(state.handle_key(KeyCode::Backspace));
        assert!(!state.handle_key(KeyCode::Backspace));
    }

    #[test]
    fn editing_in_the_middle() {
        let mut state = typed("tst");
        state.handle_key(KeyCode::Home);
        assert!(!state.handle_key(KeyCode::Right));
        state.handle_key(KeyCode::Char('e'));
        assert_eq!(state.query, "test");

        state.handle_key(KeyCode::End);
        assert!(!state.handle_key(KeyCode::Delete));
        state.handle_key(KeyCode::Home);
        assert!(state.handle_key(KeyCode::Delete));
        assert_eq!(state.query, "est");
    }

    #[test]
    fn cursor_width_counts_display_columns() {
        let mut state = typed("日本");
        assert_eq!(state.cursor_width(), 4);
        state.handle_key(KeyCode::Left);
        assert_eq!(state.cursor_width(), 2);
    }

    #[test]
    fn clear_reports_whether_text_was_removed() {
        let mut state = typed("x");
        assert!(state.clear());
        assert!(!state.clear());
        assert_eq!(state.cursor_pos, 0);
    }
}
