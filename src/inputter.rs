use ratatui::crossterm::event::{KeyCode, KeyEvent};

// Line editor backing the search and filter prompts.
#[derive(Default)]
pub struct Inputter {
    current_input: String,
    cursor_pos: usize, // position in chars, not bytes
    finished: bool,
    canceled: bool,
}

#[derive(Default, Clone, Debug)]
pub struct InputResult {
    pub input: String,
    pub finished: bool,
    pub canceled: bool,
    pub cursor_pos: usize,
}

impl Inputter {
    pub fn read(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Enter => self.finished = true,
            KeyCode::Esc => {
                self.canceled = true;
                self.finished = true;
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.cursor_pos = self.cursor_pos.saturating_sub(1),
            KeyCode::Right => {
                if self.cursor_pos < self.current_input.chars().count() {
                    self.cursor_pos += 1;
                }
            }
            KeyCode::Home => self.cursor_pos = 0,
            KeyCode::End => self.cursor_pos = self.current_input.chars().count(),
            code => {
                if let Some(chr) = code.as_char() {
                    let at = self.byte_pos();
                    self.current_input.insert(at, chr);
                    self.cursor_pos += 1;
                }
            }
        }
        self.get()
    }

    // Preload the prompt with the current value of the edited parameter.
    pub fn set(&mut self, s: &str) {
        self.current_input = s.to_string();
        self.cursor_pos = s.chars().count();
    }

    pub fn get(&self) -> InputResult {
        InputResult {
            input: self.current_input.clone(),
            finished: self.finished,
            canceled: self.canceled,
            cursor_pos: self.cursor_pos,
        }
    }

    pub fn clear(&mut self) {
        self.current_input.clear();
        self.cursor_pos = 0;
        self.finished = false;
        self.canceled = false;
    }

    fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let at = self.byte_pos();
            self.current_input.remove(at);
        }
    }

    fn delete(&mut self) {
        if self.cursor_pos < self.current_input.chars().count() {
            let at = self.byte_pos();
            self.current_input.remove(at);
        }
    }

    fn byte_pos(&self) -> usize {
        self.current_input
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.current_input.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut input = Inputter::default();
        input.read(key(KeyCode::Char('u')));
        input.read(key(KeyCode::Char('s')));
        assert_eq!(input.get().input, "us");
        assert_eq!(input.get().cursor_pos, 2);
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut input = Inputter::default();
        input.set("pending");
        input.read(key(KeyCode::Left));
        input.read(key(KeyCode::Backspace));
        assert_eq!(input.get().input, "pendig");
    }

    #[test]
    fn insert_in_the_middle() {
        let mut input = Inputter::default();
        input.set("ac");
        input.read(key(KeyCode::Left));
        input.read(key(KeyCode::Char('b')));
        assert_eq!(input.get().input, "abc");
        assert_eq!(input.get().cursor_pos, 2);
    }

    #[test]
    fn escape_cancels_and_finishes() {
        let mut input = Inputter::default();
        input.set("abc");
        let result = input.read(key(KeyCode::Esc));
        assert!(result.finished);
        assert!(result.canceled);
    }

    #[test]
    fn clear_resets_flags() {
        let mut input = Inputter::default();
        input.set("abc");
        input.read(key(KeyCode::Esc));
        input.clear();
        let result = input.get();
        assert!(!result.finished);
        assert!(!result.canceled);
        assert_eq!(result.input, "");
    }
}
