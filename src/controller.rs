use std::time::Duration;
use tracing::trace;

use crate::domain::{Field, InputTarget, Message, PDConfig, PDError};
use crate::model::Model;
use ratatui::crossterm::event::{self, Event, KeyCode};

pub struct Controller {
    event_poll_time: u64,
}

impl Controller {
    pub fn new(cfg: &PDConfig) -> Self {
        Self {
            event_poll_time: cfg.event_poll_time,
        }
    }

    pub fn handle_event(&self, model: &Model) -> Result<Option<Message>, PDError> {
        if event::poll(Duration::from_millis(self.event_poll_time))?
            && let Event::Key(key) = event::read()?
            && key.kind == event::KeyEventKind::Press
        {
            // An open prompt consumes keys unmapped
            if model.raw_keyevents() {
                return Ok(Some(Message::RawKey(key)));
            }
            return Ok(self.handle_key(key));
        }
        Ok(None)
    }

    fn handle_key(&self, key: event::KeyEvent) -> Option<Message> {
        let message = match key.code {
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Char('?') => Some(Message::Help),
            KeyCode::Up | KeyCode::Char('k') => Some(Message::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Message::MoveDown),
            KeyCode::Left | KeyCode::Char('h') => Some(Message::PrevPage),
            KeyCode::Right | KeyCode::Char('l') => Some(Message::NextPage),
            KeyCode::Char('c') => Some(Message::SortBy(Field::CLIENT)),
            KeyCode::Char('o') => Some(Message::SortBy(Field::COUNTRY)),
            KeyCode::Char('d') => Some(Message::SortBy(Field::DATE)),
            KeyCode::Char('/') => Some(Message::Search),
            KeyCode::Char('1') => Some(Message::EditFilter(InputTarget::NAME)),
            KeyCode::Char('2') => Some(Message::EditFilter(InputTarget::COUNTRY)),
            KeyCode::Char('3') => Some(Message::EditFilter(InputTarget::EMAIL)),
            KeyCode::Char('4') => Some(Message::EditFilter(InputTarget::PROJECT)),
            KeyCode::Char('5') => Some(Message::EditFilter(InputTarget::STATUS)),
            KeyCode::Char('y') => Some(Message::CopyRow),
            KeyCode::Char('r') => Some(Message::ResetQuery),
            KeyCode::Enter => Some(Message::Enter),
            KeyCode::Esc => Some(Message::Exit),
            _ => None,
        };
        trace!("Mapped: {key:?} => {message:?}");
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyEvent;

    fn controller() -> Controller {
        Controller::new(&PDConfig::default())
    }

    #[test]
    fn sort_keys_map_to_exposed_fields() {
        let c = controller();
        assert!(matches!(
            c.handle_key(KeyEvent::from(KeyCode::Char('c'))),
            Some(Message::SortBy(Field::CLIENT))
        ));
        assert!(matches!(
            c.handle_key(KeyEvent::from(KeyCode::Char('o'))),
            Some(Message::SortBy(Field::COUNTRY))
        ));
        assert!(matches!(
            c.handle_key(KeyEvent::from(KeyCode::Char('d'))),
            Some(Message::SortBy(Field::DATE))
        ));
    }

    #[test]
    fn digits_map_to_the_five_filters() {
        let c = controller();
        let expected = [
            ('1', InputTarget::NAME),
            ('2', InputTarget::COUNTRY),
            ('3', InputTarget::EMAIL),
            ('4', InputTarget::PROJECT),
            ('5', InputTarget::STATUS),
        ];
        for (chr, target) in expected {
            match c.handle_key(KeyEvent::from(KeyCode::Char(chr))) {
                Some(Message::EditFilter(t)) => assert_eq!(t, target),
                other => panic!("{chr} mapped to {other:?}"),
            }
        }
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let c = controller();
        assert!(c.handle_key(KeyEvent::from(KeyCode::Char('z'))).is_none());
        assert!(c.handle_key(KeyEvent::from(KeyCode::F(5))).is_none());
    }
}
