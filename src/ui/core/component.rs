use super::actions::Action;
use super::event_handler::EventType;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

pub trait Component {
    fn init(&mut self) -> Action {
        Action::None
    }

    fn handle_events(&mut self, event: EventType) -> Action {
        if let EventType::Key(key) = event {
            self.handle_key_events(key)
        } else {
            Action::None
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    /// Draw the current state. Must not change it.
    fn render(&self, f: &mut Frame, rect: Rect);
}
