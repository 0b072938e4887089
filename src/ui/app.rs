//! Selector state and event handling

use crate::backend::TaskLabel;
use crate::config::UiConfig;
use crate::ui::components::TaskList;
use crate::ui::core::{Action, Component, EventType};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, trace};
use ratatui::{
    layout::Rect,
    text::{Line, Text},
    widgets::Paragraph,
    Frame,
};

/// Where the selector is in its lifecycle.
///
/// `QuitRequested` and `SelectionConfirmed` are terminal: once reached, every
/// further event is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectorStatus {
    #[default]
    Running,
    QuitRequested,
    SelectionConfirmed(TaskLabel),
}

impl SelectorStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Interactive selector over a fixed set of task labels
pub struct SelectorApp {
    list: TaskList,
    status: SelectorStatus,
}

impl SelectorApp {
    pub fn new(items: Vec<TaskLabel>, config: &UiConfig) -> Self {
        Self::with_list(TaskList::new(items, config))
    }

    pub fn with_list(list: TaskList) -> Self {
        Self {
            list,
            status: SelectorStatus::Running,
        }
    }

    pub fn status(&self) -> &SelectorStatus {
        &self.status
    }

    pub fn into_status(self) -> SelectorStatus {
        self.status
    }

    pub fn should_quit(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    /// Full frame: a blank line followed by the list.
    pub fn view(&self) -> Text<'static> {
        let mut lines = vec![Line::default()];
        lines.extend(self.list.view().lines);
        Text::from(lines)
    }

    fn confirm_selection(&mut self) -> Action {
        match self.list.selected_item() {
            Some(item) => {
                debug!("Selection confirmed at index {}", self.list.cursor());
                self.status = SelectorStatus::SelectionConfirmed(item.clone());
                Action::Quit
            }
            None => {
                debug!("Ignoring enter on an empty list");
                Action::None
            }
        }
    }
}

impl Component for SelectorApp {
    fn init(&mut self) -> Action {
        Action::EnterAltScreen
    }

    fn handle_events(&mut self, event: EventType) -> Action {
        if self.status.is_terminal() {
            trace!("Ignoring {:?} after termination", event);
            return Action::None;
        }

        match event {
            EventType::Resize(width, _) => {
                self.list.set_width(width);
                Action::None
            }
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Tick => Action::None,
            EventType::Other => {
                trace!("Ignoring unrecognized event");
                Action::None
            }
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.status = SelectorStatus::QuitRequested;
            return Action::Quit;
        }

        if key.code == KeyCode::Enter {
            return self.confirm_selection();
        }

        match self.list.handle_key_events(key) {
            Action::Quit => {
                self.status = SelectorStatus::QuitRequested;
                Action::Quit
            }
            action => action,
        }
    }

    fn render(&self, f: &mut Frame, rect: Rect) {
        f.render_widget(Paragraph::new(self.view()), rect);
    }
}
