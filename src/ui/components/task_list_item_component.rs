use crate::backend::TaskLabel;
use crate::constants::{ITEM_PADDING, SELECTED_ITEM_COLOR, SELECTED_ITEM_PADDING, SELECTED_MARKER};
use crate::ui::core::Action;
use crossterm::event::KeyEvent;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span, Text},
};

/// Trait for the row renderer used by [`TaskList`](super::TaskList).
///
/// The list asks the delegate how tall a row is and how much space goes
/// between rows, and hands it each visible item to draw.
pub trait ItemDelegate: Send {
    /// Rows taken by one item
    fn height(&self) -> u16;

    /// Blank rows between two items
    fn spacing(&self) -> u16;

    /// Called for keys the list did not consume
    fn update(&mut self, _key: &KeyEvent, _cursor: usize) -> Action {
        Action::None
    }

    /// Render one item. `index` is its position in the whole list.
    fn render(&self, index: usize, item: &TaskLabel, selected: bool) -> Text<'static>;
}

/// One-line row: `1. Buy milk`, with a marker and colour on the cursor row
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainItemDelegate;

impl ItemDelegate for PlainItemDelegate {
    fn height(&self) -> u16 {
        1
    }

    fn spacing(&self) -> u16 {
        0
    }

    fn render(&self, index: usize, item: &TaskLabel, selected: bool) -> Text<'static> {
        let row = format!("{}. {}", index + 1, item);

        let line = if selected {
            Line::from(Span::styled(
                format!("{}{}{}", " ".repeat(SELECTED_ITEM_PADDING), SELECTED_MARKER, row),
                Style::default().fg(Color::Indexed(SELECTED_ITEM_COLOR)),
            ))
        } else {
            Line::from(format!("{}{}", " ".repeat(ITEM_PADDING), row))
        };

        Text::from(line)
    }
}
