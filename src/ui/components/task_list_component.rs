use crate::backend::TaskLabel;
use crate::config::UiConfig;
use crate::constants::{
    HELP_TEXT, ITEM_PADDING, LIST_CHROME_ROWS, NO_ITEMS, PAGINATION_ACTIVE_DOT, PAGINATION_INACTIVE_DOT, TITLE_MARGIN,
};
use crate::ui::components::task_list_item_component::{ItemDelegate, PlainItemDelegate};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Paginated, keyboard-driven list of task labels.
///
/// The cursor always points at an existing item (`cursor < items.len()`)
/// unless the list is empty, in which case it stays at 0. The visible rows
/// are the page that holds the cursor.
pub struct TaskList {
    items: Vec<TaskLabel>,
    cursor: usize,
    width: u16,
    height: u16,
    title: String,
    wrap: bool,
    delegate: Box<dyn ItemDelegate>,
}

impl TaskList {
    pub fn new(items: Vec<TaskLabel>, config: &UiConfig) -> Self {
        Self::with_delegate(items, config, Box::new(PlainItemDelegate))
    }

    pub fn with_delegate(items: Vec<TaskLabel>, config: &UiConfig, delegate: Box<dyn ItemDelegate>) -> Self {
        Self {
            items,
            cursor: 0,
            width: config.default_width,
            height: config.list_height,
            title: config.title.clone(),
            wrap: config.wrap_navigation,
            delegate,
        }
    }

    pub fn items(&self) -> &[TaskLabel] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_item(&self) -> Option<&TaskLabel> {
        self.items.get(self.cursor)
    }

    /// Number of items shown on one page
    pub fn per_page(&self) -> usize {
        let item_rows = self.height.saturating_sub(LIST_CHROME_ROWS).max(1);
        let row_height = (self.delegate.height() + self.delegate.spacing()).max(1);
        usize::from((item_rows / row_height).max(1))
    }

    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.per_page()).max(1)
    }

    /// Page holding the cursor
    pub fn page(&self) -> usize {
        self.cursor / self.per_page()
    }

    /// Index range of the items currently on screen
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let per_page = self.per_page();
        let start = self.page() * per_page;
        start.min(self.items.len())..(start + per_page).min(self.items.len())
    }

    pub fn cursor_up(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.cursor > 0 {
            self.cursor -= 1;
        } else if self.wrap {
            self.cursor = self.items.len() - 1;
        }
    }

    pub fn cursor_down(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        } else if self.wrap {
            self.cursor = 0;
        }
    }

    /// Move one page back, keeping the row offset within the page
    pub fn prev_page(&mut self) {
        let page = self.page();
        if page == 0 {
            return;
        }
        let per_page = self.per_page();
        self.cursor = (page - 1) * per_page + self.cursor % per_page;
    }

    /// Move one page forward, keeping the row offset when the page is long enough
    pub fn next_page(&mut self) {
        let page = self.page();
        if page + 1 >= self.total_pages() {
            return;
        }
        let per_page = self.per_page();
        let target = (page + 1) * per_page + self.cursor % per_page;
        self.cursor = target.min(self.items.len() - 1);
    }

    pub fn go_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn go_to_end(&mut self) {
        self.cursor = self.items.len().saturating_sub(1);
    }

    /// Text of the list: title, visible rows, pagination and help.
    pub fn view(&self) -> Text<'static> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(format!("{}{}", " ".repeat(TITLE_MARGIN), self.title)));
        lines.push(Line::default());

        if self.items.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("{}{}", " ".repeat(ITEM_PADDING), NO_ITEMS),
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            let range = self.visible_range();
            let last = range.end.saturating_sub(1);
            for index in range {
                let rendered = self.delegate.render(index, &self.items[index], index == self.cursor);
                lines.extend(rendered.lines);
                if index != last {
                    lines.extend((0..self.delegate.spacing()).map(|_| Line::default()));
                }
            }
        }

        let total_pages = self.total_pages();
        if total_pages > 1 {
            let page = self.page();
            let dots: String = (0..total_pages)
                .map(|p| if p == page { PAGINATION_ACTIVE_DOT } else { PAGINATION_INACTIVE_DOT })
                .collect();
            lines.push(Line::from(format!("{}{}", " ".repeat(ITEM_PADDING), dots)));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("{}{}", " ".repeat(ITEM_PADDING), HELP_TEXT),
            Style::default().fg(Color::DarkGray),
        )));

        Text::from(
            lines
                .into_iter()
                .map(|line| truncate_line(line, self.width))
                .collect::<Vec<_>>(),
        )
    }
}

impl Component for TaskList {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.cursor_down(),
            KeyCode::Left
            | KeyCode::PageUp
            | KeyCode::Char('h')
            | KeyCode::Char('b')
            | KeyCode::Char('u') => self.prev_page(),
            KeyCode::Right
            | KeyCode::PageDown
            | KeyCode::Char('l')
            | KeyCode::Char('f')
            | KeyCode::Char('d') => self.next_page(),
            KeyCode::Home | KeyCode::Char('g') => self.go_to_start(),
            KeyCode::End | KeyCode::Char('G') => self.go_to_end(),
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            _ => {
                log::trace!("Key {:?} not bound by the list", key.code);
                return self.delegate.update(&key, self.cursor);
            }
        }
        Action::None
    }

    fn render(&self, f: &mut Frame, rect: Rect) {
        f.render_widget(Paragraph::new(self.view()), rect);
    }
}

/// Cut a line to `width` terminal columns, ending it with `…`. Width 0 disables it.
///
/// Wide glyphs are never split: one that does not fit is dropped whole.
fn truncate_line(line: Line<'static>, width: u16) -> Line<'static> {
    let width = usize::from(width);
    if width == 0 || line.width() <= width {
        return line;
    }

    let mut remaining = width - 1;
    let mut spans = Vec::new();
    'spans: for span in line.spans {
        let mut kept = String::new();
        for c in span.content.chars() {
            let char_width = c.width().unwrap_or(0);
            if char_width > remaining {
                if !kept.is_empty() {
                    spans.push(Span::styled(kept, span.style));
                }
                break 'spans;
            }
            remaining -= char_width;
            kept.push(c);
        }
        spans.push(Span::styled(kept, span.style));
    }
    let ellipsis_style = spans.last().map(|s| s.style).unwrap_or_default();
    spans.push(Span::styled("…", ellipsis_style));

    Line::from(spans).style(line.style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn labels(n: usize) -> Vec<TaskLabel> {
        (1..=n).map(|i| TaskLabel::new(format!("task {}", i))).collect()
    }

    fn config(list_height: u16, wrap: bool) -> UiConfig {
        UiConfig {
            list_height,
            default_width: 0,
            wrap_navigation: wrap,
            ..UiConfig::default()
        }
    }

    fn press(list: &mut TaskList, code: KeyCode) -> Action {
        list.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_cursor_clamps_at_both_ends() {
        let mut list = TaskList::new(labels(3), &config(14, false));

        press(&mut list, KeyCode::Up);
        assert_eq!(list.cursor(), 0);

        for _ in 0..5 {
            press(&mut list, KeyCode::Down);
        }
        assert_eq!(list.cursor(), 2);
    }

    #[test]
    fn test_cursor_wraps_when_enabled() {
        let mut list = TaskList::new(labels(3), &config(14, true));

        press(&mut list, KeyCode::Char('k'));
        assert_eq!(list.cursor(), 2);

        press(&mut list, KeyCode::Char('j'));
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn test_pagination_keeps_offset_and_clamps_last_page() {
        // height 8 leaves 3 item rows: pages [0..3) [3..6) [6..7)
        let mut list = TaskList::new(labels(7), &config(8, false));
        assert_eq!(list.per_page(), 3);
        assert_eq!(list.total_pages(), 3);

        press(&mut list, KeyCode::Down);
        press(&mut list, KeyCode::Right);
        assert_eq!(list.cursor(), 4);
        assert_eq!(list.visible_range(), 3..6);

        press(&mut list, KeyCode::PageDown);
        assert_eq!(list.cursor(), 6);
        assert_eq!(list.visible_range(), 6..7);

        press(&mut list, KeyCode::PageDown);
        assert_eq!(list.cursor(), 6);

        press(&mut list, KeyCode::Left);
        assert_eq!(list.cursor(), 3);
    }

    #[test]
    fn test_home_and_end() {
        let mut list = TaskList::new(labels(20), &config(14, false));

        press(&mut list, KeyCode::Char('G'));
        assert_eq!(list.cursor(), 19);

        press(&mut list, KeyCode::Char('g'));
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn test_navigation_on_empty_list_keeps_cursor_at_zero() {
        let mut list = TaskList::new(Vec::new(), &config(14, true));

        for code in [KeyCode::Up, KeyCode::Down, KeyCode::PageDown, KeyCode::End, KeyCode::Left] {
            press(&mut list, code);
            assert_eq!(list.cursor(), 0);
        }
        assert!(list.selected_item().is_none());
        assert_eq!(list.visible_range(), 0..0);
    }

    #[test]
    fn test_quit_keys() {
        let mut list = TaskList::new(labels(2), &config(14, false));
        assert_eq!(press(&mut list, KeyCode::Char('q')), Action::Quit);
        assert_eq!(press(&mut list, KeyCode::Esc), Action::Quit);
        assert_eq!(press(&mut list, KeyCode::Down), Action::None);
    }

    #[test]
    fn test_truncate_line() {
        let line = Line::from("    1. abcdefghijkl");
        let cut = truncate_line(line.clone(), 10);
        assert_eq!(cut.to_string(), "    1. ab…");

        assert_eq!(truncate_line(line.clone(), 0), line);
        assert_eq!(truncate_line(line.clone(), 100), line);
    }

    #[test]
    fn test_truncate_line_measures_wide_glyphs_in_columns() {
        let line = Line::from("  > 1. 買い物リスト買い物");

        let cut = truncate_line(line.clone(), 12);
        assert_eq!(cut.to_string(), "  > 1. 買い…");
        assert_eq!(cut.width(), 12);

        // The next glyph needs two columns but only one is left before the ellipsis
        let cut = truncate_line(line, 11);
        assert_eq!(cut.to_string(), "  > 1. 買…");
        assert!(cut.width() <= 11);
    }
}
