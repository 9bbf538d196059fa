//! # NavList Component
//!
//! One column of the navigation lattice (testaments, books, chapters, verses)
//! and the search results list. The cursor (`NavListState`) lives in
//! `TuiState`; the items are props rebuilt from `App` every frame.
//!
//! The cursor is independent of what the core has selected: moving it does
//! nothing until Enter, and the selected entry is drawn with a marker.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};

use crate::tui::component::Component;
use crate::tui::components::loader;
use crate::tui::event::TuiEvent;

/// Rows moved by PageUp/PageDown
pub const PAGE: usize = 10;

/// Persistent cursor for one list.
#[derive(Debug, Default)]
pub struct NavListState {
    pub cursor: usize,
    pub list_state: ListState,
}

impl NavListState {
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.list_state = ListState::default();
    }

    /// Moves the cursor for a list of `len` items. Returns the chosen index on Enter.
    pub fn handle_event(&mut self, event: &TuiEvent, len: usize) -> Option<usize> {
        if len == 0 {
            self.cursor = 0;
            return None;
        }
        let last = len - 1;
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.cursor = self.cursor.saturating_sub(1),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.cursor = (self.cursor + 1).min(last),
            TuiEvent::PageUp => self.cursor = self.cursor.saturating_sub(PAGE),
            TuiEvent::PageDown => self.cursor = (self.cursor + PAGE).min(last),
            TuiEvent::CursorHome => self.cursor = 0,
            TuiEvent::CursorEnd => self.cursor = last,
            TuiEvent::Submit => return Some(self.cursor.min(last)),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper.
pub struct NavList<'a> {
    pub title: &'a str,
    pub items: Vec<Line<'a>>,
    /// Index of the entry the core currently has selected
    pub marked: Option<usize>,
    pub focused: bool,
    pub loading: bool,
    pub spinner_frame: usize,
    /// Shown when there is nothing to list
    pub empty_hint: &'a str,
    pub state: &'a mut NavListState,
}

impl Component for NavList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" {} ", self.title));

        if self.loading {
            let text = format!("{} Loading", loader::spinner(self.spinner_frame));
            frame.render_widget(
                Paragraph::new(text)
                    .style(Style::default().fg(Color::Yellow))
                    .block(block),
                area,
            );
            return;
        }

        if self.items.is_empty() {
            frame.render_widget(
                Paragraph::new(self.empty_hint)
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block),
                area,
            );
            return;
        }

        self.state.cursor = self.state.cursor.min(self.items.len() - 1);
        self.state.list_state.select(Some(self.state.cursor));

        let items: Vec<ListItem> = std::mem::take(&mut self.items)
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let marker = if self.marked == Some(i) { "● " } else { "  " };
                let mut spans = vec![Span::raw(marker)];
                spans.extend(line.spans);
                let style = if self.marked == Some(i) {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(spans)).style(style)
            })
            .collect();

        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let list = List::new(items).block(block).highlight_style(highlight);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_cursor_moves_within_bounds() {
        let mut state = NavListState::default();
        assert_eq!(state.handle_event(&TuiEvent::CursorUp, 3), None);
        assert_eq!(state.cursor, 0);
        state.handle_event(&TuiEvent::CursorDown, 3);
        state.handle_event(&TuiEvent::CursorDown, 3);
        state.handle_event(&TuiEvent::CursorDown, 3);
        assert_eq!(state.cursor, 2);
        state.handle_event(&TuiEvent::PageUp, 3);
        assert_eq!(state.cursor, 0);
        state.handle_event(&TuiEvent::PageDown, 50);
        assert_eq!(state.cursor, PAGE);
        state.handle_event(&TuiEvent::CursorEnd, 50);
        assert_eq!(state.handle_event(&TuiEvent::Submit, 50), Some(49));
    }

    #[test]
    fn test_submit_on_empty_list_is_ignored() {
        let mut state = NavListState::default();
        state.cursor = 4;
        assert_eq!(state.handle_event(&TuiEvent::Submit, 0), None);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_submit_clamps_stale_cursor() {
        let mut state = NavListState::default();
        state.cursor = 9;
        assert_eq!(state.handle_event(&TuiEvent::Submit, 3), Some(2));
    }

    #[test]
    fn test_render_marks_selected_entry() {
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        let mut state = NavListState::default();
        terminal
            .draw(|f| {
                NavList {
                    title: "Books",
                    items: vec![Line::from("Genesis"), Line::from("Exodus")],
                    marked: Some(1),
                    focused: true,
                    loading: false,
                    spinner_frame: 0,
                    empty_hint: "none",
                    state: &mut state,
                }
                .render(f, f.area());
            })
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Books"));
        assert!(text.contains("Genesis"));
        assert!(text.contains("● Exodus"));
    }

    #[test]
    fn test_render_empty_and_loading() {
        let mut terminal = Terminal::new(TestBackend::new(20, 4)).unwrap();
        let mut state = NavListState::default();
        terminal
            .draw(|f| {
                NavList {
                    title: "Verses",
                    items: Vec::new(),
                    marked: None,
                    focused: false,
                    loading: false,
                    spinner_frame: 0,
                    empty_hint: "Pick a chapter",
                    state: &mut state,
                }
                .render(f, f.area());
            })
            .unwrap();
        assert!(buffer_text(&terminal).contains("Pick a chapter"));

        terminal
            .draw(|f| {
                NavList {
                    title: "Verses",
                    items: Vec::new(),
                    marked: None,
                    focused: false,
                    loading: true,
                    spinner_frame: 0,
                    empty_hint: "Pick a chapter",
                    state: &mut state,
                }
                .render(f, f.area());
            })
            .unwrap();
        assert!(buffer_text(&terminal).contains("Loading"));
    }
}
