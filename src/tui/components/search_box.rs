//! # SearchBox Component
//!
//! Single-line search input. `/` focuses it, Enter submits, Esc leaves.
//! The submitted text stays in the buffer so the query remains visible next
//! to its results. Validation (empty term, no version) is the core's job:
//! Enter always submits.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::loader;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    Submit(String),
    Leave,
}

#[derive(Debug, Default)]
pub struct SearchBox {
    pub buffer: String,
    /// Byte offset into `buffer`
    cursor: usize,
    /// Prop: whether keystrokes are routed here
    pub active: bool,
    /// Prop
    pub loading: bool,
    /// Prop
    pub spinner_frame: usize,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.loading {
            format!(" Search {} ", loader::spinner(self.spinner_frame))
        } else {
            " Search ".to_string()
        };
        let (border, hint) = if self.active {
            (Color::Cyan, " Enter Search  Esc Back ")
        } else {
            (Color::DarkGray, " / to search ")
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(title)
            .title_bottom(hint);

        let inner = block.inner(area);
        let text_style = if self.active {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(
            Paragraph::new(self.buffer.as_str())
                .style(text_style)
                .block(block),
            area,
        );

        if self.active {
            let before = UnicodeWidthStr::width(&self.buffer[..self.cursor]) as u16;
            let x = inner.x + before.min(inner.width.saturating_sub(1));
            frame.set_cursor_position((x, inner.y));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                None
            }
            TuiEvent::Paste(text) => {
                // Single line only
                let text: String = text.chars().filter(|c| !c.is_control()).collect();
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                None
            }
            TuiEvent::Backspace => {
                if let Some((prev, _)) = self.buffer[..self.cursor].char_indices().next_back() {
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                }
                None
            }
            TuiEvent::Delete => {
                if let Some(c) = self.buffer[self.cursor..].chars().next() {
                    self.buffer.drain(self.cursor..self.cursor + c.len_utf8());
                }
                None
            }
            TuiEvent::CursorLeft => {
                if let Some((prev, _)) = self.buffer[..self.cursor].char_indices().next_back() {
                    self.cursor = prev;
                }
                None
            }
            TuiEvent::CursorRight => {
                if let Some(c) = self.buffer[self.cursor..].chars().next() {
                    self.cursor += c.len_utf8();
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(SearchEvent::Submit(self.buffer.clone())),
            TuiEvent::Escape => Some(SearchEvent::Leave),
            _ => None,
        }
    }
}
