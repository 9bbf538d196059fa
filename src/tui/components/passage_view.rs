//! # PassageView Component
//!
//! Renders the displayed passage (verse if one is selected, else chapter).
//! Scroll offset is persistent TUI state, clamped here against the wrapped
//! line count so PageDown past the end stays put.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::share::strip_markup;
use crate::core::state::PassageContent;
use crate::tui::component::Component;
use crate::tui::components::loader::Loader;

pub struct PassageView<'a> {
    pub passage: Option<&'a PassageContent>,
    pub loading: bool,
    pub focused: bool,
    pub spinner_frame: usize,
    pub empty_hint: &'a str,
    pub scroll: &'a mut u16,
}

impl Component for PassageView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let title = match self.passage {
            Some(p) => format!(" {} ", p.reference),
            None => " Passage ".to_string(),
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(title)
            .title_style(Style::default().add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.loading {
            *self.scroll = 0;
            Loader {
                label: "Loading passage...",
                frame: self.spinner_frame,
            }
            .render(frame, inner);
            return;
        }

        let Some(passage) = self.passage else {
            *self.scroll = 0;
            frame.render_widget(
                Paragraph::new(self.empty_hint).style(Style::default().fg(Color::DarkGray)),
                inner,
            );
            return;
        };

        let lines: Vec<Line> = strip_markup(&passage.content)
            .lines()
            .map(|l| Line::from(l.trim_end().to_string()))
            .collect();
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });

        let total = paragraph.line_count(inner.width) as u16;
        let max_scroll = total.saturating_sub(inner.height);
        *self.scroll = (*self.scroll).min(max_scroll);

        frame.render_widget(paragraph.scroll((*self.scroll, 0)), inner);
    }
}
