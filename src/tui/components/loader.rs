//! # Loader
//!
//! Spinner glyphs for regions with a request in flight.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(frame: usize) -> &'static str {
    FRAMES[frame % FRAMES.len()]
}

/// Centered spinner with a label, used inside otherwise empty regions.
pub struct Loader<'a> {
    pub label: &'a str,
    pub frame: usize,
}

impl Component for Loader<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = format!("{} {}", spinner(self.frame), self.label);
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow)),
            area,
        );
    }
}
