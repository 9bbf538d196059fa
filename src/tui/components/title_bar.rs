//! # TitleBar Component
//!
//! Top status bar: app name, current version, status message, and a spinner
//! while anything is loading.
//!
//! Stateless: all fields are props filled from `App` each frame.
//!
//! 1. **Version + status**: `"SkyWord (KJV) | Version: King James Version"`
//! 2. **No version**: `"SkyWord | Welcome to SkyWord!"`
//! 3. **Nothing to say**: `"SkyWord"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::components::loader;

pub struct TitleBar {
    /// Abbreviation of the selected version, if any
    pub version: Option<String>,
    pub status_message: String,
    pub loading: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(version: Option<String>, status_message: String) -> Self {
        Self {
            version,
            status_message,
            loading: false,
            spinner_frame: 0,
        }
    }

    fn text(&self) -> String {
        let name = match &self.version {
            Some(v) => format!("SkyWord ({v})"),
            None => "SkyWord".to_string(),
        };
        if self.status_message.is_empty() {
            name
        } else {
            format!("{} | {}", name, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            self.text(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if self.loading {
            spans.push(Span::styled(
                format!(" {}", loader::spinner(self.spinner_frame)),
                Style::default().fg(Color::Yellow),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
