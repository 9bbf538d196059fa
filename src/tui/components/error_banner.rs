//! # ErrorBanner Component
//!
//! Inline, non-blocking banner for the current error (red) or notice
//! (yellow). Dismissed with `x`. Takes no space when there is nothing to say.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::error::ReaderError;
use crate::tui::component::Component;

pub struct ErrorBanner<'a> {
    pub error: Option<&'a ReaderError>,
    pub notice: Option<&'a str>,
}

impl ErrorBanner<'_> {
    pub fn height(&self) -> u16 {
        if self.error.is_some() || self.notice.is_some() {
            3
        } else {
            0
        }
    }
}

impl Component for ErrorBanner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // An error outranks a notice
        let (title, text, color) = match (self.error, self.notice) {
            (Some(e), _) => (" Error ", e.to_string(), Color::Red),
            (None, Some(n)) => (" Notice ", n.to_string(), Color::Yellow),
            (None, None) => return,
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(title)
            .title_bottom(Line::from(" x Dismiss ").right_aligned());

        frame.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(color))
                .wrap(Wrap { trim: true })
                .block(block),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(banner: &mut ErrorBanner) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 3)).unwrap();
        terminal.draw(|f| banner.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_error_wins_over_notice() {
        let err = ReaderError::Precondition(error::NEED_BOOK);
        let mut banner = ErrorBanner {
            error: Some(&err),
            notice: Some(error::NO_RESULTS),
        };
        assert_eq!(banner.height(), 3);
        let text = render(&mut banner);
        assert!(text.contains("Please select a book first."));
        assert!(!text.contains("No results found"));
        assert!(text.contains("Dismiss"));
    }

    #[test]
    fn test_notice_alone() {
        let mut banner = ErrorBanner {
            error: None,
            notice: Some(error::NO_RESULTS),
        };
        assert!(render(&mut banner).contains("No results found"));
    }

    #[test]
    fn test_nothing_to_show_takes_no_space() {
        let banner = ErrorBanner {
            error: None,
            notice: None,
        };
        assert_eq!(banner.height(), 0);
    }
}
