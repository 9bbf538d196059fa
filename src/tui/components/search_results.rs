//! # SearchResults Component
//!
//! Lists the structured hits of the last search as `reference  text`.
//! Thin wrapper over `NavList` so the results pane scrolls like the others.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::share::strip_markup;
use crate::core::state::SearchResult;
use crate::tui::component::Component;
use crate::tui::components::nav_list::{NavList, NavListState};

pub struct SearchResults<'a> {
    pub results: &'a [SearchResult],
    pub query: &'a str,
    pub focused: bool,
    pub loading: bool,
    pub spinner_frame: usize,
    pub state: &'a mut NavListState,
}

impl Component for SearchResults<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.query.is_empty() || self.results.is_empty() {
            "Results".to_string()
        } else {
            format!("Results for \"{}\" ({})", self.query, self.results.len())
        };

        let items = self
            .results
            .iter()
            .map(|r| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<12}", r.reference),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::raw(strip_markup(&r.content)),
                ])
            })
            .collect();

        NavList {
            title: &title,
            items,
            marked: None,
            focused: self.focused,
            loading: self.loading,
            spinner_frame: self.spinner_frame,
            empty_hint: "Press / to search the selected version",
            state: &mut *self.state,
        }
        .render(frame, area);
    }
}
