//! # Version Picker Component
//!
//! Overlay for choosing the Bible version. Opened with `v`, and shown
//! automatically after startup when no preferred version was selected.
//! Typing filters the list by name or language.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `VersionPickerState` lives in `TuiState`
//! - `VersionPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::state::matching_versions;
use crate::scripture::BibleVersion;
use crate::tui::components::loader;
use crate::tui::event::TuiEvent;

/// Persistent state for the version picker overlay.
#[derive(Debug, Default)]
pub struct VersionPickerState {
    pub filter: String,
    pub selected: usize,
    pub list_state: ListState,
}

impl VersionPickerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key event against the full version list.
    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        versions: &[BibleVersion],
    ) -> Option<VersionPickerEvent> {
        let matches = matching_versions(versions, &self.filter);
        match event {
            TuiEvent::Escape => Some(VersionPickerEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if !matches.is_empty() {
                    self.selected = (self.selected + 1).min(matches.len() - 1);
                }
                None
            }
            TuiEvent::InputChar(c) => {
                self.filter.push(*c);
                self.selected = 0;
                None
            }
            TuiEvent::Paste(text) => {
                self.filter.extend(text.chars().filter(|c| !c.is_control()));
                self.selected = 0;
                None
            }
            TuiEvent::Backspace => {
                self.filter.pop();
                self.selected = 0;
                None
            }
            TuiEvent::Submit => matches
                .get(self.selected)
                .map(|v| VersionPickerEvent::Select(v.id.clone())),
            _ => None,
        }
    }
}

/// Events emitted by the version picker.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionPickerEvent {
    Select(String),
    Dismiss,
}

/// Transient render wrapper for the version picker overlay.
pub struct VersionPicker<'a> {
    state: &'a mut VersionPickerState,
    versions: &'a [BibleVersion],
    current_version: Option<&'a str>,
    loading: bool,
    spinner_frame: usize,
}

impl<'a> VersionPicker<'a> {
    pub fn new(
        state: &'a mut VersionPickerState,
        versions: &'a [BibleVersion],
        current_version: Option<&'a str>,
    ) -> Self {
        Self {
            state,
            versions,
            current_version,
            loading: false,
            spinner_frame: 0,
        }
    }

    pub fn loading(mut self, loading: bool, spinner_frame: usize) -> Self {
        self.loading = loading;
        self.spinner_frame = spinner_frame;
        self
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 70, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Bible Versions ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Type to filter  Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [filter_area, list_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);

        let filter_line = Line::from(vec![
            Span::styled("Filter: ", Style::default().fg(Color::DarkGray)),
            Span::styled(self.state.filter.as_str(), Style::default().fg(Color::Green)),
        ]);
        frame.render_widget(Paragraph::new(filter_line), filter_area);

        if self.loading {
            let text = format!("{} Loading Bible versions...", loader::spinner(self.spinner_frame));
            frame.render_widget(
                Paragraph::new(text)
                    .style(Style::default().fg(Color::Yellow))
                    .alignment(Alignment::Center),
                list_area,
            );
            return;
        }

        let matches = matching_versions(self.versions, &self.state.filter);
        if matches.is_empty() {
            let text = if self.versions.is_empty() {
                "No versions available."
            } else {
                "No versions match the filter."
            };
            frame.render_widget(
                Paragraph::new(text)
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center),
                list_area,
            );
            return;
        }

        self.state.selected = self.state.selected.min(matches.len() - 1);
        self.state.list_state.select(Some(self.state.selected));

        let max_width = list_area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = matches
            .iter()
            .enumerate()
            .map(|(i, version)| {
                let is_active = self.current_version == Some(version.id.as_str());
                let active_marker = if is_active { " *" } else { "" };
                let abbreviation = format!("{:<8}", version.abbreviation);
                let label_width = max_width
                    .saturating_sub(abbreviation.width())
                    .saturating_sub(active_marker.len());
                let label = truncate_str(&version.label(), label_width);

                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_active {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(
                        abbreviation,
                        if i == self.state.selected {
                            style
                        } else {
                            Style::default().fg(Color::Yellow)
                        },
                    ),
                    Span::styled(label, style),
                    Span::styled(active_marker, style),
                ]))
            })
            .collect();

        frame.render_stateful_widget(List::new(items), list_area, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` display columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
