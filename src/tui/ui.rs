use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::selection::Testament;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    ErrorBanner, NavList, PassageView, SearchResults, TitleBar, VersionPicker,
};
use crate::tui::{InputMode, Pane, TuiState};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};

    let mut banner = ErrorBanner {
        error: app.error.as_ref(),
        notice: app.notice.as_deref(),
    };
    let [title_area, banner_area, search_area, body_area, help_area] = Layout::vertical([
        Length(1),
        Length(banner.height()),
        Length(3),
        Min(0),
        Length(1),
    ])
    .areas(frame.area());

    let mut title_bar = TitleBar::new(
        app.selected_version().map(|v| v.abbreviation.clone()),
        app.status_message.clone(),
    );
    title_bar.loading = app.loading.any();
    title_bar.spinner_frame = tui.spinner_frame;
    title_bar.render(frame, title_area);

    banner.render(frame, banner_area);

    tui.search_box.active = tui.input_mode == InputMode::Search;
    tui.search_box.loading = app.loading.search;
    tui.search_box.spinner_frame = tui.spinner_frame;
    tui.search_box.render(frame, search_area);

    let [testament_area, books_area, chapters_area, verses_area, reading_area] =
        Layout::horizontal([Length(18), Length(24), Length(10), Length(10), Min(20)])
            .areas(body_area);
    let [passage_area, results_area] =
        Layout::vertical([Percentage(65), Percentage(35)]).areas(reading_area);

    draw_navigation(frame, app, tui, [testament_area, books_area, chapters_area, verses_area]);

    let passage_hint = if app.selection.chapter().is_some() {
        "Nothing to show."
    } else {
        "Select a chapter to start reading."
    };
    PassageView {
        passage: app.displayed_passage(),
        loading: app.loading.chapter || app.loading.verse,
        focused: tui.focus == Pane::Passage,
        spinner_frame: tui.spinner_frame,
        empty_hint: passage_hint,
        scroll: &mut tui.passage_scroll,
    }
    .render(frame, passage_area);

    SearchResults {
        results: &app.search_results,
        query: &app.search_query,
        focused: tui.focus == Pane::Results,
        loading: app.loading.search,
        spinner_frame: tui.spinner_frame,
        state: &mut tui.results,
    }
    .render(frame, results_area);

    frame.render_widget(help_line(tui.input_mode), help_area);

    if let Some(ref mut picker) = tui.version_picker {
        VersionPicker::new(picker, &app.versions, app.selection.version_id())
            .loading(app.loading.versions, tui.spinner_frame)
            .render(frame, frame.area());
    }
}

fn draw_navigation(frame: &mut Frame, app: &App, tui: &mut TuiState, areas: [Rect; 4]) {
    let [testament_area, books_area, chapters_area, verses_area] = areas;
    let spinner_frame = tui.spinner_frame;
    let focus = tui.focus;

    NavList {
        title: "Testament",
        items: Testament::ALL.iter().map(|t| Line::from(t.label())).collect(),
        marked: app
            .selection
            .testament()
            .and_then(|t| Testament::ALL.iter().position(|x| *x == t)),
        focused: focus == Pane::Testament,
        loading: false,
        spinner_frame,
        empty_hint: "",
        state: &mut tui.testaments,
    }
    .render(frame, testament_area);

    let offered = app.offered_books();
    let books_hint = if app.selection.version_id().is_none() {
        "Press v for versions"
    } else if app.selection.testament().is_none() {
        "Pick a testament"
    } else {
        "No books"
    };
    NavList {
        title: "Books",
        items: offered.iter().map(|b| Line::from(b.name.as_str())).collect(),
        marked: app
            .selection
            .book_id()
            .and_then(|id| offered.iter().position(|b| b.id == id)),
        focused: focus == Pane::Books,
        loading: app.loading.books,
        spinner_frame,
        empty_hint: books_hint,
        state: &mut tui.books,
    }
    .render(frame, books_area);

    NavList {
        title: "Chapter",
        items: app.chapters.iter().map(|c| Line::from(c.to_string())).collect(),
        marked: app
            .selection
            .chapter()
            .and_then(|c| app.chapters.iter().position(|x| *x == c)),
        focused: focus == Pane::Chapters,
        loading: app.loading.chapters,
        spinner_frame,
        empty_hint: "",
        state: &mut tui.chapters,
    }
    .render(frame, chapters_area);

    NavList {
        title: "Verse",
        items: app.verses.iter().map(|v| Line::from(v.to_string())).collect(),
        marked: app
            .selection
            .verse()
            .and_then(|v| app.verses.iter().position(|x| *x == v)),
        focused: focus == Pane::Verses,
        loading: app.loading.chapter,
        spinner_frame,
        empty_hint: "",
        state: &mut tui.verses,
    }
    .render(frame, verses_area);
}

fn help_line(mode: InputMode) -> Line<'static> {
    let keys: &[(&str, &str)] = match mode {
        InputMode::Search => &[("Enter", "Search"), ("Esc", "Back")],
        InputMode::Browse => &[
            ("Tab", "Pane"),
            ("↑↓", "Move"),
            ("Enter", "Select"),
            ("/", "Search"),
            ("v", "Version"),
            ("s", "Share"),
            ("x", "Dismiss"),
            ("q", "Quit"),
        ],
    };
    let mut spans = Vec::new();
    for (key, label) in keys {
        spans.push(Span::styled(format!(" {key}"), Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(format!(" {label} "), Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}
