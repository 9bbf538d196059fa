//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Effects
//!
//! `update()` returns an `Effect`. `Effect::Fetch` is run on a tokio task via
//! `core::fetch::run`; `Effect::Share` is handed to the `ShareSink` on the
//! blocking pool. Both send their completion `Action` back over an mpsc
//! channel that the loop drains after input.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so spinners animate.
//! - **Idle**: sleeps up to 500ms, only redraws on events or completions.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, Fetch, update};
use crate::core::config::ResolvedConfig;
use crate::core::fetch;
use crate::core::resolver;
use crate::core::selection::Testament;
use crate::core::share::{ClipboardSink, ShareSink};
use crate::core::state::App;
use crate::scripture::ScriptureProvider;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    NavListState, SearchBox, SearchEvent, VersionPickerEvent, VersionPickerState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Single-key commands and pane navigation.
    Browse,
    /// Keystrokes go to the search box. Esc returns to Browse.
    Search,
}

/// Focusable panes, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Testament,
    Books,
    Chapters,
    Verses,
    Passage,
    Results,
}

impl Pane {
    const ORDER: [Pane; 6] = [
        Pane::Testament,
        Pane::Books,
        Pane::Chapters,
        Pane::Verses,
        Pane::Passage,
        Pane::Results,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Pane {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Pane {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Pane,
    pub input_mode: InputMode,
    // List cursors
    pub testaments: NavListState,
    pub books: NavListState,
    pub chapters: NavListState,
    pub verses: NavListState,
    pub results: NavListState,
    pub passage_scroll: u16,
    pub search_box: SearchBox,
    // Version picker overlay (None = hidden)
    pub version_picker: Option<VersionPickerState>,
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: Pane::Testament,
            input_mode: InputMode::Browse,
            testaments: NavListState::default(),
            books: NavListState::default(),
            chapters: NavListState::default(),
            verses: NavListState::default(),
            results: NavListState::default(),
            passage_scroll: 0,
            search_box: SearchBox::new(),
            version_picker: None,
            spinner_frame: 0,
        }
    }

    pub fn open_version_picker(&mut self) {
        if self.version_picker.is_none() {
            self.version_picker = Some(VersionPickerState::new());
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol is harmlessly ignored by terminals without it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(provider: Arc<dyn ScriptureProvider>, config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(provider, config.default_version);
    let mut tui = TuiState::new();
    let sink: Arc<dyn ShareSink> = Arc::new(ClipboardSink);

    let mut terminal = ratatui::init();
    let guard = TerminalModeGuard::new();
    if let Err(ref e) = guard {
        warn!("Failed to enable terminal modes: {}", e);
    }

    let result = event_loop(&mut terminal, &mut app, &mut tui, &sink);

    drop(guard);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    sink: &Arc<dyn ShareSink>,
) -> std::io::Result<()> {
    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    run_effect(update(app, Action::Startup), app, sink, &tx);

    loop {
        let animating = app.loading.any();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            tui.spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        // Short poll while spinners run, long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = dispatch(app, tui, &event) else {
                continue;
            };
            if run_effect(update(app, action), app, sink, &tx) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            info!("Quitting");
            return Ok(());
        }

        // Completions from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let versions_arrived = matches!(action, Action::VersionsLoaded(Ok(_)));
            run_effect(update(app, action), app, sink, &tx);
            // No preferred version could be applied: let the user choose
            if versions_arrived && app.selection.version_id().is_none() {
                tui.open_version_picker();
            }
        }
    }
}

/// Carries out an `Effect`. Returns true when the app should quit.
fn run_effect(
    effect: Effect,
    app: &App,
    sink: &Arc<dyn ShareSink>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::Fetch(request) => {
            spawn_fetch(app.provider.clone(), request, tx.clone());
            false
        }
        Effect::Share(text) => {
            spawn_share(sink.clone(), text, tx.clone());
            false
        }
    }
}

fn spawn_fetch(provider: Arc<dyn ScriptureProvider>, request: Fetch, tx: mpsc::Sender<Action>) {
    info!("Spawning fetch: {:?}", request);
    tokio::spawn(async move {
        let action = fetch::run(provider.as_ref(), request).await;
        if tx.send(action).is_err() {
            warn!("Failed to send fetch result: receiver dropped");
        }
    });
}

fn spawn_share(sink: Arc<dyn ShareSink>, text: String, tx: mpsc::Sender<Action>) {
    info!("Sharing {} bytes", text.len());
    tokio::task::spawn_blocking(move || {
        let result = sink.share(&text).map_err(|e| e.to_string());
        if tx.send(Action::ShareCompleted(result)).is_err() {
            warn!("Failed to send share result: receiver dropped");
        }
    });
}

/// Translates one terminal event into at most one core action, updating
/// presentation state (focus, cursors, overlays) along the way.
fn dispatch(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        // Ctrl+C always quits regardless of mode
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        _ => {}
    }

    // Picker overlay takes every key while open
    if let Some(picker) = tui.version_picker.as_mut() {
        return match picker.handle_event(event, &app.versions)? {
            VersionPickerEvent::Select(id) => {
                tui.version_picker = None;
                tui.books.reset();
                tui.chapters.reset();
                tui.verses.reset();
                tui.results.reset();
                tui.passage_scroll = 0;
                tui.focus = Pane::Testament;
                Some(Action::SelectVersion(id))
            }
            VersionPickerEvent::Dismiss => {
                tui.version_picker = None;
                None
            }
        };
    }

    if tui.input_mode == InputMode::Search {
        return match tui.search_box.handle_event(event)? {
            SearchEvent::Submit(term) => {
                tui.input_mode = InputMode::Browse;
                tui.focus = Pane::Results;
                tui.results.reset();
                Some(Action::Search(term))
            }
            SearchEvent::Leave => {
                tui.input_mode = InputMode::Browse;
                None
            }
        };
    }

    match event {
        TuiEvent::InputChar('q') => Some(Action::Quit),
        TuiEvent::InputChar('/') => {
            tui.input_mode = InputMode::Search;
            None
        }
        TuiEvent::InputChar('v') => {
            tui.open_version_picker();
            None
        }
        TuiEvent::InputChar('s') => Some(Action::Share),
        TuiEvent::InputChar('x') => Some(Action::DismissError),
        TuiEvent::Tab | TuiEvent::CursorRight => {
            tui.focus = tui.focus.next();
            None
        }
        TuiEvent::BackTab | TuiEvent::CursorLeft => {
            tui.focus = tui.focus.prev();
            None
        }
        _ => pane_event(app, tui, event),
    }
}

/// Movement and Enter within the focused pane.
fn pane_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match tui.focus {
        Pane::Testament => {
            let index = tui.testaments.handle_event(event, Testament::ALL.len())?;
            tui.books.reset();
            tui.focus = Pane::Books;
            Some(Action::SelectTestament(Testament::ALL[index]))
        }
        Pane::Books => {
            let offered = app.offered_books();
            let index = tui.books.handle_event(event, offered.len())?;
            tui.chapters.reset();
            tui.focus = Pane::Chapters;
            let book = offered[index];
            let name = resolver::book_name(&book.id).unwrap_or(book.name.as_str());
            Some(Action::SelectBook(name.to_string()))
        }
        Pane::Chapters => {
            let index = tui.chapters.handle_event(event, app.chapters.len())?;
            tui.verses.reset();
            tui.passage_scroll = 0;
            tui.focus = Pane::Verses;
            Some(Action::SelectChapter(app.chapters[index]))
        }
        Pane::Verses => {
            let index = tui.verses.handle_event(event, app.verses.len())?;
            tui.passage_scroll = 0;
            Some(Action::SelectVerse(app.verses[index]))
        }
        Pane::Passage => {
            let scroll = &mut tui.passage_scroll;
            match event {
                TuiEvent::CursorUp | TuiEvent::ScrollUp => *scroll = scroll.saturating_sub(1),
                TuiEvent::CursorDown | TuiEvent::ScrollDown => *scroll = scroll.saturating_add(1),
                TuiEvent::PageUp => *scroll = scroll.saturating_sub(10),
                TuiEvent::PageDown => *scroll = scroll.saturating_add(10),
                TuiEvent::CursorHome => *scroll = 0,
                // Clamped to the content on the next draw
                TuiEvent::CursorEnd => *scroll = u16::MAX,
                _ => {}
            }
            None
        }
        Pane::Results => {
            tui.results.handle_event(event, app.search_results.len());
            None
        }
    }
}
