//! # Actions
//!
//! Everything that can happen in SkyWord becomes an `Action`.
//! User picks a chapter? That's `Action::SelectChapter(3)`.
//! The verse list arrives? That's `Action::VersesLoaded { key, result }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the adapter should
//! perform next. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## Dependent fetches
//!
//! ```text
//! SelectVersion ─► Books
//! SelectBook    ─► Chapters
//! SelectChapter ─► Verses ─(ok)─► ChapterPassage
//! SelectVerse   ─► VersePassage
//! Search        ─► Search
//! ```
//!
//! The chapter passage is only requested from the `VersesLoaded` handler, so
//! the two chapter fetches can never complete out of order.
//!
//! Every completion carries the selection key it was issued for. If the
//! current selection no longer yields that key the result is dropped.

use log::{debug, info, warn};

use crate::core::error::{self, ReaderError};
use crate::core::resolver;
use crate::core::selection::{BookKey, ChapterKey, Testament, VerseKey};
use crate::core::share;
use crate::core::state::{App, PassageContent, SearchResult};
use crate::scripture::{
    BibleVersion, Book, ChapterSummary, Passage, ProviderError, SearchPage, VerseSummary,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // User intents
    Startup,
    SelectVersion(String),
    SelectTestament(Testament),
    /// Human-readable book name, resolved through the book table.
    SelectBook(String),
    SelectChapter(u32),
    SelectVerse(u32),
    Search(String),
    Share,
    DismissError,
    Quit,

    // Fetch completions
    VersionsLoaded(Result<Vec<BibleVersion>, ProviderError>),
    BooksLoaded {
        version_id: String,
        result: Result<Vec<Book>, ProviderError>,
    },
    ChaptersLoaded {
        key: BookKey,
        result: Result<Vec<ChapterSummary>, ProviderError>,
    },
    VersesLoaded {
        key: ChapterKey,
        result: Result<Vec<VerseSummary>, ProviderError>,
    },
    ChapterPassageLoaded {
        key: ChapterKey,
        result: Result<Passage, ProviderError>,
    },
    VersePassageLoaded {
        key: VerseKey,
        result: Result<Passage, ProviderError>,
    },
    SearchCompleted {
        version_id: String,
        serial: u64,
        result: Result<SearchPage, ProviderError>,
    },
    ShareCompleted(Result<(), String>),
}

/// A provider request the adapter should run, tagged with what it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    Versions,
    Books { version_id: String },
    Chapters(BookKey),
    Verses(ChapterKey),
    ChapterPassage(ChapterKey),
    VersePassage(VerseKey),
    Search {
        version_id: String,
        query: String,
        serial: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    Fetch(Fetch),
    /// Hand this text to the share sink.
    Share(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Startup => {
            app.loading.versions = true;
            app.status_message = "Loading Bible versions...".to_string();
            Effect::Fetch(Fetch::Versions)
        }
        Action::SelectVersion(version_id) => select_version(app, &version_id),
        Action::SelectTestament(testament) => select_testament(app, testament),
        Action::SelectBook(name) => select_book(app, &name),
        Action::SelectChapter(chapter) => select_chapter(app, chapter),
        Action::SelectVerse(verse) => select_verse(app, verse),
        Action::Search(term) => search(app, &term),
        Action::Share => share_passage(app),
        Action::DismissError => {
            app.error = None;
            app.notice = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,

        Action::VersionsLoaded(result) => versions_loaded(app, result),
        Action::BooksLoaded { version_id, result } => books_loaded(app, &version_id, result),
        Action::ChaptersLoaded { key, result } => chapters_loaded(app, key, result),
        Action::VersesLoaded { key, result } => verses_loaded(app, key, result),
        Action::ChapterPassageLoaded { key, result } => chapter_passage_loaded(app, key, result),
        Action::VersePassageLoaded { key, result } => verse_passage_loaded(app, key, result),
        Action::SearchCompleted {
            version_id,
            serial,
            result,
        } => search_completed(app, &version_id, serial, result),
        Action::ShareCompleted(result) => {
            match result {
                Ok(()) => app.status_message = "Verse copied to clipboard!".to_string(),
                Err(reason) => {
                    warn!("Share failed: {}", reason);
                    app.status_message.clear();
                    app.error = Some(ReaderError::Share(reason));
                }
            }
            Effect::None
        }
    }
}

// ============================================================================
// User intents
// ============================================================================

fn select_version(app: &mut App, version_id: &str) -> Effect {
    info!("Selecting version {}", version_id);

    app.selection = app.selection.with_version(version_id);
    app.books.clear();
    app.clear_below_book();
    app.error = None;
    app.notice = None;
    app.search_results.clear();
    // Abandon any in-flight search for the previous version
    app.search_serial += 1;
    app.loading.search = false;
    app.loading.books = true;

    app.status_message = match app.selected_version() {
        Some(v) => format!("Version: {}", v.name),
        None => format!("Version: {version_id}"),
    };

    Effect::Fetch(Fetch::Books {
        version_id: version_id.to_string(),
    })
}

fn select_testament(app: &mut App, testament: Testament) -> Effect {
    let Some(next) = app.selection.with_testament(testament) else {
        app.error = Some(ReaderError::Precondition(error::NEED_VERSION));
        return Effect::None;
    };

    info!("Selecting testament {}", testament);
    app.selection = next;
    app.clear_below_book();
    Effect::None
}

fn select_book(app: &mut App, name: &str) -> Effect {
    if app.selection.version_id().is_none() {
        app.error = Some(ReaderError::Precondition(error::NEED_VERSION));
        return Effect::None;
    }

    let book_id = match resolver::resolve_book_id(name) {
        Ok(id) => id,
        Err(e) => {
            warn!("Could not resolve book name {:?}", name);
            app.error = Some(ReaderError::Resolution(e));
            return Effect::None;
        }
    };

    let Some(next) = app.selection.with_book(book_id) else {
        app.error = Some(ReaderError::Precondition(error::NEED_VERSION));
        return Effect::None;
    };
    let Some(key) = next.book_key() else {
        return Effect::None;
    };

    info!("Selecting book {} ({})", name, book_id);
    app.selection = next;
    app.clear_below_book();
    app.error = None;
    app.notice = None;
    app.search_results.clear();
    app.loading.chapters = true;

    Effect::Fetch(Fetch::Chapters(key))
}

fn select_chapter(app: &mut App, chapter: u32) -> Effect {
    let Some(next) = app.selection.with_chapter(chapter) else {
        app.error = Some(ReaderError::Precondition(error::NEED_BOOK));
        return Effect::None;
    };
    let Some(key) = next.chapter_key() else {
        app.error = Some(ReaderError::Precondition(error::NEED_BOOK));
        return Effect::None;
    };

    info!("Selecting chapter {}", key.reference());
    app.selection = next;
    app.clear_below_chapter();
    app.error = None;
    app.notice = None;
    app.search_results.clear();
    app.loading.chapter = true;

    Effect::Fetch(Fetch::Verses(key))
}

fn select_verse(app: &mut App, verse: u32) -> Effect {
    let Some(next) = app.selection.with_verse(verse) else {
        app.error = Some(ReaderError::Precondition(error::NEED_CHAPTER));
        return Effect::None;
    };
    let Some(key) = next.verse_key() else {
        app.error = Some(ReaderError::Precondition(error::NEED_CHAPTER));
        return Effect::None;
    };

    info!("Selecting verse {}", key.passage_id());
    app.selection = next;
    app.chapter_passage = None;
    app.verse_passage = None;
    app.error = None;
    app.notice = None;
    app.search_results.clear();
    app.loading.verse = true;

    Effect::Fetch(Fetch::VersePassage(key))
}

fn search(app: &mut App, term: &str) -> Effect {
    let query = term.trim();
    let version_id = match app.selection.version_id() {
        Some(id) if !query.is_empty() => id.to_string(),
        _ => {
            app.error = Some(ReaderError::Validation(error::NEED_SEARCH_INPUT));
            return Effect::None;
        }
    };

    info!("Searching {} for {:?}", version_id, query);
    app.search_serial += 1;
    app.search_query = query.to_string();
    app.error = None;
    app.notice = None;
    app.loading.search = true;

    Effect::Fetch(Fetch::Search {
        version_id,
        query: query.to_string(),
        serial: app.search_serial,
    })
}

fn share_passage(app: &mut App) -> Effect {
    let Some(passage) = app.displayed_passage() else {
        app.status_message = "Nothing to share yet".to_string();
        return Effect::None;
    };

    let text = share::format_for_share(&passage.reference, &passage.content);
    let reference = passage.reference.clone();
    app.status_message = format!("Sharing {reference}...");
    Effect::Share(text)
}

// ============================================================================
// Completions
// ============================================================================

fn versions_loaded(app: &mut App, result: Result<Vec<BibleVersion>, ProviderError>) -> Effect {
    app.loading.versions = false;

    match result {
        Ok(versions) => {
            info!("Loaded {} Bible versions", versions.len());
            app.versions = versions;
            app.status_message = format!("{} Bible versions available", app.versions.len());

            if app.selection.version_id().is_some() {
                return Effect::None;
            }
            if let Some(preferred) = app.preferred_version.clone() {
                if app.versions.iter().any(|v| v.id == preferred) {
                    return select_version(app, &preferred);
                }
                warn!("Preferred version {} not offered by provider", preferred);
            }
            Effect::None
        }
        Err(e) => {
            warn!("Failed to load versions: {}", e);
            app.status_message.clear();
            app.error = Some(ReaderError::provider(error::VERSIONS_FAILED, e));
            Effect::None
        }
    }
}

fn books_loaded(
    app: &mut App,
    version_id: &str,
    result: Result<Vec<Book>, ProviderError>,
) -> Effect {
    if app.selection.version_id() != Some(version_id) {
        debug!("Discarding stale books for version {}", version_id);
        return Effect::None;
    }
    app.loading.books = false;

    match result {
        Ok(books) => {
            debug!("Loaded {} books for {}", books.len(), version_id);
            app.books = books;
        }
        Err(e) => {
            warn!("Failed to load books for {}: {}", version_id, e);
            app.books.clear();
            app.error = Some(ReaderError::provider(error::BOOKS_FAILED, e));
        }
    }
    Effect::None
}

fn chapters_loaded(
    app: &mut App,
    key: BookKey,
    result: Result<Vec<ChapterSummary>, ProviderError>,
) -> Effect {
    if app.selection.book_key().as_ref() != Some(&key) {
        debug!("Discarding stale chapters for {:?}", key);
        return Effect::None;
    }
    app.loading.chapters = false;

    match result {
        Ok(chapters) => {
            app.chapters = resolver::chapter_numbers(&chapters);
            debug!(
                "{} has {} numeric chapters ({} records)",
                key.book_id,
                app.chapters.len(),
                chapters.len()
            );
        }
        Err(e) => {
            warn!("Failed to load chapters for {}: {}", key.book_id, e);
            app.chapters.clear();
            app.error = Some(ReaderError::provider(error::CHAPTERS_FAILED, e));
        }
    }
    Effect::None
}

fn verses_loaded(
    app: &mut App,
    key: ChapterKey,
    result: Result<Vec<VerseSummary>, ProviderError>,
) -> Effect {
    if app.selection.chapter_key().as_ref() != Some(&key) {
        debug!("Discarding stale verse list for {}", key.chapter_id());
        return Effect::None;
    }

    match result {
        Ok(verses) => {
            app.verses = resolver::verse_numbers(&verses);
            debug!("{} has {} verses", key.chapter_id(), app.verses.len());
            Effect::Fetch(Fetch::ChapterPassage(key))
        }
        Err(e) => {
            warn!("Failed to load verse list for {}: {}", key.chapter_id(), e);
            app.verses.clear();
            app.chapter_passage = None;
            app.loading.chapter = false;
            app.error = Some(ReaderError::provider(error::CHAPTER_FAILED, e));
            Effect::None
        }
    }
}

fn chapter_passage_loaded(
    app: &mut App,
    key: ChapterKey,
    result: Result<Passage, ProviderError>,
) -> Effect {
    if app.selection.chapter_key().as_ref() != Some(&key) {
        debug!("Discarding stale passage for {}", key.chapter_id());
        return Effect::None;
    }
    app.loading.chapter = false;

    match non_empty(result) {
        Ok(passage) => {
            debug!("{}: {} bytes of content", key.reference(), passage.content.len());
            app.chapter_passage = Some(PassageContent {
                content: passage.content,
                reference: key.reference(),
            });
        }
        Err(e) => {
            // The verse list stays: partial success is allowed for it
            warn!("Failed to load passage for {}: {}", key.chapter_id(), e);
            app.chapter_passage = None;
            app.error = Some(ReaderError::provider(error::CHAPTER_CONTENT_FAILED, e));
        }
    }
    Effect::None
}

fn verse_passage_loaded(
    app: &mut App,
    key: VerseKey,
    result: Result<Passage, ProviderError>,
) -> Effect {
    if app.selection.verse_key().as_ref() != Some(&key) {
        debug!("Discarding stale verse {}", key.passage_id());
        return Effect::None;
    }
    app.loading.verse = false;

    match non_empty(result) {
        Ok(passage) => {
            app.verse_passage = Some(PassageContent {
                content: passage.content,
                reference: passage.reference,
            });
        }
        Err(e) => {
            warn!("Failed to load verse {}: {}", key.passage_id(), e);
            app.verse_passage = None;
            app.error = Some(ReaderError::provider(error::VERSE_FAILED, e));
        }
    }
    Effect::None
}

fn search_completed(
    app: &mut App,
    version_id: &str,
    serial: u64,
    result: Result<SearchPage, ProviderError>,
) -> Effect {
    if serial != app.search_serial || app.selection.version_id() != Some(version_id) {
        debug!("Discarding stale search #{} for {}", serial, version_id);
        return Effect::None;
    }
    app.loading.search = false;

    let page = match result {
        Ok(page) => page,
        Err(e) => {
            warn!("Search failed: {}", e);
            app.search_results.clear();
            app.error = Some(ReaderError::provider(error::SEARCH_FAILED, e));
            return Effect::None;
        }
    };

    let parsed: Result<Vec<SearchResult>, _> =
        page.verses.iter().map(SearchResult::from_hit).collect();

    match parsed {
        Ok(results) => {
            info!("Search {:?}: {} results", app.search_query, results.len());
            if results.is_empty() {
                app.notice = Some(error::NO_RESULTS.to_string());
            }
            app.search_results = results;
        }
        Err(e) => {
            warn!("Search returned an unparseable hit: {}", e);
            app.search_results.clear();
            app.error = Some(ReaderError::Resolution(e));
        }
    }
    Effect::None
}

/// A passage with no content is as good as a failed request.
fn non_empty(result: Result<Passage, ProviderError>) -> Result<Passage, ProviderError> {
    match result {
        Ok(passage) if passage.content.trim().is_empty() => {
            Err(ProviderError::Parse("passage has no content".to_string()))
        }
        other => other,
    }
}
