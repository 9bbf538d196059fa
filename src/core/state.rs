//! # Application State
//!
//! Core session state for SkyWord. Domain data only, no TUI types.
//! Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── provider: Arc<dyn ScriptureProvider>  // external scripture API
//! ├── preferred_version: Option<String>     // auto-selected after startup
//! ├── versions: Vec<BibleVersion>           // fetched once at startup
//! ├── selection: Selection                  // version/testament/book/chapter/verse
//! ├── books: Vec<Book>                      // for the selected version
//! ├── chapters: Vec<u32>                    // for the selected book
//! ├── verses: Vec<u32>                      // for the selected chapter
//! ├── chapter_passage: Option<PassageContent>
//! ├── verse_passage: Option<PassageContent>
//! ├── search_query / search_results / search_serial
//! ├── loading: Loading                      // per-region spinners
//! ├── error: Option<ReaderError>            // dismissable banner
//! ├── notice: Option<String>                // non-error banner ("No results found")
//! └── status_message: String                // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::error::ReaderError;
use crate::core::resolver::{self, ResolveError};
use crate::core::selection::Selection;
use crate::core::testament;
use crate::scripture::{BibleVersion, Book, ScriptureProvider, SearchHit};

/// Rendered text for a whole chapter or a single verse.
#[derive(Debug, Clone, PartialEq)]
pub struct PassageContent {
    pub content: String,
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub content: String,
    pub reference: String,
    pub book_id: String,
    pub chapter: u32,
    pub verse: u32,
}

impl SearchResult {
    /// Structures a hit from its reference string, falling back to the
    /// dotted verse id. Fails only when neither parses.
    pub fn from_hit(hit: &SearchHit) -> Result<Self, ResolveError> {
        // "John 3:16" parses, but "John" is not a book id
        let parsed = resolver::parse_search_reference(&hit.reference)
            .and_then(|r| {
                if testament::is_canonical(&r.book_id) {
                    Ok(r)
                } else {
                    Err(ResolveError::MalformedReference(hit.reference.clone()))
                }
            })
            .or_else(|err| resolver::parse_verse_id(&hit.id).map_err(|_| err))?;

        Ok(Self {
            content: hit.text.clone(),
            reference: hit.reference.clone(),
            book_id: parsed.book_id,
            chapter: parsed.chapter,
            verse: parsed.verse,
        })
    }
}

/// In-flight request indicators, one per UI region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Loading {
    pub versions: bool,
    pub books: bool,
    pub chapters: bool,
    /// Verse list + whole-chapter passage.
    pub chapter: bool,
    pub verse: bool,
    pub search: bool,
}

impl Loading {
    pub fn any(&self) -> bool {
        self.versions || self.books || self.chapters || self.chapter || self.verse || self.search
    }
}

pub struct App {
    pub provider: Arc<dyn ScriptureProvider>,
    pub preferred_version: Option<String>,
    pub versions: Vec<BibleVersion>,
    pub selection: Selection,
    pub books: Vec<Book>,
    pub chapters: Vec<u32>,
    pub verses: Vec<u32>,
    pub chapter_passage: Option<PassageContent>,
    pub verse_passage: Option<PassageContent>,
    /// Last submitted (trimmed) search term.
    pub search_query: String,
    pub search_results: Vec<SearchResult>,
    /// Bumped on every issued search; completions with an older serial are stale.
    pub search_serial: u64,
    pub loading: Loading,
    pub error: Option<ReaderError>,
    pub notice: Option<String>,
    pub status_message: String,
}

impl App {
    pub fn new(provider: Arc<dyn ScriptureProvider>, preferred_version: Option<String>) -> Self {
        Self {
            provider,
            preferred_version,
            versions: Vec::new(),
            selection: Selection::default(),
            books: Vec::new(),
            chapters: Vec::new(),
            verses: Vec::new(),
            chapter_passage: None,
            verse_passage: None,
            search_query: String::new(),
            search_results: Vec::new(),
            search_serial: 0,
            loading: Loading::default(),
            error: None,
            notice: None,
            status_message: String::from("Welcome to SkyWord!"),
        }
    }

    pub fn selected_version(&self) -> Option<&BibleVersion> {
        let id = self.selection.version_id()?;
        self.versions.iter().find(|v| v.id == id)
    }

    /// Verse content when a verse is selected, else chapter content when a
    /// chapter is selected, else nothing.
    pub fn displayed_passage(&self) -> Option<&PassageContent> {
        if self.selection.verse().is_some() {
            self.verse_passage.as_ref()
        } else if self.selection.chapter().is_some() {
            self.chapter_passage.as_ref()
        } else {
            None
        }
    }

    /// Books offered for selection: only those in the selected testament.
    pub fn offered_books(&self) -> Vec<&Book> {
        match self.selection.testament() {
            Some(t) => testament::books_in(&self.books, t),
            None => Vec::new(),
        }
    }

    /// Drops displayed content and everything below the book level.
    pub(crate) fn clear_below_book(&mut self) {
        self.chapters.clear();
        self.clear_below_chapter();
        self.loading.chapters = false;
    }

    /// Drops displayed content and the verse list.
    pub(crate) fn clear_below_chapter(&mut self) {
        self.verses.clear();
        self.chapter_passage = None;
        self.verse_passage = None;
        self.loading.chapter = false;
        self.loading.verse = false;
    }
}

/// Versions whose name or language contains `filter` (case-insensitive).
pub fn matching_versions<'a>(versions: &'a [BibleVersion], filter: &str) -> Vec<&'a BibleVersion> {
    let needle = filter.trim().to_lowercase();
    versions
        .iter()
        .filter(|v| {
            needle.is_empty()
                || v.name.to_lowercase().contains(&needle)
                || v.language.name.to_lowercase().contains(&needle)
        })
        .collect()
}
