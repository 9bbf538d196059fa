//! # Selection
//!
//! The session's composite navigation key:
//!
//! ```text
//! version → testament → book → chapter → verse
//! ```
//!
//! A field is only meaningful while all of its ancestors are set. Every
//! transition returns a fresh snapshot with all descendants of the changed
//! field cleared, so an inconsistent selection cannot be constructed through
//! this API.
//!
//! ## Stale-response guard
//!
//! Each fetch is tagged with the key of the selection it was issued against
//! (`BookKey`, `ChapterKey`, `VerseKey`, or just the version id). When the
//! result arrives, it is applied only if the current selection still yields
//! an equal key. Testament is not part of any key: switching
//! testament does not invalidate the book list.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed partition of the canonical books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    pub const ALL: [Testament; 2] = [Testament::Old, Testament::New];

    pub fn label(&self) -> &'static str {
        match self {
            Testament::Old => "Old Testament",
            Testament::New => "New Testament",
        }
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Testament::Old => write!(f, "OLD"),
            Testament::New => write!(f, "NEW"),
        }
    }
}

/// Tag for a chapter-list fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookKey {
    pub version_id: String,
    pub book_id: String,
}

/// Tag for the verse-list and whole-chapter passage fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterKey {
    pub version_id: String,
    pub book_id: String,
    pub chapter: u32,
}

impl ChapterKey {
    /// Provider chapter id, e.g. `GEN.1`.
    pub fn chapter_id(&self) -> String {
        crate::core::resolver::chapter_id(&self.book_id, self.chapter)
    }

    /// Display reference for a whole chapter, e.g. `GEN 1`.
    pub fn reference(&self) -> String {
        format!("{} {}", self.book_id, self.chapter)
    }
}

/// Tag for a single-verse passage fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseKey {
    pub chapter: ChapterKey,
    pub verse: u32,
}

impl VerseKey {
    /// Provider passage id, e.g. `GEN.1.3`.
    pub fn passage_id(&self) -> String {
        crate::core::resolver::verse_passage_id(
            &self.chapter.book_id,
            self.chapter.chapter,
            self.verse,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    version_id: Option<String>,
    testament: Option<Testament>,
    book_id: Option<String>,
    chapter: Option<u32>,
    verse: Option<u32>,
}

impl Selection {
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    pub fn testament(&self) -> Option<Testament> {
        self.testament
    }

    pub fn book_id(&self) -> Option<&str> {
        self.book_id.as_deref()
    }

    pub fn chapter(&self) -> Option<u32> {
        self.chapter
    }

    pub fn verse(&self) -> Option<u32> {
        self.verse
    }

    /// Selecting a version resets everything below it.
    pub fn with_version(&self, version_id: &str) -> Selection {
        Selection {
            version_id: Some(version_id.to_string()),
            ..Selection::default()
        }
    }

    /// `None` when no version is selected.
    pub fn with_testament(&self, testament: Testament) -> Option<Selection> {
        self.version_id.as_ref()?;
        Some(Selection {
            version_id: self.version_id.clone(),
            testament: Some(testament),
            ..Selection::default()
        })
    }

    /// `None` when no version is selected. Testament survives.
    pub fn with_book(&self, book_id: &str) -> Option<Selection> {
        self.version_id.as_ref()?;
        Some(Selection {
            version_id: self.version_id.clone(),
            testament: self.testament,
            book_id: Some(book_id.to_string()),
            ..Selection::default()
        })
    }

    /// `None` when no book is selected.
    pub fn with_chapter(&self, chapter: u32) -> Option<Selection> {
        self.book_id.as_ref()?;
        Some(Selection {
            chapter: Some(chapter),
            verse: None,
            ..self.clone()
        })
    }

    /// `None` when no chapter is selected.
    pub fn with_verse(&self, verse: u32) -> Option<Selection> {
        self.chapter?;
        Some(Selection {
            verse: Some(verse),
            ..self.clone()
        })
    }

    pub fn book_key(&self) -> Option<BookKey> {
        Some(BookKey {
            version_id: self.version_id.clone()?,
            book_id: self.book_id.clone()?,
        })
    }

    pub fn chapter_key(&self) -> Option<ChapterKey> {
        let book = self.book_key()?;
        Some(ChapterKey {
            version_id: book.version_id,
            book_id: book.book_id,
            chapter: self.chapter?,
        })
    }

    pub fn verse_key(&self) -> Option<VerseKey> {
        Some(VerseKey {
            chapter: self.chapter_key()?,
            verse: self.verse?,
        })
    }
}
