//! User-facing error taxonomy.
//!
//! Every transition in `action::update` converts its own failures into one
//! of these and stores it on `App::error`. `Display` is the banner text.

use std::fmt;

use crate::core::resolver::ResolveError;
use crate::scripture::ProviderError;

#[derive(Debug, Clone, PartialEq)]
pub enum ReaderError {
    /// A provider call failed. `context` is the banner text for the operation.
    Provider {
        context: &'static str,
        source: ProviderError,
    },
    /// A name or reference could not be resolved to provider ids.
    Resolution(ResolveError),
    /// An action was attempted out of sequence.
    Precondition(&'static str),
    /// User input was rejected before any request was made.
    Validation(&'static str),
    /// The share sink refused the passage. Carries the sink's reason.
    Share(String),
}

impl ReaderError {
    pub fn provider(context: &'static str, source: ProviderError) -> Self {
        ReaderError::Provider { context, source }
    }
}

impl fmt::Display for ReaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReaderError::Provider { context, .. } => write!(f, "{context}"),
            ReaderError::Resolution(e) => write!(f, "{e}"),
            ReaderError::Precondition(msg) | ReaderError::Validation(msg) => write!(f, "{msg}"),
            ReaderError::Share(_) => write!(f, "{SHARE_FAILED}"),
        }
    }
}

impl std::error::Error for ReaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReaderError::Provider { source, .. } => Some(source),
            ReaderError::Resolution(e) => Some(e),
            _ => None,
        }
    }
}

// Banner texts
pub const VERSIONS_FAILED: &str = "Failed to load Bible versions. Please try again later.";
pub const BOOKS_FAILED: &str = "Failed to load books. Please try again.";
pub const CHAPTERS_FAILED: &str = "Failed to load chapters. Please try again.";
pub const CHAPTER_FAILED: &str = "Failed to load chapter. Please try again.";
pub const CHAPTER_CONTENT_FAILED: &str = "Failed to load chapter content. Please try again.";
pub const VERSE_FAILED: &str = "Failed to load verse. Please try again.";
pub const SEARCH_FAILED: &str = "Failed to perform search. Please try again.";
pub const SHARE_FAILED: &str = "Unable to share or copy verse. Please try again.";

pub const NEED_VERSION: &str = "Please select a Bible version first.";
pub const NEED_BOOK: &str = "Please select a book first.";
pub const NEED_CHAPTER: &str = "Please select a book and chapter first.";
pub const NEED_SEARCH_INPUT: &str = "Please select a Bible version and enter a search term";

pub const NO_RESULTS: &str = "No results found";
