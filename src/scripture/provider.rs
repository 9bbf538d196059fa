use std::fmt;

use async_trait::async_trait;

use super::types::{
    BibleVersion, Book, ChapterSummary, Passage, PassageOptions, SearchPage, VerseSummary,
};

/// Errors that can occur while talking to the scripture provider.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// Provider misconfigured (missing API key, bad URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned a non-success status. `message` is the response body when readable.
    Api { status: u16, message: String },
    /// Failed to parse the provider's response.
    Parse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Config(msg) => write!(f, "config error: {msg}"),
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ProviderError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// One method per provider endpoint the reader consumes.
///
/// Every call is a single attempt: no retries, no caching. Callers decide
/// how to react to failure.
#[async_trait]
pub trait ScriptureProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// `GET /bibles`
    async fn list_versions(&self) -> Result<Vec<BibleVersion>, ProviderError>;

    /// `GET /bibles/{bible_id}/books`
    async fn list_books(&self, bible_id: &str) -> Result<Vec<Book>, ProviderError>;

    /// `GET /bibles/{bible_id}/books/{book_id}/chapters`
    async fn list_chapters(
        &self,
        bible_id: &str,
        book_id: &str,
    ) -> Result<Vec<ChapterSummary>, ProviderError>;

    /// `GET /bibles/{bible_id}/chapters/{chapter_id}/verses`
    async fn list_verses(
        &self,
        bible_id: &str,
        chapter_id: &str,
    ) -> Result<Vec<VerseSummary>, ProviderError>;

    /// `GET /bibles/{bible_id}/passages/{passage_id}`
    async fn get_passage(
        &self,
        bible_id: &str,
        passage_id: &str,
        options: &PassageOptions,
    ) -> Result<Passage, ProviderError>;

    /// `GET /bibles/{bible_id}/search?query=...`
    async fn search(&self, bible_id: &str, query: &str) -> Result<SearchPage, ProviderError>;
}
