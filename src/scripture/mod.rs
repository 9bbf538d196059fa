pub mod client;
pub mod provider;
pub mod types;

pub use client::{ApiBibleProvider, DEFAULT_BASE_URL};
pub use provider::{ProviderError, ScriptureProvider};
pub use types::{
    BibleVersion, Book, ChapterSummary, Language, Passage, PassageOptions, SearchHit, SearchPage,
    VerseSummary,
};
