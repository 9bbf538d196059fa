//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::action::{Action, Effect, update};
use crate::core::fetch;
use crate::core::state::App;
use crate::scripture::{
    BibleVersion, Book, ChapterSummary, Language, Passage, PassageOptions, ProviderError,
    ScriptureProvider, SearchHit, SearchPage, VerseSummary,
};

/// In-memory provider with a fixed tiny library and a call log.
///
/// Serves one version (`kjv`), Genesis..1 John, three chapters per book
/// (plus an `intro`), three verses per chapter. Searching for `light`
/// yields one hit; anything else yields none.
pub struct MockProvider {
    failing: HashSet<&'static str>,
    calls: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            failing: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make one endpoint (`versions`, `books`, `chapters`, `verses`,
    /// `passage`, `search`) answer with HTTP 500.
    pub fn failing(mut self, endpoint: &'static str) -> Self {
        self.failing.insert(endpoint);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, endpoint: &'static str, call: String) -> Result<(), ProviderError> {
        self.calls.lock().unwrap().push(call);
        if self.failing.contains(endpoint) {
            Err(ProviderError::Api {
                status: 500,
                message: format!("{endpoint} unavailable"),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ScriptureProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn list_versions(&self) -> Result<Vec<BibleVersion>, ProviderError> {
        self.record("versions", "versions".to_string())?;
        Ok(vec![version("kjv", "King James Version", "English")])
    }

    async fn list_books(&self, bible_id: &str) -> Result<Vec<Book>, ProviderError> {
        self.record("books", format!("books {bible_id}"))?;
        Ok(books())
    }

    async fn list_chapters(
        &self,
        bible_id: &str,
        book_id: &str,
    ) -> Result<Vec<ChapterSummary>, ProviderError> {
        self.record("chapters", format!("chapters {bible_id} {book_id}"))?;
        Ok(chapter_summaries(book_id, &["intro", "1", "2", "3"]))
    }

    async fn list_verses(
        &self,
        bible_id: &str,
        chapter_id: &str,
    ) -> Result<Vec<VerseSummary>, ProviderError> {
        self.record("verses", format!("verses {bible_id} {chapter_id}"))?;
        Ok(verse_summaries(chapter_id, 3))
    }

    async fn get_passage(
        &self,
        bible_id: &str,
        passage_id: &str,
        options: &PassageOptions,
    ) -> Result<Passage, ProviderError> {
        self.record(
            "passage",
            format!(
                "passage {bible_id} {passage_id} titles={}",
                options.include_titles
            ),
        )?;
        Ok(passage(passage_id, &format!("Text of {passage_id}"), passage_id))
    }

    async fn search(&self, bible_id: &str, query: &str) -> Result<SearchPage, ProviderError> {
        self.record("search", format!("search {bible_id} {query}"))?;
        let verses = if query == "light" {
            vec![search_hit("GEN.1.3", "GEN 1:3", "And God said, Let there be light")]
        } else {
            Vec::new()
        };
        Ok(SearchPage {
            query: Some(query.to_string()),
            total: Some(verses.len() as u32),
            verses,
        })
    }
}

/// Creates a test App backed by a fresh MockProvider.
pub fn test_app() -> App {
    App::new(Arc::new(MockProvider::new()), None)
}

pub fn app_with(provider: Arc<MockProvider>) -> App {
    App::new(provider, None)
}

/// Applies `action` and keeps running fetch effects until the chain settles.
pub async fn drive(app: &mut App, action: Action) -> Effect {
    let mut action = action;
    loop {
        match update(app, action) {
            Effect::Fetch(next) => {
                let provider = app.provider.clone();
                action = fetch::run(provider.as_ref(), next).await;
            }
            other => return other,
        }
    }
}

pub fn version(id: &str, name: &str, language: &str) -> BibleVersion {
    BibleVersion {
        id: id.to_string(),
        name: name.to_string(),
        abbreviation: id.to_uppercase(),
        description: None,
        language: Language {
            id: language[..3].to_lowercase(),
            name: language.to_string(),
        },
    }
}

/// Genesis, Exodus, Tobit (non-canonical), John, 1 John.
pub fn books() -> Vec<Book> {
    [
        ("GEN", "Genesis"),
        ("EXO", "Exodus"),
        ("TOB", "Tobit"),
        ("JHN", "John"),
        ("1JN", "1 John"),
    ]
    .into_iter()
    .map(|(id, name)| Book {
        id: id.to_string(),
        name: name.to_string(),
        name_long: name.to_string(),
        abbreviation: id.to_string(),
    })
    .collect()
}

pub fn chapter_summaries(book_id: &str, labels: &[&str]) -> Vec<ChapterSummary> {
    labels
        .iter()
        .map(|label| ChapterSummary {
            id: format!("{book_id}.{label}"),
            number: label.to_string(),
            book_id: book_id.to_string(),
        })
        .collect()
}

pub fn verse_summaries(chapter_id: &str, count: u32) -> Vec<VerseSummary> {
    (1..=count)
        .map(|n| VerseSummary {
            id: format!("{chapter_id}.{n}"),
            org_id: format!("{chapter_id}.{n}"),
            book_id: chapter_id.split('.').next().unwrap_or_default().to_string(),
            chapter_id: chapter_id.to_string(),
            reference: format!("{chapter_id}:{n}"),
        })
        .collect()
}

pub fn passage(id: &str, content: &str, reference: &str) -> Passage {
    Passage {
        id: id.to_string(),
        content: content.to_string(),
        reference: reference.to_string(),
        verse_count: None,
        copyright: None,
    }
}

pub fn search_hit(id: &str, reference: &str, text: &str) -> SearchHit {
    SearchHit {
        id: id.to_string(),
        text: text.to_string(),
        reference: reference.to_string(),
    }
}
