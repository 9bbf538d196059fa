//! Wire types for the scripture provider.
//!
//! Only the fields the reader uses are modelled. Everything else in the
//! provider's payloads is ignored by serde, so schema additions upstream
//! don't break parsing.

use serde::{Deserialize, Serialize};

/// Every provider response wraps its payload in `{ "data": ... }`.
#[derive(Deserialize, Debug)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct Language {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

/// A Bible version (translation) offered by the provider.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BibleVersion {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Language,
}

impl BibleVersion {
    /// Label used by the version picker: `"{name} ({language})"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.language.name)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Canonical book id, e.g. `GEN`.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_long: String,
    #[serde(default)]
    pub abbreviation: String,
}

/// One entry of a book's chapter list. `number` is a label, not guaranteed
/// numeric (`"intro"` is common).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChapterSummary {
    pub id: String,
    pub number: String,
    #[serde(default)]
    pub book_id: String,
}

/// One entry of a chapter's verse list. `id` looks like `GEN.1.1`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerseSummary {
    pub id: String,
    #[serde(default)]
    pub org_id: String,
    #[serde(default)]
    pub book_id: String,
    #[serde(default)]
    pub chapter_id: String,
    #[serde(default)]
    pub reference: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Passage {
    pub id: String,
    pub content: String,
    pub reference: String,
    #[serde(default)]
    pub verse_count: Option<u32>,
    #[serde(default)]
    pub copyright: Option<String>,
}

/// A single search hit. `reference` is human-readable (`JHN 3:16`), `id` is
/// the dotted verse id (`JHN.3.16`).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SearchHit {
    #[serde(default)]
    pub id: String,
    pub text: String,
    pub reference: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct SearchPage {
    #[serde(default)]
    pub query: Option<String>,
    /// Absent when nothing matched.
    #[serde(default)]
    pub verses: Vec<SearchHit>,
    #[serde(default)]
    pub total: Option<u32>,
}

/// Query flags for `GET /passages/{id}`, serialized as kebab-case query params.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct PassageOptions {
    pub content_type: &'static str,
    pub include_notes: bool,
    pub include_titles: bool,
    pub include_chapter_numbers: bool,
    pub include_verse_numbers: bool,
    pub include_verse_spans: bool,
}

impl PassageOptions {
    /// Whole chapter: plain text with section titles and inline verse numbers.
    pub fn chapter() -> Self {
        Self {
            content_type: "text",
            include_notes: false,
            include_titles: true,
            include_chapter_numbers: false,
            include_verse_numbers: true,
            include_verse_spans: false,
        }
    }

    /// Single verse: same as a chapter, minus section titles.
    pub fn verse() -> Self {
        Self {
            include_titles: false,
            ..Self::chapter()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parses_with_extra_fields() {
        let json = r#"{
            "id": "de4e12af7f28f599-02",
            "dblId": "de4e12af7f28f599",
            "abbreviation": "KJV",
            "name": "King James (Authorised) Version",
            "language": { "id": "eng", "name": "English", "script": "Latin" },
            "countries": []
        }"#;
        let version: BibleVersion = serde_json::from_str(json).unwrap();
        assert_eq!(version.abbreviation, "KJV");
        assert_eq!(version.label(), "King James (Authorised) Version (English)");
        assert!(version.description.is_none());
    }

    #[test]
    fn test_book_camel_case_fields() {
        let json = r#"{"id":"GEN","bibleId":"x","abbreviation":"Gen","name":"Genesis","nameLong":"The First Book of Moses"}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, "GEN");
        assert_eq!(book.name_long, "The First Book of Moses");
    }

    #[test]
    fn test_search_page_without_verses() {
        let json = r#"{"query":"zzzz","limit":10,"offset":0,"total":0}"#;
        let page: SearchPage = serde_json::from_str(json).unwrap();
        assert!(page.verses.is_empty());
        assert_eq!(page.total, Some(0));
    }

    #[test]
    fn test_verse_options_drop_titles_only() {
        let chapter = PassageOptions::chapter();
        let verse = PassageOptions::verse();
        assert!(chapter.include_titles);
        assert!(!verse.include_titles);
        assert_eq!(verse.content_type, chapter.content_type);
        assert_eq!(verse.include_verse_numbers, chapter.include_verse_numbers);
    }
}
