//! # Reference Resolver
//!
//! Pure mapping between human-facing names/labels and provider identifiers.
//! Every function here is total: bad input yields `None` or an error value,
//! never a panic and never a guess.

use std::fmt;

use crate::scripture::{ChapterSummary, VerseSummary};

/// Known book-name spellings. Lookup is exact-match.
///
/// "John" alone is the gospel: the provider names the epistle "1 John".
/// The single-word entries for numbered books ("Samuel", "Kings", ...) map
/// to the first book of the pair.
const BOOK_IDS: &[(&str, &str)] = &[
    ("Genesis", "GEN"),
    ("Exodus", "EXO"),
    ("Leviticus", "LEV"),
    ("Numbers", "NUM"),
    ("Deuteronomy", "DEU"),
    ("Joshua", "JOS"),
    ("Judges", "JDG"),
    ("Ruth", "RUT"),
    ("Samuel", "1SA"),
    ("1 Samuel", "1SA"),
    ("2 Samuel", "2SA"),
    ("Kings", "1KI"),
    ("1 Kings", "1KI"),
    ("2 Kings", "2KI"),
    ("Chronicles", "1CH"),
    ("1 Chronicles", "1CH"),
    ("2 Chronicles", "2CH"),
    ("Ezra", "EZR"),
    ("Nehemiah", "NEH"),
    ("Esther", "EST"),
    ("Job", "JOB"),
    ("Psalms", "PSA"),
    ("Proverbs", "PRO"),
    ("Ecclesiastes", "ECC"),
    ("Song of Solomon", "SNG"),
    ("Song of Songs", "SNG"),
    ("Isaiah", "ISA"),
    ("Jeremiah", "JER"),
    ("Lamentations", "LAM"),
    ("Ezekiel", "EZK"),
    ("Daniel", "DAN"),
    ("Hosea", "HOS"),
    ("Joel", "JOL"),
    ("Amos", "AMO"),
    ("Obadiah", "OBA"),
    ("Jonah", "JON"),
    ("Micah", "MIC"),
    ("Nahum", "NAM"),
    ("Habakkuk", "HAB"),
    ("Zephaniah", "ZEP"),
    ("Haggai", "HAG"),
    ("Zechariah", "ZEC"),
    ("Malachi", "MAL"),
    ("Matthew", "MAT"),
    ("Mark", "MRK"),
    ("Luke", "LUK"),
    ("John", "JHN"),
    ("John (Gospel)", "JHN"),
    ("Acts", "ACT"),
    ("Romans", "ROM"),
    ("Corinthians", "1CO"),
    ("1 Corinthians", "1CO"),
    ("2 Corinthians", "2CO"),
    ("Galatians", "GAL"),
    ("Ephesians", "EPH"),
    ("Philippians", "PHP"),
    ("Colossians", "COL"),
    ("Thessalonians", "1TH"),
    ("1 Thessalonians", "1TH"),
    ("2 Thessalonians", "2TH"),
    ("Timothy", "1TI"),
    ("1 Timothy", "1TI"),
    ("2 Timothy", "2TI"),
    ("Titus", "TIT"),
    ("Philemon", "PHM"),
    ("Hebrews", "HEB"),
    ("James", "JAS"),
    ("Peter", "1PE"),
    ("1 Peter", "1PE"),
    ("2 Peter", "2PE"),
    ("John (Epistle)", "1JN"),
    ("1 John", "1JN"),
    ("2 John", "2JN"),
    ("3 John", "3JN"),
    ("Jude", "JUD"),
    ("Revelation", "REV"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Book name not in the known table.
    UnknownBook(String),
    /// Reference string not of the form `BOOK C:V` (or `BOOK.C.V`).
    MalformedReference(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnknownBook(name) => write!(f, "Book ID not found for: {name}"),
            ResolveError::MalformedReference(reference) => {
                write!(f, "Malformed reference: {reference}")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// Structured form of a verse reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseReference {
    pub book_id: String,
    pub chapter: u32,
    pub verse: u32,
}

pub fn resolve_book_id(name: &str) -> Result<&'static str, ResolveError> {
    BOOK_IDS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, id)| *id)
        .ok_or_else(|| ResolveError::UnknownBook(name.to_string()))
}

/// Canonical spelling for a book id, the inverse of `resolve_book_id`.
/// Provider book names are localized, so navigation goes through this.
pub fn book_name(book_id: &str) -> Option<&'static str> {
    BOOK_IDS
        .iter()
        .rev()
        .find(|(_, id)| *id == book_id)
        .map(|(name, _)| *name)
}

/// Parses a run of ASCII digits into a positive number.
fn positive_number(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u32>().ok().filter(|n| *n > 0)
}

/// `"12"` → `Some(12)`. Introductions, ranges, blanks → `None`.
pub fn extract_chapter_number(label: &str) -> Option<u32> {
    positive_number(label)
}

/// `"GEN.1.12"` → `Some(12)`. Requires a `.<digits>` suffix.
pub fn extract_verse_number(id: &str) -> Option<u32> {
    let (_, suffix) = id.rsplit_once('.')?;
    positive_number(suffix)
}

/// Numeric chapters of a book, ascending, without duplicates.
pub fn chapter_numbers(chapters: &[ChapterSummary]) -> Vec<u32> {
    let mut numbers: Vec<u32> = chapters
        .iter()
        .filter_map(|c| extract_chapter_number(&c.number))
        .collect();
    numbers.sort_unstable();
    numbers.dedup();
    numbers
}

/// Verse numbers of a chapter, ascending, without duplicates.
pub fn verse_numbers(verses: &[VerseSummary]) -> Vec<u32> {
    let mut numbers: Vec<u32> = verses
        .iter()
        .filter_map(|v| extract_verse_number(&v.id))
        .collect();
    numbers.sort_unstable();
    numbers.dedup();
    numbers
}

/// `"JHN 3:16"` → `{ JHN, 3, 16 }`. Splits on the first space, then on `:`.
pub fn parse_search_reference(reference: &str) -> Result<VerseReference, ResolveError> {
    let malformed = || ResolveError::MalformedReference(reference.to_string());

    let (book_id, location) = reference.trim().split_once(' ').ok_or_else(malformed)?;
    let (chapter, verse) = location.split_once(':').ok_or_else(malformed)?;

    if book_id.is_empty() {
        return Err(malformed());
    }

    Ok(VerseReference {
        book_id: book_id.to_string(),
        chapter: positive_number(chapter).ok_or_else(malformed)?,
        verse: positive_number(verse).ok_or_else(malformed)?,
    })
}

/// `"JHN.3.16"` → `{ JHN, 3, 16 }`.
pub fn parse_verse_id(id: &str) -> Result<VerseReference, ResolveError> {
    let malformed = || ResolveError::MalformedReference(id.to_string());

    let mut parts = id.split('.');
    let (Some(book_id), Some(chapter), Some(verse), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };

    if book_id.is_empty() {
        return Err(malformed());
    }

    Ok(VerseReference {
        book_id: book_id.to_string(),
        chapter: positive_number(chapter).ok_or_else(malformed)?,
        verse: positive_number(verse).ok_or_else(malformed)?,
    })
}

/// `("GEN", 1)` → `"GEN.1"`
pub fn chapter_id(book_id: &str, chapter: u32) -> String {
    format!("{book_id}.{chapter}")
}

/// `("GEN", 1, 3)` → `"GEN.1.3"`
pub fn verse_passage_id(book_id: &str, chapter: u32, verse: u32) -> String {
    format!("{book_id}.{chapter}.{verse}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn chapter(number: &str) -> ChapterSummary {
        ChapterSummary {
            id: format!("GEN.{number}"),
            number: number.to_string(),
            book_id: "GEN".to_string(),
        }
    }

    fn verse(id: &str) -> VerseSummary {
        VerseSummary {
            id: id.to_string(),
            org_id: id.to_string(),
            book_id: "GEN".to_string(),
            chapter_id: "GEN.1".to_string(),
            reference: String::new(),
        }
    }

    #[test]
    fn test_table_has_no_duplicate_keys() {
        let mut seen = HashSet::new();
        for (name, _) in BOOK_IDS {
            assert!(seen.insert(*name), "duplicate book name {name}");
        }
    }

    #[test]
    fn test_john_is_disambiguated() {
        assert_eq!(resolve_book_id("John (Gospel)"), Ok("JHN"));
        assert_eq!(resolve_book_id("John (Epistle)"), Ok("1JN"));
        assert_eq!(resolve_book_id("John"), Ok("JHN"));
        assert_eq!(resolve_book_id("1 John"), Ok("1JN"));
    }

    #[test]
    fn test_unknown_names_are_errors_not_guesses() {
        for name in ["genesis", "Gen", "Tobit", "", " Genesis", "Genesis "] {
            assert_eq!(
                resolve_book_id(name),
                Err(ResolveError::UnknownBook(name.to_string()))
            );
        }
        assert_eq!(
            ResolveError::UnknownBook("Tobit".into()).to_string(),
            "Book ID not found for: Tobit"
        );
    }

    #[test]
    fn test_every_canonical_id_is_reachable() {
        use crate::core::testament::{NEW_TESTAMENT_BOOKS, OLD_TESTAMENT_BOOKS};
        let reachable: HashSet<&str> = BOOK_IDS.iter().map(|(_, id)| *id).collect();
        for id in OLD_TESTAMENT_BOOKS.iter().chain(NEW_TESTAMENT_BOOKS.iter()) {
            assert!(reachable.contains(id), "{id} has no name");
        }
    }

    #[test]
    fn test_book_name_round_trips() {
        use crate::core::testament::{NEW_TESTAMENT_BOOKS, OLD_TESTAMENT_BOOKS};
        for id in OLD_TESTAMENT_BOOKS.iter().chain(NEW_TESTAMENT_BOOKS.iter()) {
            let name = book_name(id).unwrap_or_else(|| panic!("{id} has no name"));
            assert_eq!(resolve_book_id(name), Ok(*id));
        }
        assert_eq!(book_name("1SA"), Some("1 Samuel"));
        assert_eq!(book_name("1JN"), Some("1 John"));
        assert_eq!(book_name("TOB"), None);
    }

    #[test]
    fn test_extract_chapter_number() {
        assert_eq!(extract_chapter_number("1"), Some(1));
        assert_eq!(extract_chapter_number("150"), Some(150));
        for label in ["intro", "1-2", "", " 1", "1a", "-3", "+3", "0", "99999999999"] {
            assert_eq!(extract_chapter_number(label), None, "label {label:?}");
        }
    }

    #[test]
    fn test_extract_verse_number() {
        assert_eq!(extract_verse_number("GEN.1.12"), Some(12));
        assert_eq!(extract_verse_number("GEN.1.1"), Some(1));
        assert_eq!(extract_verse_number("GEN.1.1-3"), None);
        assert_eq!(extract_verse_number("GEN.1."), None);
        assert_eq!(extract_verse_number("GEN1"), None);
    }

    #[test]
    fn test_chapter_list_filters_sorts_and_dedups() {
        let chapters = vec![
            chapter("intro"),
            chapter("3"),
            chapter("1"),
            chapter("2"),
            chapter("3"),
            chapter("1-2"),
        ];
        let numbers = chapter_numbers(&chapters);
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_verse_list_from_ids() {
        let verses = vec![verse("GEN.1.10"), verse("GEN.1.2"), verse("GEN.1.1"), verse("GEN.1")];
        // "GEN.1" has a numeric suffix, it is indistinguishable from a verse id
        assert_eq!(verse_numbers(&verses), vec![1, 2, 10]);
    }

    #[test]
    fn test_parse_search_reference() {
        assert_eq!(
            parse_search_reference("JHN 3:16"),
            Ok(VerseReference {
                book_id: "JHN".to_string(),
                chapter: 3,
                verse: 16,
            })
        );
    }

    #[test]
    fn test_malformed_search_references_are_surfaced() {
        for reference in ["JHN", "JHN 3", "JHN 3:", "JHN :16", "JHN x:16", " 3:16", "JHN 3:16-18"] {
            assert!(
                matches!(
                    parse_search_reference(reference),
                    Err(ResolveError::MalformedReference(_))
                ),
                "reference {reference:?}"
            );
        }
    }

    #[test]
    fn test_parse_verse_id() {
        assert_eq!(
            parse_verse_id("1JN.4.8"),
            Ok(VerseReference {
                book_id: "1JN".to_string(),
                chapter: 4,
                verse: 8,
            })
        );
        assert!(parse_verse_id("1JN.4").is_err());
        assert!(parse_verse_id("1JN.4.8.1").is_err());
        assert!(parse_verse_id(".4.8").is_err());
    }

    #[test]
    fn test_id_builders() {
        assert_eq!(chapter_id("GEN", 1), "GEN.1");
        assert_eq!(verse_passage_id("GEN", 1, 3), "GEN.1.3");
    }
}
