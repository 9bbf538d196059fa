//! Canonical book ids per testament. Fixed tables, never fetched.

use crate::core::selection::Testament;
use crate::scripture::Book;

pub const OLD_TESTAMENT_BOOKS: [&str; 39] = [
    "GEN", "EXO", "LEV", "NUM", "DEU", "JOS", "JDG", "RUT", "1SA", "2SA", "1KI", "2KI", "1CH",
    "2CH", "EZR", "NEH", "EST", "JOB", "PSA", "PRO", "ECC", "SNG", "ISA", "JER", "LAM", "EZK",
    "DAN", "HOS", "JOL", "AMO", "OBA", "JON", "MIC", "NAM", "HAB", "ZEP", "HAG", "ZEC", "MAL",
];

pub const NEW_TESTAMENT_BOOKS: [&str; 27] = [
    "MAT", "MRK", "LUK", "JHN", "ACT", "ROM", "1CO", "2CO", "GAL", "EPH", "PHP", "COL", "1TH",
    "2TH", "1TI", "2TI", "TIT", "PHM", "HEB", "JAS", "1PE", "2PE", "1JN", "2JN", "3JN", "JUD",
    "REV",
];

pub fn book_ids(testament: Testament) -> &'static [&'static str] {
    match testament {
        Testament::Old => &OLD_TESTAMENT_BOOKS,
        Testament::New => &NEW_TESTAMENT_BOOKS,
    }
}

pub fn contains(testament: Testament, book_id: &str) -> bool {
    book_ids(testament).contains(&book_id)
}

/// In either testament.
pub fn is_canonical(book_id: &str) -> bool {
    contains(Testament::Old, book_id) || contains(Testament::New, book_id)
}

/// The books offered under a testament: provider order, filtered to the
/// testament's id set. Non-canonical books (apocrypha etc.) never appear.
pub fn books_in<'a>(books: &'a [Book], testament: Testament) -> Vec<&'a Book> {
    books
        .iter()
        .filter(|book| contains(testament, &book.id))
        .collect()
}
