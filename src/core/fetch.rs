//! Runs a `Fetch` against a provider and wraps the outcome in the matching
//! completion `Action`. The tag the fetch was issued with is carried through
//! untouched so `update` can apply its stale-response guard.

use log::info;

use crate::core::action::{Action, Fetch};
use crate::scripture::{PassageOptions, ScriptureProvider};

pub async fn run(provider: &dyn ScriptureProvider, fetch: Fetch) -> Action {
    info!("Fetching {:?} from {}", fetch, provider.name());

    match fetch {
        Fetch::Versions => Action::VersionsLoaded(provider.list_versions().await),
        Fetch::Books { version_id } => {
            let result = provider.list_books(&version_id).await;
            Action::BooksLoaded { version_id, result }
        }
        Fetch::Chapters(key) => {
            let result = provider.list_chapters(&key.version_id, &key.book_id).await;
            Action::ChaptersLoaded { key, result }
        }
        Fetch::Verses(key) => {
            let result = provider
                .list_verses(&key.version_id, &key.chapter_id())
                .await;
            Action::VersesLoaded { key, result }
        }
        Fetch::ChapterPassage(key) => {
            let result = provider
                .get_passage(&key.version_id, &key.chapter_id(), &PassageOptions::chapter())
                .await;
            Action::ChapterPassageLoaded { key, result }
        }
        Fetch::VersePassage(key) => {
            let result = provider
                .get_passage(
                    &key.chapter.version_id,
                    &key.passage_id(),
                    &PassageOptions::verse(),
                )
                .await;
            Action::VersePassageLoaded { key, result }
        }
        Fetch::Search {
            version_id,
            query,
            serial,
        } => {
            let result = provider.search(&version_id, &query).await;
            Action::SearchCompleted {
                version_id,
                serial,
                result,
            }
        }
    }
}
