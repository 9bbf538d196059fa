//! Drives `update` + `fetch::run` against a mock API.Bible server, the way
//! the TUI event loop does, without a terminal.

use std::sync::Arc;

use serde_json::json;
use skyword::core::action::{Action, Effect, update};
use skyword::core::error;
use skyword::core::fetch;
use skyword::core::selection::Testament;
use skyword::core::state::App;
use skyword::scripture::ApiBibleProvider;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn envelope(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": data }))
}

/// Applies `action`, then keeps running fetch effects until none is left.
async fn drive(app: &mut App, action: Action) -> Effect {
    let mut action = action;
    loop {
        match update(app, action) {
            Effect::Fetch(request) => {
                let provider = app.provider.clone();
                action = fetch::run(provider.as_ref(), request).await;
            }
            other => return other,
        }
    }
}

async fn mount_library(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/bibles"))
        .respond_with(envelope(json!([
            { "id": "kjv", "abbreviation": "KJV", "name": "King James Version",
              "language": { "id": "eng", "name": "English" } }
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bibles/kjv/books"))
        .respond_with(envelope(json!([
            { "id": "GEN", "name": "Genesis" },
            { "id": "JHN", "name": "John" },
            { "id": "1JN", "name": "1 John" }
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bibles/kjv/books/JHN/chapters"))
        .respond_with(envelope(json!([
            { "id": "JHN.intro", "number": "intro" },
            { "id": "JHN.1", "number": "1" },
            { "id": "JHN.2", "number": "2" },
            { "id": "JHN.3", "number": "3" }
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bibles/kjv/chapters/JHN.3/verses"))
        .respond_with(envelope(json!([
            { "id": "JHN.3.15" }, { "id": "JHN.3.16" }, { "id": "JHN.3.17" }
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bibles/kjv/passages/JHN.3"))
        .respond_with(envelope(json!({
            "id": "JHN.3", "content": "[1] There was a man of the Pharisees", "reference": "John 3"
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bibles/kjv/passages/JHN.3.16"))
        .respond_with(envelope(json!({
            "id": "JHN.3.16", "content": "[16] For God so loved the world", "reference": "John 3:16"
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bibles/kjv/search"))
        .and(query_param("query", "loved"))
        .respond_with(envelope(json!({
            "query": "loved",
            "total": 2,
            "verses": [
                { "id": "JHN.3.16", "text": "For God so loved the world", "reference": "JHN 3:16" },
                { "id": "1JN.4.10", "text": "not that we loved God", "reference": "1 John 4:10" }
            ]
        })))
        .mount(server)
        .await;
}

fn app_for(server: &MockServer, preferred: Option<&str>) -> App {
    let provider = Arc::new(ApiBibleProvider::new(
        "test-key".to_string(),
        Some(server.uri()),
    ));
    App::new(provider, preferred.map(str::to_string))
}

#[tokio::test]
async fn test_read_john_3_16_end_to_end() {
    let server = MockServer::start().await;
    mount_library(&server).await;
    let mut app = app_for(&server, Some("kjv"));

    // Preferred version is picked up as soon as versions arrive
    drive(&mut app, Action::Startup).await;
    assert_eq!(app.selection.version_id(), Some("kjv"));
    assert_eq!(app.books.len(), 3);

    drive(&mut app, Action::SelectTestament(Testament::New)).await;
    let offered: Vec<&str> = app.offered_books().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(offered, vec!["JHN", "1JN"]);

    drive(&mut app, Action::SelectBook("John".into())).await;
    assert_eq!(app.selection.book_id(), Some("JHN"));
    assert_eq!(app.chapters, vec![1, 2, 3]);

    drive(&mut app, Action::SelectChapter(3)).await;
    assert_eq!(app.verses, vec![15, 16, 17]);
    let shown = app.displayed_passage().unwrap();
    assert_eq!(shown.reference, "JHN 3");
    assert!(shown.content.contains("Pharisees"));

    drive(&mut app, Action::SelectVerse(16)).await;
    let shown = app.displayed_passage().unwrap();
    assert_eq!(shown.reference, "John 3:16");
    assert!(app.chapter_passage.is_none());

    let effect = drive(&mut app, Action::Share).await;
    assert_eq!(
        effect,
        Effect::Share("John 3:16: [16] For God so loved the world".to_string())
    );

    assert!(app.error.is_none());
    assert!(!app.loading.any());
}

#[tokio::test]
async fn test_search_alongside_reading() {
    let server = MockServer::start().await;
    mount_library(&server).await;
    let mut app = app_for(&server, None);

    drive(&mut app, Action::Startup).await;
    assert_eq!(app.selection.version_id(), None);

    drive(&mut app, Action::SelectVersion("kjv".into())).await;
    drive(&mut app, Action::SelectBook("John".into())).await;
    drive(&mut app, Action::SelectChapter(3)).await;
    let before = app.selection.clone();

    drive(&mut app, Action::Search("loved".into())).await;
    assert_eq!(app.selection, before);
    assert!(app.displayed_passage().is_some());

    assert_eq!(app.search_results.len(), 2);
    assert_eq!(app.search_results[0].book_id, "JHN");
    assert_eq!(app.search_results[0].verse, 16);
    // "1 John 4:10" is recovered from the dotted id
    assert_eq!(app.search_results[1].book_id, "1JN");
    assert_eq!(app.search_results[1].chapter, 4);
    assert_eq!(app.search_results[1].reference, "1 John 4:10");
}

#[tokio::test]
async fn test_provider_outage_surfaces_banner() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bibles"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let mut app = app_for(&server, Some("kjv"));

    drive(&mut app, Action::Startup).await;
    assert!(app.versions.is_empty());
    assert_eq!(
        app.error.as_ref().map(|e| e.to_string()).as_deref(),
        Some(error::VERSIONS_FAILED)
    );

    drive(&mut app, Action::DismissError).await;
    assert!(app.error.is_none());
}

#[tokio::test]
async fn test_unknown_book_name_makes_no_request() {
    let server = MockServer::start().await;
    mount_library(&server).await;
    let mut app = app_for(&server, None);

    drive(&mut app, Action::SelectVersion("kjv".into())).await;
    let requests_before = server.received_requests().await.unwrap_or_default().len();

    drive(&mut app, Action::SelectBook("Tobit".into())).await;
    assert_eq!(
        app.error.as_ref().map(|e| e.to_string()).as_deref(),
        Some("Book ID not found for: Tobit")
    );
    let requests_after = server.received_requests().await.unwrap_or_default().len();
    assert_eq!(requests_before, requests_after);
}
