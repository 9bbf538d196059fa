//! API.Bible provider implementation.
//!
//! Every request carries the static `api-key` header. Responses are wrapped
//! in a `{ "data": ... }` envelope which is unwrapped here, so callers only
//! ever see the payload.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::provider::{ProviderError, ScriptureProvider};
use super::types::{
    BibleVersion, Book, ChapterSummary, DataEnvelope, Passage, PassageOptions, SearchPage,
    VerseSummary,
};

pub const DEFAULT_BASE_URL: &str = "https://api.scripture.api.bible/v1";

/// Scripture provider backed by the API.Bible REST service.
pub struct ApiBibleProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl ApiBibleProvider {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            api_key,
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Single GET attempt: non-2xx becomes `ProviderError::Api` carrying the body.
    async fn get_data<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        if self.api_key.is_empty() {
            return Err(ProviderError::Config("API key is empty".to_string()));
        }

        let url = format!("{}{}", self.base_url, path);
        info!("GET {}", url);

        let mut request = self.client.get(&url).header("api-key", &self.api_key);
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Provider response status: {}", status);

        if !status.is_success() {
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Provider API error: {} - {}", status.as_u16(), err_body);
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;
        debug!("Provider response body: {} bytes", body.len());

        let envelope: DataEnvelope<T> =
            serde_json::from_str(&body).map_err(|e| ProviderError::Parse(e.to_string()))?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl ScriptureProvider for ApiBibleProvider {
    fn name(&self) -> &str {
        "api.bible"
    }

    async fn list_versions(&self) -> Result<Vec<BibleVersion>, ProviderError> {
        self.get_data::<_, ()>("/bibles", None).await
    }

    async fn list_books(&self, bible_id: &str) -> Result<Vec<Book>, ProviderError> {
        self.get_data::<_, ()>(&format!("/bibles/{bible_id}/books"), None)
            .await
    }

    async fn list_chapters(
        &self,
        bible_id: &str,
        book_id: &str,
    ) -> Result<Vec<ChapterSummary>, ProviderError> {
        self.get_data::<_, ()>(&format!("/bibles/{bible_id}/books/{book_id}/chapters"), None)
            .await
    }

    async fn list_verses(
        &self,
        bible_id: &str,
        chapter_id: &str,
    ) -> Result<Vec<VerseSummary>, ProviderError> {
        self.get_data::<_, ()>(
            &format!("/bibles/{bible_id}/chapters/{chapter_id}/verses"),
            None,
        )
        .await
    }

    async fn get_passage(
        &self,
        bible_id: &str,
        passage_id: &str,
        options: &PassageOptions,
    ) -> Result<Passage, ProviderError> {
        self.get_data(
            &format!("/bibles/{bible_id}/passages/{passage_id}"),
            Some(options),
        )
        .await
    }

    async fn search(&self, bible_id: &str, query: &str) -> Result<SearchPage, ProviderError> {
        self.get_data(
            &format!("/bibles/{bible_id}/search"),
            Some(&[("query", query)]),
        )
        .await
    }
}
