//! NYT Books API client.

use reqwest::Client;

use super::types::{BookList, OverviewResponse};
use crate::config::DEFAULT_BOOKS_API_URL;
use crate::errors::{NewsletterError, NewsletterResult};

/// Client for the bestseller lists overview endpoint.
pub struct BooksClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl BooksClient {
    /// Create a new client with an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BOOKS_API_URL.to_string(),
        }
    }

    /// Set a custom endpoint URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Fetch every bestseller list in provider order.
    ///
    /// The call either yields the whole structure or fails; a single missing
    /// field anywhere in the body fails the fetch.
    pub async fn fetch_lists(&self) -> NewsletterResult<Vec<BookList>> {
        tracing::debug!(url = %self.base_url, "Fetching bestseller overview");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("api-key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(NewsletterError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let overview: OverviewResponse = serde_json::from_str(&body)?;

        tracing::info!(
            lists = overview.results.lists.len(),
            "Fetched bestseller overview"
        );

        Ok(overview.results.lists)
    }
}
