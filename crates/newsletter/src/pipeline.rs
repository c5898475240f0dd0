//! Newsletter pipeline - orchestrates the fetch-select-summarize-render-send flow.

use std::sync::Arc;

use chrono::Utc;

use crate::ai::{AIProvider, OpenAIProvider};
use crate::books::BooksClient;
use crate::config::NewsletterConfig;
use crate::digest::{DigestGenerator, DigestSender, EmailSender, SmtpSettings};
use crate::selector::Selector;
use crate::summarizer::{SummarizedGroup, Summarizer};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Fetch failed or nothing survived selection; nothing was sent.
    NoData,
    /// The digest was delivered.
    Sent {
        /// Categories in the digest.
        categories: usize,
        /// Books in the digest.
        books: usize,
        /// Books rendered with a placeholder summary.
        failed_summaries: usize,
    },
    /// The digest was rendered but delivery failed.
    DispatchFailed {
        /// Categories in the digest.
        categories: usize,
        /// Books in the digest.
        books: usize,
        /// Delivery error.
        reason: String,
    },
}

/// Newsletter pipeline orchestrator.
pub struct Pipeline {
    books: BooksClient,
    selector: Selector,
    summarizer: Summarizer,
    sender: Arc<dyn DigestSender>,
}

impl Pipeline {
    /// Create a pipeline from explicit parts.
    #[must_use]
    pub fn new(
        books: BooksClient,
        selector: Selector,
        summarizer: Summarizer,
        sender: Arc<dyn DigestSender>,
    ) -> Self {
        Self {
            books,
            selector,
            summarizer,
            sender,
        }
    }

    /// Wire the production components from configuration.
    #[must_use]
    pub fn from_config(config: &NewsletterConfig) -> Self {
        let books =
            BooksClient::new(config.nyt_api_key.clone()).with_base_url(config.books_api_url.clone());

        let provider: Arc<dyn AIProvider> = Arc::new(
            OpenAIProvider::new(config.openai_api_key.clone())
                .with_base_url(config.openai_api_url.clone()),
        );

        let sender: Arc<dyn DigestSender> =
            Arc::new(EmailSender::new(SmtpSettings::from(config)));

        Self::new(
            books,
            Selector::default(),
            Summarizer::new(provider, config.model.clone()),
            sender,
        )
    }

    /// Run the pipeline once.
    ///
    /// Failures are handled per stage: a failed fetch ends the run as
    /// [`RunOutcome::NoData`], a failed summary becomes a placeholder, and a
    /// failed send is reported as [`RunOutcome::DispatchFailed`].
    pub async fn run(&self) -> RunOutcome {
        tracing::info!("Starting newsletter run");

        let lists = match self.books.fetch_lists().await {
            Ok(lists) => lists,
            Err(e) => {
                tracing::error!(error = %e, "Error fetching NYT data");
                return RunOutcome::NoData;
            }
        };

        let groups = self.selector.select(&lists);
        if groups.is_empty() {
            tracing::info!("No books selected");
            return RunOutcome::NoData;
        }

        let summarized = self.summarizer.summarize_groups(&groups).await;
        let categories = summarized.len();
        let books: usize = summarized.iter().map(|g| g.books.len()).sum();
        let failed_summaries: usize = summarized.iter().map(SummarizedGroup::failed_count).sum();

        let digest = DigestGenerator::generate(&summarized, Utc::now());
        tracing::debug!(bytes = digest.html.len(), "Rendered digest");

        match self.sender.send(&digest).await {
            Ok(()) => RunOutcome::Sent {
                categories,
                books,
                failed_summaries,
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to send email");
                RunOutcome::DispatchFailed {
                    categories,
                    books,
                    reason: e.to_string(),
                }
            }
        }
    }
}
