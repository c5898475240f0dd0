//! Per-book summaries from the text-generation service.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::ai::{AIMessage, AIProvider, GenerateOptions};
use crate::books::BookRecord;
use crate::errors::NewsletterError;
use crate::selector::CategoryGroup;

/// Fixed system directive for every summary request.
pub const SYSTEM_PROMPT: &str = "You write email newsletter summaries about books.";

/// Sampling temperature for summaries.
pub const SUMMARY_TEMPERATURE: f32 = 0.7;

/// Outcome of summarizing one book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "lowercase")]
pub enum Summary {
    /// Generated prose.
    Generated(String),
    /// The call failed; carries the cause.
    Failed(String),
}

impl Summary {
    /// Text shown in the digest for this summary.
    pub fn display_text(&self) -> String {
        match self {
            Summary::Generated(text) => text.clone(),
            Summary::Failed(cause) => format!("[Error summarizing: {cause}]"),
        }
    }

    /// Whether generation failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Summary::Failed(_))
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

/// A selected book paired with its summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarizedBook {
    /// The book.
    pub book: BookRecord,
    /// Its summary or failure placeholder.
    pub summary: Summary,
}

/// A category with every selected book summarized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarizedGroup {
    /// Category display name.
    pub name: String,
    /// Summarized books in selection order.
    pub books: Vec<SummarizedBook>,
}

impl SummarizedGroup {
    /// Number of books whose summary failed.
    pub fn failed_count(&self) -> usize {
        self.books.iter().filter(|b| b.summary.is_failed()).count()
    }
}

/// Build the user-role prompt for a book.
pub fn build_prompt(book: &BookRecord) -> String {
    format!(
        "Summarize this book for a newsletter:\n\nTitle: {}\nAuthor: {}\nDescription: {}",
        book.title, book.author, book.description
    )
}

/// Requests one-paragraph summaries, one book at a time.
pub struct Summarizer {
    provider: Arc<dyn AIProvider>,
    model: String,
}

impl Summarizer {
    /// Create a summarizer backed by the given provider.
    pub fn new(provider: Arc<dyn AIProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Summarize a single book. Never fails; errors become [`Summary::Failed`].
    pub async fn summarize(&self, book: &BookRecord) -> Summary {
        let messages = vec![AIMessage::system(SYSTEM_PROMPT), AIMessage::user(build_prompt(book))];

        let options = GenerateOptions {
            temperature: Some(SUMMARY_TEMPERATURE),
            ..Default::default()
        };

        let result = self
            .provider
            .generate_text(&self.model, &messages, &options)
            .await
            .and_then(|response| {
                if response.text.trim().is_empty() {
                    Err(NewsletterError::Ai("no content in first choice".to_string()))
                } else {
                    Ok(response.text)
                }
            });

        match result {
            Ok(text) => {
                tracing::debug!(title = %book.title, "Summarized book");
                Summary::Generated(text)
            }
            Err(e) => {
                tracing::warn!(title = %book.title, error = %e, "Summary failed");
                Summary::Failed(e.to_string())
            }
        }
    }

    /// Summarize books sequentially, preserving order.
    pub async fn summarize_all(&self, books: &[BookRecord]) -> Vec<SummarizedBook> {
        let mut summarized = Vec::with_capacity(books.len());
        for book in books {
            let summary = self.summarize(book).await;
            summarized.push(SummarizedBook {
                book: book.clone(),
                summary,
            });
        }
        summarized
    }

    /// Summarize every group in category then book order.
    pub async fn summarize_groups(&self, groups: &[CategoryGroup]) -> Vec<SummarizedGroup> {
        let mut summarized = Vec::with_capacity(groups.len());
        for group in groups {
            tracing::info!(
                category = %group.name,
                books = group.books.len(),
                "Summarizing category"
            );
            summarized.push(SummarizedGroup {
                name: group.name.clone(),
                books: self.summarize_all(&group.books).await,
            });
        }
        summarized
    }
}
