//! Bestseller newsletter.
//!
//! This crate provides:
//! - A client for the NYT Books lists overview API
//! - Category filtering and cross-list de-duplication of bestsellers
//! - Per-book summaries from an OpenAI chat model
//! - HTML digest rendering and SMTP delivery
//!
//! Each run is a single linear pass: fetch, select, summarize, render, send.

pub mod ai;
pub mod books;
pub mod config;
pub mod digest;
pub mod errors;
pub mod pipeline;
pub mod selector;
pub mod summarizer;

// Re-export main types
pub use books::{BookList, BookRecord, BooksClient};
pub use config::NewsletterConfig;
pub use digest::{Digest, DigestGenerator, DigestSender, EmailSender};
pub use errors::{NewsletterError, NewsletterResult};
pub use pipeline::{Pipeline, RunOutcome};
pub use selector::{CategoryGroup, Selector};
pub use summarizer::{SummarizedBook, SummarizedGroup, Summarizer, Summary};
