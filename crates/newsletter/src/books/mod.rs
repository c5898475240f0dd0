//! Bestseller list source.

mod client;
mod types;

pub use client::BooksClient;
pub use types::{BookList, BookRecord, OverviewResponse, OverviewResults};
