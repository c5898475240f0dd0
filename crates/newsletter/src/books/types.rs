//! NYT Books API data types.

use serde::{Deserialize, Serialize};

/// Top-level body of the lists overview endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OverviewResponse {
    /// Wrapped results.
    pub results: OverviewResults,
}

/// The `results` object of the overview response.
#[derive(Debug, Clone, Deserialize)]
pub struct OverviewResults {
    /// Bestseller lists in provider order.
    pub lists: Vec<BookList>,
}

/// One named bestseller list (a category).
#[derive(Debug, Clone, Deserialize)]
pub struct BookList {
    /// Human-readable list name, e.g. "Hardcover Fiction".
    pub display_name: String,
    /// Ranked books in provider order.
    pub books: Vec<BookRecord>,
}

/// A single book as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Book title.
    pub title: String,
    /// Author byline.
    pub author: String,
    /// Publisher blurb.
    pub description: String,
    /// Purchase link.
    #[serde(rename = "amazon_product_url")]
    pub purchase_url: String,
    /// Cover image URL.
    #[serde(rename = "book_image")]
    pub image_url: String,
}

impl BookRecord {
    /// Create a record from its five fields.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
        purchase_url: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            description: description.into(),
            purchase_url: purchase_url.into(),
            image_url: image_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overview() {
        let body = serde_json::json!({
            "status": "OK",
            "num_results": 1,
            "results": {
                "bestsellers_date": "2024-06-01",
                "lists": [{
                    "list_id": 704,
                    "display_name": "Hardcover Fiction",
                    "books": [{
                        "rank": 1,
                        "title": "THE WOMEN",
                        "author": "Kristin Hannah",
                        "description": "In 1965, a nursing student follows her brother to serve.",
                        "amazon_product_url": "https://www.amazon.com/dp/1250178630",
                        "book_image": "https://storage.googleapis.com/du-prd/books/images/9781250178633.jpg"
                    }]
                }]
            }
        });

        let parsed: OverviewResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.results.lists.len(), 1);

        let list = &parsed.results.lists[0];
        assert_eq!(list.display_name, "Hardcover Fiction");
        assert_eq!(list.books[0].title, "THE WOMEN");
        assert_eq!(list.books[0].purchase_url, "https://www.amazon.com/dp/1250178630");
        assert!(list.books[0].image_url.ends_with(".jpg"));
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let body = serde_json::json!({
            "results": {
                "lists": [{
                    "display_name": "Hardcover Fiction",
                    "books": [{
                        "title": "THE WOMEN",
                        "author": "Kristin Hannah",
                        "description": "",
                        "amazon_product_url": "https://www.amazon.com/dp/1250178630"
                    }]
                }]
            }
        });

        let parsed = serde_json::from_value::<OverviewResponse>(body);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_null_field_is_an_error() {
        let body = serde_json::json!({
            "results": { "lists": [{ "display_name": null, "books": [] }] }
        });

        assert!(serde_json::from_value::<OverviewResponse>(body).is_err());
    }
}
