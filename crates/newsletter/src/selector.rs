//! Category filtering, cross-list de-duplication and per-category capping.

use std::collections::HashSet;

use serde::Serialize;

use crate::books::{BookList, BookRecord};

/// Bestseller lists included in the digest, matched by exact display name.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Combined Print & E-Book Fiction",
    "Combined Print & E-Book Nonfiction",
    "Hardcover Fiction",
    "Hardcover Nonfiction",
    "Paperback Trade Fiction",
    "Paperback Nonfiction",
    "Advice, How-To & Miscellaneous",
    "Children’s Middle Grade Hardcover",
    "Picture Books",
    "Series Books",
    "Young Adult Hardcover",
];

/// Maximum books kept per category.
pub const DEFAULT_BOOKS_PER_CATEGORY: usize = 2;

/// One bestseller category and the books selected from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    /// Category display name.
    pub name: String,
    /// Selected books in source order. Never empty.
    pub books: Vec<BookRecord>,
}

/// Normalize a title for duplicate detection.
///
/// Case-folds, trims, and collapses internal whitespace runs.
pub fn normalize_title(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Picks which books from the raw lists make it into the digest.
#[derive(Debug, Clone)]
pub struct Selector {
    categories: HashSet<String>,
    per_category: usize,
}

impl Selector {
    /// Create a selector for the given allow-list and per-category cap.
    pub fn new<I, S>(categories: I, per_category: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            per_category,
        }
    }

    /// Check whether a category display name is on the allow-list.
    pub fn allows(&self, display_name: &str) -> bool {
        self.categories.contains(display_name)
    }

    /// Select books from the raw lists.
    ///
    /// Lists are walked in source order. A title already taken by an earlier
    /// category is skipped, and categories left with no books are dropped.
    pub fn select(&self, lists: &[BookList]) -> Vec<CategoryGroup> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut groups = Vec::new();

        for list in lists {
            if !self.allows(&list.display_name) {
                tracing::debug!(category = %list.display_name, "Skipping category");
                continue;
            }

            let mut books = Vec::new();
            for book in &list.books {
                if books.len() >= self.per_category {
                    break;
                }

                let key = normalize_title(&book.title);
                if seen.insert(key) {
                    books.push(book.clone());
                } else {
                    tracing::debug!(
                        category = %list.display_name,
                        title = %book.title,
                        "Skipping duplicate title"
                    );
                }
            }

            if books.is_empty() {
                tracing::debug!(category = %list.display_name, "Category has no unique books");
                continue;
            }

            groups.push(CategoryGroup {
                name: list.display_name.clone(),
                books,
            });
        }

        tracing::info!(
            categories = groups.len(),
            books = groups.iter().map(|g| g.books.len()).sum::<usize>(),
            "Selected books"
        );

        groups
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES.iter().copied(), DEFAULT_BOOKS_PER_CATEGORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn book(title: &str) -> BookRecord {
        BookRecord::new(
            title,
            "Some Author",
            "A description.",
            "https://www.amazon.com/dp/0000000000",
            "https://example.com/cover.jpg",
        )
    }

    fn list(name: &str, titles: &[&str]) -> BookList {
        BookList {
            display_name: name.to_string(),
            books: titles.iter().map(|t| book(t)).collect(),
        }
    }

    fn titles(group: &CategoryGroup) -> Vec<&str> {
        group.books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("  The Great Novel "), "the great novel");
        assert_eq!(normalize_title("THE   GREAT\tNOVEL"), "the great novel");
    }

    #[test]
    fn test_skips_categories_not_on_allow_list() {
        let lists = vec![
            list("Graphic Books and Manga", &["A", "B"]),
            list("Hardcover Fiction", &["C"]),
            list("Mass Market Monthly", &["D"]),
        ];

        let groups = Selector::default().select(&lists);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Hardcover Fiction");
    }

    #[test]
    fn test_category_match_is_exact() {
        let lists = vec![list("hardcover fiction", &["A"])];
        assert!(Selector::default().select(&lists).is_empty());
    }

    #[test]
    fn test_caps_books_per_category() {
        let lists = vec![list("Hardcover Fiction", &["One", "Two", "Three", "Four"])];

        let groups = Selector::default().select(&lists);

        assert_eq!(titles(&groups[0]), vec!["One", "Two"]);
    }

    #[test]
    fn test_dedup_is_global_and_first_category_wins() {
        let lists = vec![
            list("Hardcover Nonfiction", &["Other Book", "The Great Novel"]),
            list("Hardcover Fiction", &["  THE GREAT NOVEL ", "Third Book"]),
        ];

        let groups = Selector::default().select(&lists);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Hardcover Nonfiction");
        assert_eq!(titles(&groups[0]), vec!["Other Book", "The Great Novel"]);
        assert_eq!(titles(&groups[1]), vec!["Third Book"]);
    }

    #[test]
    fn test_duplicate_does_not_count_toward_cap() {
        let lists = vec![
            list("Hardcover Fiction", &["Shared"]),
            list("Paperback Trade Fiction", &["shared", "Second", "Third"]),
        ];

        let groups = Selector::default().select(&lists);

        assert_eq!(titles(&groups[1]), vec!["Second", "Third"]);
    }

    #[test]
    fn test_omits_category_made_of_duplicates() {
        let lists = vec![
            list("Hardcover Fiction", &["Alpha", "Beta"]),
            list("Combined Print & E-Book Fiction", &["alpha", "BETA"]),
            list("Paperback Nonfiction", &["Gamma"]),
        ];

        let groups = Selector::default().select(&lists);

        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Hardcover Fiction", "Paperback Nonfiction"]);
    }

    #[test]
    fn test_books_past_the_cap_are_not_marked_seen() {
        let lists = vec![
            list("Hardcover Fiction", &["A", "B", "C"]),
            list("Paperback Trade Fiction", &["C"]),
        ];

        let groups = Selector::default().select(&lists);

        assert_eq!(titles(&groups[1]), vec!["C"]);
    }

    #[test]
    fn test_source_order_not_allow_list_order() {
        let lists = vec![
            list("Young Adult Hardcover", &["YA"]),
            list("Combined Print & E-Book Fiction", &["Combined"]),
        ];

        let groups = Selector::default().select(&lists);

        assert_eq!(groups[0].name, "Young Adult Hardcover");
        assert_eq!(groups[1].name, "Combined Print & E-Book Fiction");
    }

    #[test]
    fn test_custom_allow_list_and_cap() {
        let selector = Selector::new(["Science"], 1);
        let lists = vec![list("Science", &["X", "Y"]), list("Hardcover Fiction", &["Z"])];

        let groups = selector.select(&lists);

        assert_eq!(groups.len(), 1);
        assert_eq!(titles(&groups[0]), vec!["X"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(Selector::default().select(&[]).is_empty());
    }
}
