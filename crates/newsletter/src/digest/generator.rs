//! Digest content generator.
//!
//! Builds the HTML newsletter from summarized categories. Book fields and
//! summaries are inserted without escaping.

use chrono::{DateTime, Utc};
use std::fmt::Write;

use crate::summarizer::{SummarizedBook, SummarizedGroup};

/// Subject line of every digest.
pub const DIGEST_SUBJECT: &str = "📚 NYT Book Highlights – Curated for You";

/// A rendered newsletter issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    /// Email subject.
    pub subject: String,
    /// Complete HTML document.
    pub html: String,
}

/// Generates digest email content from summarized categories.
pub struct DigestGenerator;

impl DigestGenerator {
    /// Render the full digest for the given groups.
    #[must_use]
    pub fn generate(groups: &[SummarizedGroup], generated_at: DateTime<Utc>) -> Digest {
        Digest {
            subject: DIGEST_SUBJECT.to_string(),
            html: Self::generate_html(groups, generated_at),
        }
    }

    /// Generate the HTML document.
    #[must_use]
    pub fn generate_html(groups: &[SummarizedGroup], generated_at: DateTime<Utc>) -> String {
        let date_str = generated_at.format("%B %d, %Y").to_string();

        let mut sections_html = String::new();
        for group in groups {
            let _ = write!(
                sections_html,
                r#"
            <div class="category">
                <h2>{name}</h2>
                <hr>
{books}
            </div>
"#,
                name = group.name,
                books = Self::build_books_html(&group.books),
            );
        }

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>
        body {{
            font-family: Georgia, 'Times New Roman', serif;
            line-height: 1.6;
            color: #1f2937;
            background-color: #f9fafb;
            margin: 0;
            padding: 20px;
        }}
        .container {{
            max-width: 640px;
            margin: 0 auto;
            background: #ffffff;
            border: 1px solid #e5e7eb;
            border-radius: 8px;
            padding: 24px;
        }}
        h1 {{
            margin: 0 0 4px 0;
            font-size: 24px;
        }}
        .date {{
            color: #6b7280;
            font-size: 13px;
            margin-bottom: 16px;
        }}
        .category {{
            margin-top: 28px;
        }}
        .book {{
            overflow: hidden;
            margin-bottom: 20px;
        }}
        .book img {{
            float: left;
            width: 96px;
            margin: 0 16px 8px 0;
            border-radius: 4px;
        }}
        .book h3 {{
            margin: 0 0 4px 0;
            font-size: 17px;
        }}
        .book a {{
            color: #2563eb;
        }}
        .footer {{
            margin-top: 28px;
            font-size: 12px;
            color: #9ca3af;
            text-align: center;
        }}
    </style>
</head>
<body>
    <div class="container">
        <h1>NYT Book Highlights</h1>
        <div class="date">{date_str}</div>
        <p>Here are today’s top books from The New York Times:</p>
{sections_html}
        <div class="footer">Bestseller data from The New York Times Books API</div>
    </div>
</body>
</html>"#,
            date_str = date_str,
            sections_html = sections_html,
        )
    }

    /// Build HTML for the books of one category.
    fn build_books_html(books: &[SummarizedBook]) -> String {
        books
            .iter()
            .map(|entry| {
                let book = &entry.book;
                format!(
                    r#"                <div class="book">
                    <img src="{image}" alt="{title}">
                    <h3>{title}</h3>
                    <p><b>{author}</b></p>
                    <p>{summary}</p>
                    <a href="{url}">Buy on Amazon</a>
                </div>"#,
                    image = book.image_url,
                    title = book.title,
                    author = book.author,
                    summary = entry.summary.display_text(),
                    url = book.purchase_url,
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::books::BookRecord;
    use crate::summarizer::Summary;
    use chrono::TimeZone;

    fn entry(title: &str, summary: Summary) -> SummarizedBook {
        SummarizedBook {
            book: BookRecord::new(
                title,
                "Kristin Hannah",
                "desc",
                format!("https://www.amazon.com/dp/{title}"),
                format!("https://example.com/{title}.jpg"),
            ),
            summary,
        }
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 2, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_renders_category_heading_and_rule() {
        let groups = vec![SummarizedGroup {
            name: "Hardcover Fiction".to_string(),
            books: vec![entry("THE-WOMEN", Summary::Generated("A nurse in Vietnam.".to_string()))],
        }];

        let html = DigestGenerator::generate_html(&groups, fixed_time());

        assert!(html.contains("<h2>Hardcover Fiction</h2>"));
        assert!(html.contains("<hr>"));
        assert!(html.contains(r#"<img src="https://example.com/THE-WOMEN.jpg" alt="THE-WOMEN">"#));
        assert!(html.contains("<h3>THE-WOMEN</h3>"));
        assert!(html.contains("<b>Kristin Hannah</b>"));
        assert!(html.contains("<p>A nurse in Vietnam.</p>"));
        assert!(html.contains(r#"<a href="https://www.amazon.com/dp/THE-WOMEN">"#));
        assert!(html.contains("June 02, 2024"));
    }

    #[test]
    fn test_failed_summary_renders_placeholder() {
        let groups = vec![SummarizedGroup {
            name: "Picture Books".to_string(),
            books: vec![entry("X", Summary::Failed("AI error: quota".to_string()))],
        }];

        let html = DigestGenerator::generate_html(&groups, fixed_time());

        assert!(html.contains("<p>[Error summarizing: AI error: quota]</p>"));
    }

    #[test]
    fn test_fields_are_inserted_verbatim() {
        let groups = vec![SummarizedGroup {
            name: "Series Books".to_string(),
            books: vec![entry("Q&A <i>", Summary::Generated("<em>bold</em> move".to_string()))],
        }];

        let html = DigestGenerator::generate_html(&groups, fixed_time());

        assert!(html.contains("<h3>Q&A <i></h3>"));
        assert!(html.contains("<p><em>bold</em> move</p>"));
    }

    #[test]
    fn test_tag_counts() {
        let groups: Vec<_> = (0..3)
            .map(|i| SummarizedGroup {
                name: format!("List {i}"),
                books: vec![
                    entry(&format!("a{i}"), Summary::Generated("s".to_string())),
                    entry(&format!("b{i}"), Summary::Generated("s".to_string())),
                ],
            })
            .collect();

        let digest = DigestGenerator::generate(&groups, fixed_time());

        assert_eq!(digest.subject, DIGEST_SUBJECT);
        assert_eq!(digest.html.matches("<h2>").count(), 3);
        assert_eq!(digest.html.matches("<hr>").count(), 3);
        assert_eq!(digest.html.matches("<img ").count(), 6);
    }
}
