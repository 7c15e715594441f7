//! Output formatting utilities

use crate::domain::{PostRow, SearchResult};

const MAX_SEARCH_RESULTS: usize = 20;
const URL_WIDTH: usize = 50;
const NOTE_WIDTH: usize = 40;

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Format saved posts as a fixed-width table: date and source columns,
/// URL truncated to 50 chars, and the note (truncated to 40) on an
/// indented continuation line. The result is newline-terminated and
/// printed as-is.
pub fn format_post_table(rows: &[PostRow]) -> String {
    if rows.is_empty() {
        return "No posts saved yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<12} {:<12} URL\n", "Date", "Source"));
    output.push_str(&"-".repeat(80));
    output.push('\n');
    for row in rows {
        output.push_str(&format!(
            "{:<12} {:<12} {}\n",
            row.date,
            row.source,
            truncate(&row.url, URL_WIDTH)
        ));
        if !row.note.is_empty() {
            output.push_str(&format!("{:>26} {}\n", "", truncate(&row.note, NOTE_WIDTH)));
        }
    }
    output
}

/// Format the first 20 search results, one `[kind] title` entry per
/// result with the remote URL indented below, a blank line after each
/// entry. Untitled entries fall back to a placeholder; non-page/database
/// results are skipped.
pub fn format_search_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return "No results.\n".to_string();
    }

    let mut output = String::new();
    for result in results.iter().take(MAX_SEARCH_RESULTS) {
        let (kind, title, url) = match result {
            SearchResult::Page(page) => ("page", resolve(&page.title, "Untitled"), &page.url),
            SearchResult::Database(db) => ("database", resolve(&db.title, "Untitled DB"), &db.url),
            SearchResult::Other => continue,
        };
        output.push_str(&format!("[{}] {}\n       {}\n\n", kind, title, url));
    }
    output
}

/// Format a page for the terminal: a title header above its plain-text
/// body lines.
pub fn format_page(title: &str, lines: &[String]) -> String {
    format!("── {} ──\n{}", title, lines.join("\n"))
}

fn resolve<'a>(title: &'a str, fallback: &'a str) -> &'a str {
    if title.is_empty() {
        fallback
    } else {
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Database, Page};

    fn row(url: &str, note: &str) -> PostRow {
        PostRow {
            date: "2025-01-17".to_string(),
            source: "LinkedIn".to_string(),
            url: url.to_string(),
            note: note.to_string(),
        }
    }

    #[test]
    fn test_empty_post_table() {
        assert_eq!(format_post_table(&[]), "No posts saved yet.\n");
    }

    #[test]
    fn test_post_table_contains_row() {
        let rows = vec![row("https://linkedin.com/posts/foo", "")];
        let output = format_post_table(&rows);
        assert!(output.contains("Date"));
        assert!(output.contains("Source"));
        assert!(output.contains("https://linkedin.com/posts/foo"));
        assert!(output.contains(&"-".repeat(80)));
    }

    #[test]
    fn test_post_table_note_on_continuation_line() {
        let rows = vec![row("https://linkedin.com/posts/foo", "Great hook")];
        let output = format_post_table(&rows);
        let note_line = output
            .lines()
            .find(|l| l.contains("Great hook"))
            .expect("note line missing");
        assert!(note_line.starts_with(&" ".repeat(27)));
    }

    #[test]
    fn test_post_table_truncates_url_and_note() {
        let long_url = format!("https://example.com/{}", "x".repeat(60));
        let long_note = "n".repeat(60);
        let rows = vec![row(&long_url, &long_note)];
        let output = format_post_table(&rows);
        assert!(output.contains(&long_url[..50]));
        assert!(!output.contains(&long_url[..51]));
        assert!(output.contains(&"n".repeat(40)));
        assert!(!output.contains(&"n".repeat(41)));
    }

    fn page_result(title: &str) -> SearchResult {
        SearchResult::Page(Page {
            id: "p-1".to_string(),
            title: title.to_string(),
            parent_page_id: None,
            url: "https://www.notion.so/p-1".to_string(),
        })
    }

    #[test]
    fn test_empty_search_results() {
        assert_eq!(format_search_results(&[]), "No results.\n");
    }

    #[test]
    fn test_search_results_formatting() {
        let results = vec![
            page_result("My Test Page"),
            SearchResult::Database(Database {
                id: "db-1".to_string(),
                title: String::new(),
                url: "https://www.notion.so/db-1".to_string(),
            }),
            SearchResult::Other,
        ];
        let output = format_search_results(&results);
        assert!(output.contains("[page] My Test Page"));
        assert!(output.contains("       https://www.notion.so/p-1"));
        assert!(output.contains("[database] Untitled DB"));
        // `Other` results leave no trace
        assert_eq!(output.matches('[').count(), 2);
    }

    #[test]
    fn test_search_results_keep_trailing_blank_line() {
        // Every entry, the last included, is followed by a blank line.
        let output = format_search_results(&[page_result("only")]);
        assert!(output.ends_with("\n\n"));
    }

    #[test]
    fn test_post_table_ends_with_single_newline() {
        let rows = vec![row("https://linkedin.com/posts/foo", "")];
        let output = format_post_table(&rows);
        assert!(output.ends_with('\n'));
        assert!(!output.ends_with("\n\n"));
    }

    #[test]
    fn test_search_results_untitled_fallback() {
        let output = format_search_results(&[page_result("")]);
        assert!(output.contains("[page] Untitled"));
    }

    #[test]
    fn test_search_results_capped_at_twenty() {
        let results: Vec<SearchResult> = (0..25).map(|i| page_result(&format!("p{i}"))).collect();
        let output = format_search_results(&results);
        assert!(output.contains("[page] p19"));
        assert!(!output.contains("[page] p20"));
    }

    #[test]
    fn test_format_page() {
        let lines = vec!["My thought".to_string(), "Another".to_string()];
        let output = format_page("17-01-2025", &lines);
        assert_eq!(output, "── 17-01-2025 ──\nMy thought\nAnother");
    }

    #[test]
    fn test_format_page_empty_body() {
        assert_eq!(format_page("Title", &[]), "── Title ──\n");
    }
}
