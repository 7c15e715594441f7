//! Daily page naming and lookup rules

use crate::domain::search::Page;
use chrono::Local;

/// Title of today's brain dump page, e.g. `17-01-2025`.
pub fn today_title() -> String {
    Local::now().format("%d-%m-%Y").to_string()
}

/// Today's date in the `YYYY-MM-DD` form used by database date fields.
pub fn today_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Page and database identifiers appear both with and without dashes
/// depending on where they were copied from; comparisons strip them.
pub fn normalize_id(id: &str) -> String {
    id.replace('-', "")
}

/// Find the daily page among search results: the title must equal `title`
/// exactly and the parent page id must match `parent_id` after dash
/// normalization on both sides.
pub fn find_page<'a>(pages: &'a [Page], title: &str, parent_id: &str) -> Option<&'a Page> {
    let want_parent = normalize_id(parent_id);
    pages.iter().find(|page| {
        page.title == title
            && page
                .parent_page_id
                .as_deref()
                .map(normalize_id)
                .is_some_and(|p| p == want_parent)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(title: &str, parent: Option<&str>) -> Page {
        Page {
            id: format!("id-{title}"),
            title: title.to_string(),
            parent_page_id: parent.map(str::to_string),
            url: String::new(),
        }
    }

    #[test]
    fn test_today_title_format() {
        let title = today_title();
        // DD-MM-YYYY
        assert_eq!(title.len(), 10);
        assert_eq!(title.as_bytes()[2], b'-');
        assert_eq!(title.as_bytes()[5], b'-');
    }

    #[test]
    fn test_normalize_id() {
        assert_eq!(
            normalize_id("59833787-2cf9-4fdf-8782-e53db20768a5"),
            "598337872cf94fdf8782e53db20768a5"
        );
        assert_eq!(normalize_id("abc123"), "abc123");
    }

    #[test]
    fn test_find_page_matches_title_and_parent() {
        let pages = vec![
            page("16-01-2025", Some("parent-1")),
            page("17-01-2025", Some("parent-1")),
        ];
        let found = find_page(&pages, "17-01-2025", "parent-1").unwrap();
        assert_eq!(found.id, "id-17-01-2025");
    }

    #[test]
    fn test_find_page_ignores_dashes_in_ids() {
        let pages = vec![page("17-01-2025", Some("5983-3787-2cf9"))];
        assert!(find_page(&pages, "17-01-2025", "598337872cf9").is_some());
    }

    #[test]
    fn test_find_page_requires_exact_title() {
        let pages = vec![page("17-01-2025 notes", Some("parent-1"))];
        assert!(find_page(&pages, "17-01-2025", "parent-1").is_none());
    }

    #[test]
    fn test_find_page_rejects_wrong_parent() {
        let pages = vec![page("17-01-2025", Some("other-parent"))];
        assert!(find_page(&pages, "17-01-2025", "parent-1").is_none());
    }

    #[test]
    fn test_find_page_requires_page_parent() {
        // Pages whose parent is a workspace or database never match.
        let pages = vec![page("17-01-2025", None)];
        assert!(find_page(&pages, "17-01-2025", "parent-1").is_none());
    }
}
