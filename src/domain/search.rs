//! Typed search results decoded from workspace search responses

use crate::domain::blocks::plain_text;
use serde_json::Value;

/// A page hit from a workspace search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: String,
    /// Resolved title, empty when the page has none.
    pub title: String,
    /// Parent page id, when the parent is a page.
    pub parent_page_id: Option<String>,
    pub url: String,
}

/// A database hit from a workspace search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    pub id: String,
    pub title: String,
    pub url: String,
}

/// One workspace search result. The service returns other object kinds
/// too; those decode to `Other` and are skipped by the handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Page(Page),
    Database(Database),
    Other,
}

fn str_field(item: &Value, key: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn decode_page(item: &Value) -> Page {
    let title = item
        .get("properties")
        .and_then(|p| p.get("title"))
        .and_then(|t| t.get("title"))
        .map(plain_text)
        .unwrap_or_default();
    let parent_page_id = item
        .get("parent")
        .and_then(|p| p.get("page_id"))
        .and_then(Value::as_str)
        .map(str::to_string);
    Page {
        id: str_field(item, "id"),
        title,
        parent_page_id,
        url: str_field(item, "url"),
    }
}

fn decode_database(item: &Value) -> Database {
    let title = item.get("title").map(plain_text).unwrap_or_default();
    Database {
        id: str_field(item, "id"),
        title,
        url: str_field(item, "url"),
    }
}

/// Decode a search response's `results` array into typed results.
pub fn decode_results(results: &[Value]) -> Vec<SearchResult> {
    results
        .iter()
        .map(|item| match item.get("object").and_then(Value::as_str) {
            Some("page") => SearchResult::Page(decode_page(item)),
            Some("database") => SearchResult::Database(decode_database(item)),
            _ => SearchResult::Other,
        })
        .collect()
}

/// Decode a page-filtered search response, dropping anything that is not
/// a page.
pub fn decode_pages(results: &[Value]) -> Vec<Page> {
    decode_results(results)
        .into_iter()
        .filter_map(|r| match r {
            SearchResult::Page(p) => Some(p),
            _ => None,
        })
        .collect()
}
