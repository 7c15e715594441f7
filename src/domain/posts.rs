//! Typed post rows decoded from database query responses

use crate::domain::blocks::plain_text;
use serde_json::Value;

/// One saved link post, as listed from the posts database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRow {
    /// Start date, trimmed to `YYYY-MM-DD`; `—` when missing.
    pub date: String,
    /// Source select label; `—` when missing.
    pub source: String,
    pub url: String,
    /// Flattened note text, empty when the row has none.
    pub note: String,
}

const MISSING: &str = "—";

fn decode_row(row: &Value) -> PostRow {
    let props = row.get("properties").cloned().unwrap_or(Value::Null);

    let date = props
        .get("Date")
        .and_then(|d| d.get("date"))
        .and_then(|d| d.get("start"))
        .and_then(Value::as_str)
        .map(|s| s.chars().take(10).collect())
        .unwrap_or_else(|| MISSING.to_string());

    let source = props
        .get("Source")
        .and_then(|s| s.get("select"))
        .and_then(|s| s.get("name"))
        .and_then(Value::as_str)
        .unwrap_or(MISSING)
        .to_string();

    let url = props
        .get("URL")
        .and_then(|u| u.get("url"))
        .and_then(Value::as_str)
        .unwrap_or(MISSING)
        .to_string();

    let note = props
        .get("Notes")
        .and_then(|n| n.get("rich_text"))
        .map(plain_text)
        .unwrap_or_default();

    PostRow {
        date,
        source,
        url,
        note,
    }
}

/// Decode a database query response's `results` array into post rows.
pub fn decode_rows(results: &[Value]) -> Vec<PostRow> {
    results.iter().map(decode_row).collect()
}
