//! Plain-text extraction from block and rich-text JSON

use serde_json::Value;

/// Block types whose rich text counts as page body text.
const TEXT_BLOCK_TYPES: [&str; 8] = [
    "paragraph",
    "heading_1",
    "heading_2",
    "heading_3",
    "bulleted_list_item",
    "numbered_list_item",
    "quote",
    "callout",
];

/// Flatten an array of rich-text spans into their concatenated plain text.
///
/// Formatting metadata is discarded; spans without a `plain_text` field
/// contribute nothing.
pub fn plain_text(spans: &Value) -> String {
    spans
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|span| span.get("plain_text").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default()
}

/// Extract one line of plain text per paragraph-like block, in document
/// order. Blocks of other types and blocks with empty text are skipped.
pub fn text_lines(results: &[Value]) -> Vec<String> {
    let mut lines = Vec::new();
    for block in results {
        let Some(btype) = block.get("type").and_then(Value::as_str) else {
            continue;
        };
        if !TEXT_BLOCK_TYPES.contains(&btype) {
            continue;
        }
        let text = block
            .get(btype)
            .and_then(|b| b.get("rich_text"))
            .map(plain_text)
            .unwrap_or_default();
        if !text.is_empty() {
            lines.push(text);
        }
    }
    lines
}
