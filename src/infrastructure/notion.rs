//! Blocking HTTP client for the Notion API
//!
//! One method per remote operation. Responses are decoded into the typed
//! domain structs here, at the boundary, so handlers never probe nested
//! JSON. Any failed call, transport or service-side, surfaces as
//! `NtnError::Api`; there are no retries.

use crate::domain::{blocks, journal, posts, search, Page, PostRow, SearchResult};
use crate::error::{NtnError, Result};
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::{json, Value};

const BASE_URL: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";

/// Authenticated handle to the remote workspace.
pub struct NotionClient {
    http: Client,
    base_url: String,
    token: String,
}

impl NotionClient {
    pub fn new(token: &str) -> Result<Self> {
        let http = Client::builder().build()?;
        Ok(NotionClient {
            http,
            base_url: BASE_URL.to_string(),
            token: token.to_string(),
        })
    }

    /// Send a request with auth and version headers, check the status,
    /// and return the JSON body. Service errors carry Notion's own
    /// `message` field when the body provides one.
    fn call(&self, req: RequestBuilder) -> Result<Value> {
        let res = req
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Notion-Version", NOTION_VERSION)
            .send()?;
        let status = res.status();
        if !status.is_success() {
            let body: Value = res.json().unwrap_or(Value::Null);
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(NtnError::Api(message));
        }
        Ok(res.json()?)
    }

    fn results(body: &Value) -> Vec<Value> {
        body.get("results")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    }

    /// Workspace-wide text search over pages and databases.
    pub fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let url = format!("{}/search", self.base_url);
        let body = self.call(self.http.post(url).json(&json!({ "query": query })))?;
        Ok(search::decode_results(&Self::results(&body)))
    }

    /// Search restricted to pages.
    pub fn search_pages(&self, query: &str) -> Result<Vec<Page>> {
        let url = format!("{}/search", self.base_url);
        let payload = json!({
            "query": query,
            "filter": { "property": "object", "value": "page" }
        });
        let body = self.call(self.http.post(url).json(&payload))?;
        Ok(search::decode_pages(&Self::results(&body)))
    }

    /// Create an empty page titled `title` under a parent page. Returns
    /// the new page's id.
    pub fn create_page(&self, parent_page_id: &str, title: &str) -> Result<String> {
        let url = format!("{}/pages", self.base_url);
        let payload = json!({
            "parent": { "page_id": parent_page_id },
            "properties": {
                "title": { "title": [{ "text": { "content": title } }] }
            }
        });
        let body = self.call(self.http.post(url).json(&payload))?;
        body.get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| NtnError::Api("page create response had no id".to_string()))
    }

    /// Append one paragraph block to a page.
    pub fn append_paragraph(&self, page_id: &str, text: &str) -> Result<()> {
        let url = format!("{}/blocks/{}/children", self.base_url, page_id);
        let payload = json!({
            "children": [{
                "object": "block",
                "type": "paragraph",
                "paragraph": {
                    "rich_text": [{ "type": "text", "text": { "content": text } }]
                }
            }]
        });
        self.call(self.http.patch(url).json(&payload))?;
        Ok(())
    }

    /// Plain-text lines of a page's paragraph-like child blocks.
    pub fn page_text(&self, page_id: &str) -> Result<Vec<String>> {
        let url = format!("{}/blocks/{}/children", self.base_url, page_id);
        let body = self.call(self.http.get(url))?;
        Ok(blocks::text_lines(&Self::results(&body)))
    }

    /// Create a link post row in the posts database. The Notes property
    /// is omitted entirely when the note is empty.
    pub fn add_post(&self, database_id: &str, link: &str, source: &str, note: &str) -> Result<()> {
        let url = format!("{}/pages", self.base_url);
        let mut properties = json!({
            "URL": { "url": link },
            "Date": { "date": { "start": journal::today_date() } },
            "Source": { "select": { "name": source } },
        });
        if !note.is_empty() {
            properties["Notes"] = json!({
                "rich_text": [{ "text": { "content": note } }]
            });
        }
        let payload = json!({
            "parent": { "database_id": database_id },
            "properties": properties
        });
        self.call(self.http.post(url).json(&payload))?;
        Ok(())
    }

    /// Most recent post rows, newest first.
    pub fn list_posts(&self, database_id: &str, limit: u32) -> Result<Vec<PostRow>> {
        let url = format!("{}/databases/{}/query", self.base_url, database_id);
        let payload = json!({
            "page_size": limit,
            "sorts": [{ "property": "Date", "direction": "descending" }]
        });
        let body = self.call(self.http.post(url).json(&payload))?;
        Ok(posts::decode_rows(&Self::results(&body)))
    }
}
