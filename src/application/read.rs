//! Read a page by title

use crate::application::report_api_error;
use crate::cli::output::format_page;
use crate::error::Result;
use crate::infrastructure::NotionClient;

/// Service for printing a page's plain text
pub struct ReadService {
    client: NotionClient,
}

impl ReadService {
    pub fn new(client: NotionClient) -> Self {
        ReadService { client }
    }

    /// Look up pages matching `title` and print the first match's body.
    pub fn execute(&self, title: &str) -> Result<()> {
        report_api_error(self.read(title))
    }

    fn read(&self, title: &str) -> Result<()> {
        let pages = self.client.search_pages(title)?;
        let Some(page) = pages.first() else {
            println!("No page found: {}", title);
            return Ok(());
        };
        let resolved = if page.title.is_empty() {
            "Untitled"
        } else {
            &page.title
        };
        let lines = self.client.page_text(&page.id)?;
        println!("{}", format_page(resolved, &lines));
        Ok(())
    }
}
