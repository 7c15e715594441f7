//! Brain dump use case: append a thought to today's page

use crate::application::report_api_error;
use crate::domain::journal;
use crate::error::Result;
use crate::infrastructure::{Config, NotionClient};

/// Service for appending text to the daily brain dump page
pub struct DumpService {
    client: NotionClient,
}

impl DumpService {
    pub fn new(client: NotionClient) -> Self {
        DumpService { client }
    }

    /// Append `text` to today's page, creating the page first if this is
    /// the day's first dump. Without a configured parent page this prints
    /// setup guidance and does nothing remote.
    pub fn execute(&self, config: &Config, text: &str) -> Result<()> {
        let Some(parent_id) = config.brain_dump_page_id.as_deref() else {
            println!("No brain dump page configured. Run 'ntn setup'.");
            return Ok(());
        };
        report_api_error(self.dump(parent_id, text))
    }

    fn dump(&self, parent_id: &str, text: &str) -> Result<()> {
        let title = journal::today_title();
        let pages = self.client.search_pages(&title)?;
        let page_id = match journal::find_page(&pages, &title, parent_id) {
            Some(page) => page.id.clone(),
            None => {
                let id = self.client.create_page(parent_id, &title)?;
                println!("Created page: {}", title);
                id
            }
        };
        // If this append fails the freshly created page stays behind
        // empty; the next dump finds it and appends normally.
        self.client.append_paragraph(&page_id, text)?;
        println!("Dumped to {}", title);
        Ok(())
    }
}
