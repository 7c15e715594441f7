//! Read back today's brain dump

use crate::application::report_api_error;
use crate::cli::output::format_page;
use crate::domain::journal;
use crate::error::Result;
use crate::infrastructure::{Config, NotionClient};

/// Service for printing today's brain dump page
pub struct TodayService {
    client: NotionClient,
}

impl TodayService {
    pub fn new(client: NotionClient) -> Self {
        TodayService { client }
    }

    /// Print today's page as plain text, or a hint when nothing has been
    /// dumped yet. Read-only; never creates the page.
    pub fn execute(&self, config: &Config) -> Result<()> {
        let Some(parent_id) = config.brain_dump_page_id.as_deref() else {
            println!("No brain dump page configured. Run 'ntn setup'.");
            return Ok(());
        };
        report_api_error(self.show(parent_id))
    }

    fn show(&self, parent_id: &str) -> Result<()> {
        let title = journal::today_title();
        let pages = self.client.search_pages(&title)?;
        let Some(page) = journal::find_page(&pages, &title, parent_id) else {
            println!(
                "No dump yet today ({}). Use 'ntn dump \"...\"' to start.",
                title
            );
            return Ok(());
        };
        let lines = self.client.page_text(&page.id)?;
        println!("{}", format_page(&title, &lines));
        Ok(())
    }
}
