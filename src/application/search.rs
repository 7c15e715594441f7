//! Workspace search use case

use crate::application::report_api_error;
use crate::cli::output::format_search_results;
use crate::error::Result;
use crate::infrastructure::NotionClient;

/// Service for workspace-wide text search
pub struct SearchService {
    client: NotionClient,
}

impl SearchService {
    pub fn new(client: NotionClient) -> Self {
        SearchService { client }
    }

    /// Search the workspace and print the first matches.
    pub fn execute(&self, query: &str) -> Result<()> {
        report_api_error(self.search(query))
    }

    fn search(&self, query: &str) -> Result<()> {
        let results = self.client.search(query)?;
        print!("{}", format_search_results(&results));
        Ok(())
    }
}
