//! Saved link posts: add and list

use crate::application::report_api_error;
use crate::cli::output::format_post_table;
use crate::error::Result;
use crate::infrastructure::{Config, NotionClient};

/// Service for the posts database
pub struct PostService {
    client: NotionClient,
}

impl PostService {
    pub fn new(client: NotionClient) -> Self {
        PostService { client }
    }

    /// Save one link post row. Rows are created, never mutated.
    pub fn add(&self, config: &Config, url: &str, note: &str, source: &str) -> Result<()> {
        let Some(db_id) = config.posts_database() else {
            println!("No posts database configured. Run 'ntn setup'.");
            return Ok(());
        };
        report_api_error(self.add_row(db_id, url, note, source))
    }

    fn add_row(&self, db_id: &str, url: &str, note: &str, source: &str) -> Result<()> {
        self.client.add_post(db_id, url, source, note)?;
        println!("Saved: {}", url);
        Ok(())
    }

    /// List the most recent posts, newest first.
    pub fn list(&self, config: &Config, limit: u32) -> Result<()> {
        let Some(db_id) = config.posts_database() else {
            println!("No posts database configured. Run 'ntn setup'.");
            return Ok(());
        };
        report_api_error(self.list_rows(db_id, limit))
    }

    fn list_rows(&self, db_id: &str, limit: u32) -> Result<()> {
        let rows = self.client.list_posts(db_id, limit)?;
        print!("{}", format_post_table(&rows));
        Ok(())
    }
}
