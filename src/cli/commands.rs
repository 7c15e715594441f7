//! CLI command definitions

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ntn")]
#[command(about = "Fast Notion access from your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Connect your Notion workspace
    Setup,

    /// Add to today's brain dump
    Dump {
        /// Text to dump
        text: String,
    },

    /// Show today's brain dump
    Today,

    /// Manage saved posts
    Post {
        #[command(subcommand)]
        command: PostCommands,
    },

    /// Search your Notion workspace
    Search {
        /// Search query
        query: String,
    },

    /// Read a page by title
    Read {
        /// Page title to look up
        title: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum PostCommands {
    /// Save a post URL
    Add {
        /// URL of the post
        url: String,

        /// Your note about this post
        #[arg(long, default_value = "")]
        note: String,

        /// Source platform
        #[arg(long, default_value = "LinkedIn")]
        source: String,
    },

    /// List saved posts
    List {
        /// Maximum number of posts to show
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
}
