//! ntn - Fast Notion access from your terminal
//!
//! A command-line client for a Notion workspace: dump thoughts onto a
//! daily page, save and list link posts in a database, search the
//! workspace, and read pages as plain text.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::NtnError;
