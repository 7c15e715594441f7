//! Domain layer - Typed views of the remote workspace

pub mod blocks;
pub mod journal;
pub mod posts;
pub mod search;

pub use posts::PostRow;
pub use search::{Database, Page, SearchResult};
