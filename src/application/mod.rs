//! Application layer - One use case per CLI verb

pub mod dump;
pub mod posts;
pub mod read;
pub mod search;
pub mod setup;
pub mod today;

pub use dump::DumpService;
pub use posts::PostService;
pub use read::ReadService;
pub use search::SearchService;
pub use today::TodayService;

use crate::error::{NtnError, Result};

/// Remote API failures end the invocation normally: print the one-line
/// diagnostic and swallow the error. Anything else still propagates.
pub(crate) fn report_api_error(result: Result<()>) -> Result<()> {
    match result {
        Err(e @ NtnError::Api(_)) => {
            println!("{}", e);
            Ok(())
        }
        other => other,
    }
}
