//! Error types for ntn

use thiserror::Error;

/// Main error type for the ntn application
#[derive(Debug, Error)]
pub enum NtnError {
    #[error(
        "No Notion API key found.\n\
        Run 'ntn setup' or set NOTION_API_KEY environment variable."
    )]
    MissingCredential,

    #[error("Notion API error: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

// Any transport-level failure surfaces the same way as a rejected call:
// the handler prints one diagnostic line and the invocation ends.
impl From<reqwest::Error> for NtnError {
    fn from(e: reqwest::Error) -> Self {
        NtnError::Api(e.to_string())
    }
}

impl NtnError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NtnError::MissingCredential => 2,
            _ => 1,
        }
    }
}

/// Result type using NtnError
pub type Result<T> = std::result::Result<T, NtnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_message() {
        let err = NtnError::MissingCredential;
        let msg = err.to_string();
        assert!(msg.contains("No Notion API key found"));
        assert!(msg.contains("ntn setup"));
        assert!(msg.contains("NOTION_API_KEY"));
    }

    #[test]
    fn test_api_error_prefix() {
        let err = NtnError::Api("body could not be validated".to_string());
        assert_eq!(
            err.to_string(),
            "Notion API error: body could not be validated"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(NtnError::MissingCredential.exit_code(), 2);
        assert_eq!(NtnError::Api("x".into()).exit_code(), 1);
        assert_eq!(NtnError::Config("x".into()).exit_code(), 1);
    }
}
