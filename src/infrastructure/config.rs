//! Configuration management
//!
//! Config lives at `~/.ntn/config.json` (or `$NTN_CONFIG_DIR/config.json`
//! when set). The `NOTION_API_KEY` environment variable overrides the
//! stored credential.

use crate::error::{NtnError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";

/// On-disk configuration shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brain_dump_page_id: Option<String>,

    /// Named remote database ids, e.g. `posts`.
    #[serde(default)]
    pub databases: BTreeMap<String, String>,
}

impl StoredConfig {
    /// Read the config file from the given directory. Returns `None` when
    /// the file does not exist yet.
    pub fn read_from_dir(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILE);
        match fs::read_to_string(&path) {
            Ok(contents) => {
                let stored = serde_json::from_str(&contents).map_err(|e| {
                    NtnError::Config(format!("Failed to parse {}: {}", path.display(), e))
                })?;
                Ok(Some(stored))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(NtnError::Io(e)),
        }
    }

    /// Save to `<dir>/config.json`, creating parent directories as needed
    /// and restricting the file to owner read/write. Returns the path
    /// written to.
    pub fn save_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(CONFIG_FILE);
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&path, contents)?;

        // The file holds a credential.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(path)
    }
}

/// Merged configuration with a guaranteed credential, threaded into each
/// command handler by the entry point.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub brain_dump_page_id: Option<String>,
    pub databases: BTreeMap<String, String>,
}

impl Config {
    /// Directory holding the config file: `$NTN_CONFIG_DIR` when set,
    /// otherwise `~/.ntn`.
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = std::env::var("NTN_CONFIG_DIR") {
            return PathBuf::from(dir);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ntn")
    }

    /// Load the merged configuration for this invocation.
    pub fn load() -> Result<Self> {
        let stored = StoredConfig::read_from_dir(&Self::config_dir())?;
        let env_key = std::env::var("NOTION_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        Self::from_parts(stored, env_key)
    }

    /// Merge the stored config with the environment credential. The
    /// environment wins; an empty value on either side counts as absent.
    pub fn from_parts(stored: Option<StoredConfig>, env_key: Option<String>) -> Result<Self> {
        let stored = stored.unwrap_or_default();
        let api_key = env_key
            .or(stored.api_key)
            .filter(|k| !k.is_empty())
            .ok_or(NtnError::MissingCredential)?;
        Ok(Config {
            api_key,
            brain_dump_page_id: stored.brain_dump_page_id,
            databases: stored.databases,
        })
    }

    /// Id of the configured posts database, when set up.
    pub fn posts_database(&self) -> Option<&str> {
        self.databases.get("posts").map(String::as_str)
    }
}
