//! Project configuration stored in `.strata/config.json`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_DIR: &str = ".strata";
pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: String,
    /// Store directory, relative to the project root.
    #[serde(default = "default_store")]
    pub store: PathBuf,
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_store() -> PathBuf {
    Path::new(CONFIG_DIR).join("store")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            store: default_store(),
        }
    }
}

impl Config {
    pub fn path(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Reads the configuration under `root`, falling back to defaults when absent.
    pub fn load(root: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path(root);
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let config = serde_json::from_str(&fs::read_to_string(&path)?)?;
        Ok(config)
    }

    /// Writes the configuration under `root`, creating the directory.
    pub fn save(&self, root: &Path) -> Result<(), Box<dyn std::error::Error>> {
        fs::create_dir_all(root.join(CONFIG_DIR))?;
        fs::write(Self::path(root), serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// The store directory resolved against `root`.
    pub fn store_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.store)
    }
}
