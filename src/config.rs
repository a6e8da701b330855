//! Where the file front end puts its output.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HuffmanError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory that receives `<stem>_compressed.bin` artifacts.
    pub compressed_dir: PathBuf,
    /// Directory that receives `<stem>_decompressed<ext>` files.
    pub decompressed_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compressed_dir: PathBuf::from("compressed"),
            decompressed_dir: PathBuf::from("decompressed"),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.compressed_dir.as_os_str().is_empty() {
            return Err(HuffmanError::configuration("compressed_dir must not be empty"));
        }
        if self.decompressed_dir.as_os_str().is_empty() {
            return Err(HuffmanError::configuration("decompressed_dir must not be empty"));
        }
        Ok(())
    }

    /// Loads a JSON config; missing keys keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| HuffmanError::configuration(format!("parsing config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
