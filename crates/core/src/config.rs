//! Loader configuration

use crate::constants::{DEFAULT_DATA_DIR, DEFAULT_MAX_RECORDS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_max_records() -> u32 {
    DEFAULT_MAX_RECORDS
}

/// Where to find station documents and how many indices to probe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Directory holding `1.json`, `2.json`, ... and their images
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Highest index probed (inclusive)
    #[serde(default = "default_max_records")]
    pub max_records: u32,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            max_records: default_max_records(),
        }
    }
}
