//! Environment-driven settings.

use std::env;
use std::path::PathBuf;

pub const DATA_DIR_VAR: &str = "TICKETING_DATA_DIR";
pub const VALIDATE_BASE_URL_VAR: &str = "TICKETING_VALIDATE_BASE_URL";

const DEFAULT_DATA_DIR: &str = ".ticketing";
const DEFAULT_VALIDATE_BASE_URL: &str = "http://localhost:3000";

/// CLI settings resolved from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory of the file-backed store.
    pub data_dir: PathBuf,
    /// Origin that serves the `/validate/<claim>` page.
    pub validate_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            data_dir: non_empty(DATA_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            validate_base_url: non_empty(VALIDATE_BASE_URL_VAR)
                .unwrap_or_else(|| DEFAULT_VALIDATE_BASE_URL.to_owned()),
        }
    }
}
