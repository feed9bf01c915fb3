// Runtime configuration, layered: defaults, optional config file, environment.

use anyhow::{Result, ensure};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::paginator::PAGE_SIZE;

pub const DEFAULT_STORAGE_PATH: &str = "car_finder_storage.json";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    // Where the key-value blob (wishlist) lives
    pub storage_path: String,
    pub page_size: usize,
}

impl Settings {
    // Reads `config.toml` from the working directory when present and
    // CARFINDER_* environment variables (e.g. CARFINDER_PAGE_SIZE)
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok(); // Load .env file if present
        Self::build(File::with_name("config").required(false))
    }

    // Same layering, with an explicit config file instead of `config.toml`
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::build(File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let builder = Config::builder()
            .set_default("storage_path", DEFAULT_STORAGE_PATH)?
            .set_default("page_size", PAGE_SIZE as u64)?
            .add_source(file)
            .add_source(
                Environment::with_prefix("CARFINDER")
                    .prefix_separator("_")
                    .separator("__"),
            );

        let settings: Settings = builder.build()?.try_deserialize()?;
        ensure!(settings.page_size > 0, "page_size must be greater than zero");
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_path: DEFAULT_STORAGE_PATH.to_string(),
            page_size: PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "storage_path = \"/tmp/wish.json\"\npage_size = 4\n").unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.storage_path, "/tmp/wish.json");
        assert_eq!(settings.page_size, 4);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "").unwrap();

        assert_eq!(Settings::from_file(&path).unwrap(), Settings::default());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "page_size = 0\n").unwrap();

        assert!(Settings::from_file(&path).is_err());
    }
}
