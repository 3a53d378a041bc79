//! Configuration management

use crate::error::{Result, TempleError};
use crate::infrastructure::spreadsheet::{DEFAULT_SHEET, DEFAULT_SKIP_ROWS};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE: &str = "temple.toml";

/// Locations of the expedition data files
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub journal: PathBuf,
    pub locations: PathBuf,
    pub locations_skip_rows: usize,
    pub artifacts: PathBuf,
    pub artifacts_sheet: String,
    pub artifacts_skip_rows: usize,
    pub preview_rows: usize,

    /// Directory relative paths are resolved against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal: PathBuf::from("journal.txt"),
            locations: PathBuf::from("locations.tsv"),
            locations_skip_rows: 0,
            artifacts: PathBuf::from("artifacts.xlsx"),
            artifacts_sheet: DEFAULT_SHEET.to_string(),
            artifacts_skip_rows: DEFAULT_SKIP_ROWS,
            preview_rows: 5,
            base_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load config from an explicit file, or from temple.toml in `dir`.
    ///
    /// An explicit file must exist. A missing temple.toml falls back to defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => {
                let path = dir.join(CONFIG_FILE);
                if path.is_file() {
                    Self::load_from_file(&path)
                } else {
                    Ok(Config {
                        base_dir: dir.to_path_buf(),
                        ..Config::default()
                    })
                }
            }
        }
    }

    /// Load and validate a config file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| TempleError::from_io(path, e))?;

        let mut config: Config = toml::from_str(&contents)?;
        config.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.preview_rows == 0 {
            return Err(TempleError::Config(
                "preview_rows must be at least 1".to_string(),
            ));
        }
        if self.artifacts_sheet.trim().is_empty() {
            return Err(TempleError::Config(
                "artifacts_sheet must name a sheet".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve a data path against the config directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    pub fn journal_path(&self) -> PathBuf {
        self.resolve(&self.journal)
    }

    pub fn locations_path(&self) -> PathBuf {
        self.resolve(&self.locations)
    }

    pub fn artifacts_path(&self) -> PathBuf {
        self.resolve(&self.artifacts)
    }
}
