use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::ui::Labels;

/// Settings read from `config.toml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub heading: String,
    pub meal_label: String,
    pub calories_label: String,
    pub add_label: String,
    pub unit: String,
    /// Id of the container the view is mounted into.
    pub mount_point: String,
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        let labels = Labels::default();
        Self {
            heading: labels.heading,
            meal_label: labels.meal,
            calories_label: labels.calories,
            add_label: labels.add,
            unit: labels.unit,
            mount_point: "app".to_string(),
            log_filter: "kcal=info".to_string(),
        }
    }
}

impl Config {
    /// `~/.config/kcal/config.toml` (or the platform equivalent).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kcal").join("config.toml"))
    }

    /// Loads an explicitly requested file, which must exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        Self::read(path)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::read(path)
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn labels(&self) -> Labels {
        Labels {
            heading: self.heading.clone(),
            meal: self.meal_label.clone(),
            calories: self.calories_label.clone(),
            add: self.add_label.clone(),
            unit: self.unit.clone(),
        }
    }
}
