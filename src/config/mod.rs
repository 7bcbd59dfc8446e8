pub mod parser;

use crate::error::{Result, TrackerError};
use crate::utils::paths;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Settings read from the tracker's TOML file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub general: GeneralConfig,
}

/// The `[general]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Store directory that receives copies of tracked dotfiles
    pub dotfiles: PathBuf,
    /// Manifest document recording the groups
    pub repo_file: PathBuf,
}

impl Config {
    /// Build a configuration from explicit paths
    #[must_use]
    pub fn new(dotfiles: PathBuf, repo_file: PathBuf) -> Self {
        Self {
            general: GeneralConfig {
                dotfiles,
                repo_file,
            },
        }
    }

    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read ([`TrackerError::ConfigMissing`])
    /// - The file is not valid TOML or lacks a required key
    ///   ([`TrackerError::ConfigInvalid`])
    pub fn load(path: &Path) -> Result<Self> {
        parser::parse_config_file(path)
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Cannot create parent directories
    /// - Cannot write to the file
    /// - TOML serialization fails
    pub fn save(&self, path: &Path) -> Result<()> {
        paths::ensure_parent_dirs(path)?;

        let toml_str = toml::to_string_pretty(self).map_err(|e| TrackerError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(toml_str.as_bytes())?;
        Ok(())
    }

    /// Store directory with `~` expanded
    #[must_use]
    pub fn store_root(&self) -> PathBuf {
        paths::expand_tilde(&self.general.dotfiles)
    }

    /// Manifest document with `~` expanded
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        paths::expand_tilde(&self.general.repo_file)
    }

    /// Resolve relative entries against `base`, usually the settings file's
    /// directory
    pub(crate) fn anchor_to(&mut self, base: &Path) {
        for path in [&mut self.general.dotfiles, &mut self.general.repo_file] {
            let expanded = paths::expand_tilde(path);
            *path = if expanded.is_absolute() {
                expanded
            } else {
                base.join(expanded)
            };
        }
    }
}
