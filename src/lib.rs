#![warn(missing_docs)]

//! # dot-tracker - dotfiles grouped by application
//!
//! dot-tracker copies configuration files and directories into a central store
//! and records which paths belong together in a manifest. Each named
//! [`Group`](tracking::Group) is the unit of rename and removal.
//!
//! ## Architecture
//!
//! - [`tracking`]: the group entity and the manifest storage engine
//! - [`storage`]: the store gateway that copies paths into the store directory
//! - [`config`]: settings file parsing
//! - [`commands`]: command implementations (add, list, rename, remove, ...)
//! - [`output`]: the reporter commands print through
//! - [`utils`]: path resolution and metadata-preserving copies
//!
//! ## Example Usage
//!
//! ```no_run
//! use dot_tracker::TrackerContext;
//! use dot_tracker::output::Reporter;
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = TrackerContext::new(None)?;
//! let reporter = Reporter::default();
//!
//! dot_tracker::commands::add::execute(
//!     &ctx,
//!     &reporter,
//!     &["~/.vimrc".to_string()],
//!     Some("vim"),
//!     false,
//! )?;
//! dot_tracker::commands::list::execute(&ctx, &reporter)?;
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Command implementations.
pub mod commands;

/// Settings file parsing and validation.
pub mod config;

/// Error taxonomy for the tracking core.
pub mod error;

/// Diagnostic logging setup.
pub mod logging;

/// User-facing output.
pub mod output;

/// Store gateway copying tracked paths into the store.
pub mod storage;

/// Groups and the manifest.
pub mod tracking;

/// Utility functions and helpers.
pub mod utils;

pub use error::{Result, TrackerError};

use std::path::PathBuf;
use storage::Store;
use tracking::Manifest;

/// Current version of the binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default settings file relative to the home directory.
pub const DEFAULT_CONFIG_FILE: &str = ".dot_tracker.toml";

/// Environment variable overriding the settings file location.
pub const CONFIG_ENV_VAR: &str = "DOT_TRACKER_CONFIG";

/// Everything a command needs: where the settings came from and what they say.
#[derive(Debug, Clone)]
pub struct TrackerContext {
    /// Path to the settings file.
    pub config_path: PathBuf,

    /// Loaded settings.
    pub config: config::Config,
}

impl TrackerContext {
    /// Load the settings file.
    ///
    /// The location is, in order of precedence: `config_override`, the
    /// `DOT_TRACKER_CONFIG` environment variable, `~/.dot_tracker.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ConfigMissing`] when the file is absent or the
    /// home directory is unknown, [`TrackerError::ConfigInvalid`] when it is
    /// malformed.
    pub fn new(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(path) => utils::expand_tilde(&path),
            None => Self::default_config_path()?,
        };

        let config = config::Config::load(&config_path)?;
        tracing::debug!(path = %config_path.display(), "loaded configuration");

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Build a context from settings already in memory.
    #[must_use]
    pub const fn from_config(config_path: PathBuf, config: config::Config) -> Self {
        Self {
            config_path,
            config,
        }
    }

    fn default_config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Ok(utils::expand_tilde(&PathBuf::from(path)));
        }

        let home = dirs::home_dir().ok_or_else(|| TrackerError::ConfigMissing {
            path: PathBuf::from("~").join(DEFAULT_CONFIG_FILE),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "could not find home directory",
            ),
        })?;
        Ok(home.join(DEFAULT_CONFIG_FILE))
    }

    /// Store directory.
    #[must_use]
    pub fn store_root(&self) -> PathBuf {
        self.config.store_root()
    }

    /// Manifest document location.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.config.manifest_path()
    }

    /// Store gateway for the configured store directory.
    #[must_use]
    pub fn store(&self) -> Store {
        Store::new(self.store_root())
    }

    /// Load the manifest. A load failure is returned next to an empty
    /// manifest rather than as an error.
    #[must_use]
    pub fn open_manifest(&self) -> (Manifest, Option<TrackerError>) {
        Manifest::open(self.store_root(), self.manifest_path())
    }
}
