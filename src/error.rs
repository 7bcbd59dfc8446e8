//! Error types shared by the manifest, the store and configuration loading.
//!
//! Commands wrap these in `anyhow` for reporting; the core layers return them
//! directly so callers can decide whether a failure is fatal.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the tracking core.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// The settings file could not be found or read.
    #[error("Configuration file not found: {} ({source})", path.display())]
    ConfigMissing {
        /// Location that was probed.
        path: PathBuf,
        /// Underlying read failure.
        #[source]
        source: io::Error,
    },

    /// The settings file exists but does not describe a usable configuration.
    #[error("Invalid configuration in {}: {reason}", path.display())]
    ConfigInvalid {
        /// Settings file that was parsed.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// The manifest document could not be read or decoded.
    #[error("Failed to load manifest {}: {reason}", path.display())]
    ManifestLoad {
        /// Manifest document location.
        path: PathBuf,
        /// What went wrong.
        reason: String,
        /// Set when the document simply does not exist yet.
        missing: bool,
    },

    /// A path is already tracked, or already present in the store.
    #[error("Already tracked: {}", path.display())]
    AlreadyTracked {
        /// The offending path.
        path: PathBuf,
    },

    /// Copying a path into the store failed.
    #[error("Failed to copy {} into the store: {source}", path.display())]
    Copy {
        /// Source path that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Writing the manifest document failed. Memory is now ahead of disk.
    #[error("Failed to write manifest {}: {reason}", path.display())]
    Flush {
        /// Manifest document location.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// A group or path targeted by rename/remove does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Incidental I/O error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl TrackerError {
    /// Errors caused by the request rather than by the environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::AlreadyTracked { .. } | Self::NotFound(_))
    }

    /// Errors after which in-memory and on-disk state may disagree.
    #[must_use]
    pub const fn is_critical(&self) -> bool {
        matches!(self, Self::Flush { .. })
    }
}

/// Result alias for the tracking core.
pub type Result<T> = std::result::Result<T, TrackerError>;
