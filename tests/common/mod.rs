#![allow(dead_code)]

use anyhow::Result;
use dot_tracker::TrackerContext;
use dot_tracker::config::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated home directory with a settings file, store and manifest location
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub home_dir: PathBuf,
    pub store_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub config_path: PathBuf,
    pub ctx: TrackerContext,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let home_dir = temp_dir.path().join("home");
        fs::create_dir_all(&home_dir)?;

        let store_dir = home_dir.join("dotfiles");
        let manifest_path = store_dir.join("repo.yml");
        let config_path = home_dir.join(".dot_tracker.toml");

        let config = Config::new(store_dir.clone(), manifest_path.clone());
        config.save(&config_path)?;
        let ctx = TrackerContext::new(Some(config_path.clone()))?;

        Ok(Self {
            temp_dir,
            home_dir,
            store_dir,
            manifest_path,
            config_path,
            ctx,
        })
    }

    /// Write a file under the fake home directory
    pub fn create_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.home_dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Path as a `String` argument for commands
    pub fn arg(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    /// `dtrack` binary wired to this environment
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("dtrack").expect("dtrack binary is built");
        cmd.env("HOME", &self.home_dir)
            .env("DOT_TRACKER_CONFIG", &self.config_path)
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}
