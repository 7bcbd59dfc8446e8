use super::Config;
use crate::error::{Result, TrackerError};
use std::path::Path;

/// Read, parse and validate a settings file
///
/// # Errors
///
/// [`TrackerError::ConfigMissing`] if the file cannot be read,
/// [`TrackerError::ConfigInvalid`] if its content is unusable.
pub fn parse_config_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| TrackerError::ConfigMissing {
        path: path.to_path_buf(),
        source,
    })?;

    let mut config = parse_config_str(&content).map_err(|reason| TrackerError::ConfigInvalid {
        path: path.to_path_buf(),
        reason,
    })?;

    if let Some(base) = path.parent() {
        config.anchor_to(base);
    }
    Ok(config)
}

/// Parse settings from TOML text
///
/// # Errors
///
/// Returns a description of the problem when the text is not valid TOML,
/// lacks a required key, or a required value is empty.
pub fn parse_config_str(content: &str) -> std::result::Result<Config, String> {
    let config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &Config) -> std::result::Result<(), String> {
    if config.general.dotfiles.as_os_str().is_empty() {
        return Err("general.dotfiles must not be empty".to_string());
    }

    if config.general.repo_file.as_os_str().is_empty() {
        return Err("general.repo_file must not be empty".to_string());
    }

    Ok(())
}
