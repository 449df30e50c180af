//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/repo-onboard/`, `~/.cache/repo-onboard/`
//! - macOS: `~/Library/Application Support/repo-onboard/`, `~/Library/Caches/repo-onboard/`
//! - Windows: `%APPDATA%\repo-onboard\`, `%LOCALAPPDATA%\repo-onboard\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "repo-onboard";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to the persisted local storage file
pub fn local_storage_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("storage.toml"))
}
