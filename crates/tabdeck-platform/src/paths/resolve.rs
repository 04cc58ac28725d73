use std::path::PathBuf;

use tabdeck_common::PlatformError;

pub(super) const APP_NAME: &str = "tabdeck";

fn base(dir: Option<PathBuf>, what: &str) -> Result<PathBuf, PlatformError> {
    dir.map(|p| p.join(APP_NAME))
        .ok_or_else(|| PlatformError::Dirs(format!("could not determine {what} directory")))
}

/// Platform configuration directory.
///
/// - macOS: `~/Library/Application Support/tabdeck`
/// - Linux: `$XDG_CONFIG_HOME/tabdeck` (defaults to `~/.config/tabdeck`)
/// - Windows: `%APPDATA%\tabdeck`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    base(dirs::config_dir(), "config")
}

/// Platform data directory. Surface partitions and captures live under it.
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    base(dirs::data_dir(), "data")
}

pub fn cache_dir() -> Result<PathBuf, PlatformError> {
    base(dirs::cache_dir(), "cache")
}

/// `data_dir()/logs`
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// Root of the per-tab browsing storage: `data_dir()/partitions`.
pub fn partitions_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("partitions"))
}

/// Default destination for intercepted response bodies: `data_dir()/captures`.
pub fn capture_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("captures"))
}
