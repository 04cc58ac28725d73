//! Reading `config.toml` from disk.
//!
//! An explicit path is read as-is. The default location lives under the
//! platform config dir (`~/.config/tabdeck` on Linux,
//! `~/Library/Application Support/tabdeck` on macOS) and is seeded with a
//! commented template the first time tabdeck starts.

mod template;


use std::path::{Path, PathBuf};

use tabdeck_common::ConfigError;
use tracing::{debug, info, warn};

use crate::schema::TabdeckConfig;
use crate::validation;

const APP_DIR: &str = "tabdeck";
const FILE_NAME: &str = "config.toml";

fn io_failure(action: &str, path: &Path, err: std::io::Error) -> ConfigError {
    ConfigError::ParseError(format!("{action} {}: {err}", path.display()))
}

/// Where tabdeck keeps its config when no path is given.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    match dirs::config_dir() {
        Some(base) => Ok(base.join(APP_DIR).join(FILE_NAME)),
        None => Err(ConfigError::ParseError(
            "platform has no config directory".into(),
        )),
    }
}

/// Write the commented template to `path`, creating parent dirs.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| io_failure("cannot create", dir, e))?;
    }
    std::fs::write(path, template::default_config_toml())
        .map_err(|e| io_failure("cannot write", path, e))?;
    info!(path = %path.display(), "wrote config template");
    Ok(())
}

/// Parse `path` into a config. Missing sections and fields take their
/// defaults. Out-of-range values only produce a warning here; callers that
/// need a checked config run [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<TabdeckConfig, ConfigError> {
    let text =
        std::fs::read_to_string(path).map_err(|e| io_failure("cannot read", path, e))?;
    let config = toml::from_str::<TabdeckConfig>(&text)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    if let Err(problem) = validation::validate(&config) {
        warn!(path = %path.display(), "config has invalid values: {problem}");
    }
    debug!(path = %path.display(), "config parsed");
    Ok(config)
}

/// Load from [`default_config_path`], seeding the template on first run.
pub fn load_default() -> Result<TabdeckConfig, ConfigError> {
    let path = default_config_path()?;
    if path.is_file() {
        return load_from_path(&path);
    }
    create_default_config(&path)?;
    Ok(TabdeckConfig::default())
}
