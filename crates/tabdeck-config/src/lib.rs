//! `config.toml` for the tabdeck host.
//!
//! Every section and field has a default, so an empty file (or none at all)
//! yields a working setup. [`load_config`] parses and then validates.
//!
//! ```rust,no_run
//! let config = tabdeck_config::load_config(None).expect("config");
//! assert!(config.history.capacity >= 1);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{TabdeckConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use tabdeck_common::ConfigError;

/// Load config from `path`, or from the platform default location.
///
/// The default location gets a commented template written to it when no
/// file exists yet. An explicit path must exist.
pub fn load_config(path: Option<&Path>) -> Result<TabdeckConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            toml_loader::load_from_path(path)?
        }
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Pretty JSON dump of the effective config, logged at debug level on start.
pub fn config_to_json(config: &TabdeckConfig) -> String {
    match serde_json::to_string_pretty(config) {
        Ok(json) => json,
        Err(e) => serde_json::json!({ "error": e.to_string() }).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = TabdeckConfig::default();
        let json = config_to_json(&config);
        for section in [
            "window",
            "frontend",
            "layout",
            "history",
            "surface",
            "interceptor",
            "shortcuts",
            "logging",
        ] {
            assert!(json.contains(&format!("\"{section}\"")), "missing {section}");
        }
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn explicit_missing_path_is_file_not_found() {
        let err = load_config(Some(Path::new("/tmp/tabdeck-missing-dir/config.toml")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn explicit_path_with_invalid_values_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[history]\ncapacity = 0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = TabdeckConfig::default();
        let json = config_to_json(&config);
        let parsed: TabdeckConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.history.capacity, 100);
        assert_eq!(parsed.shortcuts.open_devtools, "Ctrl+Shift+D");
    }
}
