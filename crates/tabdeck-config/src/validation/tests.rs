//! Tests for the full validation pipeline.

use super::*;
use crate::schema::TabdeckConfig;

#[test]
fn default_config_validates() {
    let config = TabdeckConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_nav_ratio() {
    let mut config = TabdeckConfig::default();
    config.layout.nav_ratio = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.nav_ratio"));
}

#[test]
fn catches_head_ratio_above_one() {
    let mut config = TabdeckConfig::default();
    config.layout.head_ratio = 1.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.head_ratio"));
}

#[test]
fn catches_nan_ratio() {
    let mut config = TabdeckConfig::default();
    config.layout.nav_ratio = f64::NAN;
    assert!(validate(&config).is_err());
}

#[test]
fn catches_zero_history_capacity() {
    let mut config = TabdeckConfig::default();
    config.history.capacity = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("history.capacity"));
}

#[test]
fn rejects_single_entry_history() {
    let mut config = TabdeckConfig::default();
    config.history.capacity = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("history.capacity"));

    config.history.capacity = 2;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_dotted_image_extension() {
    let mut config = TabdeckConfig::default();
    config.interceptor.image_extensions = vec![".png".into()];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains(".png"));
}

#[test]
fn catches_enabled_interceptor_without_extensions() {
    let mut config = TabdeckConfig::default();
    config.interceptor.enabled = true;
    config.interceptor.image_extensions.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("image_extensions"));
}

#[test]
fn catches_duplicate_shortcuts() {
    let mut config = TabdeckConfig::default();
    config.shortcuts.open_devtools = "ctrl+f".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("duplicate shortcut"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = TabdeckConfig::default();
    config.history.capacity = 0;
    config.layout.nav_ratio = 2.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("history.capacity"));
    assert!(err.contains("layout.nav_ratio"));
    assert!(err.contains("; "));
}
