//! Range checks on a parsed config. All problems are reported together.

mod helpers;
mod layout;
mod misc;

#[cfg(test)]
mod tests;

use crate::schema::TabdeckConfig;
use tabdeck_common::ConfigError;

/// `Err` lists every offending field, separated by `; `.
pub fn validate(config: &TabdeckConfig) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    layout::validate_layout(&mut errors, config);
    misc::validate_window(&mut errors, config);
    misc::validate_history(&mut errors, config);
    misc::validate_interceptor(&mut errors, config);
    misc::validate_shortcuts(&mut errors, config);

    if errors.is_empty() {
        return Ok(());
    }
    Err(ConfigError::ValidationError(errors.join("; ")))
}
