//! Layout configuration validation.

use crate::schema::TabdeckConfig;

use super::helpers::validate_ratio;

/// Validate the chrome ratios used by the bounds calculator.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &TabdeckConfig) {
    validate_ratio(errors, "layout.nav_ratio", config.layout.nav_ratio);
    validate_ratio(errors, "layout.head_ratio", config.layout.head_ratio);
}
