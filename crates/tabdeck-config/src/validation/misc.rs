//! Validation for the smaller config sections.

use crate::schema::TabdeckConfig;

use super::helpers::validate_range;

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &TabdeckConfig) {
    validate_range(
        errors,
        "window.width",
        config.window.width as usize,
        200,
        16384,
    );
    validate_range(
        errors,
        "window.height",
        config.window.height as usize,
        200,
        16384,
    );
}

pub(crate) fn validate_history(errors: &mut Vec<String>, config: &TabdeckConfig) {
    validate_range(
        errors,
        "history.capacity",
        config.history.capacity,
        2,
        10_000,
    );
}

pub(crate) fn validate_interceptor(errors: &mut Vec<String>, config: &TabdeckConfig) {
    let interceptor = &config.interceptor;
    if interceptor.enabled && interceptor.image_extensions.is_empty() {
        errors.push("interceptor.image_extensions must not be empty when enabled".into());
    }
    for ext in &interceptor.image_extensions {
        if ext.is_empty() || ext.starts_with('.') || ext.contains('/') {
            errors.push(format!(
                "interceptor.image_extensions entry '{ext}' must be a bare extension like \"png\""
            ));
        }
    }
    if interceptor.devtools_port == 0 {
        errors.push("interceptor.devtools_port must not be 0".into());
    }
}

pub(crate) fn validate_shortcuts(errors: &mut Vec<String>, config: &TabdeckConfig) {
    let shortcuts = &config.shortcuts;
    for (name, value) in [
        ("shortcuts.find_in_page", &shortcuts.find_in_page),
        ("shortcuts.open_devtools", &shortcuts.open_devtools),
    ] {
        if value.trim().is_empty() {
            errors.push(format!("{name} must not be empty"));
        }
    }
    if shortcuts.find_in_page.eq_ignore_ascii_case(&shortcuts.open_devtools) {
        errors.push(format!(
            "duplicate shortcut '{}' bound to both find_in_page and open_devtools",
            shortcuts.find_in_page
        ));
    }
}
