//! Global shortcut bindings, active only while the window has focus.

use serde::{Deserialize, Serialize};

/// Format: "Modifier+Key", e.g. "Ctrl+Shift+D".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutConfig {
    pub find_in_page: String,
    pub open_devtools: String,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            find_in_page: "Ctrl+F".into(),
            open_devtools: "Ctrl+Shift+D".into(),
        }
    }
}
