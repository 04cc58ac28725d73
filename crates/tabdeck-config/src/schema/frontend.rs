//! Chrome front-end location.

use serde::{Deserialize, Serialize};

/// Where the chrome front-end (tab bar, address bar) is loaded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Dev-server URL. Takes precedence over `index_html` when set.
    pub url: Option<String>,
    /// Bundled front-end entry point, relative to the working directory.
    pub index_html: String,
    /// Allow devtools on the chrome webview. Off in release builds.
    pub devtools: bool,
    /// Open devtools for the chrome webview on start. Implies `devtools`.
    pub open_devtools_on_start: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            url: None,
            index_html: "dist/index.html".into(),
            devtools: cfg!(debug_assertions),
            open_devtools_on_start: false,
        }
    }
}
