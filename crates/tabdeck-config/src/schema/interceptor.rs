//! Network interceptor (debug image capture) settings.

use serde::{Deserialize, Serialize};

/// Debug capture of image responses over the DevTools protocol.
///
/// Off by default: this is diagnostic tooling and writes files to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InterceptorConfig {
    pub enabled: bool,
    /// DevTools protocol version the channel is pinned to.
    pub protocol_version: String,
    /// Host of the remote debugging endpoint.
    pub devtools_host: String,
    /// Port of the remote debugging endpoint.
    pub devtools_port: u16,
    /// File extensions (without the dot) whose response bodies are captured.
    pub image_extensions: Vec<String>,
    /// Output directory. Defaults to `<data_dir>/captures`.
    pub capture_dir: Option<String>,
}

impl Default for InterceptorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            protocol_version: "1.3".into(),
            devtools_host: "127.0.0.1".into(),
            devtools_port: 9222,
            image_extensions: vec!["png".into()],
            capture_dir: None,
        }
    }
}
