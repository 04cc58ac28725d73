//! Decoding and persisting intercepted response bodies.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Deserialize;

use crate::error::DevToolsError;

/// Result of `Network.getResponseBody`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub body: String,
    #[serde(default)]
    pub base64_encoded: bool,
}

impl ResponseBody {
    pub fn decode(&self) -> Result<Vec<u8>, DevToolsError> {
        if self.base64_encoded {
            STANDARD
                .decode(self.body.as_bytes())
                .map_err(|e| DevToolsError::Decode(e.to_string()))
        } else {
            Ok(self.body.clone().into_bytes())
        }
    }
}

/// Write `bytes` to `dir/name`, creating `dir` if needed.
pub async fn write_capture(dir: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf, DevToolsError> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(name);
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}
