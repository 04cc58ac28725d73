//! Per-tab surface settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Custom user agent for tab surfaces.
    pub user_agent: Option<String>,
    /// Allow devtools on tab surfaces.
    pub devtools: bool,
    /// Root for per-tab storage partitions. Defaults to `<data_dir>/partitions`.
    pub partition_dir: Option<String>,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            user_agent: None,
            devtools: cfg!(debug_assertions),
            partition_dir: None,
        }
    }
}
