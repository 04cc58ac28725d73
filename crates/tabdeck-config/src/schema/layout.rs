//! Active-surface placement configuration.

use serde::{Deserialize, Serialize};

/// How the active surface's height is derived from the window height.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum HeightMode {
    /// Surface is as tall as the window and overlaps the header strip.
    #[default]
    FullWindow,
    /// Surface height stops at the bottom edge of the window.
    BelowHeader,
}

/// Chrome strips reserved around the active surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Fraction of the window width reserved for the left sidebar (0.0-1.0).
    pub nav_ratio: f64,
    /// Fraction of the window height left below the header (0.0-1.0).
    pub head_ratio: f64,
    pub height_mode: HeightMode,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            nav_ratio: 0.1,
            head_ratio: 0.95,
            height_mode: HeightMode::FullWindow,
        }
    }
}
