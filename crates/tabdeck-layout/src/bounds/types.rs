//! Bounds calculator configuration.

use serde::{Deserialize, Serialize};
use tabdeck_config::schema::{HeightMode, LayoutConfig};

/// Computes where the active surface sits for a given window size.
///
/// The window reserves a sidebar strip on the left and a header strip on
/// top; the surface fills the rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsCalculator {
    /// Fraction of the width given to the sidebar.
    pub nav_ratio: f64,
    /// The header takes `height - floor(height * head_ratio)` pixels.
    pub head_ratio: f64,
    pub height_mode: HeightMode,
}

impl Default for BoundsCalculator {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

impl BoundsCalculator {
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            nav_ratio: config.nav_ratio,
            head_ratio: config.head_ratio,
            height_mode: config.height_mode,
        }
    }
}
