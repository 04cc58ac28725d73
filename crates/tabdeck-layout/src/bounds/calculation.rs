//! Window size to surface rect.

use tabdeck_common::types::{Rect, WindowSize};
use tabdeck_config::schema::HeightMode;

use super::BoundsCalculator;

impl BoundsCalculator {
    /// Sidebar width: `floor(width * nav_ratio)`.
    pub fn nav_width(&self, width: u32) -> u32 {
        scale_floor(width, self.nav_ratio).min(width)
    }

    /// Header height: `height - floor(height * head_ratio)`.
    pub fn head_offset(&self, height: u32) -> u32 {
        height.saturating_sub(scale_floor(height, self.head_ratio))
    }

    pub fn compute(&self, size: WindowSize) -> Rect {
        let x = self.nav_width(size.width);
        let y = self.head_offset(size.height);
        let height = match self.height_mode {
            HeightMode::FullWindow => size.height,
            HeightMode::BelowHeader => size.height - y,
        };
        Rect {
            x,
            y,
            width: size.width - x,
            height,
        }
    }
}

/// `floor(value * ratio)` in f64, matching the browser's number semantics.
fn scale_floor(value: u32, ratio: f64) -> u32 {
    let scaled = (value as f64 * ratio).floor();
    if scaled.is_finite() && scaled > 0.0 {
        scaled as u32
    } else {
        0
    }
}
