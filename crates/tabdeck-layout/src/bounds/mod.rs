mod calculation;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use tabdeck_common::types::{Rect, WindowSize};
    use tabdeck_config::schema::{HeightMode, LayoutConfig};

    fn rect(x: u32, y: u32, width: u32, height: u32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn default_window_size() {
        let calc = BoundsCalculator::default();
        assert_eq!(
            calc.compute(WindowSize::new(1280, 720)),
            rect(128, 36, 1152, 720)
        );
    }

    #[test]
    fn fractional_products_are_floored() {
        let calc = BoundsCalculator::default();
        // 1366 * 0.1 = 136.6, 768 * 0.95 = 729.6
        assert_eq!(
            calc.compute(WindowSize::new(1366, 768)),
            rect(136, 39, 1230, 768)
        );
    }

    #[test]
    fn head_offset_is_height_minus_floored_share() {
        let calc = BoundsCalculator::default();
        assert_eq!(calc.head_offset(720), 36);
        assert_eq!(calc.head_offset(768), 39);
        assert_eq!(calc.nav_width(1280), 128);
    }

    #[test]
    fn full_window_height_overlaps_header() {
        let calc = BoundsCalculator::default();
        let r = calc.compute(WindowSize::new(1280, 720));
        assert_eq!(r.height, 720);
        assert!(r.y + r.height > 720);
    }

    #[test]
    fn below_header_mode_fits_in_window() {
        let calc = BoundsCalculator::from_config(&LayoutConfig {
            height_mode: HeightMode::BelowHeader,
            ..Default::default()
        });
        let r = calc.compute(WindowSize::new(1280, 720));
        assert_eq!(r, rect(128, 36, 1152, 684));
        assert_eq!(r.y + r.height, 720);
    }

    #[test]
    fn tiny_window_keeps_full_width() {
        let calc = BoundsCalculator::default();
        assert_eq!(calc.compute(WindowSize::new(7, 10)), rect(0, 1, 7, 10));
    }

    #[test]
    fn zero_size_window() {
        let calc = BoundsCalculator::default();
        assert_eq!(calc.compute(WindowSize::new(0, 0)), rect(0, 0, 0, 0));
    }

    #[test]
    fn custom_ratios() {
        let calc = BoundsCalculator::from_config(&LayoutConfig {
            nav_ratio: 0.25,
            head_ratio: 0.5,
            height_mode: HeightMode::FullWindow,
        });
        assert_eq!(
            calc.compute(WindowSize::new(1000, 800)),
            rect(250, 400, 750, 800)
        );
    }

    #[test]
    fn calculator_serializes() {
        let json = serde_json::to_string(&BoundsCalculator::default()).unwrap();
        assert!(json.contains("\"full_window\""));
    }
}
