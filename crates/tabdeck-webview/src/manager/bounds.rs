use tabdeck_common::Rect;

/// Physical-pixel `Rect` to a wry `Rect`.
pub fn rect_to_wry(rect: Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::PhysicalPosition::new(rect.x as i32, rect.y as i32).into(),
        size: wry::dpi::PhysicalSize::new(rect.width, rect.height).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_physical() {
        let rect = rect_to_wry(Rect {
            x: 128,
            y: 36,
            width: 1152,
            height: 720,
        });
        match rect.position {
            wry::dpi::Position::Physical(pos) => {
                assert_eq!((pos.x, pos.y), (128, 36));
            }
            _ => panic!("expected physical position"),
        }
        match rect.size {
            wry::dpi::Size::Physical(size) => {
                assert_eq!((size.width, size.height), (1152, 720));
            }
            _ => panic!("expected physical size"),
        }
    }
}
