/// Styles applied to the hero while it is still on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroParallax {
    pub content_opacity: f64,
    pub content_shift_px: f64,
    pub chat_shift_px: f64,
}

/// `None` once the hero has scrolled a full viewport out of view; the last
/// applied styles are left in place.
pub fn hero_parallax(scroll_y: f64, viewport_height: f64) -> Option<HeroParallax> {
    if viewport_height <= 0.0 || scroll_y >= viewport_height {
        return None;
    }
    Some(HeroParallax {
        content_opacity: (1.0 - (scroll_y / viewport_height) * 0.7).max(0.3),
        content_shift_px: scroll_y * 0.2,
        chat_shift_px: scroll_y * 0.15,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_hero_is_untouched() {
        let frame = hero_parallax(0.0, 900.0).unwrap();
        assert_eq!(frame.content_opacity, 1.0);
        assert_eq!(frame.content_shift_px, 0.0);
        assert_eq!(frame.chat_shift_px, 0.0);
    }

    #[test]
    fn content_fades_and_shifts_with_scroll() {
        let frame = hero_parallax(500.0, 1000.0).unwrap();
        assert!((frame.content_opacity - 0.65).abs() < 1e-9);
        assert!((frame.content_shift_px - 100.0).abs() < 1e-9);
        assert!((frame.chat_shift_px - 75.0).abs() < 1e-9);
    }

    #[test]
    fn opacity_never_drops_below_floor() {
        let frame = hero_parallax(999.0, 1000.0).unwrap();
        assert!(frame.content_opacity >= 0.3);
    }

    #[test]
    fn stops_after_one_viewport() {
        assert_eq!(hero_parallax(1000.0, 1000.0), None);
        assert_eq!(hero_parallax(10.0, 0.0), None);
    }
}
