use wordpop_types::{Point, Rect, Size};

/// Pick the popup's top-left corner relative to the highlight anchor.
///
/// Below the anchor when the space below fits the popup or beats the space
/// above; otherwise above, bottom-aligned to the anchor's top. The left edge
/// follows the anchor's left edge, clamped so the right edge stays inside
/// the viewport. Both coordinates are clamped non-negative.
pub fn place_popup(anchor: Rect, popup: Size, viewport: Size) -> Point {
    let space_below = viewport.height - anchor.bottom();
    let space_above = anchor.y;

    let y = if space_below >= popup.height || space_below > space_above {
        anchor.bottom()
    } else {
        anchor.y - popup.height
    };

    let x = anchor.x.min(viewport.width - popup.width);

    Point::new(x.max(0.0), y.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size {
        width: 1280.0,
        height: 720.0,
    };

    #[test]
    fn ample_space_below_places_below() {
        let anchor = Rect::new(100.0, 100.0, 60.0, 18.0);
        let popup = Size::new(300.0, 200.0);
        let at = place_popup(anchor, popup, VIEWPORT);
        assert_eq!(at, Point::new(100.0, anchor.bottom()));
    }

    #[test]
    fn near_bottom_with_more_space_above_places_above() {
        let anchor = Rect::new(100.0, 650.0, 60.0, 18.0);
        let popup = Size::new(300.0, 200.0);
        let at = place_popup(anchor, popup, VIEWPORT);
        // Bottom-aligned to the anchor's top.
        assert_eq!(at.y, anchor.y - popup.height);
        assert_eq!(at.y + popup.height, anchor.y);
    }

    #[test]
    fn cramped_both_sides_prefers_the_larger_below() {
        // Popup fits neither side; below (420) beats above (282).
        let anchor = Rect::new(100.0, 282.0, 60.0, 18.0);
        let popup = Size::new(300.0, 500.0);
        let at = place_popup(anchor, popup, VIEWPORT);
        assert_eq!(at.y, anchor.bottom());
    }

    #[test]
    fn right_overflow_is_clamped_to_viewport() {
        let anchor = Rect::new(1200.0, 100.0, 60.0, 18.0);
        let popup = Size::new(300.0, 200.0);
        let at = place_popup(anchor, popup, VIEWPORT);
        assert_eq!(at.x + popup.width, VIEWPORT.width);
    }

    #[test]
    fn coordinates_never_go_negative() {
        // Popup wider than the viewport would push x negative without the clamp.
        let anchor = Rect::new(5.0, 5.0, 60.0, 18.0);
        let popup = Size::new(1500.0, 900.0);
        let at = place_popup(anchor, popup, VIEWPORT);
        assert_eq!(at.x, 0.0);
        assert!(at.y >= 0.0);
    }
}
