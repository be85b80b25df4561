//! Viewport-intersection math used by the host to drive observation events.

/// Configuration of one visibility observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverConfig {
    /// Fraction of the element that must be visible, in `0..=1`.
    pub threshold: f64,
    /// Contraction of the viewport's bottom edge, in pixels.
    pub bottom_margin_px: i64,
}

impl ObserverConfig {
    /// True when an element at `top` with `height` crosses this observer's
    /// threshold for the given viewport.
    pub fn is_crossed(&self, scroll_y: i64, viewport_h: i64, top: i64, height: i64) -> bool {
        visible_fraction(scroll_y, viewport_h, top, height, self.bottom_margin_px)
            >= self.threshold
    }
}

/// Fraction of an element visible inside the viewport, with the bottom edge
/// pulled up by `bottom_margin_px`.
pub fn visible_fraction(
    scroll_y: i64,
    viewport_h: i64,
    top: i64,
    height: i64,
    bottom_margin_px: i64,
) -> f64 {
    if height <= 0 {
        return 0.0;
    }
    let view_bottom = scroll_y + viewport_h - bottom_margin_px;
    let visible_top = top.max(scroll_y);
    let visible_bottom = (top + height).min(view_bottom);
    (visible_bottom - visible_top).max(0) as f64 / height as f64
}
