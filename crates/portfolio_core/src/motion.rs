//! Pure math behind the timed and pointer-driven visual effects.

/// Displayed counter value for a given elapsed time: `floor(progress * target)`
/// with progress clamped to `[0, 1]`.
pub fn counter_value(elapsed_ms: u64, duration_ms: u64, target: u64) -> u64 {
    if duration_ms == 0 {
        return target;
    }
    let progress = (elapsed_ms as f64 / duration_ms as f64).min(1.0);
    (progress * target as f64).floor() as u64
}

/// Parses a stat card's initial display text into a counter target.
///
/// Returns the leading integer and whether a `+` suffix must be preserved
/// through every frame. Text without a leading integer (e.g. "Top 5") yields
/// `None` and is left untouched by the animator.
pub fn parse_stat_target(text: &str) -> Option<(u64, bool)> {
    let trimmed = text.trim();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let target = digits.parse().ok()?;
    Some((target, trimmed.contains('+')))
}

/// Vertical offset of the hero particle layer for a scroll position.
pub fn parallax_offset(scroll_y: i64, factor: f64) -> f64 {
    scroll_y as f64 * factor
}

/// Pointer-driven shift of the hero background, in pixels. The shift is zero
/// at the viewport center and `amplitude / 2` at the edges.
pub fn pointer_shift(x: i64, y: i64, viewport_w: i64, viewport_h: i64, amplitude: f64) -> (f64, f64) {
    if viewport_w <= 0 || viewport_h <= 0 {
        return (0.0, 0.0);
    }
    (
        (x as f64 / viewport_w as f64 - 0.5) * amplitude,
        (y as f64 / viewport_h as f64 - 0.5) * amplitude,
    )
}

/// 3D tilt of a card under the pointer, as `(rotate_x, rotate_y)` degrees.
/// `x`/`y` are pointer coordinates relative to the card's top-left corner.
pub fn card_tilt(width: f64, height: f64, x: f64, y: f64) -> (f64, f64) {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    ((y - center_y) / 10.0, (center_x - x) / 10.0)
}
