// Scroll reveal trigger line.

/// Fraction of the viewport height an element's top must rise above.
pub const REVEAL_TRIGGER_RATIO: f64 = 0.85;

#[inline]
pub fn trigger_line(viewport_height: f64) -> f64 {
    viewport_height * REVEAL_TRIGGER_RATIO
}

#[inline]
pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < trigger_line(viewport_height)
}
