//! Magnetic and spotlight hover

use crate::math::{Rect, Vec2};

/// Offsets below this are treated as settled
const SETTLE_EPSILON: f64 = 0.05;

/// Media query for devices with a precise hovering pointer
pub const FINE_POINTER_QUERY: &str = "(hover: hover) and (pointer: fine)";

/// Device gate shared by the pointer effects
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerGate {
    pub breakpoint_px: f64,
}

impl PointerGate {
    pub fn new(breakpoint_px: f64) -> Self {
        Self { breakpoint_px }
    }

    /// Wide enough viewport (cursor trail)
    pub fn allows_width(&self, viewport_width: f64) -> bool {
        viewport_width > self.breakpoint_px
    }

    /// Wide viewport and a fine hovering pointer (magnetic, spotlight)
    pub fn allows_hover(&self, viewport_width: f64, fine_hover: bool) -> bool {
        fine_hover && self.allows_width(viewport_width)
    }
}

/// Magnetic pull of one element toward the pointer
#[derive(Clone, Debug)]
pub struct MagneticState {
    current: Vec2,
    target: Vec2,
    damping: f64,
    strength: f64,
}

impl MagneticState {
    pub fn new(damping: f64, strength: f64) -> Self {
        Self {
            current: Vec2::ZERO,
            target: Vec2::ZERO,
            damping: damping.clamp(0.0, 1.0),
            strength,
        }
    }

    /// Pointer moved over the element
    ///
    /// The target offset pulls toward the pointer and never leaves the
    /// element's own half extents.
    pub fn pointer_at(&mut self, pointer: Vec2, bounds: Rect) {
        let pull = (pointer - bounds.center()) * self.strength;
        let half = bounds.half_size();
        self.target = Vec2::new(pull.x.clamp(-half.x, half.x), pull.y.clamp(-half.y, half.y));
    }

    /// Pointer left the element
    pub fn release(&mut self) {
        self.target = Vec2::ZERO;
    }

    /// Ease one frame toward the target; returns the rendered offset
    pub fn step(&mut self) -> Vec2 {
        self.current = Vec2::lerp(self.current, self.target, self.damping);
        if (self.target - self.current).length() < SETTLE_EPSILON {
            self.current = self.target;
        }
        self.current
    }

    /// No motion left to render
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    pub fn offset(&self) -> Vec2 {
        self.current
    }

    /// CSS `transform` for the current offset
    pub fn transform(&self) -> String {
        if self.current == Vec2::ZERO {
            String::new()
        } else {
            format!("translate({:.2}px, {:.2}px)", self.current.x, self.current.y)
        }
    }
}

/// Spotlight CSS variables (`--spot-x`, `--spot-y`) for a pointer over `bounds`
pub fn spotlight_vars(pointer: Vec2, bounds: Rect) -> (String, String) {
    let local = bounds.to_local(pointer);
    (format!("{}px", local.x), format!("{}px", local.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate() {
        let gate = PointerGate::new(768.0);
        assert!(!gate.allows_width(768.0));
        assert!(gate.allows_width(1024.0));
        assert!(!gate.allows_hover(1024.0, false));
        assert!(gate.allows_hover(1024.0, true));
    }

    #[test]
    fn test_magnetic_eases_toward_pointer() {
        let mut magnet = MagneticState::new(0.12, 0.3);
        let bounds = Rect::new(0.0, 0.0, 100.0, 40.0);
        magnet.pointer_at(Vec2::new(100.0, 20.0), bounds);

        let first = magnet.step();
        // Target is (50 * 0.3, 0); one step covers 12% of it
        assert!((first.x - 1.8).abs() < 1e-9);
        assert_eq!(first.y, 0.0);

        for _ in 0..200 {
            magnet.step();
        }
        assert!(magnet.is_settled());
        assert!((magnet.offset().x - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_magnetic_stays_within_bounds() {
        let mut magnet = MagneticState::new(1.0, 5.0);
        let bounds = Rect::new(0.0, 0.0, 100.0, 40.0);
        magnet.pointer_at(Vec2::new(400.0, -300.0), bounds);
        let offset = magnet.step();
        assert_eq!(offset, Vec2::new(50.0, -20.0));
    }

    #[test]
    fn test_magnetic_release_resets() {
        let mut magnet = MagneticState::new(0.5, 0.3);
        magnet.pointer_at(Vec2::new(100.0, 20.0), Rect::new(0.0, 0.0, 100.0, 40.0));
        magnet.step();
        magnet.release();
        for _ in 0..100 {
            magnet.step();
        }
        assert_eq!(magnet.offset(), Vec2::ZERO);
        assert_eq!(magnet.transform(), "");
    }

    #[test]
    fn test_spotlight_vars() {
        let (x, y) = spotlight_vars(Vec2::new(130.0, 75.0), Rect::new(100.0, 50.0, 300.0, 200.0));
        assert_eq!(x, "30px");
        assert_eq!(y, "25px");
    }
}
