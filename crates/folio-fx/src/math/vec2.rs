//! 2D vector for pointer positions and offsets

use serde::{Deserialize, Serialize};

/// 2D vector in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Length of the vector
    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Move `t` of the way from `a` to `b`
    #[inline]
    pub fn lerp(a: Vec2, b: Vec2, t: f64) -> Vec2 {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, s: f64) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_operations() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);

        let sum = a + b;
        assert!((sum.x - 4.0).abs() < 1e-9);
        assert!((sum.y - 6.0).abs() < 1e-9);

        let diff = b - a;
        assert!((diff.x - 2.0).abs() < 1e-9);

        let scaled = a * 3.0;
        assert!((scaled.y - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_lerp() {
        let mid = Vec2::lerp(Vec2::ZERO, Vec2::new(10.0, -10.0), 0.3);
        assert!((mid.x - 3.0).abs() < 1e-9);
        assert!((mid.y + 3.0).abs() < 1e-9);
        assert!((Vec2::new(3.0, 4.0).length() - 5.0).abs() < 1e-9);
    }
}
