//! Cursor trail
//!
//! A fixed pool of markers forms a lagging chain: the lead marker sits on
//! the pointer and every other marker moves toward where its predecessor
//! was on the previous frame.

use crate::math::Vec2;

/// Marker size in pixels (markers are centered on their position)
pub const MARKER_SIZE_PX: f64 = 8.0;

/// Trail marker positions
#[derive(Clone, Debug)]
pub struct CursorTrail {
    positions: Vec<Vec2>,
    follow: f64,
}

impl CursorTrail {
    /// Create a trail of `markers` markers, all at the origin
    pub fn new(markers: usize, follow: f64) -> Self {
        Self {
            positions: vec![Vec2::ZERO; markers],
            follow: follow.clamp(0.0, 1.0),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Advance one frame toward `pointer`
    pub fn step(&mut self, pointer: Vec2) {
        let previous = self.positions.clone();
        for (i, position) in self.positions.iter_mut().enumerate() {
            *position = if i == 0 {
                pointer
            } else {
                Vec2::lerp(*position, previous[i - 1], self.follow)
            };
        }
    }

    /// Current marker positions, lead first
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Scale of marker `index`: the chain tapers toward the tail
    pub fn scale(&self, index: usize) -> f64 {
        let n = self.positions.len();
        if n == 0 || index >= n {
            return 0.0;
        }
        (n - index) as f64 / n as f64
    }
}
