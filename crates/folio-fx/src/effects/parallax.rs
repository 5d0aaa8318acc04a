//! Hero parallax

use crate::config::ParallaxConfig;

/// Hero content styling for one scroll position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrame {
    pub translate_y: f64,
    pub opacity: f64,
}

impl ParallaxFrame {
    /// Frame for `scroll_y`, or `None` once the hero has scrolled out
    /// (`scroll_y >= viewport_height`)
    pub fn at(scroll_y: f64, viewport_height: f64, config: &ParallaxConfig) -> Option<Self> {
        if scroll_y >= viewport_height {
            return None;
        }
        let scroll_y = scroll_y.max(0.0);
        let opacity = if config.fade_distance_px > 0.0 {
            1.0 - scroll_y / config.fade_distance_px
        } else {
            1.0
        };
        Some(Self {
            translate_y: scroll_y * config.rate,
            opacity: opacity.clamp(0.0, 1.0),
        })
    }

    /// CSS `transform`
    pub fn transform(&self) -> String {
        format!("translateY({}px)", self.translate_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_in_range() {
        let config = ParallaxConfig::default();
        let frame = ParallaxFrame::at(300.0, 900.0, &config).unwrap();
        assert_eq!(frame.translate_y, 150.0);
        assert!((frame.opacity - 0.5).abs() < 1e-9);
        assert_eq!(frame.transform(), "translateY(150px)");
    }

    #[test]
    fn test_parallax_opacity_clamped() {
        let config = ParallaxConfig::default();
        let frame = ParallaxFrame::at(800.0, 900.0, &config).unwrap();
        assert_eq!(frame.opacity, 0.0);
    }

    #[test]
    fn test_parallax_out_of_range() {
        let config = ParallaxConfig::default();
        assert!(ParallaxFrame::at(900.0, 900.0, &config).is_none());
        assert!(ParallaxFrame::at(2000.0, 900.0, &config).is_none());
    }

    #[test]
    fn test_parallax_at_top() {
        let frame = ParallaxFrame::at(0.0, 900.0, &ParallaxConfig::default()).unwrap();
        assert_eq!(frame.translate_y, 0.0);
        assert_eq!(frame.opacity, 1.0);
    }
}
