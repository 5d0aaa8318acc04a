//! Scroll reveal styling, skill bars and the scroll-to-top button

/// Inline styles for an element revealed on scroll
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStyle {
    /// Cards and timeline items slide up and fade in
    FadeUp,
    /// Skill tags pop in
    Pop,
}

impl RevealStyle {
    /// `(opacity, transform, transition)` before the reveal
    pub fn hidden(self) -> (&'static str, &'static str, &'static str) {
        match self {
            RevealStyle::FadeUp => ("0", "translateY(30px)", "opacity 0.6s ease, transform 0.6s ease"),
            RevealStyle::Pop => ("0", "scale(0.8)", "opacity 0.3s ease, transform 0.3s ease"),
        }
    }

    /// `(opacity, transform)` after the reveal
    pub fn shown(self) -> (&'static str, &'static str) {
        match self {
            RevealStyle::FadeUp => ("1", "translateY(0)"),
            RevealStyle::Pop => ("1", "scale(1)"),
        }
    }
}

/// Delay before revealing the `index`-th item of a staggered group
pub fn stagger_delay_ms(index: usize, stagger_ms: u32) -> u32 {
    (index as u32).saturating_mul(stagger_ms)
}

/// Parse a `data-level` attribute into a clamped percentage
pub fn skill_level(attr: &str) -> Option<f64> {
    let value: f64 = attr.trim().trim_end_matches('%').trim().parse().ok()?;
    if value.is_finite() {
        Some(value.clamp(0.0, 100.0))
    } else {
        None
    }
}

/// Scroll-to-top button visibility
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTopVisibility {
    Hidden,
    Visible,
}

impl ScrollTopVisibility {
    /// Visible strictly past `reveal_px`
    pub fn for_scroll(scroll_y: f64, reveal_px: f64) -> Self {
        if scroll_y > reveal_px {
            ScrollTopVisibility::Visible
        } else {
            ScrollTopVisibility::Hidden
        }
    }

    /// `(opacity, visibility)`
    pub fn styles(self) -> (&'static str, &'static str) {
        match self {
            ScrollTopVisibility::Hidden => ("0", "hidden"),
            ScrollTopVisibility::Visible => ("1", "visible"),
        }
    }
}

/// Hover state of the scroll-to-top button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTopHover {
    Lifted,
    Resting,
}

impl ScrollTopHover {
    /// `(transform, box-shadow)`
    pub fn styles(self) -> (&'static str, &'static str) {
        match self {
            ScrollTopHover::Lifted => (
                "translateY(-5px) scale(1.1)",
                "0 10px 15px -3px rgba(0, 0, 0, 0.2)",
            ),
            ScrollTopHover::Resting => (
                "translateY(0) scale(1)",
                "0 4px 6px -1px rgba(0, 0, 0, 0.1)",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level() {
        assert_eq!(skill_level("85"), Some(85.0));
        assert_eq!(skill_level(" 90% "), Some(90.0));
        assert_eq!(skill_level("140"), Some(100.0));
        assert_eq!(skill_level("-5"), Some(0.0));
        assert_eq!(skill_level("expert"), None);
        assert_eq!(skill_level("NaN"), None);
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger_delay_ms(0, 30), 0);
        assert_eq!(stagger_delay_ms(4, 30), 120);
    }

    #[test]
    fn test_scroll_top_visibility() {
        assert_eq!(ScrollTopVisibility::for_scroll(300.0, 300.0), ScrollTopVisibility::Hidden);
        assert_eq!(ScrollTopVisibility::for_scroll(301.0, 300.0), ScrollTopVisibility::Visible);
        assert_eq!(ScrollTopVisibility::Visible.styles(), ("1", "visible"));
    }

    #[test]
    fn test_scroll_top_hover() {
        let (transform, shadow) = ScrollTopHover::Lifted.styles();
        assert_eq!(transform, "translateY(-5px) scale(1.1)");
        assert!(shadow.contains("0.2"));
        assert_eq!(ScrollTopHover::Resting.styles().0, "translateY(0) scale(1)");
    }

    #[test]
    fn test_reveal_styles() {
        assert_eq!(RevealStyle::FadeUp.hidden().1, "translateY(30px)");
        assert_eq!(RevealStyle::Pop.shown(), ("1", "scale(1)"));
    }
}
