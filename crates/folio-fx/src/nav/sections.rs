//! Scroll-position derived navigation: active section and navbar elevation

/// Vertical span of one `section[id]`, in document coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpan {
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open `(top, top + height]` containment
    pub fn contains(&self, y: f64) -> bool {
        y > self.top && y <= self.top + self.height
    }
}

/// Index of the section whose span contains `scroll_y + offset`
///
/// Spans are given in document order; the first match wins.
pub fn active_section(spans: &[SectionSpan], scroll_y: f64, offset: f64) -> Option<usize> {
    let probe = scroll_y + offset;
    spans.iter().position(|span| span.contains(probe))
}

/// Section id a nav link points at, from its `href`
///
/// Accepts `#about`, `/#about` and `https://site/page#about`. Returns `None`
/// for links without a fragment or with an empty one.
pub fn fragment_of(href: &str) -> Option<&str> {
    let (_, fragment) = href.split_once('#')?;
    if fragment.is_empty() {
        None
    } else {
        Some(fragment)
    }
}

/// Navbar shadow depth
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Elevation {
    /// Page at the very top
    Resting,
    /// Page scrolled
    Raised,
}

impl Elevation {
    /// Elevation for a scroll position
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y <= 0.0 {
            Elevation::Resting
        } else {
            Elevation::Raised
        }
    }

    /// CSS `box-shadow` value
    pub fn box_shadow(self) -> &'static str {
        match self {
            Elevation::Resting => "0 4px 6px -1px rgba(0, 0, 0, 0.1)",
            Elevation::Raised => "0 10px 15px -3px rgba(0, 0, 0, 0.1)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionSpan> {
        vec![
            SectionSpan::new(0.0, 800.0),
            SectionSpan::new(800.0, 600.0),
            SectionSpan::new(1400.0, 1000.0),
        ]
    }

    #[test]
    fn test_active_section() {
        let spans = page();
        assert_eq!(active_section(&spans, 0.0, 100.0), Some(0));
        // 750 + 100 = 850 falls in the second span
        assert_eq!(active_section(&spans, 750.0, 100.0), Some(1));
        assert_eq!(active_section(&spans, 1300.0, 100.0), Some(1));
        assert_eq!(active_section(&spans, 1301.0, 100.0), Some(2));
    }

    #[test]
    fn test_no_active_section() {
        let spans = page();
        assert_eq!(active_section(&spans, 5000.0, 100.0), None);
        assert_eq!(active_section(&[], 0.0, 100.0), None);
        // Probe exactly at the first top is outside the half-open span
        assert_eq!(active_section(&spans, -100.0, 100.0), None);
    }

    #[test]
    fn test_overlap_resolves_to_first() {
        let spans = vec![SectionSpan::new(0.0, 1000.0), SectionSpan::new(500.0, 1000.0)];
        assert_eq!(active_section(&spans, 600.0, 0.0), Some(0));
    }

    #[test]
    fn test_fragment_of() {
        assert_eq!(fragment_of("#about"), Some("about"));
        assert_eq!(fragment_of("/#contact"), Some("contact"));
        assert_eq!(fragment_of("https://example.com/cv#skills"), Some("skills"));
        assert_eq!(fragment_of("#"), None);
        assert_eq!(fragment_of("/resume.pdf"), None);
    }

    #[test]
    fn test_elevation() {
        assert_eq!(Elevation::for_scroll(0.0), Elevation::Resting);
        assert_eq!(Elevation::for_scroll(-5.0), Elevation::Resting);
        assert_eq!(Elevation::for_scroll(1.0), Elevation::Raised);
        assert_ne!(Elevation::Resting.box_shadow(), Elevation::Raised.box_shadow());
    }
}
