//! Mobile menu state machine

/// Inputs to the menu machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// Hamburger clicked or activated with Enter/Space
    Activate,
    /// Any nav link clicked
    LinkClicked,
}

/// Mobile menu state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    expanded: bool,
}

impl MenuState {
    /// Closed menu
    pub const fn closed() -> Self {
        Self { expanded: false }
    }

    /// Whether the menu is open
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Apply an event; returns true if the state changed
    pub fn apply(&mut self, event: MenuEvent) -> bool {
        let next = match event {
            MenuEvent::Activate => !self.expanded,
            MenuEvent::LinkClicked => false,
        };
        let changed = next != self.expanded;
        self.expanded = next;
        changed
    }

    /// Value for the hamburger's `aria-expanded` attribute
    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }

    /// Hamburger glyph for the current state
    pub fn glyph(&self) -> HamburgerGlyph {
        HamburgerGlyph::for_expanded(self.expanded)
    }
}

/// Style of one hamburger bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarStyle {
    /// CSS `transform`; empty clears the inline style
    pub transform: &'static str,
    /// CSS `opacity`
    pub opacity: &'static str,
}

/// The three hamburger bars, rendered as bars (closed) or an X (open)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HamburgerGlyph {
    pub bars: [BarStyle; 3],
}

impl HamburgerGlyph {
    const BARS: HamburgerGlyph = HamburgerGlyph {
        bars: [
            BarStyle { transform: "", opacity: "1" },
            BarStyle { transform: "", opacity: "1" },
            BarStyle { transform: "", opacity: "1" },
        ],
    };

    const CROSS: HamburgerGlyph = HamburgerGlyph {
        bars: [
            BarStyle { transform: "rotate(45deg) translate(5px, 5px)", opacity: "1" },
            BarStyle { transform: "", opacity: "0" },
            BarStyle { transform: "rotate(-45deg) translate(7px, -6px)", opacity: "1" },
        ],
    };

    /// Glyph as a pure function of `expanded`
    pub fn for_expanded(expanded: bool) -> Self {
        if expanded {
            Self::CROSS
        } else {
            Self::BARS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_toggles() {
        let mut menu = MenuState::closed();
        assert!(menu.apply(MenuEvent::Activate));
        assert!(menu.is_expanded());
        assert_eq!(menu.aria_expanded(), "true");

        assert!(menu.apply(MenuEvent::Activate));
        assert!(!menu.is_expanded());
    }

    #[test]
    fn test_link_click_closes() {
        let mut menu = MenuState::closed();
        menu.apply(MenuEvent::Activate);
        assert!(menu.apply(MenuEvent::LinkClicked));
        assert_eq!(menu.aria_expanded(), "false");

        // Already closed
        assert!(!menu.apply(MenuEvent::LinkClicked));
    }

    #[test]
    fn test_glyph_follows_state() {
        let mut menu = MenuState::closed();
        assert_eq!(menu.glyph(), HamburgerGlyph::for_expanded(false));
        assert_eq!(menu.glyph().bars[1].opacity, "1");

        menu.apply(MenuEvent::Activate);
        let glyph = menu.glyph();
        assert_eq!(glyph.bars[0].transform, "rotate(45deg) translate(5px, 5px)");
        assert_eq!(glyph.bars[1].opacity, "0");
        assert_eq!(glyph.bars[2].transform, "rotate(-45deg) translate(7px, -6px)");
    }
}
