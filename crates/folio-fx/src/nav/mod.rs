//! Navigation state
//!
//! - [`MenuState`]: mobile menu open/closed machine and its hamburger glyph
//! - [`SectionSpan`] / [`active_section`]: which nav link is highlighted
//! - [`Elevation`]: navbar shadow as a function of scroll position

mod menu;
mod sections;

pub use menu::{BarStyle, HamburgerGlyph, MenuEvent, MenuState};
pub use sections::{active_section, fragment_of, Elevation, SectionSpan};
