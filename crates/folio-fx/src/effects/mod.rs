//! Decorative effect state
//!
//! Each effect here is independent and holds no reference to another.

pub mod hover;
pub mod parallax;
pub mod reading;
pub mod reveal;
pub mod trail;
pub mod typing;

pub use hover::{MagneticState, PointerGate};
pub use parallax::ParallaxFrame;
pub use reading::{reading_minutes, reading_time_label, word_count};
pub use reveal::{skill_level, stagger_delay_ms, RevealStyle, ScrollTopHover, ScrollTopVisibility};
pub use trail::CursorTrail;
pub use typing::{TypingStep, Typewriter};
