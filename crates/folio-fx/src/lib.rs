//! Core of the Folio portfolio page effects
//!
//! This crate holds everything the page orchestrator decides, without
//! touching the browser:
//! - Navigation state (mobile menu, active section, navbar elevation)
//! - One-shot viewport triggers and counter ramps
//! - Contact form validation and submission outcomes
//! - The single-slot notification model
//! - Decorative effect math (parallax, cursor trail, magnetic hover, typing)
//! - Theme preference persistence
//! - Capability traits for the optional scroll and carousel engines
//!
//! ## Architecture
//!
//! - [`math`]: `Vec2` and `Rect` for pointer geometry
//! - [`transition`]: Easing curves and the counter ramp
//! - [`nav`]: Menu state machine and scroll-position derived navigation
//! - [`trigger`]: Fire-once bookkeeping for observed elements
//! - [`form`]: Field validation and submission outcomes
//! - [`notify`]: Notification slot
//! - [`theme`]: Theme preference and storage seam
//! - [`effects`]: Decorative effect state
//! - [`capability`]: Scroll and carousel engine seams
//! - [`lifecycle`]: Start/stop handles for continuous loops
//! - [`config`]: Every tunable, deserializable from JSON
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Time Abstraction**: Animations take `now_ms` so tests drive the clock
//! 3. **No DOM Markers**: Per-element state lives in registries owned by the caller

pub mod capability;
pub mod config;
pub mod effects;
pub mod error;
pub mod form;
pub mod lifecycle;
pub mod math;
pub mod nav;
pub mod notify;
pub mod theme;
pub mod transition;
pub mod trigger;

// Re-export core types for convenience
pub use capability::{CarouselEngine, CarouselOptions, NoCarousel, ScrollAdapter, ScrollEngine, ScrollTarget};
pub use config::FxConfig;
pub use error::FxError;
pub use form::{ContactSubmission, Field, FieldStatus, SubmitError, ValidationReport};
pub use lifecycle::{EffectHandle, LifecycleState};
pub use math::{Rect, Vec2};
pub use nav::{Elevation, HamburgerGlyph, MenuState, SectionSpan};
pub use notify::{Notification, NotificationId, NotificationSlot, Severity};
pub use theme::{MemoryStore, PreferenceStore, Theme};
pub use transition::{CounterRamp, CounterTarget, Precision};
pub use trigger::{TriggerId, TriggerRegistry, TriggerState};
