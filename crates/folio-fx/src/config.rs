//! Orchestrator configuration
//!
//! Every tunable the effect units use lives here. Pages override any subset
//! through a JSON document; omitted fields keep their defaults.
//!
//! ```json
//! { "counter": { "duration_ms": 1500 }, "verbose": true }
//! ```

use serde::{Deserialize, Serialize};

use crate::capability::CarouselOptions;
use crate::error::FxError;

/// Navigation offsets
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Added to the scroll position before matching section spans
    pub section_offset_px: f64,
    /// Subtracted from anchor targets so the fixed navbar does not cover them
    pub anchor_offset_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            section_offset_px: 100.0,
            anchor_offset_px: 90.0,
        }
    }
}

/// Scroll-triggered reveal tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Threshold for card/timeline fade-ins
    pub fade_threshold: f64,
    /// Root margin for card/timeline fade-ins
    pub fade_root_margin: String,
    /// Threshold for skill tag reveals
    pub tag_threshold: f64,
    /// Delay between consecutive skill tags
    pub tag_stagger_ms: u32,
    /// Threshold for skill fill bars
    pub fill_threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            fade_threshold: 0.1,
            fade_root_margin: "0px 0px -50px 0px".to_string(),
            tag_threshold: 0.1,
            tag_stagger_ms: 30,
            fill_threshold: 0.3,
        }
    }
}

/// Stat counter tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: f64,
    pub threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000.0,
            threshold: 0.5,
        }
    }
}

/// Notification timing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// How long a notification stays before its exit animation
    pub visible_ms: u32,
    /// Exit animation length; the node is detached after it
    pub exit_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            visible_ms: 5000,
            exit_ms: 300,
        }
    }
}

/// Contact form submission
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Abort the request after this long
    pub timeout_ms: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self { timeout_ms: 15_000 }
    }
}

/// Typing effect timing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub start_delay_ms: u32,
    pub interval_ms: u32,
    /// Cursor stays this long after the last character
    pub cursor_linger_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 1000,
            interval_ms: 50,
            cursor_linger_ms: 500,
        }
    }
}

/// Pointer-driven effects (cursor trail, magnetic and spotlight hover)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// Effects only run when the viewport is wider than this
    pub breakpoint_px: f64,
    pub trail_markers: usize,
    pub trail_follow: f64,
    pub magnetic_damping: f64,
    pub magnetic_strength: f64,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 768.0,
            trail_markers: 20,
            trail_follow: 0.3,
            magnetic_damping: 0.12,
            magnetic_strength: 0.3,
        }
    }
}

/// Hero parallax
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Content moves this many pixels per scrolled pixel
    pub rate: f64,
    /// Scroll distance over which the content fades out
    pub fade_distance_px: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            rate: 0.5,
            fade_distance_px: 600.0,
        }
    }
}

/// Inertial scroll engine tuning and scroll-to-top behavior
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Engine animation duration in seconds
    pub duration_s: f64,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
    /// Scroll-to-top button appears past this position
    pub top_button_reveal_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_s: 1.35,
            wheel_multiplier: 1.0,
            touch_multiplier: 1.2,
            top_button_reveal_px: 300.0,
        }
    }
}

/// Reading time badge
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingConfig {
    /// Used when the badge carries no `data-wpm`
    pub words_per_minute: u32,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            words_per_minute: 200,
        }
    }
}

/// Full orchestrator configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub counter: CounterConfig,
    pub notification: NotificationConfig,
    pub form: FormConfig,
    pub typing: TypingConfig,
    pub pointer: PointerConfig,
    pub parallax: ParallaxConfig,
    pub scroll: ScrollConfig,
    pub reading: ReadingConfig,
    pub carousel: CarouselOptions,
    /// Log skipped units and other expected conditions
    pub verbose: bool,
}

impl FxConfig {
    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> Result<Self, FxError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}
