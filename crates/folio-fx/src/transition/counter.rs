//! Stat counter ramp
//!
//! A counter target is parsed from the stat's own text (`"250+"`, `"98%"`,
//! `"4.5"`) or from an explicit value. The ramp samples a cubic ease-out
//! and always lands exactly on the target's original text.

use super::ease_out_cubic;

/// How ramp values are displayed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precision {
    /// Floored whole numbers
    Integer,
    /// One decimal place, floored
    OneDecimal,
}

/// A numeric goal bound to a stat display
#[derive(Clone, Debug, PartialEq)]
pub struct CounterTarget {
    pub value: f64,
    pub precision: Precision,
    /// Text before the number (e.g. `$`)
    pub prefix: String,
    /// Text after the number (e.g. `+`, `%`)
    pub suffix: String,
    /// The number exactly as the page wrote it
    literal: String,
}

impl CounterTarget {
    /// Build a target from a bare value
    ///
    /// Non-finite values cannot be ramped; they degrade to `0.0` shown with
    /// one decimal.
    pub fn from_value(value: f64) -> Self {
        if !value.is_finite() {
            return Self {
                value: 0.0,
                precision: Precision::OneDecimal,
                prefix: String::new(),
                suffix: String::new(),
                literal: "0.0".to_string(),
            };
        }
        let precision = if value.fract() == 0.0 {
            Precision::Integer
        } else {
            Precision::OneDecimal
        };
        Self {
            value,
            precision,
            prefix: String::new(),
            suffix: String::new(),
            literal: format_value(value, precision),
        }
    }

    /// Parse stat text such as `"250+"` or `"$1,200"`
    ///
    /// Returns `None` when the text holds no number.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let start = text.find(|c: char| c.is_ascii_digit())?;
        let rest = &text[start..];
        let end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
            .unwrap_or(rest.len());
        let literal = rest[..end].trim_end_matches(['.', ',']);
        let value: f64 = literal.replace(',', "").parse().ok()?;
        let precision = if literal.contains('.') {
            Precision::OneDecimal
        } else {
            Precision::Integer
        };

        Some(Self {
            value,
            precision,
            prefix: text[..start].to_string(),
            suffix: rest[literal.len()..].to_string(),
            literal: literal.to_string(),
        })
    }

    /// Text shown mid-ramp (suffix is restored on the final frame)
    pub fn ramp_text(&self, value: f64) -> String {
        format!("{}{}", self.prefix, format_value(value, self.precision))
    }

    /// Text shown once the ramp completes
    pub fn final_text(&self) -> String {
        format!("{}{}{}", self.prefix, self.literal, self.suffix)
    }
}

fn format_value(value: f64, precision: Precision) -> String {
    match precision {
        Precision::Integer => format!("{}", value.floor() as i64),
        Precision::OneDecimal => format!("{:.1}", (value * 10.0).floor() / 10.0),
    }
}

/// One running counter animation
#[derive(Clone, Debug)]
pub struct CounterRamp {
    pub target: CounterTarget,
    pub start_ms: f64,
    pub duration_ms: f64,
}

/// What to display on a given frame
#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

impl CounterRamp {
    /// Start a ramp at `start_ms`
    pub fn new(target: CounterTarget, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            target,
            start_ms,
            duration_ms,
        }
    }

    /// Get the progress (0.0 to 1.0)
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Check if the ramp is complete
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Displayed numeric value; exactly the target once complete
    pub fn value_at(&self, now_ms: f64) -> f64 {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            self.target.value
        } else {
            self.target.value * ease_out_cubic(t)
        }
    }

    /// Sample the ramp for one animation frame
    pub fn frame(&self, now_ms: f64) -> CounterFrame {
        if self.is_complete(now_ms) {
            CounterFrame {
                text: self.target.final_text(),
                done: true,
            }
        } else {
            CounterFrame {
                text: self.target.ramp_text(self.value_at(now_ms)),
                done: false,
            }
        }
    }
}
