//! Error types for the page orchestrator
//!
//! Every error here is local to one effect unit. None of them is fatal to
//! the page; the shell logs and moves on.

use core::fmt;

/// Errors an effect unit can report while installing or running
#[derive(Clone, Debug, PartialEq)]
pub enum FxError {
    /// An element the unit needs is not in the document
    MissingElement(&'static str),

    /// The unit is disabled for this device (breakpoint or pointer capability)
    Unsupported(&'static str),

    /// Preference storage is unavailable or rejected the write
    Storage(String),

    /// Configuration could not be parsed
    Config(String),

    /// A JavaScript exception surfaced through a DOM call
    Js(String),
}

impl FxError {
    /// Whether this error just means "nothing to do here"
    ///
    /// Missing markup and unsupported devices are expected on many pages
    /// and are only worth logging in verbose mode.
    pub fn is_skip(&self) -> bool {
        matches!(self, FxError::MissingElement(_) | FxError::Unsupported(_))
    }
}

impl fmt::Display for FxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FxError::MissingElement(selector) => write!(f, "Missing element: {}", selector),
            FxError::Unsupported(reason) => write!(f, "Unsupported: {}", reason),
            FxError::Storage(msg) => write!(f, "Storage error: {}", msg),
            FxError::Config(msg) => write!(f, "Config error: {}", msg),
            FxError::Js(msg) => write!(f, "JS error: {}", msg),
        }
    }
}

impl std::error::Error for FxError {}

impl From<serde_json::Error> for FxError {
    fn from(e: serde_json::Error) -> Self {
        FxError::Config(e.to_string())
    }
}
