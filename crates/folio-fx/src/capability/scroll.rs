//! Smooth-scroll capability
//!
//! The adapter holds exactly one engine for the page lifetime. Everything
//! that scrolls programmatically goes through it, so two callers can never
//! start competing animations on two different engines.

use std::rc::Rc;

use serde::Serialize;

use crate::config::ScrollConfig;

/// Where to scroll
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollTarget {
    Top,
    /// Absolute document offset in pixels
    Y(f64),
}

impl ScrollTarget {
    /// Document offset this target resolves to
    pub fn y(self) -> f64 {
        match self {
            ScrollTarget::Top => 0.0,
            ScrollTarget::Y(y) => y.max(0.0),
        }
    }
}

/// A smooth-scroll implementation
pub trait ScrollEngine {
    /// Engine name, for logs
    fn name(&self) -> &'static str;

    /// Whether this engine animates scrolling itself (and so should own
    /// in-page anchor clicks)
    fn is_inertial(&self) -> bool;

    /// Start scrolling to `target`, replacing any animation in progress
    fn scroll_to(&self, target: ScrollTarget);
}

/// Document offset for an anchor target
///
/// `element_top` is the element's viewport-relative top (bounding rect),
/// `offset` the fixed navbar compensation.
pub fn anchor_scroll_y(element_top: f64, scroll_y: f64, offset: f64) -> f64 {
    (element_top + scroll_y - offset).max(0.0)
}

/// The single smooth-scroll engine of the page
#[derive(Clone)]
pub struct ScrollAdapter {
    engine: Rc<dyn ScrollEngine>,
}

impl ScrollAdapter {
    /// Use `engine` for the page lifetime
    pub fn new(engine: Rc<dyn ScrollEngine>) -> Self {
        Self { engine }
    }

    /// Prefer the inertial engine when one could be constructed
    ///
    /// `native` is only called when `inertial` is `None`.
    pub fn select(
        inertial: Option<Rc<dyn ScrollEngine>>,
        native: impl FnOnce() -> Rc<dyn ScrollEngine>,
    ) -> Self {
        match inertial {
            Some(engine) => Self::new(engine),
            None => Self::new(native()),
        }
    }

    /// Shared handle to the engine
    pub fn engine(&self) -> Rc<dyn ScrollEngine> {
        Rc::clone(&self.engine)
    }

    /// Whether in-page anchor clicks should be intercepted
    pub fn intercepts_anchors(&self) -> bool {
        self.engine.is_inertial()
    }

    pub fn scroll_to_top(&self) {
        self.engine.scroll_to(ScrollTarget::Top);
    }

    /// Scroll so an anchor target sits just below the fixed navbar
    pub fn scroll_to_anchor(&self, element_top: f64, scroll_y: f64, offset: f64) {
        self.engine
            .scroll_to(ScrollTarget::Y(anchor_scroll_y(element_top, scroll_y, offset)));
    }
}

impl std::fmt::Debug for ScrollAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollAdapter")
            .field("engine", &self.engine.name())
            .finish()
    }
}

/// Constructor options for the inertial engine (easing is supplied by the
/// shell as a JS function)
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InertialOptions {
    pub duration: f64,
    pub smooth_wheel: bool,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
}

impl InertialOptions {
    pub fn from_config(config: &ScrollConfig) -> Self {
        Self {
            duration: config.duration_s,
            smooth_wheel: true,
            wheel_multiplier: config.wheel_multiplier,
            touch_multiplier: config.touch_multiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct RecordingEngine {
        inertial: bool,
        calls: RefCell<Vec<ScrollTarget>>,
    }

    impl ScrollEngine for RecordingEngine {
        fn name(&self) -> &'static str {
            "recording"
        }
        fn is_inertial(&self) -> bool {
            self.inertial
        }
        fn scroll_to(&self, target: ScrollTarget) {
            self.calls.borrow_mut().push(target);
        }
    }

    #[test]
    fn test_select_prefers_inertial() {
        let native_built = Cell::new(false);
        let inertial: Rc<dyn ScrollEngine> =
            Rc::new(RecordingEngine { inertial: true, calls: RefCell::new(vec![]) });
        let adapter = ScrollAdapter::select(Some(inertial), || {
            native_built.set(true);
            Rc::new(RecordingEngine { inertial: false, calls: RefCell::new(vec![]) })
        });
        assert!(adapter.intercepts_anchors());
        assert!(!native_built.get());
    }

    #[test]
    fn test_fallback_does_not_intercept() {
        let adapter = ScrollAdapter::select(None, || {
            Rc::new(RecordingEngine { inertial: false, calls: RefCell::new(vec![]) })
        });
        assert!(!adapter.intercepts_anchors());
    }

    #[test]
    fn test_repeated_scroll_to_top_reuses_engine() {
        let engine = Rc::new(RecordingEngine { inertial: true, calls: RefCell::new(vec![]) });
        let adapter = ScrollAdapter::new(engine.clone());
        let button_side = adapter.clone();

        adapter.scroll_to_top();
        button_side.scroll_to_top();
        button_side.scroll_to_top();

        assert_eq!(engine.calls.borrow().len(), 3);
        assert!(Rc::ptr_eq(&adapter.engine(), &button_side.engine()));
    }

    #[test]
    fn test_anchor_offset() {
        assert_eq!(anchor_scroll_y(400.0, 1000.0, 90.0), 1310.0);
        assert_eq!(anchor_scroll_y(10.0, 0.0, 90.0), 0.0);
        assert_eq!(ScrollTarget::Y(-3.0).y(), 0.0);
    }

    #[test]
    fn test_inertial_options_serialize_camel_case() {
        let json = serde_json::to_string(&InertialOptions::from_config(&ScrollConfig::default()))
            .unwrap();
        assert!(json.contains("\"touchMultiplier\":1.2"));
        assert!(json.contains("\"duration\":1.35"));
    }
}
