//! Browser-native smooth scrolling

use folio_fx::{ScrollEngine, ScrollTarget};
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

/// `window.scrollTo({ behavior: "smooth" })`
pub struct NativeScroll {
    window: Window,
}

impl NativeScroll {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ScrollEngine for NativeScroll {
    fn name(&self) -> &'static str {
        "native"
    }

    fn is_inertial(&self) -> bool {
        false
    }

    fn scroll_to(&self, target: ScrollTarget) {
        let options = ScrollToOptions::new();
        options.set_top(target.y());
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
