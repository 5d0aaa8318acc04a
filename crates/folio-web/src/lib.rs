//! Folio Web - browser shell for the portfolio page effects
//!
//! This crate binds the pure state machines of `folio-fx` to the DOM:
//!
//! - **boot**: DOM-ready detection, configuration and unit installation
//! - **context**: page-wide [`UiContext`](context::UiContext) owning listeners,
//!   observers and frame loops
//! - **observer**: one-shot viewport triggers over IntersectionObserver
//! - **frame**: requestAnimationFrame loops gated by effect handles
//! - **engines**: Lenis / native scrolling and the Swiper carousel
//! - **units**: navigation, counters, reveals, the contact form,
//!   notifications and decorative effects
//!
//! The page loads the generated module and everything boots from
//! `#[wasm_bindgen(start)]`. A handful of functions are exported for inline
//! handlers in the markup; they are no-ops until boot has finished.

pub mod boot;
pub mod context;
pub mod engines;
pub mod frame;
pub mod observer;
pub mod storage;
pub mod units;
pub mod util;

use std::cell::RefCell;
use std::rc::Rc;

use folio_fx::Severity;
use wasm_bindgen::prelude::*;

use context::UiContext;
use util::{log, warn};

thread_local! {
    static CONTEXT: RefCell<Option<Rc<UiContext>>> = const { RefCell::new(None) };
}

fn with_context(name: &str, f: impl FnOnce(&Rc<UiContext>)) {
    let ctx = CONTEXT.with(|slot| slot.borrow().clone());
    match ctx {
        Some(ctx) => f(&ctx),
        None => log(&format!("[folio] {} called before boot; ignored", name)),
    }
}

/// Module entry point
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let booted = boot::when_ready(|ctx| {
        CONTEXT.with(|slot| *slot.borrow_mut() = Some(ctx));
    });
    if let Err(e) = booted {
        warn(&format!("[folio] Not booting: {}", e));
    }
}

/// Show a toast. `severity` is `"success"` or anything else for info.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, severity: Option<String>) {
    let severity = severity
        .as_deref()
        .map(Severity::from_name)
        .unwrap_or_default();
    with_context("showNotification", |ctx| ctx.notify(message, severity));
}

#[wasm_bindgen(js_name = scrollToTop)]
pub fn scroll_to_top() {
    with_context("scrollToTop", |ctx| ctx.scroll.scroll_to_top());
}

/// Flip between light and dark; returns the new theme name
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Option<String> {
    let mut theme = None;
    with_context("toggleTheme", |ctx| {
        theme = Some(units::theme::toggle_theme(ctx).as_str().to_string());
    });
    theme
}

#[wasm_bindgen(js_name = printResume)]
pub fn print_resume() {
    with_context("printResume", |ctx| units::scroll::print(ctx));
}
