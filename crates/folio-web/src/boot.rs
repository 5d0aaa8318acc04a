//! Page boot
//!
//! Waits for the DOM, builds the [`UiContext`], selects engines and installs
//! every unit.

use std::rc::Rc;

use folio_fx::{FxConfig, FxError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

use crate::context::UiContext;
use crate::engines::{select_carousel, select_scroll};
use crate::storage::open_preferences;
use crate::units::{install_all, InstallReport};
use crate::util::{log, warn, JsResultExt};

/// Element holding an optional JSON configuration override
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Boot now if the DOM is parsed, otherwise on `DOMContentLoaded`
pub fn when_ready(on_ready: impl FnOnce(Rc<UiContext>) + 'static) -> Result<(), FxError> {
    let window = web_sys::window().ok_or(FxError::Unsupported("no window"))?;
    let document = window.document().ok_or(FxError::Unsupported("no document"))?;

    if document.ready_state() == "loading" {
        let ready_window = window.clone();
        let ready_document = document.clone();
        let callback = Closure::once_into_js(move || {
            let (ctx, _) = boot(ready_window, ready_document);
            on_ready(ctx);
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
            .js()?;
    } else {
        let (ctx, _) = boot(window, document);
        on_ready(ctx);
    }
    Ok(())
}

/// Read the `#folio-config` override; malformed JSON falls back to defaults
pub fn load_config(document: &Document) -> FxConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return FxConfig::default();
    };
    let json = element.text_content().unwrap_or_default();
    match FxConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            warn(&format!("[folio] Ignoring #{}: {}", CONFIG_ELEMENT_ID, e));
            FxConfig::default()
        }
    }
}

/// Build the context and install every unit
pub fn boot(window: Window, document: Document) -> (Rc<UiContext>, InstallReport) {
    log("[folio] Booting page effects...");
    let config = load_config(&document);
    let scroll = select_scroll(&window, &config.scroll);
    let carousel = select_carousel(&window);
    let store = open_preferences(&window);

    let ctx = Rc::new(UiContext::new(window, document, config, scroll, carousel, store));
    let report = install_all(&ctx);
    (ctx, report)
}
