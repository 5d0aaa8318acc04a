//! Shared utilities for the browser shell
//!
//! Console bindings, DOM queries and timers used by every unit.

use folio_fx::FxError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

#[wasm_bindgen]
extern "C" {
    /// Console.log binding for WASM
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);

    /// Console.warn binding for WASM
    #[wasm_bindgen(js_namespace = console)]
    pub fn warn(s: &str);

    /// Wall-clock milliseconds (Date.now)
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    pub fn date_now() -> f64;
}

/// Best-effort text for a thrown JS value
pub fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::Reflect::get(value, &"message".into())
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Convert `Result<T, JsValue>` into the crate error type
pub trait JsResultExt<T> {
    fn js(self) -> Result<T, FxError>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn js(self) -> Result<T, FxError> {
        self.map_err(|e| FxError::Js(describe(&e)))
    }
}

/// First element matching `selector`, or a skip error naming it
pub fn query(document: &Document, selector: &'static str) -> Result<Element, FxError> {
    document
        .query_selector(selector)
        .js()?
        .ok_or(FxError::MissingElement(selector))
}

/// Every element under `document` matching `selector`
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(elements_of)
        .unwrap_or_default()
}

/// Every element under `root` matching `selector`
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(elements_of)
        .unwrap_or_default()
}

fn elements_of(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Set one inline style property; non-HTML elements are ignored
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

/// Current vertical scroll position
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Viewport `(width, height)` in CSS pixels
pub fn viewport(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

/// Run `f` once after `delay_ms`
pub fn set_timeout(
    window: &Window,
    delay_ms: u32,
    f: impl FnOnce() + 'static,
) -> Result<i32, FxError> {
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        )
        .js()
}
