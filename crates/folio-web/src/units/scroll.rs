//! Anchor interception, the scroll-to-top button and the print action

use std::rc::Rc;

use folio_fx::effects::{ScrollTopHover, ScrollTopVisibility};
use folio_fx::nav::fragment_of;
use folio_fx::FxError;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::context::UiContext;
use crate::util::{query_all, scroll_y, set_style, warn, JsResultExt};

/// Route in-page `#fragment` links through the inertial engine
///
/// With native scrolling the browser (and CSS `scroll-behavior`) already
/// handles these links, so nothing is installed.
pub fn install_anchors(ctx: &Rc<UiContext>) -> Result<(), FxError> {
    if !ctx.scroll.intercepts_anchors() {
        return Err(FxError::Unsupported("anchor interception needs an inertial engine"));
    }
    let anchors = query_all(&ctx.document, "a[href^=\"#\"]");
    if anchors.is_empty() {
        return Err(FxError::MissingElement("a[href^=\"#\"]"));
    }
    for anchor in anchors {
        let href = anchor.get_attribute("href").unwrap_or_default();
        let Some(fragment) = fragment_of(&href).map(str::to_string) else {
            continue;
        };
        let handler_ctx = ctx.clone();
        ctx.listen(&anchor, "click", move |event| {
            let Some(target) = handler_ctx.document.get_element_by_id(&fragment) else {
                return;
            };
            event.prevent_default();
            let top = target.get_bounding_client_rect().top();
            handler_ctx.scroll.scroll_to_anchor(
                top,
                scroll_y(&handler_ctx.window),
                handler_ctx.config.nav.anchor_offset_px,
            );
        })?;
    }
    Ok(())
}

/// Inject the floating scroll-to-top button
pub fn install_top_button(ctx: &Rc<UiContext>) -> Result<(), FxError> {
    let body = ctx.document.body().ok_or(FxError::MissingElement("body"))?;
    let button = ctx.document.create_element("button").js()?;
    button.set_class_name("scroll-top-btn");
    button.set_inner_html("<i class=\"fas fa-arrow-up\" aria-hidden=\"true\"></i>");
    button.set_attribute("type", "button").js()?;
    button.set_attribute("aria-label", "Scroll to top").js()?;
    if let Some(html) = button.dyn_ref::<HtmlElement>() {
        html.style().set_css_text(
            "position: fixed; bottom: 30px; right: 30px; width: 50px; height: 50px; \
             border-radius: 50%; border: none; cursor: pointer; z-index: 999; \
             background: linear-gradient(135deg, #2563eb, #3b82f6); color: white; \
             font-size: 1.25rem; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); \
             opacity: 0; visibility: hidden; transition: all 0.3s ease;",
        );
    }
    body.append_child(&button).js()?;

    let reveal_px = ctx.config.scroll.top_button_reveal_px;
    let window = ctx.window.clone();
    let shown = button.clone();
    let update = move || {
        let (opacity, visibility) =
            ScrollTopVisibility::for_scroll(scroll_y(&window), reveal_px).styles();
        set_style(&shown, "opacity", opacity);
        set_style(&shown, "visibility", visibility);
    };
    update();
    ctx.listen(&ctx.window, "scroll", move |_| update())?;

    let click_ctx = ctx.clone();
    ctx.listen(&button, "click", move |_| click_ctx.scroll.scroll_to_top())?;

    for (event, hover) in [
        ("mouseenter", ScrollTopHover::Lifted),
        ("mouseleave", ScrollTopHover::Resting),
    ] {
        let hovered = button.clone();
        ctx.listen(&button, event, move |_| {
            let (transform, shadow) = hover.styles();
            set_style(&hovered, "transform", transform);
            set_style(&hovered, "box-shadow", shadow);
        })?;
    }
    Ok(())
}

/// `[data-action="print"]` opens the print dialog
pub fn install_print(ctx: &Rc<UiContext>) -> Result<(), FxError> {
    let buttons = query_all(&ctx.document, "[data-action=\"print\"]");
    if buttons.is_empty() {
        return Err(FxError::MissingElement("[data-action=\"print\"]"));
    }
    for button in buttons {
        let handler_ctx = ctx.clone();
        ctx.listen(&button, "click", move |event| {
            event.prevent_default();
            print(&handler_ctx);
        })?;
    }
    Ok(())
}

pub fn print(ctx: &UiContext) {
    if let Err(e) = ctx.window.print().js() {
        warn(&format!("[print] {}", e));
    }
}
