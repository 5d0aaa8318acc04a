//! Cursor trail for wide viewports

use std::cell::Cell;
use std::rc::Rc;

use folio_fx::effects::trail::MARKER_SIZE_PX;
use folio_fx::effects::{CursorTrail, PointerGate};
use folio_fx::{EffectHandle, FxError, Vec2};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::context::UiContext;
use crate::frame::run_frames;
use crate::util::{set_style, viewport, JsResultExt};

pub fn install(ctx: &Rc<UiContext>) -> Result<(), FxError> {
    let pointer = &ctx.config.pointer;
    let (width, _) = viewport(&ctx.window);
    if !PointerGate::new(pointer.breakpoint_px).allows_width(width) {
        return Err(FxError::Unsupported("cursor trail needs a wide viewport"));
    }
    let body = ctx.document.body().ok_or(FxError::MissingElement("body"))?;

    let mut trail = CursorTrail::new(pointer.trail_markers, pointer.trail_follow);
    let mut markers: Vec<Element> = Vec::with_capacity(pointer.trail_markers);
    for i in 0..pointer.trail_markers {
        let marker = ctx.document.create_element("div").js()?;
        marker.set_class_name("cursor-trail");
        marker.set_attribute("aria-hidden", "true").js()?;
        let opacity = trail.scale(i) * 0.5;
        if let Some(html) = marker.dyn_ref::<HtmlElement>() {
            html.style().set_css_text(&format!(
                "position: fixed; width: {size}px; height: {size}px; border-radius: 50%; \
                 background: rgba(37, 99, 235, {opacity}); pointer-events: none; \
                 z-index: 9999; left: -{size}px; top: -{size}px; \
                 transition: transform 0.1s ease;",
                size = MARKER_SIZE_PX,
                opacity = opacity,
            ));
        }
        body.append_child(&marker).js()?;
        markers.push(marker);
    }

    let position = Rc::new(Cell::new(Vec2::ZERO));
    let tracked = position.clone();
    ctx.listen(&ctx.window, "mousemove", move |event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            tracked.set(Vec2::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())));
        }
    })?;

    let handle = EffectHandle::new("cursor-trail");
    ctx.track_effect(handle.clone());
    let half = MARKER_SIZE_PX / 2.0;
    run_frames(&ctx.window, handle, move |_| {
        trail.step(position.get());
        for (i, (marker, at)) in markers.iter().zip(trail.positions()).enumerate() {
            set_style(marker, "left", &format!("{}px", at.x - half));
            set_style(marker, "top", &format!("{}px", at.y - half));
            set_style(marker, "transform", &format!("scale({})", trail.scale(i)));
        }
        true
    })?;
    Ok(())
}
