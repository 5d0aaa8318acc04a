//! Magnetic and spotlight hover for fine pointers

use std::cell::RefCell;
use std::rc::Rc;

use folio_fx::effects::hover::{spotlight_vars, FINE_POINTER_QUERY};
use folio_fx::effects::{MagneticState, PointerGate};
use folio_fx::{EffectHandle, FxError, Rect, Vec2};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::context::UiContext;
use crate::frame::run_frames;
use crate::util::{query_all, set_style, viewport};

fn hover_allowed(ctx: &UiContext) -> bool {
    let fine = ctx
        .window
        .match_media(FINE_POINTER_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);
    let (width, _) = viewport(&ctx.window);
    PointerGate::new(ctx.config.pointer.breakpoint_px).allows_hover(width, fine)
}

fn bounds_of(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

fn pointer_of(event: &web_sys::Event) -> Option<Vec2> {
    event
        .dyn_ref::<MouseEvent>()
        .map(|mouse| Vec2::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())))
}

/// `.magnetic` elements drift toward the pointer and ease back on leave
pub fn install_magnetic(ctx: &Rc<UiContext>) -> Result<(), FxError> {
    let elements: Vec<HtmlElement> = query_all(&ctx.document, ".magnetic")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();
    if elements.is_empty() {
        return Err(FxError::MissingElement(".magnetic"));
    }
    if !hover_allowed(ctx) {
        return Err(FxError::Unsupported("magnetic hover needs a fine pointer"));
    }

    let pointer = &ctx.config.pointer;
    let mut magnets = Vec::with_capacity(elements.len());
    for element in elements {
        let state = Rc::new(RefCell::new(MagneticState::new(
            pointer.magnetic_damping,
            pointer.magnetic_strength,
        )));

        let pulled = state.clone();
        let measured = element.clone();
        ctx.listen(&element, "mousemove", move |event| {
            if let Some(at) = pointer_of(&event) {
                pulled.borrow_mut().pointer_at(at, bounds_of(&measured));
            }
        })?;
        let released = state.clone();
        ctx.listen(&element, "mouseleave", move |_| released.borrow_mut().release())?;

        magnets.push((element, state));
    }

    let handle = EffectHandle::new("magnetic");
    ctx.track_effect(handle.clone());
    run_frames(&ctx.window, handle, move |_| {
        for (element, state) in &magnets {
            let mut state = state.borrow_mut();
            let before = state.offset();
            if state.step() != before {
                let _ = element.style().set_property("transform", &state.transform());
            }
        }
        true
    })?;
    Ok(())
}

/// `.spotlight` cards track the pointer in `--spot-x` / `--spot-y`
pub fn install_spotlight(ctx: &Rc<UiContext>) -> Result<(), FxError> {
    let cards = query_all(&ctx.document, ".spotlight");
    if cards.is_empty() {
        return Err(FxError::MissingElement(".spotlight"));
    }
    if !hover_allowed(ctx) {
        return Err(FxError::Unsupported("spotlight hover needs a fine pointer"));
    }

    for card in cards {
        let lit = card.clone();
        ctx.listen(&card, "mousemove", move |event| {
            if let Some(at) = pointer_of(&event) {
                let (x, y) = spotlight_vars(at, bounds_of(&lit));
                set_style(&lit, "--spot-x", &x);
                set_style(&lit, "--spot-y", &y);
            }
        })?;
        let entered = card.clone();
        ctx.listen(&card, "mouseenter", move |_| {
            let _ = entered.class_list().add_1("is-lit");
        })?;
        let left = card.clone();
        ctx.listen(&card, "mouseleave", move |_| {
            let _ = left.class_list().remove_1("is-lit");
        })?;
    }
    Ok(())
}
