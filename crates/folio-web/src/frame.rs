//! requestAnimationFrame driver
//!
//! A frame loop re-arms itself while its [`EffectHandle`] is running and the
//! tick asks for another frame. Stopping the handle ends the loop at the next
//! frame; the closure is released from inside its own last invocation.

use std::cell::RefCell;
use std::rc::Rc;

use folio_fx::{EffectHandle, FxError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::util::JsResultExt;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Start a frame loop owned by `handle`
///
/// `tick` receives the rAF timestamp and returns whether it wants another
/// frame. Returns `Ok(false)` without scheduling if the handle was already
/// started or stopped.
pub fn run_frames(
    window: &Window,
    handle: EffectHandle,
    mut tick: impl FnMut(f64) -> bool + 'static,
) -> Result<bool, FxError> {
    if !handle.start() {
        return Ok(false);
    }

    let slot: FrameSlot = Rc::new(RefCell::new(None));
    let rearm = slot.clone();
    let win = window.clone();
    let owner = handle.clone();

    *slot.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        if handle.is_running() && tick(timestamp) {
            if let Some(callback) = rearm.borrow().as_ref() {
                if win
                    .request_animation_frame(callback.as_ref().unchecked_ref())
                    .is_ok()
                {
                    return;
                }
            }
        }
        handle.stop();
        // Drop our own closure; wasm-bindgen defers the free until we return
        let _ = rearm.borrow_mut().take();
    }));

    let scheduled = match slot.borrow().as_ref() {
        Some(callback) => window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .js(),
        None => Ok(0),
    };
    if let Err(e) = scheduled {
        owner.stop();
        let _ = slot.borrow_mut().take();
        return Err(e);
    }
    Ok(true)
}
