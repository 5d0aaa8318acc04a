//! Stat counters ramping up when they scroll into view

use std::rc::Rc;

use folio_fx::{CounterRamp, CounterTarget, EffectHandle, FxError};
use web_sys::{Element, Window};

use crate::context::UiContext;
use crate::frame::run_frames;
use crate::observer::ViewportTrigger;
use crate::util::{query_all, warn};

const SELECTOR: &str = ".stat h3, [data-target]";

/// Goal for a stat element: `data-target` first, then its own text
pub fn target_of(element: &Element) -> Option<CounterTarget> {
    if let Some(attr) = element.get_attribute("data-target") {
        if let Some(target) = CounterTarget::parse(&attr) {
            return Some(target);
        }
    }
    element
        .text_content()
        .as_deref()
        .and_then(CounterTarget::parse)
}

/// Ramp `element` from 0 to `target` over `duration_ms`
///
/// The ramp starts on the first animation frame. The final frame writes the
/// target text exactly as the page wrote it, suffix included.
pub fn animate(
    window: &Window,
    element: Element,
    target: CounterTarget,
    duration_ms: f64,
) -> Result<EffectHandle, FxError> {
    element.set_text_content(Some(&target.ramp_text(0.0)));
    let handle = EffectHandle::new("counter");
    let mut ramp: Option<CounterRamp> = None;
    run_frames(window, handle.clone(), move |now| {
        let ramp =
            ramp.get_or_insert_with(|| CounterRamp::new(target.clone(), now, duration_ms));
        let frame = ramp.frame(now);
        element.set_text_content(Some(&frame.text));
        !frame.done
    })?;
    Ok(handle)
}

/// Count stats up once, when half of each is visible
pub fn install(ctx: &Rc<UiContext>) -> Result<(), FxError> {
    let stats = query_all(&ctx.document, SELECTOR);
    if stats.is_empty() {
        return Err(FxError::MissingElement(SELECTOR));
    }

    let window = ctx.window.clone();
    let duration_ms = ctx.config.counter.duration_ms;
    let trigger = ViewportTrigger::new(
        &ctx.window,
        ctx.config.counter.threshold,
        None,
        move |element, _| {
            // Text without a number is left as written
            let Some(target) = target_of(&element) else {
                return;
            };
            if let Err(e) = animate(&window, element, target, duration_ms) {
                warn(&format!("[counters] {}", e));
            }
        },
    )?;
    trigger.observe_all(&stats);
    ctx.debug(&format!("[counters] Watching {} stats", trigger.pending()));
    ctx.retain_trigger(trigger);
    Ok(())
}
