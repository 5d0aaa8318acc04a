//! Scroll reveals: cards and timeline entries, skill tags, skill fill bars

use std::rc::Rc;

use folio_fx::effects::{skill_level, stagger_delay_ms, RevealStyle};
use folio_fx::FxError;
use web_sys::Element;

use crate::context::UiContext;
use crate::observer::ViewportTrigger;
use crate::util::{query_all, set_style, set_timeout};

const FADE_SELECTOR: &str = ".expertise-card, .timeline-item, .education-item, .cert-item";

fn hide(element: &Element, style: RevealStyle) {
    let (opacity, transform, transition) = style.hidden();
    set_style(element, "opacity", opacity);
    set_style(element, "transform", transform);
    set_style(element, "transition", transition);
}

fn show(element: &Element, style: RevealStyle) {
    let (opacity, transform) = style.shown();
    set_style(element, "opacity", opacity);
    set_style(element, "transform", transform);
}

fn non_empty(elements: Vec<Element>, selector: &'static str) -> Result<Vec<Element>, FxError> {
    if elements.is_empty() {
        Err(FxError::MissingElement(selector))
    } else {
        Ok(elements)
    }
}

/// Fade cards and timeline entries up as they enter
pub fn install_fade(ctx: &Rc<UiContext>) -> Result<(), FxError> {
    let elements = non_empty(query_all(&ctx.document, FADE_SELECTOR), ".expertise-card")?;
    let reveal = &ctx.config.reveal;
    let trigger = ViewportTrigger::new(
        &ctx.window,
        reveal.fade_threshold,
        Some(reveal.fade_root_margin.as_str()),
        |element, _| show(&element, RevealStyle::FadeUp),
    )?;
    for element in &elements {
        hide(element, RevealStyle::FadeUp);
    }
    trigger.observe_all(&elements);
    ctx.retain_trigger(trigger);
    Ok(())
}

/// Pop skill tags in one after another
pub fn install_tags(ctx: &Rc<UiContext>) -> Result<(), FxError> {
    let tags = non_empty(query_all(&ctx.document, ".skill-tag"), ".skill-tag")?;
    let stagger = ctx.config.reveal.tag_stagger_ms;
    let window = ctx.window.clone();
    let trigger = ViewportTrigger::new(
        &ctx.window,
        ctx.config.reveal.tag_threshold,
        None,
        move |element, index| {
            let delay = stagger_delay_ms(index, stagger);
            let fallback = element.clone();
            if set_timeout(&window, delay, move || show(&element, RevealStyle::Pop)).is_err() {
                show(&fallback, RevealStyle::Pop);
            }
        },
    )?;
    for tag in &tags {
        hide(tag, RevealStyle::Pop);
    }
    trigger.observe_all(&tags);
    ctx.retain_trigger(trigger);
    Ok(())
}

/// Grow `.skill-fill` bars to their `data-level`
pub fn install_fills(ctx: &Rc<UiContext>) -> Result<(), FxError> {
    let fills = non_empty(
        query_all(&ctx.document, ".skill-fill[data-level]"),
        ".skill-fill[data-level]",
    )?;
    let trigger = ViewportTrigger::new(
        &ctx.window,
        ctx.config.reveal.fill_threshold,
        None,
        |element, _| {
            let level = element
                .get_attribute("data-level")
                .as_deref()
                .and_then(skill_level)
                .unwrap_or(0.0);
            set_style(&element, "width", &format!("{}%", level));
        },
    )?;
    for fill in &fills {
        set_style(fill, "width", "0");
        set_style(fill, "transition", "width 1s ease");
    }
    trigger.observe_all(&fills);
    ctx.retain_trigger(trigger);
    Ok(())
}
