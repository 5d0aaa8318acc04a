//! Hero subtitle typing effect

use std::cell::RefCell;
use std::rc::Rc;

use folio_fx::config::TypingConfig;
use folio_fx::effects::{TypingStep, Typewriter};
use folio_fx::FxError;
use web_sys::{Element, Window};

use crate::context::UiContext;
use crate::util::{query, set_style, set_timeout, warn};

pub fn install(ctx: &Rc<UiContext>) -> Result<(), FxError> {
    let subtitle = query(&ctx.document, ".hero-subtitle")?;
    let text = subtitle.text_content().unwrap_or_default();
    let writer = Typewriter::new(text.trim());
    if writer.is_empty() {
        return Err(FxError::Unsupported("hero subtitle has no text to type"));
    }
    let writer = Rc::new(RefCell::new(writer));
    if !writer.borrow_mut().start() {
        return Ok(());
    }

    subtitle.set_text_content(Some(""));
    set_style(&subtitle, "border-right", "2px solid");
    set_style(&subtitle, "padding-right", "5px");

    let window = ctx.window.clone();
    let timing = ctx.config.typing.clone();
    set_timeout(&ctx.window, timing.start_delay_ms, move || {
        step(window, subtitle, writer, timing)
    })?;
    Ok(())
}

fn step(window: Window, subtitle: Element, writer: Rc<RefCell<Typewriter>>, timing: TypingConfig) {
    let next = writer.borrow_mut().next_step();
    let scheduled = match next {
        TypingStep::Reveal(text) => {
            subtitle.set_text_content(Some(&text));
            let delay = timing.interval_ms;
            let win = window.clone();
            set_timeout(&window, delay, move || step(win, subtitle, writer, timing))
        }
        TypingStep::Complete => {
            let delay = timing.cursor_linger_ms;
            set_timeout(&window, delay, move || {
                set_style(&subtitle, "border-right", "none");
                set_style(&subtitle, "padding-right", "0");
            })
        }
        TypingStep::Done => return,
    };
    if let Err(e) = scheduled {
        warn(&format!("[typing] {}", e));
    }
}
