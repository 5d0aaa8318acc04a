//! Hero parallax

use std::rc::Rc;

use folio_fx::effects::ParallaxFrame;
use folio_fx::FxError;

use crate::context::UiContext;
use crate::util::{query, scroll_y, set_style, viewport};

pub fn install(ctx: &Rc<UiContext>) -> Result<(), FxError> {
    let hero = query(&ctx.document, ".hero-content")?;
    let handler_ctx = ctx.clone();
    let apply = move || {
        let (_, height) = viewport(&handler_ctx.window);
        let scrolled = scroll_y(&handler_ctx.window);
        // Past the hero the last frame stays as it was
        if let Some(frame) = ParallaxFrame::at(scrolled, height, &handler_ctx.config.parallax) {
            set_style(&hero, "transform", &frame.transform());
            set_style(&hero, "opacity", &frame.opacity.to_string());
        }
    };
    apply();
    ctx.listen(&ctx.window, "scroll", move |_| apply())?;
    Ok(())
}
