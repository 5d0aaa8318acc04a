//! Light/dark theme toggle

use std::rc::Rc;

use folio_fx::{FxError, Theme};
use web_sys::Element;

use crate::context::UiContext;
use crate::util::{log, query};

/// Apply the stored theme and wire `#theme-toggle`
///
/// The body class is applied even when the toggle is missing.
pub fn install(ctx: &Rc<UiContext>) -> Result<(), FxError> {
    apply(ctx, ctx.theme());
    let toggle = query(&ctx.document, "#theme-toggle")?;
    let handler_ctx = ctx.clone();
    ctx.listen(&toggle, "click", move |_| {
        toggle_theme(&handler_ctx);
    })?;
    Ok(())
}

/// Flip the theme, persist it and update the page
pub fn toggle_theme(ctx: &UiContext) -> Theme {
    let theme = ctx.theme().toggled();
    ctx.set_theme(theme);
    apply(ctx, theme);
    ctx.debug(&format!("[theme] Switched to {}", theme.as_str()));
    theme
}

fn apply(ctx: &UiContext, theme: Theme) {
    if let Some(body) = ctx.document.body() {
        let classes = body.class_list();
        let _ = classes.remove_1(theme.toggled().body_class());
        let _ = classes.add_1(theme.body_class());
    } else {
        log("[theme] No body element yet");
    }
    if let Ok(Some(toggle)) = ctx.document.query_selector("#theme-toggle") {
        decorate_toggle(&toggle, theme);
    }
}

fn decorate_toggle(toggle: &Element, theme: Theme) {
    let _ = toggle.set_attribute("aria-pressed", theme.aria_pressed());
    let _ = toggle.set_attribute("aria-label", theme.toggle_label());
    if let Ok(Some(icon)) = toggle.query_selector("i") {
        icon.set_class_name(&format!("fas {}", theme.toggle_icon()));
    }
}
