//! Navigation: mobile menu, active section highlighting, navbar elevation

use std::cell::Cell;
use std::rc::Rc;

use folio_fx::nav::{active_section, fragment_of, MenuEvent};
use folio_fx::{Elevation, FxError, MenuState, SectionSpan};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};

use crate::context::UiContext;
use crate::util::{query, query_all, query_all_in, scroll_y, set_style};

// =============================================================================
// Mobile Menu
// =============================================================================

struct Menu {
    hamburger: Element,
    panel: Element,
    bars: Vec<Element>,
    state: Cell<MenuState>,
}

impl Menu {
    fn dispatch(&self, event: MenuEvent) {
        let mut state = self.state.get();
        if state.apply(event) {
            self.state.set(state);
            self.render();
        }
    }

    fn render(&self) {
        let state = self.state.get();
        let _ = self
            .panel
            .class_list()
            .toggle_with_force("active", state.is_expanded());
        let _ = self
            .hamburger
            .class_list()
            .toggle_with_force("active", state.is_expanded());
        let _ = self
            .hamburger
            .set_attribute("aria-expanded", state.aria_expanded());
        for (bar, style) in self.bars.iter().zip(state.glyph().bars.iter()) {
            set_style(bar, "transform", style.transform);
            set_style(bar, "opacity", style.opacity);
        }
    }
}

/// Wire `#hamburger` and `#nav-menu`
pub fn install_menu(ctx: &Rc<UiContext>) -> Result<(), FxError> {
    let hamburger = query(&ctx.document, "#hamburger")?;
    let panel = query(&ctx.document, "#nav-menu")?;
    let menu = Rc::new(Menu {
        bars: query_all_in(&hamburger, "span"),
        hamburger: hamburger.clone(),
        panel,
        state: Cell::new(MenuState::closed()),
    });

    let _ = hamburger.set_attribute("role", "button");
    let _ = hamburger.set_attribute("tabindex", "0");
    let _ = hamburger.set_attribute("aria-controls", "nav-menu");
    menu.render();

    let on_click = menu.clone();
    ctx.listen(&hamburger, "click", move |_| {
        on_click.dispatch(MenuEvent::Activate)
    })?;

    let on_key = menu.clone();
    ctx.listen(&hamburger, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|k| k.key()) else {
            return;
        };
        if key == "Enter" || key == " " {
            event.prevent_default();
            on_key.dispatch(MenuEvent::Activate);
        }
    })?;

    for link in query_all(&ctx.document, ".nav-link") {
        let on_link = menu.clone();
        ctx.listen(&link, "click", move |_| {
            on_link.dispatch(MenuEvent::LinkClicked)
        })?;
    }
    Ok(())
}

// =============================================================================
// Active Section
// =============================================================================

/// Highlight the nav link of the section under the viewport top
pub fn install_active_section(ctx: &Rc<UiContext>) -> Result<(), FxError> {
    let sections: Vec<HtmlElement> = query_all(&ctx.document, "section[id]")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();
    if sections.is_empty() {
        return Err(FxError::MissingElement("section[id]"));
    }
    let links = query_all(&ctx.document, ".nav-link");
    if links.is_empty() {
        return Err(FxError::MissingElement(".nav-link"));
    }

    let update_ctx = ctx.clone();
    let update = move || {
        let spans: Vec<SectionSpan> = sections
            .iter()
            .map(|s| SectionSpan::new(f64::from(s.offset_top()), f64::from(s.offset_height())))
            .collect();
        let offset = update_ctx.config.nav.section_offset_px;
        let current = active_section(&spans, scroll_y(&update_ctx.window), offset)
            .map(|index| sections[index].id());
        for link in &links {
            let href = link.get_attribute("href").unwrap_or_default();
            let is_current = current.is_some() && fragment_of(&href) == current.as_deref();
            let _ = link.class_list().toggle_with_force("active", is_current);
        }
    };
    update();
    ctx.listen(&ctx.window, "scroll", move |_| update())?;
    Ok(())
}

// =============================================================================
// Navbar Elevation
// =============================================================================

/// Deepen the navbar shadow once the page is scrolled
pub fn install_elevation(ctx: &Rc<UiContext>) -> Result<(), FxError> {
    let navbar = query(&ctx.document, "#navbar")?;
    let window = ctx.window.clone();
    let apply = move || {
        set_style(
            &navbar,
            "box-shadow",
            Elevation::for_scroll(scroll_y(&window)).box_shadow(),
        );
    };
    apply();
    ctx.listen(&ctx.window, "scroll", move |_| apply())?;
    Ok(())
}
