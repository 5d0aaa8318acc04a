//! Engine implementations behind the core capability traits
//!
//! Third-party engines are found through their page globals; a missing
//! or broken global selects the fallback instead of failing the page.

mod lenis;
mod native;
mod swiper;

use std::rc::Rc;

use folio_fx::config::ScrollConfig;
use folio_fx::{CarouselEngine, NoCarousel, ScrollAdapter, ScrollEngine};
use web_sys::Window;

pub use lenis::LenisScroll;
pub use native::NativeScroll;
pub use swiper::SwiperCarousel;

use crate::util::log;

/// Pick the page's single scroll engine
pub fn select_scroll(window: &Window, config: &ScrollConfig) -> ScrollAdapter {
    let inertial = LenisScroll::detect(window, config)
        .map(|engine| Rc::new(engine) as Rc<dyn ScrollEngine>);
    let adapter = ScrollAdapter::select(inertial, || Rc::new(NativeScroll::new(window.clone())));
    log(&format!("[scroll] Using {} scrolling", adapter.engine().name()));
    adapter
}

/// Pick the carousel engine
pub fn select_carousel(window: &Window) -> Box<dyn CarouselEngine> {
    match SwiperCarousel::detect(window) {
        Some(engine) => Box::new(engine),
        None => Box::new(NoCarousel),
    }
}
