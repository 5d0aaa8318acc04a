//! Capability seams for optional third-party engines
//!
//! Effect units talk to these traits only. The shell picks an
//! implementation once at boot: the real engine when its global is loaded,
//! otherwise a native or no-op fallback.

mod carousel;
mod scroll;

pub use carousel::{
    AutoplayOptions, CarouselEngine, CarouselOptions, FadeEffectOptions, NavigationOptions,
    NoCarousel, PaginationOptions,
};
pub use scroll::{anchor_scroll_y, InertialOptions, ScrollAdapter, ScrollEngine, ScrollTarget};
