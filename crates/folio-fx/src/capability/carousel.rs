//! Carousel capability and its constructor options
//!
//! Options serialize to the slider library's own option names, so the shell
//! can hand the JSON straight to the constructor.

use serde::{Deserialize, Serialize};

use crate::error::FxError;

/// Autoplay behavior
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutoplayOptions {
    pub delay: u32,
    pub disable_on_interaction: bool,
    pub pause_on_mouse_enter: bool,
}

impl Default for AutoplayOptions {
    fn default() -> Self {
        Self {
            delay: 5000,
            disable_on_interaction: false,
            pause_on_mouse_enter: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FadeEffectOptions {
    pub cross_fade: bool,
}

impl Default for FadeEffectOptions {
    fn default() -> Self {
        Self { cross_fade: true }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationOptions {
    pub el: String,
    pub clickable: bool,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            el: ".swiper-pagination".to_string(),
            clickable: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigationOptions {
    pub next_el: String,
    pub prev_el: String,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            next_el: ".swiper-button-next".to_string(),
            prev_el: ".swiper-button-prev".to_string(),
        }
    }
}

/// Carousel constructor options
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselOptions {
    /// Container selector; passed separately from the options object
    #[serde(skip_serializing)]
    pub selector: String,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub autoplay: AutoplayOptions,
    pub effect: String,
    pub fade_effect: FadeEffectOptions,
    pub pagination: PaginationOptions,
    pub navigation: NavigationOptions,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            selector: ".swiper".to_string(),
            looped: true,
            autoplay: AutoplayOptions::default(),
            effect: "fade".to_string(),
            fade_effect: FadeEffectOptions::default(),
            pagination: PaginationOptions::default(),
            navigation: NavigationOptions::default(),
        }
    }
}

impl CarouselOptions {
    /// Options object as JSON
    pub fn to_json(&self) -> Result<String, FxError> {
        serde_json::to_string(self).map_err(|e| FxError::Config(e.to_string()))
    }
}

/// A slide-carousel implementation
pub trait CarouselEngine {
    /// Engine name, for logs
    fn name(&self) -> &'static str;

    /// Mount the carousel on `options.selector`
    fn mount(&self, options: &CarouselOptions) -> Result<(), FxError>;
}

/// Fallback when no slider library is loaded
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCarousel;

impl CarouselEngine for NoCarousel {
    fn name(&self) -> &'static str {
        "none"
    }

    fn mount(&self, _options: &CarouselOptions) -> Result<(), FxError> {
        Err(FxError::Unsupported("no carousel engine loaded"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_json_uses_library_names() {
        let json = CarouselOptions::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["loop"], true);
        assert_eq!(value["autoplay"]["delay"], 5000);
        assert_eq!(value["autoplay"]["pauseOnMouseEnter"], true);
        assert_eq!(value["effect"], "fade");
        assert_eq!(value["fadeEffect"]["crossFade"], true);
        assert_eq!(value["pagination"]["el"], ".swiper-pagination");
        assert_eq!(value["navigation"]["nextEl"], ".swiper-button-next");
        assert!(value.get("selector").is_none());
    }

    #[test]
    fn test_no_carousel_is_a_skip() {
        let err = NoCarousel.mount(&CarouselOptions::default()).unwrap_err();
        assert!(err.is_skip());
    }
}
