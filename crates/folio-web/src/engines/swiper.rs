//! Carousel through the Swiper global

use std::cell::RefCell;

use folio_fx::{CarouselEngine, CarouselOptions, FxError};
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::util::JsResultExt;

pub struct SwiperCarousel {
    ctor: Function,
    document: web_sys::Document,
    instance: RefCell<Option<JsValue>>,
}

impl SwiperCarousel {
    /// `Some` when `window.Swiper` is a constructor
    pub fn detect(window: &Window) -> Option<Self> {
        let ctor = Reflect::get(window, &"Swiper".into())
            .ok()?
            .dyn_into::<Function>()
            .ok()?;
        Some(Self {
            ctor,
            document: window.document()?,
            instance: RefCell::new(None),
        })
    }
}

impl CarouselEngine for SwiperCarousel {
    fn name(&self) -> &'static str {
        "swiper"
    }

    fn mount(&self, options: &CarouselOptions) -> Result<(), FxError> {
        if self.instance.borrow().is_some() {
            return Ok(());
        }
        if self.document.query_selector(&options.selector).js()?.is_none() {
            return Err(FxError::MissingElement(".swiper"));
        }
        let config = js_sys::JSON::parse(&options.to_json()?).js()?;
        let args = Array::of2(&JsValue::from_str(&options.selector), &config);
        let instance = Reflect::construct(&self.ctor, &args).js()?;
        *self.instance.borrow_mut() = Some(instance);
        Ok(())
    }
}
