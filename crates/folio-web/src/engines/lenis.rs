//! Inertial scrolling through the Lenis global
//!
//! The instance is constructed once with an expo-out easing supplied from
//! Rust and driven by a frame loop that lives as long as the page.

use folio_fx::capability::InertialOptions;
use folio_fx::config::ScrollConfig;
use folio_fx::transition::ease_out_expo;
use folio_fx::{EffectHandle, ScrollEngine, ScrollTarget};
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::frame::run_frames;
use crate::util::{describe, log, warn};

/// A live Lenis instance
pub struct LenisScroll {
    instance: JsValue,
    scroll_to_fn: Function,
    handle: EffectHandle,
}

impl LenisScroll {
    /// Construct Lenis if its global is loaded
    ///
    /// Any failure along the way means `None`, and the caller falls back.
    pub fn detect(window: &Window, config: &ScrollConfig) -> Option<Self> {
        let ctor = Reflect::get(window, &"Lenis".into())
            .ok()?
            .dyn_into::<Function>()
            .ok()?;

        let json = serde_json::to_string(&InertialOptions::from_config(config)).ok()?;
        let options = js_sys::JSON::parse(&json).ok()?;
        let easing = Closure::<dyn Fn(f64) -> f64>::new(ease_out_expo);
        Reflect::set(&options, &"easing".into(), &easing.into_js_value()).ok()?;

        let instance = match Reflect::construct(&ctor, &Array::of1(&options)) {
            Ok(instance) => instance,
            Err(e) => {
                warn(&format!("[scroll] Lenis constructor failed: {}", describe(&e)));
                return None;
            }
        };
        let raf_fn = method(&instance, "raf")?;
        let scroll_to_fn = method(&instance, "scrollTo")?;

        let handle = EffectHandle::new("lenis");
        let driven = instance.clone();
        let started = run_frames(window, handle.clone(), move |time| {
            let _ = raf_fn.call1(&driven, &JsValue::from_f64(time));
            true
        });
        match started {
            Ok(_) => log("[scroll] Lenis frame loop started"),
            Err(e) => {
                warn(&format!("[scroll] Lenis frame loop failed: {}", e));
                return None;
            }
        }

        Some(Self {
            instance,
            scroll_to_fn,
            handle,
        })
    }
}

fn method(instance: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(instance, &name.into())
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

impl ScrollEngine for LenisScroll {
    fn name(&self) -> &'static str {
        "lenis"
    }

    fn is_inertial(&self) -> bool {
        true
    }

    fn scroll_to(&self, target: ScrollTarget) {
        if let Err(e) = self
            .scroll_to_fn
            .call1(&self.instance, &JsValue::from_f64(target.y()))
        {
            warn(&format!("[scroll] Lenis scrollTo failed: {}", describe(&e)));
        }
    }
}

impl Drop for LenisScroll {
    fn drop(&mut self) {
        self.handle.stop();
    }
}
