//! Viewport triggers over IntersectionObserver
//!
//! Each [`ViewportTrigger`] owns one observer with one threshold. Elements
//! registered on it fire their callback exactly once; after firing they are
//! unobserved, and the observer disconnects once nothing is pending.

use std::cell::RefCell;
use std::rc::Rc;

use folio_fx::{FxError, TriggerId, TriggerRegistry};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::util::JsResultExt;

/// Called with the element and its registration index
type EnterFn = Box<dyn FnMut(Element, usize)>;

struct Watched {
    registry: TriggerRegistry,
    elements: Vec<(Element, TriggerId)>,
}

/// One-shot visibility trigger for a group of elements
pub struct ViewportTrigger {
    observer: IntersectionObserver,
    watched: Rc<RefCell<Watched>>,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ViewportTrigger {
    /// Whether the browser has IntersectionObserver
    pub fn supported(window: &Window) -> bool {
        js_sys::Reflect::get(window, &"IntersectionObserver".into())
            .map(|ctor| ctor.is_function())
            .unwrap_or(false)
    }

    /// Create a trigger firing when at least `threshold` of an element is
    /// visible
    pub fn new(
        window: &Window,
        threshold: f64,
        root_margin: Option<&str>,
        on_enter: impl FnMut(Element, usize) + 'static,
    ) -> Result<Self, FxError> {
        if !Self::supported(window) {
            return Err(FxError::Unsupported("IntersectionObserver"));
        }

        let watched = Rc::new(RefCell::new(Watched {
            registry: TriggerRegistry::new(threshold),
            elements: Vec::new(),
        }));
        let mut on_enter: EnterFn = Box::new(on_enter);

        let state = watched.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let fired = {
                        let mut watched = state.borrow_mut();
                        let Some(index) = watched.elements.iter().position(|(el, _)| *el == target)
                        else {
                            continue;
                        };
                        let id = watched.elements[index].1;
                        watched
                            .registry
                            .on_entry(id, entry.is_intersecting(), entry.intersection_ratio())
                            .then_some(index)
                    };
                    if let Some(index) = fired {
                        observer.unobserve(&target);
                        on_enter(target, index);
                    }
                }
                if state.borrow().registry.is_drained() {
                    observer.disconnect();
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold.clamp(0.0, 1.0)));
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).js()?;

        Ok(Self {
            observer,
            watched,
            _callback: callback,
        })
    }

    /// Start watching `element`; returns its registration index
    pub fn observe(&self, element: &Element) -> usize {
        let mut watched = self.watched.borrow_mut();
        let id = watched.registry.register();
        watched.elements.push((element.clone(), id));
        self.observer.observe(element);
        watched.elements.len() - 1
    }

    /// Watch every element in `elements`
    pub fn observe_all(&self, elements: &[Element]) {
        for element in elements {
            self.observe(element);
        }
    }

    /// Elements that have not fired yet
    pub fn pending(&self) -> usize {
        self.watched.borrow().registry.pending()
    }
}

impl Drop for ViewportTrigger {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
