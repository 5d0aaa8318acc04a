//! Page-wide context shared by every unit
//!
//! Built once at boot. Units receive `&Rc<UiContext>` and register their
//! listeners, observers and frame loops here so they live as long as the
//! page does.

use std::cell::{Cell, RefCell};

use folio_fx::{
    CarouselEngine, EffectHandle, FxConfig, FxError, PreferenceStore, ScrollAdapter, Severity,
    Theme,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, Window};

use crate::observer::ViewportTrigger;
use crate::units::notify::Notifier;
use crate::util::{log, warn, JsResultExt};

pub struct UiContext {
    pub window: Window,
    pub document: Document,
    pub config: FxConfig,
    /// The single smooth-scroll engine
    pub scroll: ScrollAdapter,
    pub carousel: Box<dyn CarouselEngine>,
    pub notifier: Notifier,
    store: Box<dyn PreferenceStore>,
    theme: Cell<Theme>,
    listeners: RefCell<Vec<Closure<dyn FnMut(Event)>>>,
    triggers: RefCell<Vec<ViewportTrigger>>,
    effects: RefCell<Vec<EffectHandle>>,
}

impl UiContext {
    pub fn new(
        window: Window,
        document: Document,
        config: FxConfig,
        scroll: ScrollAdapter,
        carousel: Box<dyn CarouselEngine>,
        store: Box<dyn PreferenceStore>,
    ) -> Self {
        let notifier = Notifier::new(window.clone(), document.clone(), &config.notification);
        let theme = Theme::load(store.as_ref());
        Self {
            window,
            document,
            config,
            scroll,
            carousel,
            notifier,
            store,
            theme: Cell::new(theme),
            listeners: RefCell::new(Vec::new()),
            triggers: RefCell::new(Vec::new()),
            effects: RefCell::new(Vec::new()),
        }
    }

    /// Attach `handler` to `target` for the page lifetime
    pub fn listen(
        &self,
        target: &EventTarget,
        event: &str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), FxError> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .js()?;
        self.listeners.borrow_mut().push(closure);
        Ok(())
    }

    /// Keep a viewport trigger alive
    pub fn retain_trigger(&self, trigger: ViewportTrigger) {
        self.triggers.borrow_mut().push(trigger);
    }

    /// Track a continuous effect so it can be stopped later
    pub fn track_effect(&self, handle: EffectHandle) {
        self.effects.borrow_mut().push(handle);
    }

    /// Stop every tracked continuous effect
    pub fn stop_effects(&self) {
        for handle in self.effects.borrow().iter() {
            handle.stop();
            self.debug(&format!("[effects] Stopped {}", handle.name()));
        }
    }

    /// Names of tracked effects that are still running
    pub fn running_effects(&self) -> Vec<&'static str> {
        self.effects
            .borrow()
            .iter()
            .filter(|handle| handle.is_running())
            .map(|handle| handle.name())
            .collect()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Show a notification, logging DOM failures
    pub fn notify(&self, message: &str, severity: Severity) {
        if let Err(e) = self.notifier.show(message, severity) {
            warn(&format!("[notify] Could not show notification: {}", e));
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Record and persist `theme`; storage failures are logged, not fatal
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        if let Err(e) = theme.save(self.store.as_ref()) {
            warn(&format!("[theme] {}", e));
        }
    }

    /// Log only when the page asked for verbose output
    pub fn debug(&self, message: &str) {
        if self.config.verbose {
            log(message);
        }
    }
}
