//! Toast notifications
//!
//! At most one notification node is attached at a time. Each show gets a
//! fresh id from [`NotificationSlot`]; timers scheduled for a superseded id
//! only ever touch their own node.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_fx::config::NotificationConfig;
use folio_fx::{FxError, Notification, NotificationSlot, Severity};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::util::{date_now, query_all, set_timeout, JsResultExt};

const STYLE_ID: &str = "folio-notification-keyframes";

const KEYFRAMES: &str = "\
@keyframes slideInRight {
    from { transform: translateX(400px); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOutRight {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(400px); opacity: 0; }
}
.notification-content { display: flex; align-items: center; gap: 12px; }
.notification-content i { font-size: 1.25rem; }";

pub struct Notifier {
    window: Window,
    document: Document,
    slot: Rc<RefCell<NotificationSlot>>,
    node: Rc<RefCell<Option<Element>>>,
    visible_ms: u32,
    exit_ms: u32,
    styles_ready: Cell<bool>,
}

impl Notifier {
    pub fn new(window: Window, document: Document, config: &NotificationConfig) -> Self {
        Self {
            window,
            document,
            slot: Rc::new(RefCell::new(NotificationSlot::new(u64::from(config.visible_ms)))),
            node: Rc::new(RefCell::new(None)),
            visible_ms: config.visible_ms,
            exit_ms: config.exit_ms,
            styles_ready: Cell::new(false),
        }
    }

    /// Replace any visible notification with `message`
    pub fn show(&self, message: &str, severity: Severity) -> Result<(), FxError> {
        self.ensure_styles()?;
        let body = self
            .document
            .body()
            .ok_or(FxError::MissingElement("body"))?;

        let notification = Notification::new(message, severity);
        let node = self.build(&notification)?;
        let plan = self
            .slot
            .borrow_mut()
            .show(notification, date_now().max(0.0) as u64);

        if let Some(previous) = self.node.borrow_mut().take() {
            previous.remove();
        }
        for stray in query_all(&self.document, ".notification") {
            stray.remove();
        }
        body.append_child(&node).js()?;
        *self.node.borrow_mut() = Some(node.clone());

        let window = self.window.clone();
        let slot = self.slot.clone();
        let current = self.node.clone();
        let exit_ms = self.exit_ms;
        set_timeout(&self.window, self.visible_ms, move || {
            if let Some(html) = node.dyn_ref::<HtmlElement>() {
                let _ = html
                    .style()
                    .set_property("animation", "slideOutRight 0.3s ease");
            }
            let _ = set_timeout(&window, exit_ms, move || {
                node.remove();
                if slot.borrow_mut().dismiss(plan.id) {
                    current.borrow_mut().take();
                }
            });
        })?;
        Ok(())
    }

    /// Number of attached notification nodes
    pub fn attached(&self) -> usize {
        query_all(&self.document, ".notification").len()
    }

    fn build(&self, notification: &Notification) -> Result<Element, FxError> {
        let node = self.document.create_element("div").js()?;
        node.set_class_name(&notification.class_name());
        node.set_attribute("role", "status").js()?;
        node.set_attribute("aria-live", "polite").js()?;

        let content = self.document.create_element("div").js()?;
        content.set_class_name("notification-content");
        let icon = self.document.create_element("i").js()?;
        icon.set_class_name(&format!("fas {}", notification.severity.icon()));
        icon.set_attribute("aria-hidden", "true").js()?;
        let text = self.document.create_element("span").js()?;
        // Plain text only; never parsed as markup
        text.set_text_content(Some(&notification.message));

        content.append_child(&icon).js()?;
        content.append_child(&text).js()?;
        node.append_child(&content).js()?;

        if let Some(html) = node.dyn_ref::<HtmlElement>() {
            html.style().set_css_text(&format!(
                "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
                 padding: 1rem 1.5rem; border-radius: 10px; \
                 box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2); z-index: 10000; \
                 animation: slideInRight 0.3s ease; max-width: 400px;",
                notification.severity.color()
            ));
        }
        Ok(node)
    }

    fn ensure_styles(&self) -> Result<(), FxError> {
        if self.styles_ready.get() {
            return Ok(());
        }
        if self.document.get_element_by_id(STYLE_ID).is_none() {
            let style = self.document.create_element("style").js()?;
            style.set_id(STYLE_ID);
            style.set_text_content(Some(KEYFRAMES));
            let head = self
                .document
                .head()
                .ok_or(FxError::MissingElement("head"))?;
            head.append_child(&style).js()?;
        }
        self.styles_ready.set(true);
        Ok(())
    }
}
