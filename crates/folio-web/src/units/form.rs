//! Contact form validation and async submission

use std::cell::Cell;
use std::rc::Rc;

use folio_fx::form::{
    classify_response, outcome_notification, INVALID_FORM_MESSAGE, SENDING_LABEL,
};
use folio_fx::{ContactSubmission, Field, FxError, Severity, SubmitError, ValidationReport};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    AbortController, Element, FormData, Headers, HtmlButtonElement, HtmlFormElement,
    HtmlInputElement, HtmlTextAreaElement, Request, RequestInit, Response, Window,
};

use crate::context::UiContext;
use crate::util::{describe, log, query, set_timeout};

/// Wire `#contactForm`
pub fn install(ctx: &Rc<UiContext>) -> Result<(), FxError> {
    let form = query(&ctx.document, "#contactForm")?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| FxError::MissingElement("#contactForm"))?;
    let _ = form.set_attribute("novalidate", "");

    let in_flight = Rc::new(Cell::new(false));
    let handler_ctx = ctx.clone();
    let handler_form = form.clone();
    ctx.listen(&form, "submit", move |event| {
        event.prevent_default();
        submit(&handler_ctx, &handler_form, &in_flight);
    })?;
    Ok(())
}

fn field_element(form: &HtmlFormElement, field: Field) -> Option<Element> {
    form.query_selector(&format!("[name=\"{}\"]", field.input_name()))
        .ok()
        .flatten()
}

fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Current field values
pub fn read_submission(form: &HtmlFormElement) -> ContactSubmission {
    let value = |field| {
        field_element(form, field)
            .map(|el| field_value(&el))
            .unwrap_or_default()
    };
    ContactSubmission {
        name: value(Field::Name),
        email: value(Field::Email),
        subject: value(Field::Subject),
        message: value(Field::Message),
    }
}

/// Reflect each field's status in `aria-invalid`
pub fn mark_fields(form: &HtmlFormElement, report: &ValidationReport) {
    for (field, status) in report.iter() {
        if let Some(element) = field_element(form, field) {
            let _ = element.set_attribute("aria-invalid", status.aria_invalid());
        }
    }
}

fn submit(ctx: &Rc<UiContext>, form: &HtmlFormElement, in_flight: &Rc<Cell<bool>>) {
    if in_flight.get() {
        ctx.debug("[contact-form] Submission already in flight");
        return;
    }

    let report = read_submission(form).validate();
    mark_fields(form, &report);
    if !report.is_valid() {
        ctx.notify(INVALID_FORM_MESSAGE, Severity::Info);
        return;
    }

    let guard = SubmitGuard::engage(form, in_flight.clone());
    let ctx = ctx.clone();
    let form = form.clone();
    spawn_local(async move {
        let outcome = post(&ctx.window, &form, ctx.config.form.timeout_ms).await;
        drop(guard);
        match &outcome {
            Ok(()) => {
                form.reset();
                for field in Field::ALL {
                    if let Some(element) = field_element(&form, field) {
                        let _ = element.remove_attribute("aria-invalid");
                    }
                }
            }
            Err(e) => log(&format!("[contact-form] {}", e)),
        }
        let (message, severity) = outcome_notification(&outcome);
        ctx.notify(&message, severity);
    });
}

/// Disables the submit button while a request is in flight and restores it
/// on drop, whatever the outcome
struct SubmitGuard {
    button: Option<HtmlButtonElement>,
    original_html: String,
    in_flight: Rc<Cell<bool>>,
}

impl SubmitGuard {
    fn engage(form: &HtmlFormElement, in_flight: Rc<Cell<bool>>) -> Self {
        in_flight.set(true);
        let button = form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let original_html = match &button {
            Some(button) => {
                let html = button.inner_html();
                button.set_inner_html(&format!(
                    "<i class=\"fas fa-spinner fa-spin\" aria-hidden=\"true\"></i> {}",
                    SENDING_LABEL
                ));
                button.set_disabled(true);
                html
            }
            None => String::new(),
        };
        Self {
            button,
            original_html,
            in_flight,
        }
    }
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        if let Some(button) = &self.button {
            button.set_inner_html(&self.original_html);
            button.set_disabled(false);
        }
        self.in_flight.set(false);
    }
}

/// POST the form to its `action` as multipart form data
async fn post(window: &Window, form: &HtmlFormElement, timeout_ms: u32) -> Result<(), SubmitError> {
    let transport = |e: wasm_bindgen::JsValue| SubmitError::Transport(describe(&e));

    let data = FormData::new_with_form(form).map_err(transport)?;
    let headers = Headers::new().map_err(transport)?;
    headers.set("Accept", "application/json").map_err(transport)?;
    let controller = AbortController::new().map_err(transport)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&data);
    init.set_headers(&headers);
    init.set_signal(Some(&controller.signal()));
    let request = Request::new_with_str_and_init(&form.action(), &init).map_err(transport)?;

    let timed_out = Rc::new(Cell::new(false));
    let timer = {
        let timed_out = timed_out.clone();
        set_timeout(window, timeout_ms, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    let fetched = JsFuture::from(window.fetch_with_request(&request)).await;
    if let Ok(id) = timer {
        window.clear_timeout_with_handle(id);
    }
    let response: Response = match fetched {
        Ok(value) => value.dyn_into().map_err(transport)?,
        Err(_) if timed_out.get() => return Err(SubmitError::Timeout),
        Err(e) => return Err(transport(e)),
    };

    let body = match response.text() {
        Ok(promise) => JsFuture::from(promise).await.ok().and_then(|v| v.as_string()),
        Err(_) => None,
    };
    classify_response(response.status(), body.as_deref())
}
