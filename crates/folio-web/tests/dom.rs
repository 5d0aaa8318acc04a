//! Browser tests for the DOM shell
//!
//! Run with `wasm-pack test --headless --chrome crates/folio-web`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use folio_fx::{
    CounterTarget, FxConfig, MemoryStore, NoCarousel, PreferenceStore, ScrollAdapter, Severity,
    Theme,
};
use folio_web::context::UiContext;
use folio_web::engines::NativeScroll;
use folio_web::units;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlButtonElement, HtmlElement, HtmlFormElement};

wasm_bindgen_test_configure!(run_in_browser);

fn fixture(markup: &str) -> Rc<UiContext> {
    fixture_with(markup, FxConfig::default())
}

fn fixture_with(markup: &str, config: FxConfig) -> Rc<UiContext> {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    document.body().unwrap().set_inner_html(markup);
    let scroll = ScrollAdapter::new(Rc::new(NativeScroll::new(window.clone())));
    Rc::new(UiContext::new(
        window,
        document,
        config,
        scroll,
        Box::new(NoCarousel),
        Box::new(MemoryStore::new()),
    ))
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn find(ctx: &UiContext, selector: &str) -> Element {
    ctx.document.query_selector(selector).unwrap().unwrap()
}

fn click(ctx: &UiContext, selector: &str) {
    ctx.document
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

// =============================================================================
// Notifications
// =============================================================================

#[wasm_bindgen_test]
fn test_notification_replaces_previous() {
    let ctx = fixture("");
    ctx.notify("first", Severity::Info);
    ctx.notify("second", Severity::Success);
    assert_eq!(ctx.notifier.attached(), 1);

    let node = ctx.document.query_selector(".notification").unwrap().unwrap();
    assert!(node.class_name().contains("notification-success"));
    assert!(node.text_content().unwrap().contains("second"));
}

#[wasm_bindgen_test]
fn test_notification_text_is_not_markup() {
    let ctx = fixture("");
    ctx.notify("<b>bold</b>", Severity::Info);
    let node = ctx.document.query_selector(".notification").unwrap().unwrap();
    assert!(node.query_selector("b").unwrap().is_none());
    assert!(node.text_content().unwrap().contains("<b>bold</b>"));
}

// =============================================================================
// Navigation
// =============================================================================

#[wasm_bindgen_test]
fn test_hamburger_toggles_menu() {
    let ctx = fixture(
        r##"<nav id="navbar">
            <div id="hamburger"><span></span><span></span><span></span></div>
            <ul id="nav-menu"><li><a class="nav-link" href="#about">About</a></li></ul>
        </nav>"##,
    );
    units::nav::install_menu(&ctx).unwrap();

    let hamburger = ctx.document.get_element_by_id("hamburger").unwrap();
    let menu = ctx.document.get_element_by_id("nav-menu").unwrap();
    assert_eq!(hamburger.get_attribute("aria-expanded").as_deref(), Some("false"));

    click(&ctx, "#hamburger");
    assert_eq!(hamburger.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert!(menu.class_list().contains("active"));

    click(&ctx, ".nav-link");
    assert_eq!(hamburger.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert!(!menu.class_list().contains("active"));
}

#[wasm_bindgen_test]
async fn test_no_link_active_past_last_section() {
    let ctx = fixture(
        r##"<nav><a class="nav-link" href="#one">One</a> <a class="nav-link" href="#two">Two</a></nav>
        <section id="one" style="height: 400px"></section>
        <section id="two" style="height: 400px"></section>
        <footer style="height: 3000px"></footer>"##,
    );
    ctx.window.scroll_to_with_x_and_y(0.0, 0.0);
    units::nav::install_active_section(&ctx).unwrap();
    assert!(find(&ctx, "a[href=\"#one\"]").class_list().contains("active"));

    ctx.window.scroll_to_with_x_and_y(0.0, 1500.0);
    ctx.window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    assert_eq!(ctx.document.query_selector_all(".nav-link.active").unwrap().length(), 0);

    ctx.window.scroll_to_with_x_and_y(0.0, 0.0);
    sleep(50).await;
}

#[wasm_bindgen_test]
fn test_missing_menu_is_a_skip() {
    let ctx = fixture("<main></main>");
    let err = units::nav::install_menu(&ctx).unwrap_err();
    assert!(err.is_skip());
}

// =============================================================================
// Theme
// =============================================================================

#[wasm_bindgen_test]
fn test_theme_toggle_updates_body_and_button() {
    let ctx = fixture(r#"<button id="theme-toggle"><i class="fas fa-moon"></i></button>"#);
    units::theme::install(&ctx).unwrap();
    let body = ctx.document.body().unwrap();
    assert!(body.class_list().contains("dark-mode"));

    click(&ctx, "#theme-toggle");
    assert_eq!(ctx.theme(), Theme::Light);
    assert!(body.class_list().contains("light-mode"));
    assert!(!body.class_list().contains("dark-mode"));

    let toggle = ctx.document.get_element_by_id("theme-toggle").unwrap();
    assert_eq!(toggle.get_attribute("aria-pressed").as_deref(), Some("false"));
    let icon = toggle.query_selector("i").unwrap().unwrap();
    assert!(icon.class_name().contains("fa-moon"));
}

#[wasm_bindgen_test]
fn test_theme_survives_storage_reload() {
    let store = MemoryStore::new();
    store.set("darkMode", "false").unwrap();
    assert_eq!(Theme::load(&store), Theme::Light);
}

// =============================================================================
// Contact Form
// =============================================================================

const FORM: &str = r#"<form id="contactForm" action="/never-called">
    <input name="name" value="">
    <input name="email" value="not-an-email">
    <input name="subject" value="Hi">
    <textarea name="message">short</textarea>
    <button type="submit">Send</button>
</form>"#;

#[wasm_bindgen_test]
fn test_invalid_form_marks_fields_and_notifies() {
    let ctx = fixture(FORM);
    units::form::install(&ctx).unwrap();

    let form = ctx
        .document
        .get_element_by_id("contactForm")
        .unwrap()
        .dyn_into::<HtmlFormElement>()
        .unwrap();
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();

    let invalid = |name: &str| {
        form.query_selector(&format!("[name=\"{}\"]", name))
            .unwrap()
            .unwrap()
            .get_attribute("aria-invalid")
    };
    assert_eq!(invalid("name").as_deref(), Some("true"));
    assert_eq!(invalid("email").as_deref(), Some("true"));
    assert_eq!(invalid("subject").as_deref(), Some("false"));
    assert_eq!(invalid("message").as_deref(), Some("true"));

    let button = form.query_selector("button").unwrap().unwrap();
    assert_eq!(button.text_content().as_deref(), Some("Send"));
    assert_eq!(ctx.notifier.attached(), 1);
}

#[wasm_bindgen_test]
async fn test_failed_send_restores_button_and_notifies() {
    let mut config = FxConfig::default();
    config.form.timeout_ms = 3000;
    let ctx = fixture_with(
        r#"<form id="contactForm" action="http://127.0.0.1:9/">
            <input name="name" value="Jane Doe">
            <input name="email" value="jane@example.com">
            <input name="subject" value="Hello">
            <textarea name="message">This message is long enough.</textarea>
            <button type="submit"><b>Send</b></button>
        </form>"#,
        config,
    );
    units::form::install(&ctx).unwrap();
    let form = find(&ctx, "#contactForm").dyn_into::<HtmlFormElement>().unwrap();
    let button = find(&ctx, "button").dyn_into::<HtmlButtonElement>().unwrap();
    let original = button.inner_html();

    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();
    assert!(button.disabled());
    assert!(button.text_content().unwrap().contains("Sending..."));

    // Ignored while the first request is pending
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();
    assert!(button.disabled());
    assert_eq!(ctx.notifier.attached(), 0);

    for _ in 0..50 {
        if !button.disabled() {
            break;
        }
        sleep(100).await;
    }
    assert!(!button.disabled());
    assert_eq!(button.inner_html(), original);
    assert_eq!(ctx.notifier.attached(), 1);
    assert!(find(&ctx, ".notification").class_list().contains("notification-info"));
}

#[wasm_bindgen_test]
fn test_read_submission_collects_values() {
    let ctx = fixture(FORM);
    let form = ctx
        .document
        .get_element_by_id("contactForm")
        .unwrap()
        .dyn_into::<HtmlFormElement>()
        .unwrap();
    let submission = units::form::read_submission(&form);
    assert_eq!(submission.email, "not-an-email");
    assert_eq!(submission.message, "short");
}

// =============================================================================
// Scroll To Top
// =============================================================================

#[wasm_bindgen_test]
fn test_scroll_top_button_lifts_on_hover() {
    let ctx = fixture("<main></main>");
    units::scroll::install_top_button(&ctx).unwrap();
    let button = find(&ctx, ".scroll-top-btn").dyn_into::<HtmlElement>().unwrap();

    button.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();
    let style = button.style();
    assert_eq!(style.get_property_value("transform").unwrap(), "translateY(-5px) scale(1.1)");
    assert!(style.get_property_value("box-shadow").unwrap().contains("0.2"));

    button.dispatch_event(&Event::new("mouseleave").unwrap()).unwrap();
    let resting = style.get_property_value("transform").unwrap();
    assert!(resting.ends_with("scale(1)"));
}

// =============================================================================
// Counters
// =============================================================================

#[wasm_bindgen_test]
async fn test_counter_lands_on_exact_text() {
    let ctx = fixture(r#"<div class="stat"><h3>250+</h3></div>"#);
    let stat = ctx.document.query_selector(".stat h3").unwrap().unwrap();
    let target = units::counter::target_of(&stat).unwrap();
    assert_eq!(target, CounterTarget::parse("250+").unwrap());

    let handle = units::counter::animate(&ctx.window, stat.clone(), target, 50.0).unwrap();
    assert!(handle.is_running());
    sleep(300).await;
    assert_eq!(stat.text_content().as_deref(), Some("250+"));
    assert!(!handle.is_running());
}

#[wasm_bindgen_test]
fn test_text_without_number_has_no_target() {
    let ctx = fixture(r#"<div class="stat"><h3>Many</h3></div>"#);
    let stat = ctx.document.query_selector(".stat h3").unwrap().unwrap();
    assert!(units::counter::target_of(&stat).is_none());
}

// =============================================================================
// Reading Time
// =============================================================================

#[wasm_bindgen_test]
fn test_reading_time_badge() {
    let words = "word ".repeat(420);
    let ctx = fixture(&format!(
        r#"<span data-reading-time></span><article data-reading-content>{}</article>"#,
        words
    ));
    units::reading::install(&ctx).unwrap();
    let badge = ctx.document.query_selector("[data-reading-time]").unwrap().unwrap();
    assert_eq!(badge.text_content().as_deref(), Some("3 min read"));
}

// =============================================================================
// Boot
// =============================================================================

#[wasm_bindgen_test]
fn test_when_ready_boots_a_parsed_document() {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .body()
        .unwrap()
        .set_inner_html("<main></main>");
    let booted = Rc::new(Cell::new(false));
    let seen = booted.clone();
    folio_web::boot::when_ready(move |ctx| {
        seen.set(true);
        ctx.stop_effects();
    })
    .unwrap();
    assert!(booted.get());
}

#[wasm_bindgen_test]
fn test_boot_isolates_missing_units() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    document.body().unwrap().set_inner_html("<main><p>No markup contract here</p></main>");
    let (ctx, report) = folio_web::boot::boot(window, document);
    assert!(report.failed.is_empty());
    assert!(report.skipped.contains(&"menu"));
    assert!(report.skipped.contains(&"carousel"));
    assert!(report.installed.contains(&"scroll-top"));
    ctx.stop_effects();
    assert!(ctx.running_effects().is_empty());
}
