#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use careswap_prefs::{FontSize, Preferences, PrefsConfig, Theme};
use careswap_web::{a11y, app};
use careswap_web::bindings::{self, PrefsHandle};
use careswap_web::dom;
use careswap_web::storage::LocalStorageStore;
use careswap_web::surface::DocumentSurface;
use careswap_web::system::SystemTheme;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
    <button data-theme-toggle id="toggle"></button>
    <button data-font-size="small" id="fs-small"></button>
    <button data-font-size="large" id="fs-large"></button>
    <button data-font-size="enormous" id="fs-bogus"></button>
    <input type="radio" name="font_size" value="small" id="radio-small" />
    <input type="radio" name="font_size" value="large" id="radio-large" />
    <input type="checkbox" name="high_contrast" id="hc-a" />
    <input type="checkbox" name="high_contrast" id="hc-b" />
    <input type="checkbox" name="reduced_motion" id="rm" />
    <div id="a11y-status"></div>
"#;

fn mount_fixture(prefix: &str) -> PrefsHandle {
    let document = dom::document().expect("document");
    let body = document.body().expect("body");
    body.set_inner_html(FIXTURE);
    let _ = body.set_attribute("class", "");

    let config = PrefsConfig {
        theme_key: format!("{prefix}.theme"),
        accessibility_key: format!("{prefix}.a11y"),
        ..PrefsConfig::default()
    };
    let storage = dom::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .expect("localStorage");
    let _ = storage.remove_item(&config.theme_key);
    let _ = storage.remove_item(&config.accessibility_key);

    let surface = DocumentSurface::new(document.clone(), &config);
    let handle = Rc::new(RefCell::new(Preferences::new(
        LocalStorageStore::new(),
        surface,
        config,
    )));
    bindings::init_theme(&handle, &document, &SystemTheme::detect());
    bindings::init_accessibility(&handle, &document);
    handle
}

fn element<T: JsCast>(id: &str) -> T {
    dom::document()
        .and_then(|doc| doc.get_element_by_id(id))
        .expect("fixture element")
        .dyn_into::<T>()
        .expect("fixture element type")
}

fn body_has(class: &str) -> bool {
    dom::document()
        .and_then(|doc| doc.body())
        .is_some_and(|body| body.class_list().contains(class))
}

fn stored(key: &str) -> Option<String> {
    dom::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(key).ok().flatten())
}

#[wasm_bindgen_test]
fn toggle_button_flips_theme_and_persists() {
    let handle = mount_fixture("t1");
    let before = handle.borrow().effective_theme();
    element::<HtmlElement>("toggle").click();
    let after = before.flipped();
    assert_ne!(handle.borrow().effective_theme(), before);
    assert_eq!(handle.borrow().effective_theme(), after);
    assert_eq!(stored("t1.theme").as_deref(), Some(after.as_str()));

    let root = dom::document()
        .and_then(|doc| doc.document_element())
        .expect("root");
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some(after.as_str()));
    let toggle = element::<HtmlElement>("toggle");
    let expected_label = if after == Theme::Dark {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };
    assert_eq!(
        toggle.get_attribute("aria-label").as_deref(),
        Some(expected_label)
    );
}

#[wasm_bindgen_test]
fn font_size_button_updates_classes_controls_and_live_region() {
    let handle = mount_fixture("t2");
    assert!(body_has("font-size-medium"));

    element::<HtmlElement>("fs-large").click();
    assert!(body_has("font-size-large"));
    assert!(!body_has("font-size-medium"));
    assert!(element::<HtmlElement>("fs-large").class_list().contains("active"));
    assert!(!element::<HtmlElement>("fs-small").class_list().contains("active"));
    assert!(element::<HtmlInputElement>("radio-large").checked());
    assert_eq!(handle.borrow().settings().font_size, FontSize::Large);
    assert_eq!(
        element::<HtmlElement>("a11y-status").text_content().as_deref(),
        Some("Font size changed to large")
    );
    assert_eq!(
        stored("t2.a11y").as_deref(),
        Some(r#"{"fontSize":"large","highContrast":false,"reducedMotion":false}"#)
    );
}

#[wasm_bindgen_test]
fn unknown_font_size_control_is_ignored() {
    let handle = mount_fixture("t3");
    element::<HtmlElement>("fs-bogus").click();
    assert!(body_has("font-size-medium"));
    assert!(!body_has("font-size-enormous"));
    assert_eq!(handle.borrow().settings().font_size, FontSize::Medium);
}

#[wasm_bindgen_test]
fn checkbox_change_syncs_the_whole_group() {
    let handle = mount_fixture("t4");
    let first = element::<HtmlInputElement>("hc-a");
    first.set_checked(true);
    let change = Event::new("change").expect("event");
    first.dispatch_event(&change).expect("dispatch");

    assert!(body_has("high-contrast"));
    assert!(element::<HtmlInputElement>("hc-b").checked());
    assert!(!element::<HtmlInputElement>("rm").checked());
    assert!(handle.borrow().settings().high_contrast);
    assert!(
        stored("t4.a11y")
            .unwrap_or_default()
            .contains(r#""highContrast":true"#)
    );
}

#[wasm_bindgen_test]
fn radio_change_applies_font_size() {
    let handle = mount_fixture("t5");
    let radio = element::<HtmlInputElement>("radio-small");
    radio.set_checked(true);
    radio
        .dispatch_event(&Event::new("change").expect("event"))
        .expect("dispatch");
    assert!(body_has("font-size-small"));
    assert_eq!(handle.borrow().settings().font_size, FontSize::Small);
}

#[wasm_bindgen_test]
fn critical_css_is_injected_once() {
    let document = dom::document().expect("document");
    a11y::inject_critical_css(&document);
    a11y::inject_critical_css(&document);
    let styles = document
        .query_selector_all(&format!("#{}", a11y::CRITICAL_CSS_ID))
        .expect("query");
    assert_eq!(styles.length(), 1);
    let css = styles
        .get(0)
        .and_then(|node| node.text_content())
        .unwrap_or_default();
    assert!(css.contains("body.reduced-motion"));
}

#[wasm_bindgen_test]
fn mount_routes_log_records_to_the_console() {
    let document = dom::document().expect("document");
    document.body().expect("body").set_inner_html(FIXTURE);
    assert!(app::mount().is_some());
    assert!(log::max_level() >= log::LevelFilter::Warn);
    assert!(document.get_element_by_id(a11y::CRITICAL_CSS_ID).is_some());
}
