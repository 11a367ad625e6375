//! Wires data-attribute controls and the system signal to the managers.

use crate::a11y;
use crate::dom::{self, query_all};
use crate::storage::LocalStorageStore;
use crate::surface::DocumentSurface;
use crate::system::SystemTheme;
use careswap_prefs::constants::FONT_SIZE_BUTTON_ATTRIBUTE;
use careswap_prefs::{CheckboxGroup, FontSize, Preferences};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

pub type PagePreferences = Preferences<LocalStorageStore, DocumentSurface>;

/// Shared handle captured by every event closure.
pub type PrefsHandle = Rc<RefCell<PagePreferences>>;

/// Apply the initial theme, follow the system signal and bind the toggles.
pub fn init_theme(handle: &PrefsHandle, document: &Document, system: &SystemTheme) {
    handle.borrow_mut().theme().init(system.prefers_dark());
    let follower = Rc::clone(handle);
    system.subscribe(move |prefers_dark| {
        if follower.borrow_mut().theme().on_system_change(prefers_dark) {
            log::debug!("theme follows system, prefers dark: {prefers_dark}");
        }
    });
    bind_theme_toggles(handle, document);
}

pub fn bind_theme_toggles(handle: &PrefsHandle, document: &Document) {
    let selector = handle.borrow().config().theme_toggle_selector.clone();
    for toggle in query_all(document, &selector) {
        let handle = Rc::clone(handle);
        dom::listen(&toggle, "click", move |_event| {
            let theme = handle.borrow_mut().theme().toggle();
            log::debug!("theme toggled to {theme}");
        });
    }
}

/// Apply stored accessibility settings and bind their controls.
pub fn init_accessibility(handle: &PrefsHandle, document: &Document) {
    handle.borrow_mut().accessibility().init();
    bind_events(handle, document);
}

pub fn bind_events(handle: &PrefsHandle, document: &Document) {
    let config = handle.borrow().config().clone();

    for button in query_all(document, &config.font_size_button_selector) {
        let handle = Rc::clone(handle);
        let document = document.clone();
        let region = config.status_region_id.clone();
        let announce = config.announce_font_size;
        let source = button.clone();
        dom::listen(&button, "click", move |_event| {
            let raw = source
                .get_attribute(FONT_SIZE_BUTTON_ATTRIBUTE)
                .unwrap_or_default();
            let Some(size) = parse_font_size(&raw) else {
                return;
            };
            handle.borrow_mut().accessibility().apply_font_size(size);
            if announce {
                a11y::announce(&document, &region, &a11y::font_size_message(size));
            }
        });
    }

    for radio in inputs(document, &config.font_size_radio_selector) {
        let handle = Rc::clone(handle);
        let source = radio.clone();
        dom::listen(&radio, "change", move |_event| {
            if !source.checked() {
                return;
            }
            if let Some(size) = parse_font_size(&source.value()) {
                handle.borrow_mut().accessibility().apply_font_size(size);
            }
        });
    }

    for group in CheckboxGroup::ALL {
        let selector = match group {
            CheckboxGroup::HighContrast => &config.high_contrast_selector,
            CheckboxGroup::ReducedMotion => &config.reduced_motion_selector,
        };
        for input in inputs(document, selector) {
            let handle = Rc::clone(handle);
            let source = input.clone();
            dom::listen(&input, "change", move |_event| {
                let checked = source.checked();
                let mut prefs = handle.borrow_mut();
                let mut manager = prefs.accessibility();
                match group {
                    CheckboxGroup::HighContrast => manager.apply_high_contrast(checked),
                    CheckboxGroup::ReducedMotion => manager.apply_reduced_motion(checked),
                }
            });
        }
    }
}

fn inputs(document: &Document, selector: &str) -> Vec<HtmlInputElement> {
    query_all(document, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
        .collect()
}

/// Control values outside the closed set never reach the document.
fn parse_font_size(raw: &str) -> Option<FontSize> {
    raw.parse()
        .map_err(|err| log::warn!("ignoring font size control: {err}"))
        .ok()
}
