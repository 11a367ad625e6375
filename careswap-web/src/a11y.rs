// Accessibility helpers

use web_sys::Document;

pub const CRITICAL_CSS_ID: &str = "careswap-critical-css";

/// Critical CSS for focus indicators, the screen-reader-only helper class and
/// the reduced-motion switch.
///
/// Inlined in the page head so it applies before the stylesheet loads.
#[must_use]
pub const fn critical_css() -> &'static str {
    ":focus-visible{outline:3px solid #2563eb;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;} body.reduced-motion *{animation:none!important;transition:none!important;scroll-behavior:auto!important}"
}

/// Inline [`critical_css`] into the page head once.
pub fn inject_critical_css(document: &Document) {
    if document.get_element_by_id(CRITICAL_CSS_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        log::debug!("no <head>, critical CSS not injected");
        return;
    };
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id(CRITICAL_CSS_ID);
    style.set_text_content(Some(critical_css()));
    if head.append_child(&style).is_err() {
        log::warn!("could not attach critical CSS");
    }
}

/// Make sure a polite live region with `id` exists, creating it at the end of the body.
pub fn ensure_status_region(document: &Document, id: &str) {
    if document.get_element_by_id(id).is_some() {
        return;
    }
    let Some(body) = document.body() else {
        return;
    };
    let Ok(region) = document.create_element("div") else {
        return;
    };
    region.set_id(id);
    let _ = region.set_attribute("class", "sr-only");
    let _ = region.set_attribute("role", "status");
    let _ = region.set_attribute("aria-live", "polite");
    if body.append_child(&region).is_err() {
        log::warn!("could not attach live region #{id}");
    }
}

/// Update the live region so assistive technology announces `msg`.
pub fn announce(document: &Document, id: &str, msg: &str) {
    if let Some(node) = document.get_element_by_id(id) {
        node.set_text_content(Some(msg));
    } else {
        log::debug!("no live region #{id}, dropping announcement");
    }
}

/// Announcement text for a font-size change.
#[must_use]
pub fn font_size_message(size: careswap_prefs::FontSize) -> String {
    format!("Font size changed to {}", size.label().to_lowercase())
}
