use crate::bindings::{self, PrefsHandle};
use crate::storage::LocalStorageStore;
use crate::surface::DocumentSurface;
use crate::system::SystemTheme;
use crate::{a11y, config, dom};
use careswap_prefs::Preferences;
use log::LevelFilter;
use std::cell::RefCell;
use std::rc::Rc;

/// Build the preference context for the current page and bind every control.
///
/// Returns `None` when there is no document to work with.
#[must_use]
pub fn mount() -> Option<PrefsHandle> {
    let document = dom::document()?;
    let config = config::load_page_config(&document);
    init_logging(config.level_filter().unwrap_or(LevelFilter::Warn));

    a11y::inject_critical_css(&document);
    a11y::ensure_status_region(&document, &config.status_region_id);

    let store = LocalStorageStore::new();
    if !store.is_available() {
        log::warn!("preferences will not survive this page load");
    }
    let surface = DocumentSurface::new(document.clone(), &config);
    let handle = Rc::new(RefCell::new(Preferences::new(store, surface, config)));

    bindings::init_theme(&handle, &document, &SystemTheme::detect());
    bindings::init_accessibility(&handle, &document);
    Some(handle)
}

/// Route the `log` facade to the browser console; `Off` installs nothing.
fn init_logging(filter: LevelFilter) {
    let Some(level) = filter.to_level() else {
        return;
    };
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}
