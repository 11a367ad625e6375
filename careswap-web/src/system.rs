use crate::dom;
use careswap_prefs::constants::SYSTEM_DARK_QUERY;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};

/// The system "prefers dark" signal.
pub struct SystemTheme {
    query: Option<MediaQueryList>,
}

impl SystemTheme {
    /// Look up the media query; browsers without `matchMedia` report light.
    #[must_use]
    pub fn detect() -> Self {
        let query = dom::window().and_then(|win| match win.match_media(SYSTEM_DARK_QUERY) {
            Ok(query) => query,
            Err(err) => {
                log::warn!("matchMedia failed: {}", dom::js_error_message(&err));
                None
            }
        });
        Self { query }
    }

    #[must_use]
    pub fn prefers_dark(&self) -> bool {
        self.query.as_ref().is_some_and(MediaQueryList::matches)
    }

    /// Call `on_change` with the new signal whenever the system preference flips.
    pub fn subscribe(&self, mut on_change: impl FnMut(bool) + 'static) {
        let Some(query) = self.query.as_ref() else {
            return;
        };
        let source = query.clone();
        dom::listen(query, "change", move |event| {
            let prefers_dark = event
                .dyn_ref::<MediaQueryListEvent>()
                .map_or_else(|| source.matches(), MediaQueryListEvent::matches);
            on_change(prefers_dark);
        });
    }
}
