use crate::dom;
use careswap_prefs::{PreferenceStore, PrefsError, Result};
use web_sys::Storage;

/// [`PreferenceStore`] backed by the browser's `localStorage`.
///
/// When `localStorage` is missing or access throws (privacy modes, disabled
/// storage) every operation reports [`PrefsError::Storage`] and the managers
/// fall back to in-session state.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    #[must_use]
    pub fn new() -> Self {
        let storage = dom::window().and_then(|win| match win.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {}", dom::js_error_message(&err));
                None
            }
        });
        Self { storage }
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn storage(&self) -> Result<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| PrefsError::storage("localStorage unavailable"))
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|err| PrefsError::storage(dom::js_error_message(&err)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| PrefsError::storage(dom::js_error_message(&err)))
    }
}
