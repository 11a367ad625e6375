use crate::accessibility::AccessibilityManager;
use crate::config::PrefsConfig;
use crate::error::Result;
use crate::presentation::Surface;
use crate::settings::AccessibilitySettings;
use crate::store::PreferenceStore;
use crate::theme::{Theme, ThemeManager};

/// Owning context for both managers.
///
/// Holds the store handle, the presentation surface and the in-memory state.
/// The managers are borrowed views obtained through [`Self::theme`] and
/// [`Self::accessibility`]; they share the store but not each other's state.
pub struct Preferences<S, D> {
    pub(crate) store: S,
    pub(crate) surface: D,
    pub(crate) config: PrefsConfig,
    pub(crate) theme: Theme,
    pub(crate) session_theme: Option<Theme>,
    pub(crate) settings: AccessibilitySettings,
}

impl<S: PreferenceStore, D: Surface> Preferences<S, D> {
    #[must_use]
    pub fn new(store: S, surface: D, config: PrefsConfig) -> Self {
        Self {
            store,
            surface,
            config,
            theme: Theme::default(),
            session_theme: None,
            settings: AccessibilitySettings::default(),
        }
    }

    /// Initialize both managers from persisted state.
    pub fn init(&mut self, system_prefers_dark: bool) {
        self.theme().init(system_prefers_dark);
        self.accessibility().init();
    }

    pub fn theme(&mut self) -> ThemeManager<'_, S, D> {
        ThemeManager::new(self)
    }

    pub fn accessibility(&mut self) -> AccessibilityManager<'_, S, D> {
        AccessibilityManager::new(self)
    }

    #[must_use]
    pub const fn config(&self) -> &PrefsConfig {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    #[must_use]
    pub const fn surface(&self) -> &D {
        &self.surface
    }

    /// Theme currently applied to the document.
    #[must_use]
    pub const fn effective_theme(&self) -> Theme {
        self.theme
    }

    /// Settings currently applied to the document.
    #[must_use]
    pub const fn settings(&self) -> AccessibilitySettings {
        self.settings
    }

    pub fn into_parts(self) -> (S, D) {
        (self.store, self.surface)
    }

    pub(crate) fn try_read(&self, key: &str) -> Result<Option<String>> {
        self.store.get(key)
    }

    pub(crate) fn read(&self, key: &str) -> Option<String> {
        self.try_read(key).unwrap_or_else(|err| {
            log::warn!("reading `{key}` failed: {err}");
            None
        })
    }

    /// Persist `value`; failures are logged and the in-memory state stands.
    pub(crate) fn write(&mut self, key: &str, value: &str) -> bool {
        match self.store.set(key, value) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("persisting `{key}` failed: {err}");
                false
            }
        }
    }
}
