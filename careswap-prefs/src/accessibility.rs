use crate::context::Preferences;
use crate::error::Result;
use crate::presentation::{Surface, plan_font_size, plan_high_contrast, plan_reduced_motion};
use crate::settings::{AccessibilitySettings, FontSize};
use crate::store::PreferenceStore;

/// Accessibility operations over a [`Preferences`] context.
///
/// Every `apply_*` call re-reads the stored record, overwrites one field and
/// saves the whole record back, so fields written elsewhere survive.
pub struct AccessibilityManager<'a, S, D> {
    prefs: &'a mut Preferences<S, D>,
}

impl<'a, S: PreferenceStore, D: Surface> AccessibilityManager<'a, S, D> {
    pub(crate) fn new(prefs: &'a mut Preferences<S, D>) -> Self {
        Self { prefs }
    }

    /// Load stored settings and apply every field.
    pub fn init(&mut self) -> AccessibilitySettings {
        let settings = self.get_settings();
        log::debug!("initial accessibility settings {settings:?}");
        self.apply_font_size(settings.font_size);
        self.apply_high_contrast(settings.high_contrast);
        self.apply_reduced_motion(settings.reduced_motion);
        self.prefs.settings
    }

    /// Stored settings with defaults filled in. Never fails.
    #[must_use]
    pub fn get_settings(&self) -> AccessibilitySettings {
        let key = &self.prefs.config.accessibility_key;
        match self.prefs.try_read(key) {
            Ok(Some(raw)) => AccessibilitySettings::from_stored(&raw).unwrap_or_else(|| {
                log::debug!("stored accessibility record is malformed, using defaults");
                AccessibilitySettings::default()
            }),
            Ok(None) => AccessibilitySettings::default(),
            Err(err) => {
                log::warn!("reading `{key}` failed: {err}");
                self.prefs.settings
            }
        }
    }

    /// Persist the full record as given.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized or the store rejects it.
    pub fn save_settings(&mut self, settings: &AccessibilitySettings) -> Result<()> {
        let raw = settings.to_stored()?;
        self.prefs
            .store
            .set(&self.prefs.config.accessibility_key, &raw)
    }

    pub fn apply_font_size(&mut self, size: FontSize) {
        self.prefs.surface.apply_patch(&plan_font_size(size));
        self.update(|settings| settings.font_size = size);
    }

    pub fn apply_high_contrast(&mut self, enabled: bool) {
        self.prefs.surface.apply_patch(&plan_high_contrast(enabled));
        self.update(|settings| settings.high_contrast = enabled);
    }

    pub fn apply_reduced_motion(&mut self, enabled: bool) {
        self.prefs.surface.apply_patch(&plan_reduced_motion(enabled));
        self.update(|settings| settings.reduced_motion = enabled);
    }

    fn update(&mut self, change: impl FnOnce(&mut AccessibilitySettings)) {
        let mut settings = self.get_settings();
        change(&mut settings);
        self.prefs.settings = settings;
        if let Err(err) = self.save_settings(&settings) {
            log::warn!("persisting accessibility settings failed: {err}");
        }
    }
}
