use crate::constants;
use crate::error::{PrefsError, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Storage keys, control markers and logging level used by the managers.
///
/// Every field has a default so a page can override only what it needs:
/// `{"themeKey": "my-theme"}` is a complete config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefsConfig {
    #[serde(default = "PrefsConfig::default_theme_key")]
    pub theme_key: String,
    #[serde(default = "PrefsConfig::default_accessibility_key")]
    pub accessibility_key: String,
    #[serde(default = "PrefsConfig::default_theme_toggle_selector")]
    pub theme_toggle_selector: String,
    #[serde(default = "PrefsConfig::default_font_size_button_selector")]
    pub font_size_button_selector: String,
    #[serde(default = "PrefsConfig::default_font_size_radio_selector")]
    pub font_size_radio_selector: String,
    #[serde(default = "PrefsConfig::default_high_contrast_selector")]
    pub high_contrast_selector: String,
    #[serde(default = "PrefsConfig::default_reduced_motion_selector")]
    pub reduced_motion_selector: String,
    #[serde(default = "PrefsConfig::default_status_region_id")]
    pub status_region_id: String,
    /// Announce font-size changes made through the buttons in the live region.
    #[serde(default = "PrefsConfig::default_announce_font_size")]
    pub announce_font_size: bool,
    #[serde(default = "PrefsConfig::default_log_level")]
    pub log_level: String,
}

impl PrefsConfig {
    fn default_theme_key() -> String {
        constants::THEME_STORAGE_KEY.to_string()
    }

    fn default_accessibility_key() -> String {
        constants::ACCESSIBILITY_STORAGE_KEY.to_string()
    }

    fn default_theme_toggle_selector() -> String {
        constants::THEME_TOGGLE_SELECTOR.to_string()
    }

    fn default_font_size_button_selector() -> String {
        constants::FONT_SIZE_BUTTON_SELECTOR.to_string()
    }

    fn default_font_size_radio_selector() -> String {
        constants::FONT_SIZE_RADIO_SELECTOR.to_string()
    }

    fn default_high_contrast_selector() -> String {
        constants::HIGH_CONTRAST_SELECTOR.to_string()
    }

    fn default_reduced_motion_selector() -> String {
        constants::REDUCED_MOTION_SELECTOR.to_string()
    }

    fn default_status_region_id() -> String {
        constants::STATUS_REGION_ID.to_string()
    }

    const fn default_announce_font_size() -> bool {
        true
    }

    fn default_log_level() -> String {
        "warn".to_string()
    }

    /// Parse a JSON config block, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the result fails [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the managers rely on.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("themeKey", &self.theme_key),
            ("accessibilityKey", &self.accessibility_key),
            ("themeToggleSelector", &self.theme_toggle_selector),
            ("fontSizeButtonSelector", &self.font_size_button_selector),
            ("fontSizeRadioSelector", &self.font_size_radio_selector),
            ("highContrastSelector", &self.high_contrast_selector),
            ("reducedMotionSelector", &self.reduced_motion_selector),
            ("statusRegionId", &self.status_region_id),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(PrefsError::InvalidConfig {
                    field,
                    reason: "must not be empty",
                });
            }
        }
        if self.theme_key == self.accessibility_key {
            return Err(PrefsError::InvalidConfig {
                field: "accessibilityKey",
                reason: "must differ from themeKey",
            });
        }
        self.level_filter().map(|_| ())
    }

    /// The configured maximum log level.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::InvalidConfig`] when `logLevel` is not a `log` level name.
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| PrefsError::InvalidConfig {
                field: "logLevel",
                reason: "must be one of off, error, warn, info, debug, trace",
            })
    }
}

impl Default for PrefsConfig {
    fn default() -> Self {
        Self {
            theme_key: Self::default_theme_key(),
            accessibility_key: Self::default_accessibility_key(),
            theme_toggle_selector: Self::default_theme_toggle_selector(),
            font_size_button_selector: Self::default_font_size_button_selector(),
            font_size_radio_selector: Self::default_font_size_radio_selector(),
            high_contrast_selector: Self::default_high_contrast_selector(),
            reduced_motion_selector: Self::default_reduced_motion_selector(),
            status_region_id: Self::default_status_region_id(),
            announce_font_size: Self::default_announce_font_size(),
            log_level: Self::default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let config = PrefsConfig::from_json(r#"{"themeKey":"site-theme","logLevel":"debug"}"#)
            .expect("config should parse");
        assert_eq!(config.theme_key, "site-theme");
        assert_eq!(config.accessibility_key, constants::ACCESSIBILITY_STORAGE_KEY);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
        assert!(config.announce_font_size);
    }

    #[test]
    fn empty_object_equals_default() {
        assert_eq!(PrefsConfig::from_json("{}").unwrap(), PrefsConfig::default());
    }

    #[test]
    fn rejects_shared_storage_key() {
        let err = PrefsConfig::from_json(
            r#"{"themeKey":"prefs","accessibilityKey":"prefs"}"#,
        )
        .expect_err("shared key should be rejected");
        assert!(matches!(
            err,
            PrefsError::InvalidConfig {
                field: "accessibilityKey",
                ..
            }
        ));
    }

    #[test]
    fn rejects_blank_selector_and_bad_level() {
        let blank = PrefsConfig {
            theme_toggle_selector: "  ".into(),
            ..PrefsConfig::default()
        };
        assert!(blank.validate().is_err());

        let noisy = PrefsConfig {
            log_level: "chatty".into(),
            ..PrefsConfig::default()
        };
        let msg = noisy.validate().unwrap_err().to_string();
        assert!(msg.contains("logLevel"), "{msg}");
    }
}
