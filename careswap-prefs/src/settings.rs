use crate::error::{PrefsError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Text scale applied to the document body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
    Xlarge,
}

impl FontSize {
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::Xlarge];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Xlarge => "xlarge",
        }
    }

    /// Human-readable name used in announcements and button captions.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::Xlarge => "Extra large",
        }
    }

    /// Body class carried while this size is active.
    #[must_use]
    pub fn class_name(self) -> String {
        format!("{}{}", crate::constants::FONT_SIZE_CLASS_PREFIX, self.as_str())
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontSize {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s.trim())
            .ok_or_else(|| PrefsError::UnknownFontSize(s.to_string()))
    }
}

/// The persisted accessibility record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilitySettings {
    pub font_size: FontSize,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

impl AccessibilitySettings {
    /// Parse a stored record, replacing absent or ill-typed fields with defaults.
    ///
    /// Returns `None` when the text is not a JSON object at all.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        let Value::Object(map) = serde_json::from_str::<Value>(raw).ok()? else {
            return None;
        };
        let defaults = Self::default();
        let field = |name: &str| map.get(name).cloned();
        Some(Self {
            font_size: field("fontSize")
                .and_then(|v| serde_json::from_value(v).ok())
                .unwrap_or(defaults.font_size),
            high_contrast: field("highContrast")
                .and_then(|v| v.as_bool())
                .unwrap_or(defaults.high_contrast),
            reduced_motion: field("reducedMotion")
                .and_then(|v| v.as_bool())
                .unwrap_or(defaults.reduced_motion),
        })
    }

    /// Serialize the full record for storage.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Json`] if serialization fails.
    pub fn to_stored(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
