use crate::context::Preferences;
use crate::error::{PrefsError, Result};
use crate::presentation::{Surface, plan_theme};
use crate::store::PreferenceStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Theme matching the system "prefers dark" signal.
    #[must_use]
    pub const fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(PrefsError::UnknownTheme(other.to_string())),
        }
    }
}

/// Theme operations over a [`Preferences`] context.
///
/// An explicit choice (persisted, or made this session when storage is
/// unavailable) always wins over the system signal.
pub struct ThemeManager<'a, S, D> {
    prefs: &'a mut Preferences<S, D>,
}

impl<'a, S: PreferenceStore, D: Surface> ThemeManager<'a, S, D> {
    pub(crate) fn new(prefs: &'a mut Preferences<S, D>) -> Self {
        Self { prefs }
    }

    /// Resolve and apply the initial theme without recording a preference.
    pub fn init(&mut self, system_prefers_dark: bool) -> Theme {
        let theme = self
            .explicit()
            .unwrap_or_else(|| Theme::from_system(system_prefers_dark));
        log::debug!("initial theme {theme} (system prefers dark: {system_prefers_dark})");
        self.apply(theme);
        theme
    }

    /// Apply `theme` and persist it as the user's explicit choice.
    pub fn set_theme(&mut self, theme: Theme) {
        self.apply(theme);
        self.prefs.session_theme = Some(theme);
        let key = self.prefs.config.theme_key.clone();
        self.prefs.write(&key, theme.as_str());
    }

    /// Flip the current theme and return the new one.
    ///
    /// Without an explicit choice the theme on screen is flipped, so the
    /// first click after following a dark system theme switches to light.
    pub fn toggle(&mut self) -> Theme {
        let next = self.explicit().unwrap_or(self.prefs.theme).flipped();
        self.set_theme(next);
        next
    }

    /// The user's theme, `light` when none was chosen.
    #[must_use]
    pub fn get(&self) -> Theme {
        self.explicit().unwrap_or_default()
    }

    /// The theme currently applied to the document.
    #[must_use]
    pub fn effective(&self) -> Theme {
        self.prefs.theme
    }

    /// Explicit preference, if any.
    #[must_use]
    pub fn explicit(&self) -> Option<Theme> {
        self.stored().or(self.prefs.session_theme)
    }

    /// Follow a system preference change unless the user has chosen a theme.
    ///
    /// Returns `true` when the applied theme changed.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> bool {
        if let Some(theme) = self.explicit() {
            log::debug!("system theme change ignored, explicit preference is {theme}");
            return false;
        }
        let next = Theme::from_system(prefers_dark);
        let changed = next != self.prefs.theme;
        self.apply(next);
        changed
    }

    fn stored(&self) -> Option<Theme> {
        let raw = self.prefs.read(&self.prefs.config.theme_key)?;
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(err) => {
                log::warn!("ignoring stored theme: {err}");
                None
            }
        }
    }

    fn apply(&mut self, theme: Theme) {
        self.prefs.theme = theme;
        self.prefs.surface.apply_patch(&plan_theme(theme));
    }
}
