//! Storage keys, document class names and control markers shared by the
//! core planners and the browser adapter.

pub const THEME_STORAGE_KEY: &str = "careswap-theme";
pub const ACCESSIBILITY_STORAGE_KEY: &str = "careswap-accessibility";

/// Attribute set on the root element with the effective theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

pub const HIGH_CONTRAST_CLASS: &str = "high-contrast";
pub const REDUCED_MOTION_CLASS: &str = "reduced-motion";
pub const FONT_SIZE_CLASS_PREFIX: &str = "font-size-";
pub const THEME_CLASS_SUFFIX: &str = "-mode";

/// Class carried by the font-size button matching the current size.
pub const ACTIVE_CONTROL_CLASS: &str = "active";

pub const THEME_TOGGLE_SELECTOR: &str = "[data-theme-toggle]";
pub const FONT_SIZE_BUTTON_SELECTOR: &str = "[data-font-size]";
pub const FONT_SIZE_BUTTON_ATTRIBUTE: &str = "data-font-size";
pub const FONT_SIZE_RADIO_SELECTOR: &str = "input[name=\"font_size\"]";
pub const HIGH_CONTRAST_SELECTOR: &str = "[name=\"high_contrast\"]";
pub const REDUCED_MOTION_SELECTOR: &str = "[name=\"reduced_motion\"]";
pub const STATUS_REGION_ID: &str = "a11y-status";
pub const CONFIG_ELEMENT_ID: &str = "careswap-prefs-config";

pub const SYSTEM_DARK_QUERY: &str = "(prefers-color-scheme: dark)";
