//! Server-rendered markup for the bound controls.
//!
//! The components only render state; the page bindings in
//! [`crate::bindings`] find them through their marker attributes and make
//! them interactive.

pub mod accessibility_panel;
pub mod font_size_picker;
pub mod preference_checkbox;
pub mod theme_toggle;

pub use accessibility_panel::{AccessibilityPanel, AccessibilityPanelProps, render_panel};
pub use font_size_picker::{FontSizeControl, FontSizePicker, FontSizePickerProps};
pub use preference_checkbox::{PreferenceCheckbox, PreferenceCheckboxProps};
pub use theme_toggle::{ThemeToggle, ThemeToggleProps};
