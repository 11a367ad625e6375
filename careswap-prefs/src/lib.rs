//! CareSwap display preferences
//!
//! Platform-agnostic theme and accessibility state for the CareSwap pages.
//! This crate decides what the document should look like and what gets
//! persisted; the browser crate supplies the storage and DOM adapters.

pub mod accessibility;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod presentation;
pub mod settings;
pub mod store;
pub mod theme;

// Re-export commonly used types
pub use accessibility::AccessibilityManager;
pub use config::PrefsConfig;
pub use context::Preferences;
pub use error::{PrefsError, Result};
pub use presentation::{
    CheckboxGroup, MemorySurface, Mutation, Patch, Surface, ToggleIndicator, plan_font_size,
    plan_high_contrast, plan_reduced_motion, plan_theme,
};
pub use settings::{AccessibilitySettings, FontSize};
pub use store::{MemoryStore, PreferenceStore};
pub use theme::{Theme, ThemeManager};
