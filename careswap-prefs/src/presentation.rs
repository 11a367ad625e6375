//! Document presentation planning.
//!
//! Managers never touch a document directly. Each change is planned as a
//! [`Patch`] of [`Mutation`]s by the pure `plan_*` functions below and handed to
//! a [`Surface`], which is the only place that knows about a real DOM.

use crate::constants::{
    HIGH_CONTRAST_CLASS, REDUCED_MOTION_CLASS, THEME_ATTRIBUTE, THEME_CLASS_SUFFIX,
};
use crate::settings::FontSize;
use crate::theme::Theme;
use std::collections::{BTreeMap, BTreeSet};

/// Boolean control groups kept in sync with a settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckboxGroup {
    HighContrast,
    ReducedMotion,
}

impl CheckboxGroup {
    pub const ALL: [Self; 2] = [Self::HighContrast, Self::ReducedMotion];

    /// `name` attribute shared by the group's inputs.
    #[must_use]
    pub const fn input_name(self) -> &'static str {
        match self {
            Self::HighContrast => "high_contrast",
            Self::ReducedMotion => "reduced_motion",
        }
    }
}

/// Icon and accessible label of a theme toggle, describing the state it switches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleIndicator {
    pub icon: &'static str,
    pub label: &'static str,
}

impl ToggleIndicator {
    #[must_use]
    pub const fn for_theme(current: Theme) -> Self {
        match current {
            Theme::Dark => Self {
                icon: "\u{2600}\u{fe0f}",
                label: "Switch to light mode",
            },
            Theme::Light => Self {
                icon: "\u{1f319}",
                label: "Switch to dark mode",
            },
        }
    }
}

/// A single document change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Set an attribute on the root (`<html>`) element.
    RootAttribute { name: &'static str, value: String },
    /// Make `active` the only body class present out of `group`.
    ExclusiveBodyClass { group: Vec<String>, active: String },
    /// Add or remove a single body class.
    BodyClass { name: String, present: bool },
    /// Refresh icon and label of every theme toggle.
    ThemeToggles(ToggleIndicator),
    /// Mark the font-size buttons and radios matching `FontSize` as current.
    FontSizeControls(FontSize),
    /// Set `checked` on every input of a checkbox group.
    Checkboxes { group: CheckboxGroup, checked: bool },
}

/// Ordered list of mutations produced for one change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Patch(pub Vec<Mutation>);

impl Patch {
    #[must_use]
    pub fn mutations(&self) -> &[Mutation] {
        &self.0
    }
}

fn theme_class(theme: Theme) -> String {
    format!("{}{THEME_CLASS_SUFFIX}", theme.as_str())
}

/// Plan the document state for `theme`.
#[must_use]
pub fn plan_theme(theme: Theme) -> Patch {
    Patch(vec![
        Mutation::RootAttribute {
            name: THEME_ATTRIBUTE,
            value: theme.as_str().to_string(),
        },
        Mutation::ExclusiveBodyClass {
            group: Theme::ALL.into_iter().map(theme_class).collect(),
            active: theme_class(theme),
        },
        Mutation::ThemeToggles(ToggleIndicator::for_theme(theme)),
    ])
}

#[must_use]
pub fn plan_font_size(size: FontSize) -> Patch {
    Patch(vec![
        Mutation::ExclusiveBodyClass {
            group: FontSize::ALL.into_iter().map(FontSize::class_name).collect(),
            active: size.class_name(),
        },
        Mutation::FontSizeControls(size),
    ])
}

#[must_use]
pub fn plan_high_contrast(enabled: bool) -> Patch {
    plan_flag(HIGH_CONTRAST_CLASS, CheckboxGroup::HighContrast, enabled)
}

#[must_use]
pub fn plan_reduced_motion(enabled: bool) -> Patch {
    plan_flag(REDUCED_MOTION_CLASS, CheckboxGroup::ReducedMotion, enabled)
}

fn plan_flag(class: &str, group: CheckboxGroup, enabled: bool) -> Patch {
    Patch(vec![
        Mutation::BodyClass {
            name: class.to_string(),
            present: enabled,
        },
        Mutation::Checkboxes {
            group,
            checked: enabled,
        },
    ])
}

/// Something that can carry out planned mutations.
pub trait Surface {
    fn apply(&mut self, mutation: &Mutation);

    fn apply_patch(&mut self, patch: &Patch) {
        for mutation in patch.mutations() {
            self.apply(mutation);
        }
    }
}

/// Document model without a DOM, used by tests and headless hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    pub root_attributes: BTreeMap<String, String>,
    pub body_classes: BTreeSet<String>,
    pub toggle: Option<ToggleIndicator>,
    pub active_font_size: Option<FontSize>,
    pub checkboxes: BTreeMap<CheckboxGroup, bool>,
    /// Count of applied mutations.
    pub applied: usize,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }

    /// Body classes starting with `prefix`.
    #[must_use]
    pub fn classes_with_prefix(&self, prefix: &str) -> Vec<&str> {
        self.body_classes
            .iter()
            .filter(|class| class.starts_with(prefix))
            .map(String::as_str)
            .collect()
    }

    #[must_use]
    pub fn root_attribute(&self, name: &str) -> Option<&str> {
        self.root_attributes.get(name).map(String::as_str)
    }
}

impl Surface for MemorySurface {
    fn apply(&mut self, mutation: &Mutation) {
        self.applied += 1;
        match mutation {
            Mutation::RootAttribute { name, value } => {
                self.root_attributes
                    .insert((*name).to_string(), value.clone());
            }
            Mutation::ExclusiveBodyClass { group, active } => {
                for class in group {
                    self.body_classes.remove(class);
                }
                self.body_classes.insert(active.clone());
            }
            Mutation::BodyClass { name, present } => {
                if *present {
                    self.body_classes.insert(name.clone());
                } else {
                    self.body_classes.remove(name);
                }
            }
            Mutation::ThemeToggles(indicator) => self.toggle = Some(*indicator),
            Mutation::FontSizeControls(size) => self.active_font_size = Some(*size),
            Mutation::Checkboxes { group, checked } => {
                self.checkboxes.insert(*group, *checked);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_plan_sets_attribute_class_and_next_state_label() {
        let mut surface = MemorySurface::new();
        surface.apply_patch(&plan_theme(Theme::Dark));
        assert_eq!(surface.root_attribute("data-theme"), Some("dark"));
        assert!(surface.has_class("dark-mode"));
        assert_eq!(
            surface.toggle.map(|t| t.label),
            Some("Switch to light mode")
        );

        surface.apply_patch(&plan_theme(Theme::Light));
        assert!(surface.has_class("light-mode"));
        assert!(!surface.has_class("dark-mode"));
        assert_eq!(surface.toggle.map(|t| t.icon), Some("\u{1f319}"));
    }

    #[test]
    fn font_size_plan_keeps_exactly_one_size_class() {
        let mut surface = MemorySurface::new();
        for size in FontSize::ALL {
            surface.apply_patch(&plan_font_size(size));
            assert_eq!(
                surface.classes_with_prefix("font-size-"),
                vec![size.class_name().as_str()]
            );
            assert_eq!(surface.active_font_size, Some(size));
        }
    }

    #[test]
    fn flag_plans_touch_only_their_own_class() {
        let mut surface = MemorySurface::new();
        surface.apply_patch(&plan_high_contrast(true));
        surface.apply_patch(&plan_reduced_motion(true));
        surface.apply_patch(&plan_high_contrast(false));
        assert!(!surface.has_class("high-contrast"));
        assert!(surface.has_class("reduced-motion"));
        assert_eq!(
            surface.checkboxes.get(&CheckboxGroup::HighContrast),
            Some(&false)
        );
        assert_eq!(
            surface.checkboxes.get(&CheckboxGroup::ReducedMotion),
            Some(&true)
        );
    }
}
