use crate::dom::{self, query_all};
use careswap_prefs::constants::{ACTIVE_CONTROL_CLASS, FONT_SIZE_BUTTON_ATTRIBUTE};
use careswap_prefs::{CheckboxGroup, FontSize, Mutation, PrefsConfig, Surface, ToggleIndicator};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

/// [`Surface`] that carries planned mutations out on a live document.
pub struct DocumentSurface {
    document: Document,
    theme_toggles: String,
    font_size_buttons: String,
    font_size_radios: String,
    high_contrast: String,
    reduced_motion: String,
}

impl DocumentSurface {
    #[must_use]
    pub fn new(document: Document, config: &PrefsConfig) -> Self {
        Self {
            document,
            theme_toggles: config.theme_toggle_selector.clone(),
            font_size_buttons: config.font_size_button_selector.clone(),
            font_size_radios: config.font_size_radio_selector.clone(),
            high_contrast: config.high_contrast_selector.clone(),
            reduced_motion: config.reduced_motion_selector.clone(),
        }
    }

    fn checkbox_selector(&self, group: CheckboxGroup) -> &str {
        match group {
            CheckboxGroup::HighContrast => &self.high_contrast,
            CheckboxGroup::ReducedMotion => &self.reduced_motion,
        }
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Into::into)
    }

    fn inputs(&self, selector: &str) -> impl Iterator<Item = HtmlInputElement> {
        query_all(&self.document, selector)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
    }

    fn sync_toggles(&self, indicator: ToggleIndicator) {
        for toggle in query_all(&self.document, &self.theme_toggles) {
            toggle.set_text_content(Some(indicator.icon));
            let _ = toggle.set_attribute("aria-label", indicator.label);
        }
    }

    fn sync_font_size_controls(&self, size: FontSize) {
        for button in query_all(&self.document, &self.font_size_buttons) {
            let current = button
                .get_attribute(FONT_SIZE_BUTTON_ATTRIBUTE)
                .is_some_and(|value| value == size.as_str());
            let _ = button
                .class_list()
                .toggle_with_force(ACTIVE_CONTROL_CLASS, current);
            let _ = button.set_attribute("aria-pressed", if current { "true" } else { "false" });
        }
        for radio in self.inputs(&self.font_size_radios) {
            radio.set_checked(radio.value() == size.as_str());
        }
    }
}

impl Surface for DocumentSurface {
    fn apply(&mut self, mutation: &Mutation) {
        match mutation {
            Mutation::RootAttribute { name, value } => {
                if let Some(root) = self.document.document_element()
                    && let Err(err) = root.set_attribute(name, value)
                {
                    log::warn!("setting {name} failed: {}", dom::js_error_message(&err));
                }
            }
            Mutation::ExclusiveBodyClass { group, active } => {
                if let Some(body) = self.body() {
                    let classes = body.class_list();
                    for class in group {
                        let _ = classes.remove_1(class);
                    }
                    let _ = classes.add_1(active);
                }
            }
            Mutation::BodyClass { name, present } => {
                if let Some(body) = self.body() {
                    let _ = body.class_list().toggle_with_force(name, *present);
                }
            }
            Mutation::ThemeToggles(indicator) => self.sync_toggles(*indicator),
            Mutation::FontSizeControls(size) => self.sync_font_size_controls(*size),
            Mutation::Checkboxes { group, checked } => {
                for input in self.inputs(self.checkbox_selector(*group)) {
                    input.set_checked(*checked);
                }
            }
        }
    }
}
