use super::{FontSizeControl, FontSizePicker, PreferenceCheckbox, ThemeToggle};
use careswap_prefs::constants::STATUS_REGION_ID;
use careswap_prefs::{AccessibilitySettings, CheckboxGroup, Theme};
use yew::LocalServerRenderer;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AccessibilityPanelProps {
    #[prop_or_default]
    pub settings: AccessibilitySettings,
    #[prop_or_default]
    pub theme: Theme,
    #[prop_or(AttrValue::Static(STATUS_REGION_ID))]
    pub status_region_id: AttrValue,
}

/// Settings-page section with every bound control and the live region.
#[function_component(AccessibilityPanel)]
pub fn accessibility_panel(props: &AccessibilityPanelProps) -> Html {
    html! {
        <section class="accessibility-panel" aria-labelledby="a11y-panel-title">
            <h2 id="a11y-panel-title">{ "Display & accessibility" }</h2>
            <div class="field">
                <span>{ "Theme" }</span>
                <ThemeToggle theme={props.theme} />
            </div>
            <FontSizePicker current={props.settings.font_size} control={FontSizeControl::Radios} />
            <PreferenceCheckbox
                group={CheckboxGroup::HighContrast}
                checked={props.settings.high_contrast}
                label="High contrast"
                hint={AttrValue::Static("Stronger colours and outlines")}
            />
            <PreferenceCheckbox
                group={CheckboxGroup::ReducedMotion}
                checked={props.settings.reduced_motion}
                label="Reduce motion"
                hint={AttrValue::Static("Turns off animations and smooth scrolling")}
            />
            <div id={props.status_region_id.clone()} class="sr-only" role="status" aria-live="polite"></div>
        </section>
    }
}

/// Render the panel to HTML for a server-side template.
#[allow(clippy::future_not_send)] // LocalServerRenderer futures are not `Send`.
pub async fn render_panel(props: AccessibilityPanelProps) -> String {
    LocalServerRenderer::<AccessibilityPanel>::with_props(props)
        .render()
        .await
}
