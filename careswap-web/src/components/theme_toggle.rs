use careswap_prefs::{Theme, ToggleIndicator};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ThemeToggleProps {
    /// Theme currently applied; the button describes the opposite one.
    #[prop_or_default]
    pub theme: Theme,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let indicator = ToggleIndicator::for_theme(props.theme);
    let class = classes!("theme-toggle", props.class.clone());
    html! {
        <button type="button" class={class} data-theme-toggle="true" aria-label={indicator.label}>
            { indicator.icon }
        </button>
    }
}
