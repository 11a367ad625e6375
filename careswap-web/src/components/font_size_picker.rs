use careswap_prefs::FontSize;
use careswap_prefs::constants::ACTIVE_CONTROL_CLASS;
use yew::prelude::*;

/// How the size choices are rendered.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSizeControl {
    /// Toolbar buttons carrying `data-font-size`.
    #[default]
    Buttons,
    /// Radio inputs named `font_size`, for settings forms.
    Radios,
}

#[derive(Properties, PartialEq, Clone)]
pub struct FontSizePickerProps {
    #[prop_or_default]
    pub current: FontSize,
    #[prop_or_default]
    pub control: FontSizeControl,
    #[prop_or(AttrValue::Static("Text size"))]
    pub legend: AttrValue,
}

#[function_component(FontSizePicker)]
pub fn font_size_picker(props: &FontSizePickerProps) -> Html {
    match props.control {
        FontSizeControl::Buttons => html! {
            <div class="font-size-picker" role="group" aria-label={props.legend.clone()}>
                { for FontSize::ALL.into_iter().map(|size| size_button(size, props.current)) }
            </div>
        },
        FontSizeControl::Radios => html! {
            <fieldset class="font-size-picker">
                <legend>{ props.legend.clone() }</legend>
                { for FontSize::ALL.into_iter().map(|size| size_radio(size, props.current)) }
            </fieldset>
        },
    }
}

fn size_button(size: FontSize, current: FontSize) -> Html {
    let active = size == current;
    html! {
        <button
            type="button"
            class={classes!("font-size-option", active.then_some(ACTIVE_CONTROL_CLASS))}
            data-font-size={size.as_str()}
            aria-pressed={if active { "true" } else { "false" }}
        >
            { size.label() }
        </button>
    }
}

fn size_radio(size: FontSize, current: FontSize) -> Html {
    html! {
        <label class="font-size-option">
            <input type="radio" name="font_size" value={size.as_str()} checked={size == current} />
            { size.label() }
        </label>
    }
}
