use careswap_prefs::CheckboxGroup;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PreferenceCheckboxProps {
    pub group: CheckboxGroup,
    #[prop_or_default]
    pub checked: bool,
    pub label: AttrValue,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
}

#[function_component(PreferenceCheckbox)]
pub fn preference_checkbox(props: &PreferenceCheckboxProps) -> Html {
    let name = props.group.input_name();
    let id = format!("pref-{name}");
    let hint_id = props.hint.as_ref().map(|_| format!("{id}-hint"));
    html! {
        <div class="preference-toggle">
            <input
                id={id.clone()}
                type="checkbox"
                name={name}
                checked={props.checked}
                aria-describedby={hint_id.clone()}
            />
            <label for={id}>{ props.label.clone() }</label>
            {
                props.hint.as_ref().map(|hint| html! {
                    <p id={hint_id.clone()} class="form-hint">{ hint.clone() }</p>
                }).unwrap_or_default()
            }
        </div>
    }
}
