use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::model::Field;
use crate::options::{self, flag_emoji, SelectOption};

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub field: Field,
    pub options: &'static [SelectOption],
    pub value: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    /// Prefix each option with the flag for its country code.
    #[prop_or_default]
    pub show_flags: bool,
    pub onchange: Callback<String>,
    pub onblur: Callback<()>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let name = props.field.name();

    let onchange = {
        let emit = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok());
            if let Some(s) = select {
                emit.emit(s.value());
            }
        })
    };
    let onblur = props.onblur.reform(|_: FocusEvent| ());

    html! {
        <div class="space-y-2">
            <label for={name} class="form-label">{ props.field.label() }</label>
            <select
                id={name}
                {name}
                disabled={props.disabled}
                class={classes!("select-trigger", props.error.is_some().then_some("form-input-invalid"))}
                {onchange}
                {onblur}
            >
                <option value="" disabled=true selected={props.value.is_empty()}>
                    { props.field.placeholder() }
                </option>
                { for props.options.iter().map(|o| html! {
                    <option value={o.value} selected={o.value == props.value.as_str()}>
                        { option_text(o, props.show_flags) }
                    </option>
                })}
            </select>
            {
                if let Some(error) = &props.error {
                    html! { <p class="text-sm text-red-500">{ error.clone() }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn option_text(o: &SelectOption, show_flags: bool) -> String {
    if show_flags {
        format!("{} {}", flag_emoji(o.value), o.label)
    } else {
        o.label.to_string()
    }
}

#[derive(Properties, PartialEq)]
pub struct CountrySelectFieldProps {
    pub value: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    pub onchange: Callback<String>,
    pub onblur: Callback<()>,
}

#[function_component(CountrySelectField)]
pub fn country_select_field(props: &CountrySelectFieldProps) -> Html {
    html! {
        <div>
            <SelectField
                field={Field::Country}
                options={options::COUNTRIES}
                value={props.value.clone()}
                error={props.error.clone()}
                disabled={props.disabled}
                show_flags=true
                onchange={props.onchange.clone()}
                onblur={props.onblur.clone()}
            />
            <p class="text-xs text-gray-500">
                { "Helps us show market data and news relevant to you." }
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_text_with_and_without_flag() {
        let o = SelectOption { value: "SG", label: "Singapore" };
        assert_eq!(option_text(&o, false), "Singapore");
        assert_eq!(option_text(&o, true), "\u{1F1F8}\u{1F1EC} Singapore");
    }
}
