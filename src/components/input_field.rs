use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::model::Field;

#[derive(Properties, PartialEq)]
pub struct InputFieldProps {
    pub field: Field,
    pub value: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    pub oninput: Callback<String>,
    pub onblur: Callback<()>,
}

/// Labelled text input with its inline validation message.
#[function_component(InputField)]
pub fn input_field(props: &InputFieldProps) -> Html {
    let name = props.field.name();

    let oninput = {
        let emit = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
            if let Some(i) = input {
                emit.emit(i.value());
            }
        })
    };
    let onblur = props.onblur.reform(|_: FocusEvent| ());

    html! {
        <div class="space-y-2">
            <label for={name} class="form-label">{ props.field.label() }</label>
            <input
                id={name}
                {name}
                type={props.input_type.clone()}
                placeholder={props.field.placeholder()}
                value={props.value.clone()}
                disabled={props.disabled}
                class={classes!("form-input", props.error.is_some().then_some("form-input-invalid"))}
                aria-invalid={props.error.is_some().then_some("true")}
                {oninput}
                {onblur}
            />
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
