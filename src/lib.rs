//! Sign Up & Personalize: the investing app's sign-up form and page chrome,
//! rendered client-side with Yew.

pub mod components;
pub mod form;
pub mod model;
pub mod options;
pub mod pages;
pub mod requirements;
pub mod submit;
pub mod validation;

use yew::prelude::*;

use components::Header;
use pages::SignUp;

fn current_path() -> AttrValue {
    gloo::utils::window()
        .location()
        .pathname()
        .map(AttrValue::from)
        .unwrap_or(AttrValue::Static("/"))
}

#[function_component(App)]
pub fn app() -> Html {
    let path = use_state(current_path);

    html! {
        <>
            <Header current_path={(*path).clone()} />
            <main class="container auth-layout">
                <SignUp />
            </main>
        </>
    }
}
