use yew::prelude::*;

use super::NavItems;

pub const LOGO_SRC: &str = "/assets/icons/logo.svg";

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_else(|| AttrValue::from("/"))]
    pub current_path: AttrValue,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="sticky top-0 header">
            <div class="container header-wrapper">
                <a href="/" class="flex items-center">
                    <img
                        src={LOGO_SRC}
                        alt="logo"
                        width="140"
                        height="32"
                        class="h-8 w-auto cursor-pointer"
                    />
                </a>

                <nav class="hidden sm:block">
                    <NavItems current_path={props.current_path.clone()} />
                </nav>
            </div>
        </header>
    }
}
