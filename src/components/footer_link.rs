use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterLinkProps {
    pub text: AttrValue,
    pub link_text: AttrValue,
    pub href: AttrValue,
}

#[function_component(FooterLink)]
pub fn footer_link(props: &FooterLinkProps) -> Html {
    html! {
        <div class="pt-4 flex items-center justify-center gap-1">
            <p class="text-sm text-gray-500">{ props.text.clone() }{ " " }</p>
            <a href={props.href.clone()} class="footer-link">{ props.link_text.clone() }</a>
        </div>
    }
}
