use yew::prelude::*;

use crate::requirements::Requirement;

#[derive(Properties, PartialEq)]
pub struct PasswordChecklistProps {
    pub requirements: [Requirement; 4],
}

#[function_component(PasswordChecklist)]
pub fn password_checklist(props: &PasswordChecklistProps) -> Html {
    html! {
        <div class="mt-2 space-y-1">
            { for props.requirements.iter().map(|r| {
                let tone = if r.met { "text-green-500" } else { "text-gray-400" };
                html! {
                    <div class="flex items-center gap-2 text-sm">
                        <span class={tone}>{ if r.met { "✓" } else { "○" } }</span>
                        <span class={tone}>{ r.label }</span>
                    </div>
                }
            })}
        </div>
    }
}
