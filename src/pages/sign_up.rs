use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{CountrySelectField, FooterLink, InputField, PasswordChecklist, SelectField};
use crate::form::{FormAction, FormStatus, Outcome, SignUpForm};
use crate::model::Field;
use crate::options::{INVESTMENT_GOALS, PREFERRED_INDUSTRIES, RISK_TOLERANCE_OPTIONS};
use crate::submit::{log_sign_up, run_submission};

pub const SUBMIT_LABEL: &str = "Start Your Investing Journey";
pub const SUBMITTING_LABEL: &str = "Creating Account";

fn on_change(form: &UseReducerDispatcher<SignUpForm>, field: Field) -> Callback<String> {
    let form = form.clone();
    Callback::from(move |v: String| form.dispatch(FormAction::Change(field, v)))
}

fn on_blur(form: &UseReducerDispatcher<SignUpForm>, field: Field) -> Callback<()> {
    let form = form.clone();
    Callback::from(move |_| form.dispatch(FormAction::Blur(field)))
}

fn status_banner(status: &FormStatus) -> Html {
    match status {
        FormStatus::Settled(Outcome::Succeeded) => html! {
            <div class="form-banner form-banner-success" role="status">
                { "You're all set. Your preferences have been saved." }
            </div>
        },
        FormStatus::Settled(Outcome::Failed(reason)) => html! {
            <div class="form-banner form-banner-error" role="alert">
                { format!("We couldn't create your account: {reason}") }
            </div>
        },
        FormStatus::Editing | FormStatus::Submitting => html! {},
    }
}

#[function_component(SignUp)]
pub fn sign_up() -> Html {
    let form = use_reducer(SignUpForm::new);
    let dispatcher = form.dispatcher();

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some((action, data)) = form.submit_action() else {
                return;
            };
            if let FormAction::SubmitRejected(errors) = &action {
                log::debug!("sign-up blocked by {} invalid field(s)", errors.len());
            }
            form.dispatch(action);
            let Some(data) = data else {
                return;
            };
            let dispatcher = form.dispatcher();
            spawn_local(async move {
                let outcome = run_submission(data, log_sign_up).await;
                dispatcher.dispatch(FormAction::SubmitSettled(outcome));
            });
        })
    };

    let submitting = form.is_submitting();
    let error = |field: Field| form.error(field).map(|e| AttrValue::from(e.to_string()));
    let value = |field: Field| AttrValue::from(form.value(field).to_string());

    html! {
        <>
            <h1 class="form-title">{ "Sign Up & Personalize" }</h1>

            { status_banner(form.status()) }

            <form {onsubmit} class="space-y-5" novalidate=true>
                <InputField
                    field={Field::FullName}
                    value={value(Field::FullName)}
                    error={error(Field::FullName)}
                    disabled={submitting}
                    oninput={on_change(&dispatcher, Field::FullName)}
                    onblur={on_blur(&dispatcher, Field::FullName)}
                />
                <InputField
                    field={Field::Email}
                    input_type="email"
                    value={value(Field::Email)}
                    error={error(Field::Email)}
                    disabled={submitting}
                    oninput={on_change(&dispatcher, Field::Email)}
                    onblur={on_blur(&dispatcher, Field::Email)}
                />
                <div>
                    <InputField
                        field={Field::Password}
                        input_type="password"
                        value={value(Field::Password)}
                        error={error(Field::Password)}
                        disabled={submitting}
                        oninput={on_change(&dispatcher, Field::Password)}
                        onblur={on_blur(&dispatcher, Field::Password)}
                    />
                    <PasswordChecklist requirements={form.password_requirements()} />
                </div>

                <CountrySelectField
                    value={value(Field::Country)}
                    error={error(Field::Country)}
                    disabled={submitting}
                    onchange={on_change(&dispatcher, Field::Country)}
                    onblur={on_blur(&dispatcher, Field::Country)}
                />
                <SelectField
                    field={Field::InvestmentGoals}
                    options={INVESTMENT_GOALS}
                    value={value(Field::InvestmentGoals)}
                    error={error(Field::InvestmentGoals)}
                    disabled={submitting}
                    onchange={on_change(&dispatcher, Field::InvestmentGoals)}
                    onblur={on_blur(&dispatcher, Field::InvestmentGoals)}
                />
                <SelectField
                    field={Field::RiskTolerance}
                    options={RISK_TOLERANCE_OPTIONS}
                    value={value(Field::RiskTolerance)}
                    error={error(Field::RiskTolerance)}
                    disabled={submitting}
                    onchange={on_change(&dispatcher, Field::RiskTolerance)}
                    onblur={on_blur(&dispatcher, Field::RiskTolerance)}
                />
                <SelectField
                    field={Field::PreferredIndustry}
                    options={PREFERRED_INDUSTRIES}
                    value={value(Field::PreferredIndustry)}
                    error={error(Field::PreferredIndustry)}
                    disabled={submitting}
                    onchange={on_change(&dispatcher, Field::PreferredIndustry)}
                    onblur={on_blur(&dispatcher, Field::PreferredIndustry)}
                />

                <button type="submit" class="yellow-btn w-full mt-5" disabled={submitting}>
                    { if submitting { SUBMITTING_LABEL } else { SUBMIT_LABEL } }
                </button>

                <FooterLink text="Already have an account?" link_text="Sign in" href="/sign-in" />
            </form>
        </>
    }
}
