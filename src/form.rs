//! Sign-up form state: field values, per-field errors, submit lifecycle.

use std::rc::Rc;

use yew::Reducible;

use crate::model::{Field, FormValues, SignUpFormData};
use crate::requirements::{password_requirements, Requirement};
use crate::validation::{self, FieldErrors};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Submitting,
    Settled(Outcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Change(Field, String),
    Blur(Field),
    /// Submit pressed but at least one field is invalid.
    SubmitRejected(FieldErrors),
    /// Submit pressed with valid data; the handler is now running.
    SubmitStarted,
    SubmitSettled(Outcome),
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForm {
    values: FormValues,
    errors: FieldErrors,
    // Set on the first submit attempt; from then on fields re-validate on change.
    submit_attempted: bool,
    status: FormStatus,
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self {
            values: FormValues::default(),
            errors: FieldErrors::new(),
            submit_attempted: false,
            status: FormStatus::Editing,
        }
    }
}

impl SignUpForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Live checklist for the current password.
    pub fn password_requirements(&self) -> [Requirement; 4] {
        password_requirements(Some(&self.values.password))
    }

    /// Checks every field without touching state. `Ok` carries the typed
    /// payload for the submission handler.
    pub fn validate(&self) -> Result<SignUpFormData, FieldErrors> {
        let errors = validation::validate_all(|f| self.values.get(f));
        if !errors.is_empty() {
            return Err(errors);
        }
        SignUpFormData::try_from(&self.values)
            .map_err(|e| FieldErrors::from([(e.field, e.to_string())]))
    }

    /// Handles a submit press: validates, moves to `Submitting` and hands
    /// back the data when valid. Returns `None` while a submission is
    /// already in flight or when any field is invalid.
    pub fn try_submit(&mut self) -> Option<SignUpFormData> {
        let (action, data) = self.submit_action()?;
        self.apply(action);
        data
    }

    /// The action a submit press should dispatch, plus the data to hand to
    /// the submission handler when it is `SubmitStarted`.
    pub fn submit_action(&self) -> Option<(FormAction, Option<SignUpFormData>)> {
        if self.is_submitting() {
            return None;
        }
        Some(match self.validate() {
            Ok(data) => (FormAction::SubmitStarted, Some(data)),
            Err(errors) => (FormAction::SubmitRejected(errors), None),
        })
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Change(field, value) => {
                self.values.set(field, value);
                if self.submit_attempted {
                    self.revalidate(field);
                }
                if matches!(self.status, FormStatus::Settled(_)) {
                    self.status = FormStatus::Editing;
                }
            }
            FormAction::Blur(field) => {
                self.revalidate(field);
            }
            FormAction::SubmitRejected(errors) => {
                if self.is_submitting() {
                    return;
                }
                self.submit_attempted = true;
                self.errors = errors;
                self.status = FormStatus::Editing;
            }
            FormAction::SubmitStarted => {
                if self.is_submitting() {
                    return;
                }
                self.submit_attempted = true;
                self.errors.clear();
                self.status = FormStatus::Submitting;
            }
            FormAction::SubmitSettled(outcome) => {
                if self.is_submitting() {
                    self.status = FormStatus::Settled(outcome);
                }
            }
            FormAction::Reset => *self = Self::default(),
        }
    }

    fn revalidate(&mut self, field: Field) {
        match validation::validate_value(field, self.values.get(field)) {
            Some(message) => {
                self.errors.insert(field, message.to_string());
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }
}

impl Reducible for SignUpForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InvestmentGoal, PreferredIndustry, RiskTolerance};
    use crate::validation::INVALID_EMAIL;

    fn change(form: &mut SignUpForm, field: Field, value: &str) {
        form.apply(FormAction::Change(field, value.to_string()));
    }

    fn filled() -> SignUpForm {
        let mut form = SignUpForm::new();
        change(&mut form, Field::FullName, "Ada Lovelace");
        change(&mut form, Field::Email, "ada@example.com");
        change(&mut form, Field::Password, "Abcdefg1!");
        form
    }

    #[test]
    fn starts_editing_with_defaults() {
        let form = SignUpForm::new();
        assert_eq!(form.status(), &FormStatus::Editing);
        assert_eq!(form.value(Field::Country), "ID");
        assert!(form.errors().is_empty());
        assert!(form.password_requirements().iter().all(|r| !r.met));
    }

    #[test]
    fn change_does_not_validate_before_blur() {
        let mut form = SignUpForm::new();
        change(&mut form, Field::Email, "not-an-email");
        assert_eq!(form.error(Field::Email), None);

        form.apply(FormAction::Blur(Field::Email));
        assert_eq!(form.error(Field::Email), Some(INVALID_EMAIL));

        // fixing the value only clears the error on the next blur
        change(&mut form, Field::Email, "ada@example.com");
        assert_eq!(form.error(Field::Email), Some(INVALID_EMAIL));
        form.apply(FormAction::Blur(Field::Email));
        assert_eq!(form.error(Field::Email), None);
    }

    #[test]
    fn password_feedback_tracks_every_keystroke() {
        let mut form = SignUpForm::new();
        let mut typed = String::new();
        let mut seen = vec![];
        for c in "Abcdefg1!".chars() {
            typed.push(c);
            change(&mut form, Field::Password, &typed);
            seen.push(form.password_requirements().iter().filter(|r| r.met).count());
        }
        assert_eq!(seen, [1, 1, 1, 1, 1, 1, 1, 3, 4]);
    }

    #[test]
    fn invalid_email_blocks_submission() {
        let mut form = filled();
        change(&mut form, Field::Email, "not-an-email");

        assert_eq!(form.try_submit(), None);
        assert_eq!(form.status(), &FormStatus::Editing);
        assert_eq!(form.error(Field::Email), Some(INVALID_EMAIL));
    }

    #[test]
    fn after_a_failed_submit_fields_revalidate_on_change() {
        let mut form = SignUpForm::new();
        assert_eq!(form.try_submit(), None);
        assert_eq!(form.error(Field::FullName), Some("Full name is required"));

        change(&mut form, Field::FullName, "A");
        assert_eq!(form.error(Field::FullName), Some("Full name must be at least 2 characters"));
        change(&mut form, Field::FullName, "Ada");
        assert_eq!(form.error(Field::FullName), None);
    }

    #[test]
    fn valid_form_hands_over_data_once() {
        let mut form = filled();
        let mut calls = vec![];

        if let Some(data) = form.try_submit() {
            calls.push(data);
        }
        // a second press while in flight is ignored
        if let Some(data) = form.try_submit() {
            calls.push(data);
        }

        assert_eq!(calls.len(), 1);
        assert!(form.is_submitting());
        let data = &calls[0];
        assert_eq!(data.full_name, "Ada Lovelace");
        assert_eq!(data.email, "ada@example.com");
        assert_eq!(data.password, "Abcdefg1!");
        assert_eq!(data.country, "ID");
        assert_eq!(data.investment_goals, InvestmentGoal::Growth);
        assert_eq!(data.risk_tolerance, RiskTolerance::Medium);
        assert_eq!(data.preferred_industry, PreferredIndustry::Technology);
    }

    #[test]
    fn padded_short_name_is_rejected() {
        let mut form = filled();
        change(&mut form, Field::FullName, " A ");
        assert_eq!(form.try_submit(), None);
        assert_eq!(
            form.error(Field::FullName),
            Some("Full name must be at least 2 characters")
        );
    }

    #[test]
    fn submitted_name_and_email_are_the_validated_text() {
        let mut form = filled();
        change(&mut form, Field::FullName, "  Ada  ");
        change(&mut form, Field::Email, " ada@example.com ");
        let data = form.try_submit().expect("form should be valid");
        assert_eq!(data.full_name, "Ada");
        assert_eq!(data.email, "ada@example.com");
    }

    #[test]
    fn weak_password_blocks_submission() {
        let mut form = filled();
        change(&mut form, Field::Password, "abcdefgh");
        assert_eq!(form.try_submit(), None);
        assert_eq!(
            form.error(Field::Password),
            Some("Please meet all password requirements")
        );
    }

    #[test]
    fn settles_and_returns_to_editing_on_change() {
        let mut form = filled();
        assert!(form.try_submit().is_some());

        form.apply(FormAction::SubmitSettled(Outcome::Failed("boom".into())));
        assert_eq!(form.status(), &FormStatus::Settled(Outcome::Failed("boom".into())));

        change(&mut form, Field::FullName, "Ada King");
        assert_eq!(form.status(), &FormStatus::Editing);
    }

    #[test]
    fn settle_is_ignored_unless_submitting() {
        let mut form = SignUpForm::new();
        form.apply(FormAction::SubmitSettled(Outcome::Succeeded));
        assert_eq!(form.status(), &FormStatus::Editing);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = filled();
        form.try_submit();
        form.apply(FormAction::Reset);
        assert_eq!(form, SignUpForm::new());
    }

    #[test]
    fn reducer_applies_actions() {
        let form = Rc::new(SignUpForm::new());
        let next = form.reduce(FormAction::Change(Field::Country, "SG".into()));
        assert_eq!(next.value(Field::Country), "SG");
    }
}
