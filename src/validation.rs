//! Per-field validation rules and the runner that evaluates them.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::model::Field;
use crate::options::{self, SelectOption};
use crate::requirements::{has_number, has_symbol, has_uppercase, utf16_len, MIN_PASSWORD_LEN};

lazy_static! {
    // `\w` restricted to ASCII word characters.
    pub static ref EMAIL_PATTERN: Regex = Regex::new(r"^(?-u:\w)+@(?-u:\w)+\.(?-u:\w)+$").unwrap();
}

pub const INVALID_EMAIL: &str = "Invalid email format. Fix it and try again.";
pub const PASSWORD_REQUIREMENTS_UNMET: &str = "Please meet all password requirements";

/// Errors keyed by field; at most one message per field.
pub type FieldErrors = BTreeMap<Field, String>;

pub enum Rule {
    Required(&'static str),
    MinLength {
        min: usize,
        message: &'static str,
    },
    Pattern {
        regex: &'static Regex,
        message: &'static str,
    },
    Predicate {
        name: &'static str,
        check: fn(&str) -> bool,
        message: &'static str,
    },
    OneOf {
        allowed: &'static [SelectOption],
        message: &'static str,
    },
}

impl Rule {
    /// `Some(message)` when `value` breaks this rule.
    pub fn check(&self, value: &str) -> Option<&'static str> {
        let blank = value.trim().is_empty();
        let failed = match self {
            Rule::Required(_) => blank,
            _ if blank => false,
            Rule::MinLength { min, .. } => utf16_len(value) < *min,
            Rule::Pattern { regex, .. } => !regex.is_match(value),
            Rule::Predicate { check, .. } => !check(value),
            Rule::OneOf { allowed, .. } => !options::contains(allowed, value),
        };
        failed.then(|| self.message())
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rule::Required(message)
            | Rule::MinLength { message, .. }
            | Rule::Pattern { message, .. }
            | Rule::Predicate { message, .. }
            | Rule::OneOf { message, .. } => *message,
        }
    }
}

pub fn rules_for(field: Field) -> Vec<Rule> {
    match field {
        Field::FullName => vec![
            Rule::Required("Full name is required"),
            Rule::MinLength {
                min: 2,
                message: "Full name must be at least 2 characters",
            },
        ],
        Field::Email => vec![
            Rule::Required("Email address is required"),
            Rule::Pattern {
                regex: &*EMAIL_PATTERN,
                message: INVALID_EMAIL,
            },
        ],
        Field::Password => vec![
            Rule::Required("Password is required"),
            Rule::MinLength {
                min: MIN_PASSWORD_LEN,
                message: PASSWORD_REQUIREMENTS_UNMET,
            },
            Rule::Predicate {
                name: "hasUpperCase",
                check: has_uppercase,
                message: PASSWORD_REQUIREMENTS_UNMET,
            },
            Rule::Predicate {
                name: "hasNumber",
                check: has_number,
                message: PASSWORD_REQUIREMENTS_UNMET,
            },
            Rule::Predicate {
                name: "hasSymbol",
                check: has_symbol,
                message: PASSWORD_REQUIREMENTS_UNMET,
            },
        ],
        Field::Country => vec![
            Rule::Required("Please select country"),
            Rule::OneOf {
                allowed: options::COUNTRIES,
                message: "Please select a valid country",
            },
        ],
        Field::InvestmentGoals => vec![
            Rule::Required("Please select investment goals"),
            Rule::OneOf {
                allowed: options::INVESTMENT_GOALS,
                message: "Please select a valid investment goal",
            },
        ],
        Field::RiskTolerance => vec![
            Rule::Required("Please select risk tolerance"),
            Rule::OneOf {
                allowed: options::RISK_TOLERANCE_OPTIONS,
                message: "Please select a valid risk tolerance",
            },
        ],
        Field::PreferredIndustry => vec![
            Rule::Required("Please select preferred industry"),
            Rule::OneOf {
                allowed: options::PREFERRED_INDUSTRIES,
                message: "Please select a valid preferred industry",
            },
        ],
    }
}

/// Runs the field's rules in order against the normalized value and
/// returns the first failure.
pub fn validate_value(field: Field, value: &str) -> Option<&'static str> {
    let value = field.normalize(value);
    rules_for(field).iter().find_map(|rule| rule.check(value))
}

/// Validates every field, returning all failures at once.
pub fn validate_all<'a>(value_of: impl Fn(Field) -> &'a str) -> FieldErrors {
    Field::ALL
        .iter()
        .filter_map(|&f| validate_value(f, value_of(f)).map(|m| (f, m.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::all_met;

    #[test]
    fn email_pattern() {
        assert_eq!(validate_value(Field::Email, "not-an-email"), Some(INVALID_EMAIL));
        assert_eq!(validate_value(Field::Email, "contact@gmail.com"), None);
        assert_eq!(validate_value(Field::Email, "first_last@host.io"), None);
        // one dot only, no dots or dashes in the local part
        assert_eq!(validate_value(Field::Email, "a.b@host.io"), Some(INVALID_EMAIL));
        assert_eq!(validate_value(Field::Email, "a@mail.host.io"), Some(INVALID_EMAIL));
        assert_eq!(validate_value(Field::Email, "jos\u{e9}@host.io"), Some(INVALID_EMAIL));
        assert_eq!(validate_value(Field::Email, ""), Some("Email address is required"));
    }

    #[test]
    fn required_comes_first() {
        assert_eq!(validate_value(Field::FullName, "   "), Some("Full name is required"));
        assert_eq!(validate_value(Field::Password, ""), Some("Password is required"));
        assert_eq!(validate_value(Field::Country, ""), Some("Please select country"));
    }

    #[test]
    fn full_name_min_length() {
        assert_eq!(
            validate_value(Field::FullName, "A"),
            Some("Full name must be at least 2 characters")
        );
        assert_eq!(
            validate_value(Field::FullName, " A "),
            Some("Full name must be at least 2 characters")
        );
        assert_eq!(validate_value(Field::FullName, "Al"), None);
    }

    #[test]
    fn password_gate_matches_live_requirements() {
        for p in [
            "abc",
            "Abcdefg1!",
            "abcdefg1!",
            "ABCDEFG1!",
            "Abcdefgh!",
            "Abcdefg12",
            "Ab1!",
            "        ",
            "P@ssw0rd",
            "Zz9{zzzzz",
            "\u{1F600}\u{1F600}\u{1F600}\u{1F600}A1!",
        ] {
            let blocked = validate_value(Field::Password, p).is_some();
            assert_eq!(blocked, !all_met(p), "password {p:?}");
        }
    }

    #[test]
    fn predicates_report_requirement_message() {
        assert_eq!(
            validate_value(Field::Password, "abcdefg1!"),
            Some(PASSWORD_REQUIREMENTS_UNMET)
        );
    }

    #[test]
    fn selects_only_accept_listed_values() {
        assert_eq!(validate_value(Field::Country, "ID"), None);
        assert_eq!(validate_value(Field::Country, "XX"), Some("Please select a valid country"));
        assert_eq!(validate_value(Field::RiskTolerance, "High"), None);
        assert_eq!(
            validate_value(Field::RiskTolerance, "high"),
            Some("Please select a valid risk tolerance")
        );
        assert_eq!(
            validate_value(Field::PreferredIndustry, ""),
            Some("Please select preferred industry")
        );
    }

    #[test]
    fn validate_all_collects_each_failing_field() {
        let errors = validate_all(|f| match f {
            Field::Email => "nope",
            Field::Country => "ID",
            Field::InvestmentGoals => "Growth",
            Field::RiskTolerance => "Low",
            Field::PreferredIndustry => "Energy",
            Field::FullName | Field::Password => "",
        });
        let fields: Vec<Field> = errors.keys().copied().collect();
        assert_eq!(fields, [Field::FullName, Field::Email, Field::Password]);
        assert_eq!(errors[&Field::Email], INVALID_EMAIL);
    }

    #[test]
    fn predicate_names() {
        let names: Vec<&str> = rules_for(Field::Password)
            .iter()
            .filter_map(|r| match r {
                Rule::Predicate { name, .. } => Some(*name),
                _ => None,
            })
            .collect();
        assert_eq!(names, ["hasUpperCase", "hasNumber", "hasSymbol"]);
    }
}
