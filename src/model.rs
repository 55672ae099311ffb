use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// The seven inputs of the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Password,
    Country,
    InvestmentGoals,
    RiskTolerance,
    PreferredIndustry,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::FullName,
        Field::Email,
        Field::Password,
        Field::Country,
        Field::InvestmentGoals,
        Field::RiskTolerance,
        Field::PreferredIndustry,
    ];

    /// Name used for the HTML `name`/`id` attributes and the JSON payload.
    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Password => "password",
            Field::Country => "country",
            Field::InvestmentGoals => "investmentGoals",
            Field::RiskTolerance => "riskTolerance",
            Field::PreferredIndustry => "preferredIndustry",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::Country => "Country",
            Field::InvestmentGoals => "Investment Goals",
            Field::RiskTolerance => "Risk Tolerance",
            Field::PreferredIndustry => "Preferred Industry",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::FullName => "Your name",
            Field::Email => "contact@gmail.com",
            Field::Password => "Enter a strong password",
            Field::Country => "Select your country",
            Field::InvestmentGoals => "Select your investment goal",
            Field::RiskTolerance => "Select your risk level",
            Field::PreferredIndustry => "Select your preferred industry",
        }
    }

    /// The text the rules check and the submission carries. Name and email
    /// ignore surrounding whitespace; the password is taken as typed.
    pub fn normalize(self, raw: &str) -> &str {
        match self {
            Field::FullName | Field::Email => raw.trim(),
            _ => raw,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{value:?} is not a valid {kind}")]
pub struct ParseChoiceError {
    pub field: Field,
    pub kind: &'static str,
    pub value: String,
}

/// An enum backed by one of the select option lists.
pub trait Choice: Copy + 'static {
    const FIELD: Field;
    const KIND: &'static str;
    const ALL: &'static [Self];

    fn value(self) -> &'static str;

    fn parse_choice(s: &str) -> Result<Self, ParseChoiceError> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.value() == s)
            .ok_or_else(|| ParseChoiceError {
                field: Self::FIELD,
                kind: Self::KIND,
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InvestmentGoal {
    Growth,
    Income,
    Balanced,
    Conservative,
}

impl Choice for InvestmentGoal {
    const FIELD: Field = Field::InvestmentGoals;
    const KIND: &'static str = "investment goal";
    const ALL: &'static [Self] = &[
        InvestmentGoal::Growth,
        InvestmentGoal::Income,
        InvestmentGoal::Balanced,
        InvestmentGoal::Conservative,
    ];

    fn value(self) -> &'static str {
        match self {
            InvestmentGoal::Growth => "Growth",
            InvestmentGoal::Income => "Income",
            InvestmentGoal::Balanced => "Balanced",
            InvestmentGoal::Conservative => "Conservative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl Choice for RiskTolerance {
    const FIELD: Field = Field::RiskTolerance;
    const KIND: &'static str = "risk tolerance";
    const ALL: &'static [Self] = &[RiskTolerance::Low, RiskTolerance::Medium, RiskTolerance::High];

    fn value(self) -> &'static str {
        match self {
            RiskTolerance::Low => "Low",
            RiskTolerance::Medium => "Medium",
            RiskTolerance::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PreferredIndustry {
    Technology,
    Healthcare,
    Finance,
    Energy,
    #[serde(rename = "Consumer Goods")]
    ConsumerGoods,
}

impl Choice for PreferredIndustry {
    const FIELD: Field = Field::PreferredIndustry;
    const KIND: &'static str = "preferred industry";
    const ALL: &'static [Self] = &[
        PreferredIndustry::Technology,
        PreferredIndustry::Healthcare,
        PreferredIndustry::Finance,
        PreferredIndustry::Energy,
        PreferredIndustry::ConsumerGoods,
    ];

    fn value(self) -> &'static str {
        match self {
            PreferredIndustry::Technology => "Technology",
            PreferredIndustry::Healthcare => "Healthcare",
            PreferredIndustry::Finance => "Finance",
            PreferredIndustry::Energy => "Energy",
            PreferredIndustry::ConsumerGoods => "Consumer Goods",
        }
    }
}

macro_rules! from_str_via_choice {
    ($($t:ty),*) => {$(
        impl FromStr for $t {
            type Err = ParseChoiceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$t as Choice>::parse_choice(s)
            }
        }
    )*};
}

from_str_via_choice!(InvestmentGoal, RiskTolerance, PreferredIndustry);

/// Raw text of every field while the user is editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub country: String,
    pub investment_goals: String,
    pub risk_tolerance: String,
    pub preferred_industry: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            full_name: "".into(),
            email: "".into(),
            password: "".into(),
            country: "ID".into(),
            investment_goals: InvestmentGoal::Growth.value().into(),
            risk_tolerance: RiskTolerance::Medium.value().into(),
            preferred_industry: PreferredIndustry::Technology.value().into(),
        }
    }
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Country => &self.country,
            Field::InvestmentGoals => &self.investment_goals,
            Field::RiskTolerance => &self.risk_tolerance,
            Field::PreferredIndustry => &self.preferred_industry,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::Country => &mut self.country,
            Field::InvestmentGoals => &mut self.investment_goals,
            Field::RiskTolerance => &mut self.risk_tolerance,
            Field::PreferredIndustry => &mut self.preferred_industry,
        };
        *slot = value;
    }
}

/// A complete, validated sign-up. Only built from values that passed every
/// field rule.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpFormData {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub country: String,
    pub investment_goals: InvestmentGoal,
    pub risk_tolerance: RiskTolerance,
    pub preferred_industry: PreferredIndustry,
}

impl SignUpFormData {
    /// The same payload with the password masked, safe to log.
    pub fn redacted(&self) -> Self {
        Self {
            password: "********".into(),
            ..self.clone()
        }
    }
}

impl fmt::Debug for SignUpFormData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpFormData")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("country", &self.country)
            .field("investment_goals", &self.investment_goals)
            .field("risk_tolerance", &self.risk_tolerance)
            .field("preferred_industry", &self.preferred_industry)
            .finish()
    }
}

impl TryFrom<&FormValues> for SignUpFormData {
    type Error = ParseChoiceError;

    fn try_from(v: &FormValues) -> Result<Self, Self::Error> {
        Ok(Self {
            full_name: Field::FullName.normalize(&v.full_name).to_string(),
            email: Field::Email.normalize(&v.email).to_string(),
            password: v.password.clone(),
            country: v.country.clone(),
            investment_goals: v.investment_goals.parse()?,
            risk_tolerance: v.risk_tolerance.parse()?,
            preferred_industry: v.preferred_industry.parse()?,
        })
    }
}
