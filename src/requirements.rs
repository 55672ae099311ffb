//! Live password feedback shown under the password input.

pub const MIN_PASSWORD_LEN: usize = 8;

/// Characters that count as a "special character".
pub const SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub label: &'static str,
    pub met: bool,
}

/// Length in UTF-16 code units, the unit browsers report for input values.
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

pub fn long_enough(s: &str) -> bool {
    utf16_len(s) >= MIN_PASSWORD_LEN
}

pub fn has_uppercase(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_number(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

pub fn has_symbol(s: &str) -> bool {
    s.chars().any(|c| SYMBOLS.contains(c))
}

const CHECKS: [(&str, fn(&str) -> bool); 4] = [
    ("At least 8 characters long", long_enough),
    ("At least 1 uppercase letter (A-Z)", has_uppercase),
    ("At least 1 number (0-9)", has_number),
    ("At least 1 special character (e.g !@#$%&)", has_symbol),
];

/// Evaluates the four requirements in display order. A missing password is
/// treated as empty.
pub fn password_requirements(password: Option<&str>) -> [Requirement; 4] {
    let p = password.unwrap_or("");
    CHECKS.map(|(label, check)| Requirement {
        label,
        met: check(p),
    })
}

pub fn all_met(password: &str) -> bool {
    password_requirements(Some(password)).iter().all(|r| r.met)
}
