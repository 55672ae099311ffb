/// One entry of a `<select>`: the submitted value and what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

pub const INVESTMENT_GOALS: &[SelectOption] = &[
    opt("Growth", "Growth"),
    opt("Income", "Income"),
    opt("Balanced", "Balanced"),
    opt("Conservative", "Conservative"),
];

pub const RISK_TOLERANCE_OPTIONS: &[SelectOption] = &[
    opt("Low", "Low"),
    opt("Medium", "Medium"),
    opt("High", "High"),
];

pub const PREFERRED_INDUSTRIES: &[SelectOption] = &[
    opt("Technology", "Technology"),
    opt("Healthcare", "Healthcare"),
    opt("Finance", "Finance"),
    opt("Energy", "Energy"),
    opt("Consumer Goods", "Consumer Goods"),
];

// ISO 3166-1 alpha-2 codes, sorted by name.
pub const COUNTRIES: &[SelectOption] = &[
    opt("AR", "Argentina"),
    opt("AU", "Australia"),
    opt("AT", "Austria"),
    opt("BE", "Belgium"),
    opt("BR", "Brazil"),
    opt("CA", "Canada"),
    opt("CL", "Chile"),
    opt("CN", "China"),
    opt("CO", "Colombia"),
    opt("DK", "Denmark"),
    opt("EG", "Egypt"),
    opt("FI", "Finland"),
    opt("FR", "France"),
    opt("DE", "Germany"),
    opt("GR", "Greece"),
    opt("HK", "Hong Kong"),
    opt("IN", "India"),
    opt("ID", "Indonesia"),
    opt("IE", "Ireland"),
    opt("IL", "Israel"),
    opt("IT", "Italy"),
    opt("JP", "Japan"),
    opt("KE", "Kenya"),
    opt("MY", "Malaysia"),
    opt("MX", "Mexico"),
    opt("NL", "Netherlands"),
    opt("NZ", "New Zealand"),
    opt("NG", "Nigeria"),
    opt("NO", "Norway"),
    opt("PK", "Pakistan"),
    opt("PH", "Philippines"),
    opt("PL", "Poland"),
    opt("PT", "Portugal"),
    opt("SA", "Saudi Arabia"),
    opt("SG", "Singapore"),
    opt("ZA", "South Africa"),
    opt("KR", "South Korea"),
    opt("ES", "Spain"),
    opt("SE", "Sweden"),
    opt("CH", "Switzerland"),
    opt("TW", "Taiwan"),
    opt("TH", "Thailand"),
    opt("TR", "Turkey"),
    opt("AE", "United Arab Emirates"),
    opt("GB", "United Kingdom"),
    opt("US", "United States"),
    opt("VN", "Vietnam"),
];

pub fn contains(options: &[SelectOption], value: &str) -> bool {
    options.iter().any(|o| o.value == value)
}

/// Flag emoji for a two-letter country code, built from regional indicator
/// symbols. Anything that isn't two ASCII letters gets a white flag.
pub fn flag_emoji(code: &str) -> String {
    const WHITE_FLAG: &str = "\u{1F3F3}";
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return WHITE_FLAG.to_string();
    }
    code.chars()
        .filter_map(|c| char::from_u32(0x1F1E6 + (c.to_ascii_uppercase() as u32 - 'A' as u32)))
        .collect()
}
