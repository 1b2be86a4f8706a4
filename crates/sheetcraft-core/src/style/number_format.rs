//! Number formats

/// How a stored number is displayed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NumberFormat {
    /// `General`
    #[default]
    General,

    /// One of the predefined formats, by ID
    BuiltIn(u32),

    /// A format code such as `0.00`
    Custom(String),
}

/// Predefined format codes by ID; IDs 14..=22 are dates and times
const BUILTIN: &[(u32, &str)] = &[
    (0, "General"),
    (1, "0"),
    (2, "0.00"),
    (3, "#,##0"),
    (4, "#,##0.00"),
    (9, "0%"),
    (10, "0.00%"),
    (14, "mm-dd-yy"),
    (15, "d-mmm-yy"),
    (16, "d-mmm"),
    (17, "mmm-yy"),
    (18, "h:mm AM/PM"),
    (19, "h:mm:ss AM/PM"),
    (20, "h:mm"),
    (21, "h:mm:ss"),
    (22, "m/d/yy h:mm"),
    (49, "@"),
];

impl NumberFormat {
    /// ID of the short date format (`mm-dd-yy`)
    pub const ID_DATE_SHORT: u32 = 14;

    /// A custom format code
    pub fn from_string<S: Into<String>>(format: S) -> Self {
        NumberFormat::Custom(format.into())
    }

    /// Fixed number of decimal places: `0`, `0.0`, `0.00`, ...
    pub fn fixed_decimals(digits: u8) -> Self {
        let mut code = String::from("0");
        if digits > 0 {
            code.push('.');
            code.extend(std::iter::repeat('0').take(usize::from(digits)));
        }
        NumberFormat::Custom(code)
    }

    /// Short date (`mm-dd-yy`)
    pub fn date_short() -> Self {
        NumberFormat::BuiltIn(Self::ID_DATE_SHORT)
    }

    /// The format code; unknown built-in IDs read as `General`
    pub fn format_string(&self) -> &str {
        match self {
            NumberFormat::General => "General",
            NumberFormat::BuiltIn(id) => BUILTIN
                .iter()
                .find(|(builtin, _)| builtin == id)
                .map_or("General", |&(_, code)| code),
            NumberFormat::Custom(code) => code,
        }
    }

    /// Whether the format shows a date or time
    ///
    /// Custom codes count when they use date/time placeholders outside of
    /// quoted literals.
    pub fn is_date_format(&self) -> bool {
        match self {
            NumberFormat::General => false,
            NumberFormat::BuiltIn(id) => (14..=22).contains(id),
            NumberFormat::Custom(code) => {
                let mut quoted = false;
                code.chars().any(|c| {
                    if c == '"' {
                        quoted = !quoted;
                    }
                    !quoted && matches!(c.to_ascii_lowercase(), 'y' | 'm' | 'd' | 'h' | 's')
                })
            }
        }
    }
}
