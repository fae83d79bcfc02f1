//! Delimiters used to split header lines into column names

use crate::error::{HeaderDiffError, Result};
use std::fmt;

/// Named delimiter table, in the order the detector scans it.
pub const DELIMITERS: &[(&str, &str)] = &[
    ("Pipe (|)", "|"),
    ("Backslash (\\)", "\\"),
    ("Forward Slash (/)", "/"),
    ("Comma (,)", ","),
    ("Colon (:)", ":"),
    ("Semicolon (;)", ";"),
    ("Tab (\\t)", "\t"),
    ("New Line (\\n)", "\n"),
    ("Space ( )", " "),
    ("Double Colon (::)", "::"),
    ("Tilde (~)", "~"),
];

/// Choice name meaning "split on whitespace"
pub const WHITESPACE_CHOICE: &str = "None";

/// Choice name for a user-supplied literal
pub const CUSTOM_CHOICE: &str = "Custom";

/// How a header line is split into columns
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// Split on runs of whitespace, dropping empty fields
    Whitespace,
    /// Split on a literal string, keeping empty fields
    Literal(String),
}

impl Delimiter {
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Split a line into column names.
    ///
    /// An empty literal cannot split anything, so it falls back to whitespace.
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            Delimiter::Literal(lit) if !lit.is_empty() => line.split(lit.as_str()).collect(),
            Delimiter::Literal(_) => {
                log::debug!("Empty literal delimiter, falling back to whitespace split");
                line.split_whitespace().collect()
            }
            Delimiter::Whitespace => line.split_whitespace().collect(),
        }
    }

    /// Name of this delimiter in the table, if it is one of the table entries
    pub fn table_name(&self) -> Option<&'static str> {
        match self {
            Delimiter::Whitespace => None,
            Delimiter::Literal(lit) => DELIMITERS
                .iter()
                .find(|(_, value)| *value == lit.as_str())
                .map(|(name, _)| *name),
        }
    }

    /// All candidates in detection scan order: whitespace first, then the table
    pub fn candidates() -> Vec<Delimiter> {
        std::iter::once(Delimiter::Whitespace)
            .chain(DELIMITERS.iter().map(|(_, value)| Delimiter::literal(*value)))
            .collect()
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.table_name()) {
            (Delimiter::Whitespace, _) => write!(f, "{}", WHITESPACE_CHOICE),
            (_, Some(name)) => write!(f, "{}", name),
            (Delimiter::Literal(lit), None) => write!(f, "{} ({})", CUSTOM_CHOICE, lit.escape_debug()),
        }
    }
}

/// A delimiter as selected by the user for one file or for the override
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DelimiterChoice {
    /// Whitespace split
    #[default]
    None,
    /// An entry of [`DELIMITERS`], by name
    Named(&'static str),
    /// Arbitrary literal
    Custom(String),
}

impl DelimiterChoice {
    /// Parse a choice from its name.
    ///
    /// Accepts `None`, `Custom` (with `custom` set), a table name such as
    /// `Pipe (|)`, a short alias such as `pipe` or `double-colon`, or a bare
    /// literal found in the table. Anything else is taken as a custom literal.
    pub fn parse(name: &str, custom: Option<&str>) -> Result<Self> {
        if name.is_empty() {
            return Err(HeaderDiffError::config("Delimiter name cannot be empty"));
        }

        if name.eq_ignore_ascii_case(WHITESPACE_CHOICE) || name.eq_ignore_ascii_case("whitespace") {
            return Ok(Self::None);
        }

        if name.eq_ignore_ascii_case(CUSTOM_CHOICE) {
            return match custom {
                Some(value) if !value.is_empty() => Ok(Self::Custom(value.to_string())),
                _ => Err(HeaderDiffError::config("Please enter a custom delimiter.")),
            };
        }

        let lowered = name.to_lowercase();
        for (table_name, _) in DELIMITERS {
            if table_name.to_lowercase() == lowered || short_alias(table_name) == lowered {
                return Ok(Self::Named(*table_name));
            }
        }
        for (table_name, value) in DELIMITERS {
            if *value == name {
                return Ok(Self::Named(*table_name));
            }
        }

        log::debug!("Unknown delimiter name '{}', treating it as a custom literal", name);
        Ok(Self::Custom(name.to_string()))
    }

    /// Choice that reproduces a detected delimiter
    pub fn from_delimiter(delimiter: &Delimiter) -> Self {
        match (delimiter, delimiter.table_name()) {
            (Delimiter::Whitespace, _) => Self::None,
            (_, Some(name)) => Self::Named(name),
            (Delimiter::Literal(lit), None) => Self::Custom(lit.clone()),
        }
    }

    /// The delimiter this choice splits with
    pub fn delimiter(&self) -> Delimiter {
        match self {
            Self::None => Delimiter::Whitespace,
            Self::Named(name) => DELIMITERS
                .iter()
                .find(|(table_name, _)| table_name == name)
                .map(|(_, value)| Delimiter::literal(*value))
                .unwrap_or(Delimiter::Whitespace),
            Self::Custom(lit) => Delimiter::literal(lit.clone()),
        }
    }

    /// The delimiter this choice imposes when used as an override.
    ///
    /// Selecting `None` as the override means "no override", so per-file
    /// choices stay in effect.
    pub fn as_override(&self) -> Option<Delimiter> {
        match self {
            Self::None => None,
            other => Some(other.delimiter()),
        }
    }

    /// Choice name as stored in plan files
    pub fn name(&self) -> &str {
        match self {
            Self::None => WHITESPACE_CHOICE,
            Self::Named(name) => name,
            Self::Custom(_) => CUSTOM_CHOICE,
        }
    }

    pub fn custom_value(&self) -> Option<&str> {
        match self {
            Self::Custom(lit) => Some(lit),
            _ => None,
        }
    }
}

/// Effective delimiter for one file pair: the override when present,
/// else the per-file choice, else whitespace.
pub fn resolve_delimiter(override_delim: Option<&Delimiter>, per_file: Option<&DelimiterChoice>) -> Delimiter {
    if let Some(delim) = override_delim {
        return delim.clone();
    }
    per_file.map(DelimiterChoice::delimiter).unwrap_or(Delimiter::Whitespace)
}

/// `Double Colon (::)` -> `double-colon`
fn short_alias(table_name: &str) -> String {
    table_name
        .split(" (")
        .next()
        .unwrap_or(table_name)
        .to_lowercase()
        .replace(' ', "-")
}
