//! Tri-state CSV cell values.
//!
//! A cell is either [`Field::Present`] with a trimmed, non-empty value or
//! [`Field::Blank`]. The blank sentinel is never conflated with a literal
//! `"0"`: `"0"` parses to `Present("0")`.

use std::fmt;

/// One normalized CSV cell.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// No value was provided (absent cell or all whitespace).
    Blank,
    /// A trimmed, non-empty value.
    Present(String),
}

impl Field {
    /// Normalize a raw cell: trim surrounding whitespace, map an empty
    /// result to [`Field::Blank`].
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Field::Blank
        } else {
            Field::Present(trimmed.to_string())
        }
    }

    /// Normalize an optional raw cell; `None` is blank.
    pub fn parse_opt(raw: Option<&str>) -> Self {
        raw.map_or(Field::Blank, Field::parse)
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Field::Blank)
    }

    /// The value when present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Field::Present(value) => Some(value),
            Field::Blank => None,
        }
    }

    /// The value when present, or the literal `0` used to fill interior
    /// blank levels in an assembled name.
    pub fn or_zero(&self) -> &str {
        match self {
            Field::Present(value) => value,
            Field::Blank => "0",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.or_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Field::parse("  3a  "), Field::Present("3a".to_string()));
    }

    #[test]
    fn test_parse_blank_inputs() {
        assert_eq!(Field::parse(""), Field::Blank);
        assert_eq!(Field::parse("   "), Field::Blank);
        assert_eq!(Field::parse_opt(None), Field::Blank);
    }

    #[test]
    fn test_literal_zero_is_not_blank() {
        let zero = Field::parse("0");
        assert_eq!(zero, Field::Present("0".to_string()));
        assert!(!zero.is_blank());
        assert_ne!(zero, Field::Blank);
    }

    #[test]
    fn test_or_zero() {
        assert_eq!(Field::parse("7").or_zero(), "7");
        assert_eq!(Field::Blank.or_zero(), "0");
    }
}
