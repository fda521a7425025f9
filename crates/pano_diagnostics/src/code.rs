//! Check codes such as `W101` and `E102`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The class of a check code, written as its leading letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// The board description is unusable as written (`E`).
    Error,
    /// The board description needs confirming against the hardware (`W`).
    Warning,
}

impl Category {
    /// Returns the leading letter of codes in this class.
    pub fn prefix(self) -> char {
        match self {
            Category::Error => 'E',
            Category::Warning => 'W',
        }
    }

    fn from_prefix(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'E' => Some(Category::Error),
            'W' => Some(Category::Warning),
            _ => None,
        }
    }
}

/// A check code: a class letter followed by a three-digit number.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The class of this code.
    pub category: Category,
    /// The number within the class.
    pub number: u16,
}

impl DiagnosticCode {
    /// Creates a check code.
    pub fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}

/// Error returned when a string is not a check code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid check code '{0}'")]
pub struct ParseCodeError(pub String);

impl FromStr for DiagnosticCode {
    type Err = ParseCodeError;

    /// Parses `W101`, `e102` and similar. The number must be exactly three digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCodeError(s.to_string());
        let mut chars = s.chars();
        let category = chars.next().and_then(Category::from_prefix).ok_or_else(err)?;
        let digits = chars.as_str();
        if digits.len() != 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let number = digits.parse().map_err(|_| err())?;
        Ok(Self::new(category, number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pads_number() {
        assert_eq!(DiagnosticCode::new(Category::Warning, 101).to_string(), "W101");
        assert_eq!(DiagnosticCode::new(Category::Error, 7).to_string(), "E007");
    }

    #[test]
    fn parse_codes() {
        assert_eq!(
            "W101".parse::<DiagnosticCode>(),
            Ok(DiagnosticCode::new(Category::Warning, 101))
        );
        assert_eq!(
            "e102".parse::<DiagnosticCode>(),
            Ok(DiagnosticCode::new(Category::Error, 102))
        );
    }

    #[test]
    fn parse_rejects_rule_names() {
        for s in ["shared-pin", "W1", "W1010", "T101", "", "W10x"] {
            assert!(s.parse::<DiagnosticCode>().is_err(), "{s:?} parsed");
        }
    }

    #[test]
    fn serializes_as_struct() {
        let json = serde_json::to_value(DiagnosticCode::new(Category::Error, 102)).unwrap();
        assert_eq!(json["category"], "Error");
        assert_eq!(json["number"], 102);
    }
}
