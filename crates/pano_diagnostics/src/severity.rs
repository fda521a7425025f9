//! How seriously a check finding is reported.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity of a check finding. `Warning < Error`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Needs confirming against the schematic; the build can proceed.
    Warning,
    /// The description is inconsistent; the check run fails.
    Error,
}

impl Severity {
    /// Returns the lowercase name used in rendered output.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Returns the ANSI color code used for this severity.
    pub fn ansi_color(self) -> &'static str {
        match self {
            Severity::Warning => "33",
            Severity::Error => "31",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_outranks_warning() {
        assert!(Severity::Warning < Severity::Error);
        assert_eq!(Severity::Warning.max(Severity::Error), Severity::Error);
    }

    #[test]
    fn display_and_json_agree() {
        for severity in [Severity::Warning, Severity::Error] {
            let json = serde_json::to_value(severity).unwrap();
            assert_eq!(json, severity.to_string());
        }
    }
}
