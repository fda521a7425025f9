//! Pin-location strings and electrical attributes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One or more package-pin identifiers assigned to a signal.
///
/// Built from a whitespace-separated location string such as `"U10"` or
/// `"Y3 Y4 R9 R7"`. The identifier count is the bus width; bit `i` of the
/// signal is routed to the `i`-th identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pins(Vec<String>);

impl Pins {
    /// Parses a whitespace-separated pin-location string.
    pub fn new(locations: &str) -> Self {
        Self(locations.split_whitespace().map(str::to_string).collect())
    }

    /// Returns the pin identifiers in bit order.
    pub fn identifiers(&self) -> &[String] {
        &self.0
    }

    /// Returns the bus width (number of identifiers).
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no identifier is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the pin identifiers.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for Pins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// An electrical attribute attached to a resource or sub-signal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attr {
    /// An I/O standard tag naming the signaling family (e.g. `LVCMOS33`,
    /// `DIFF_SSTL18_II`).
    IoStandard(String),
    /// An opaque directive passed verbatim to the vendor toolchain (e.g.
    /// `IN_TERM=NONE`).
    Misc(String),
}

impl Attr {
    /// Creates an I/O standard attribute.
    pub fn io_standard(standard: impl Into<String>) -> Self {
        Attr::IoStandard(standard.into())
    }

    /// Creates a verbatim toolchain directive.
    pub fn misc(directive: impl Into<String>) -> Self {
        Attr::Misc(directive.into())
    }

    /// Returns the I/O standard tag, if this is an I/O standard attribute.
    pub fn as_io_standard(&self) -> Option<&str> {
        match self {
            Attr::IoStandard(s) => Some(s),
            Attr::Misc(_) => None,
        }
    }

    /// Splits a `KEY=VALUE` misc directive.
    ///
    /// Returns `None` for I/O standards and for directives without `=`.
    pub fn misc_key_value(&self) -> Option<(&str, &str)> {
        match self {
            Attr::Misc(s) => s.split_once('=').map(|(k, v)| (k.trim(), v.trim())),
            Attr::IoStandard(_) => None,
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attr::IoStandard(s) => write!(f, "IOSTANDARD={s}"),
            Attr::Misc(s) => write!(f, "{s}"),
        }
    }
}
