//! Clock frequencies and the periods derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit suffixes, largest first.
const UNITS: [(&str, f64); 4] = [("GHz", 1e9), ("MHz", 1e6), ("kHz", 1e3), ("Hz", 1.0)];

/// A clock frequency in Hertz.
///
/// Boards declare nominal clock rates; timing constraints take the period
/// from [`period_ns`](Self::period_ns).
#[derive(Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frequency(f64);

impl Frequency {
    /// Creates a frequency from Hertz.
    pub const fn new(hz: f64) -> Self {
        Self(hz)
    }

    /// Returns the frequency in Hertz.
    pub fn hz(self) -> f64 {
        self.0
    }

    /// Returns the clock period in nanoseconds.
    ///
    /// Returns `None` unless the frequency is finite and positive.
    pub fn period_ns(self) -> Option<f64> {
        (self.0.is_finite() && self.0 > 0.0).then(|| 1e9 / self.0)
    }
}

impl fmt::Debug for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frequency({self})")
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (suffix, scale) = UNITS
            .iter()
            .find(|(_, scale)| self.0.abs() >= *scale)
            .unwrap_or(&UNITS[UNITS.len() - 1]);
        write!(f, "{} {suffix}", self.0 / scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_of_125mhz_is_8ns() {
        assert_eq!(Frequency::new(125e6).period_ns(), Some(8.0));
        assert_eq!(Frequency::new(25e6).period_ns(), Some(40.0));
    }

    #[test]
    fn degenerate_values_have_no_period() {
        assert_eq!(Frequency::new(0.0).period_ns(), None);
        assert_eq!(Frequency::new(-125e6).period_ns(), None);
        assert_eq!(Frequency::new(f64::NAN).period_ns(), None);
        assert_eq!(Frequency::new(f64::INFINITY).period_ns(), None);
    }

    #[test]
    fn display_picks_largest_unit() {
        assert_eq!(Frequency::new(125e6).to_string(), "125 MHz");
        assert_eq!(Frequency::new(44_100.0).to_string(), "44.1 kHz");
        assert_eq!(Frequency::new(500.0).to_string(), "500 Hz");
        assert_eq!(Frequency::new(0.5).to_string(), "0.5 Hz");
    }

    #[test]
    fn serializes_as_hertz() {
        let json = serde_json::to_string(&Frequency::new(125e6)).unwrap();
        assert_eq!(json, "125000000.0");
    }
}
