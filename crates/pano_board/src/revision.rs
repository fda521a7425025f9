//! Board revisions and the device part fitted on each.

use crate::error::BoardError;
use pano_common::{InternalError, PanoResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A hardware revision of the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Revision {
    /// Revision B.
    B,
    /// Revision C.
    #[default]
    C,
}

impl Revision {
    /// Every known revision.
    pub const ALL: [Revision; 2] = [Revision::B, Revision::C];

    /// Returns the lowercase revision tag.
    pub fn tag(self) -> &'static str {
        match self {
            Revision::B => "b",
            Revision::C => "c",
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Revision {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Revision::ALL
            .into_iter()
            .find(|r| r.tag() == s)
            .ok_or_else(|| {
                BoardError::InvalidConfiguration(format!(
                    "unknown revision '{s}' (expected one of: b, c)"
                ))
            })
    }
}

/// Device part fitted on each revision.
pub const DEVICE_VARIANTS: &[(Revision, &str)] = &[
    (Revision::B, "xc6slx150-2-fgg484"),
    (Revision::C, "xc6slx100-2-fgg484"),
];

/// Resolves the device part identifier of a revision.
pub fn device_part(revision: Revision) -> PanoResult<&'static str> {
    resolve_device(DEVICE_VARIANTS, revision)
}

fn resolve_device(
    variants: &[(Revision, &'static str)],
    revision: Revision,
) -> PanoResult<&'static str> {
    variants
        .iter()
        .find(|(r, _)| *r == revision)
        .map(|(_, part)| *part)
        .ok_or_else(|| InternalError::new(format!("no device part for revision '{revision}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_revisions() {
        assert_eq!("b".parse::<Revision>().unwrap(), Revision::B);
        assert_eq!("c".parse::<Revision>().unwrap(), Revision::C);
    }

    #[test]
    fn parse_is_exact() {
        for bad in ["a", "d", "C", " c", "", "rev-c"] {
            let err = bad.parse::<Revision>().unwrap_err();
            assert!(matches!(err, BoardError::InvalidConfiguration(_)), "{bad}");
        }
    }

    #[test]
    fn device_parts() {
        assert_eq!(device_part(Revision::B).unwrap(), "xc6slx150-2-fgg484");
        assert_eq!(device_part(Revision::C).unwrap(), "xc6slx100-2-fgg484");
    }

    #[test]
    fn mapping_is_total() {
        for revision in Revision::ALL {
            assert!(device_part(revision).is_ok(), "{revision}");
        }
    }

    #[test]
    fn missing_mapping_is_internal_fault() {
        let partial = [(Revision::C, "xc6slx100-2-fgg484")];
        let err = resolve_device(&partial, Revision::B).unwrap_err();
        assert_eq!(err.message, "no device part for revision 'b'");
    }

    #[test]
    fn default_is_c() {
        assert_eq!(Revision::default(), Revision::C);
    }
}
