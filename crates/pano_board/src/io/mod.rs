//! Pin-constraint tables, one complete table per board revision.
//!
//! Revisions are never derived from each other: each table lists every
//! resource of its board, so a revision can only ever expose wiring that
//! exists on that hardware.

mod rev_b;
mod rev_c;

use crate::revision::Revision;
use pano_platform::{Attr, Resource};

/// Returns the resource declarations of a board revision, in table order.
pub fn resources(revision: Revision) -> Vec<Resource> {
    match revision {
        Revision::B => rev_b::resources(),
        Revision::C => rev_c::resources(),
    }
}

fn iostd(standard: &str) -> Attr {
    Attr::io_standard(standard)
}

fn misc(directive: &str) -> Attr {
    Attr::misc(directive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_unique_in_every_revision() {
        for revision in Revision::ALL {
            let mut seen = HashSet::new();
            for res in resources(revision).iter().filter(|r| r.is_fitted()) {
                assert!(seen.insert(res.key()), "{revision}: duplicate {}", res.key());
            }
        }
    }

    #[test]
    fn every_revision_declares_default_clock() {
        for revision in Revision::ALL {
            assert!(resources(revision)
                .iter()
                .any(|r| r.name() == "clk100" && r.is_fitted()));
        }
    }

    #[test]
    fn revisions_are_independent_tables() {
        let b = resources(Revision::B);
        let c = resources(Revision::C);
        assert_ne!(b, c);
    }
}
