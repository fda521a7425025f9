//! Validated, immutable resource tables.

use crate::error::PlatformError;
use crate::resource::{PinAssignment, Resource, ResourceKey, ResourceKind};
use serde::Serialize;
use std::collections::HashSet;

/// An ordered table of fitted resources for one board revision.
///
/// Built once from a list of declarations and read-only afterwards.
/// Construction enforces that:
/// - `(name, index)` is unique among fitted resources
/// - every composite resource has at least one sub-signal, with unique names
/// - every fitted pin-location string is non-empty
///
/// Declarations marked [`not_fitted`](Resource::not_fitted) are excluded
/// before these checks and are only reported through [`not_fitted`](Self::not_fitted).
#[derive(Clone, Debug, Default, Serialize)]
pub struct ResourceTable {
    resources: Vec<Resource>,
    #[serde(skip)]
    not_fitted: Vec<ResourceKey>,
}

impl ResourceTable {
    /// Builds a table from resource declarations, in declaration order.
    pub fn new(declarations: Vec<Resource>) -> Result<Self, PlatformError> {
        let mut seen = HashSet::new();
        let mut resources = Vec::with_capacity(declarations.len());
        let mut not_fitted = Vec::new();

        for resource in declarations {
            if !resource.is_fitted() {
                not_fitted.push(resource.key());
                continue;
            }
            validate(&resource)?;
            if !seen.insert(resource.key()) {
                return Err(PlatformError::DuplicateResource(resource.key()));
            }
            resources.push(resource);
        }

        Ok(Self {
            resources,
            not_fitted,
        })
    }

    /// Resolves a logical signal to its resource.
    ///
    /// With `Some(index)` the `(name, index)` pair must match exactly. With
    /// `None`, a `loose` lookup returns the first resource with that name in
    /// declaration order, and a strict lookup fails with
    /// [`PlatformError::IndexRequired`].
    pub fn lookup(
        &self,
        name: &str,
        index: Option<u32>,
        loose: bool,
    ) -> Result<&Resource, PlatformError> {
        let found = match (index, loose) {
            (Some(i), _) => self
                .resources
                .iter()
                .find(|r| r.name() == name && r.index() == i),
            (None, true) => self.resources.iter().find(|r| r.name() == name),
            (None, false) => return Err(PlatformError::IndexRequired(name.to_string())),
        };
        found.ok_or_else(|| PlatformError::NotFound {
            name: name.to_string(),
            index,
        })
    }

    /// Returns `true` if a fitted resource has the given key.
    pub fn contains(&self, key: &ResourceKey) -> bool {
        self.resources
            .iter()
            .any(|r| r.name() == key.name && r.index() == key.index)
    }

    /// Returns the number of fitted resources.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns `true` if the table has no fitted resources.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Iterates over fitted resources in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter()
    }

    /// Returns the keys of resources declared but not fitted on this board.
    pub fn not_fitted(&self) -> &[ResourceKey] {
        &self.not_fitted
    }

    /// Flattens every fitted resource into per-pin assignments.
    pub fn pin_assignments(&self) -> Vec<PinAssignment> {
        self.resources
            .iter()
            .flat_map(Resource::pin_assignments)
            .collect()
    }
}

impl<'a> IntoIterator for &'a ResourceTable {
    type Item = &'a Resource;
    type IntoIter = std::slice::Iter<'a, Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.iter()
    }
}

fn validate(resource: &Resource) -> Result<(), PlatformError> {
    match resource.kind() {
        ResourceKind::Simple(pins) => {
            if let Some(subsignal) = resource.misplaced_subsignal() {
                return Err(PlatformError::SubsignalOnSimple {
                    resource: resource.key(),
                    subsignal: subsignal.to_string(),
                });
            }
            if pins.is_empty() {
                return Err(PlatformError::EmptyPins(resource.key().to_string()));
            }
        }
        ResourceKind::Composite(subsignals) => {
            if subsignals.is_empty() {
                return Err(PlatformError::EmptySubsignals(resource.key()));
            }
            let mut names = HashSet::new();
            for sub in subsignals {
                if !names.insert(sub.name()) {
                    return Err(PlatformError::DuplicateSubsignal {
                        resource: resource.key(),
                        subsignal: sub.name().to_string(),
                    });
                }
                if sub.pins().is_empty() {
                    return Err(PlatformError::EmptyPins(format!(
                        "{}.{}",
                        resource.key(),
                        sub.name()
                    )));
                }
            }
        }
    }
    Ok(())
}
