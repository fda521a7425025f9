//! Target platform: device, toolchain, resource table and constraints.

use crate::error::PlatformError;
use crate::resource::{Resource, ResourceKey};
use crate::table::ResourceTable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A vendor implementation toolchain able to consume the platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Toolchain {
    /// Xilinx ISE (xst, ngdbuild, map, par, bitgen).
    #[default]
    Ise,
}

impl Toolchain {
    /// All supported toolchains.
    pub const ALL: [Toolchain; 1] = [Toolchain::Ise];

    /// Returns the canonical lowercase toolchain name.
    pub fn name(self) -> &'static str {
        match self {
            Toolchain::Ise => "ise",
        }
    }
}

impl fmt::Display for Toolchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for an unsupported toolchain name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported toolchain '{0}'")]
pub struct ParseToolchainError(pub String);

impl FromStr for Toolchain {
    type Err = ParseToolchainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Toolchain::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseToolchainError(s.to_string()))
    }
}

/// A clock period requirement on a resource.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PeriodConstraint {
    /// The constrained clock resource.
    pub resource: ResourceKey,
    /// Minimum clock cycle time in nanoseconds.
    pub period_ns: f64,
}

/// A target device together with its board resources and the constraints a
/// build driver must emit for it.
///
/// Platform commands are raw vendor directives kept in insertion order, since
/// vendor tools treat later directives as overrides of earlier ones.
#[derive(Clone, Debug, Serialize)]
pub struct Platform {
    device: String,
    toolchain: Toolchain,
    table: ResourceTable,
    commands: Vec<String>,
    period_constraints: Vec<PeriodConstraint>,
}

impl Platform {
    /// Creates a platform for a device part with the given resource table.
    pub fn new(device: impl Into<String>, toolchain: Toolchain, table: ResourceTable) -> Self {
        Self {
            device: device.into(),
            toolchain,
            table,
            commands: Vec::new(),
            period_constraints: Vec::new(),
        }
    }

    /// Returns the device part identifier (e.g. `xc6slx100-2-fgg484`).
    pub fn device(&self) -> &str {
        &self.device
    }

    /// Returns the selected toolchain.
    pub fn toolchain(&self) -> Toolchain {
        self.toolchain
    }

    /// Returns the resource table.
    pub fn table(&self) -> &ResourceTable {
        &self.table
    }

    /// Resolves a logical signal; see [`ResourceTable::lookup`].
    pub fn lookup(
        &self,
        name: &str,
        index: Option<u32>,
        loose: bool,
    ) -> Result<&Resource, PlatformError> {
        self.table.lookup(name, index, loose)
    }

    /// Appends a raw platform command, passed verbatim to the toolchain.
    pub fn add_platform_command(&mut self, command: impl Into<String>) {
        self.commands.push(command.into());
    }

    /// Returns the platform commands in insertion order.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Adds a period constraint on a resource of this platform.
    ///
    /// The resource must be fitted and the period finite and positive.
    pub fn add_period_constraint(
        &mut self,
        resource: &ResourceKey,
        period_ns: f64,
    ) -> Result<(), PlatformError> {
        if !self.table.contains(resource) {
            return Err(PlatformError::NotFound {
                name: resource.name.clone(),
                index: Some(resource.index),
            });
        }
        if !period_ns.is_finite() || period_ns <= 0.0 {
            return Err(PlatformError::InvalidPeriod {
                resource: resource.clone(),
                period_ns,
            });
        }
        self.period_constraints.push(PeriodConstraint {
            resource: resource.clone(),
            period_ns,
        });
        Ok(())
    }

    /// Returns the period constraints in insertion order.
    pub fn period_constraints(&self) -> &[PeriodConstraint] {
        &self.period_constraints
    }
}
