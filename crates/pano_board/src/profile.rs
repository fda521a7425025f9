//! The board profile: a validated platform for one board revision.

use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::io;
use crate::revision::{device_part, Revision};
use pano_common::{Frequency, InternalError};
use pano_platform::{
    OpenOcd, PeriodConstraint, Platform, PlatformError, Resource, ResourceKey, ResourceTable,
    Toolchain,
};

/// Name of the clock resource every revision must declare.
pub const DEFAULT_CLK_NAME: &str = "clk100";

/// Nominal rate of the default clock.
pub const DEFAULT_CLK_FREQUENCY: Frequency = Frequency::new(125e6);

/// Config file for OpenOCD over the board's FT232 JTAG adapter.
pub const PROGRAMMER_CONFIG: &str = "openocd_xc6_ft232.cfg";

/// Auxiliary supply voltage directive required by the board.
pub const VCCAUX_COMMAND: &str = r#"CONFIG VCCAUX="2.5";"#;

/// A fully constructed board description for one revision.
///
/// Construction validates the revision, resolves the device part, builds the
/// revision's resource table, attaches the vendor directives and constrains
/// the default clock. Any failure aborts construction, so a `BoardProfile`
/// value is always complete; it cannot be modified afterwards.
#[derive(Clone, Debug)]
pub struct BoardProfile {
    revision: Revision,
    platform: Platform,
    default_clk: ResourceKey,
    default_clk_period: f64,
}

impl BoardProfile {
    /// Builds the profile for a revision tag and toolchain name.
    ///
    /// The revision is validated first; an unknown tag fails with
    /// [`BoardError::InvalidConfiguration`] before anything else is built.
    pub fn new(revision: &str, toolchain: &str) -> Result<Self, BoardError> {
        let (revision, toolchain) = parse_selection(revision, toolchain)?;
        Self::build(revision, toolchain, &[])
    }

    /// Builds the profile described by a `board.toml` configuration.
    ///
    /// Extra platform commands from the file are appended after the board's
    /// own directives, in file order.
    pub fn from_config(config: &BoardConfig) -> Result<Self, BoardError> {
        let (revision, toolchain) =
            parse_selection(&config.board.revision, &config.board.toolchain)?;
        Self::build(revision, toolchain, &config.platform.commands)
    }

    /// Builds the profile for an already validated revision and toolchain.
    pub fn build(
        revision: Revision,
        toolchain: Toolchain,
        extra_commands: &[String],
    ) -> Result<Self, BoardError> {
        let device = device_part(revision)?;
        let table = ResourceTable::new(io::resources(revision))?;
        let mut platform = Platform::new(device, toolchain, table);

        platform.add_platform_command(VCCAUX_COMMAND);
        for command in extra_commands {
            platform.add_platform_command(command.clone());
        }

        let default_clk = platform
            .lookup(DEFAULT_CLK_NAME, None, true)
            .map_err(|e| missing_default_clock(revision, e))?
            .key();
        let default_clk_period = DEFAULT_CLK_FREQUENCY.period_ns().ok_or_else(|| {
            InternalError::new(format!(
                "default clock '{DEFAULT_CLK_NAME}' has no period at {DEFAULT_CLK_FREQUENCY}"
            ))
        })?;
        platform.add_period_constraint(&default_clk, default_clk_period)?;

        Ok(Self {
            revision,
            platform,
            default_clk,
            default_clk_period,
        })
    }

    /// Returns the board revision.
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Returns the selected device part.
    pub fn device(&self) -> &str {
        self.platform.device()
    }

    /// Returns the selected toolchain.
    pub fn toolchain(&self) -> Toolchain {
        self.platform.toolchain()
    }

    /// Returns the underlying platform.
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Hands the platform over to a build driver, which may append further
    /// platform commands.
    pub fn into_platform(self) -> Platform {
        self.platform
    }

    /// Resolves a logical signal on this revision.
    pub fn lookup(
        &self,
        name: &str,
        index: Option<u32>,
        loose: bool,
    ) -> Result<&Resource, PlatformError> {
        self.platform.lookup(name, index, loose)
    }

    /// Returns the name of the default clock resource.
    pub fn default_clk_name(&self) -> &str {
        &self.default_clk.name
    }

    /// Returns the default clock period in nanoseconds.
    pub fn default_clk_period(&self) -> f64 {
        self.default_clk_period
    }

    /// Returns the nominal default clock frequency.
    pub fn default_clk_frequency(&self) -> Frequency {
        DEFAULT_CLK_FREQUENCY
    }

    /// Returns the raw platform commands in application order.
    pub fn platform_commands(&self) -> &[String] {
        self.platform.commands()
    }

    /// Returns the period constraints.
    pub fn period_constraints(&self) -> &[PeriodConstraint] {
        self.platform.period_constraints()
    }

    /// Creates a handle to the device programmer (OpenOCD over FT232 JTAG).
    pub fn create_programmer(&self) -> OpenOcd {
        OpenOcd::new(PROGRAMMER_CONFIG)
    }
}

fn parse_selection(revision: &str, toolchain: &str) -> Result<(Revision, Toolchain), BoardError> {
    let revision: Revision = revision.parse()?;
    let toolchain: Toolchain = toolchain
        .parse()
        .map_err(|e| BoardError::InvalidConfiguration(format!("{e}")))?;
    Ok((revision, toolchain))
}

fn missing_default_clock(revision: Revision, cause: PlatformError) -> InternalError {
    InternalError::new(format!(
        "revision '{revision}' declares no default clock '{DEFAULT_CLK_NAME}': {cause}"
    ))
}
