//! Declarative pin-constraint schema for FPGA board descriptions.
//!
//! A board is described as a [`ResourceTable`]: an ordered list of named,
//! indexed [`Resource`]s, each mapping a logical signal to package pins with
//! attached electrical [`Attr`]ibutes. A [`Platform`] pairs a table with a
//! target device and toolchain, and collects the raw platform commands and
//! period constraints a build driver turns into vendor constraint files.
//!
//! # Usage
//!
//! ```
//! use pano_platform::{Attr, Platform, Resource, ResourceTable, Subsignal, Toolchain};
//!
//! let table = ResourceTable::new(vec![
//!     Resource::simple("clk100", 0, "U10").attr(Attr::io_standard("LVCMOS33")),
//!     Resource::composite("serial", 0)
//!         .subsignal(Subsignal::new("tx", "AB19"))
//!         .subsignal(Subsignal::new("rx", "AA21"))
//!         .attr(Attr::io_standard("LVCMOS33")),
//! ])
//! .unwrap();
//!
//! let mut platform = Platform::new("xc6slx100-2-fgg484", Toolchain::Ise, table);
//! let clk = platform.lookup("clk100", None, true).unwrap().key();
//! platform.add_period_constraint(&clk, 8.0).unwrap();
//! assert_eq!(platform.period_constraints()[0].period_ns, 8.0);
//! ```
//!
//! # Architecture
//!
//! - [`pins`]: pin-location strings and electrical attributes
//! - [`resource`]: simple and composite resource declarations
//! - [`table`]: validated, immutable resource tables and lookup
//! - [`platform`]: device, toolchain, platform commands and period constraints
//! - [`programmer`]: device-programmer handles (OpenOCD)

#![warn(missing_docs)]

pub mod error;
pub mod pins;
pub mod platform;
pub mod programmer;
pub mod resource;
pub mod table;

pub use error::PlatformError;
pub use pins::{Attr, Pins};
pub use platform::{ParseToolchainError, PeriodConstraint, Platform, Toolchain};
pub use programmer::{OpenOcd, Programmer, ProgrammerError};
pub use resource::{PinAssignment, Resource, ResourceKey, ResourceKind, Subsignal};
pub use table::ResourceTable;
