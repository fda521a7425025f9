//! Board description for the Pano Logic G1 thin client.
//!
//! The G1 carries a Spartan-6 FPGA with two DDR2 chips, an Ethernet PHY, an
//! SPI configuration flash and a JTAG header driven through an FT232 adapter.
//! Two hardware revisions exist and each has its own device part and pin
//! table.
//!
//! # Usage
//!
//! ```
//! use pano_board::BoardProfile;
//!
//! let profile = BoardProfile::new("c", "ise").unwrap();
//! assert_eq!(profile.device(), "xc6slx100-2-fgg484");
//!
//! let tx = profile.lookup("serial", Some(0), false).unwrap();
//! assert_eq!(tx.get_subsignal("tx").unwrap().pins().to_string(), "AB19");
//! ```
//!
//! # Architecture
//!
//! - [`revision`]: revision tags and device variants
//! - [`io`]: one complete pin-constraint table per revision
//! - [`profile`]: the validated board profile and programmer factory
//! - [`config`]: `board.toml` loading
//! - [`check`]: consistency rules over a revision's pin table

#![warn(missing_docs)]

pub mod check;
pub mod config;
pub mod error;
pub mod io;
pub mod profile;
pub mod revision;

pub use check::{BoardRule, CheckEngine};
pub use config::{load_config, load_config_file, load_config_from_str, BoardConfig, CONFIG_FILE};
pub use error::{BoardError, ConfigError};
pub use profile::{
    BoardProfile, DEFAULT_CLK_FREQUENCY, DEFAULT_CLK_NAME, PROGRAMMER_CONFIG, VCCAUX_COMMAND,
};
pub use revision::{device_part, Revision, DEVICE_VARIANTS};
