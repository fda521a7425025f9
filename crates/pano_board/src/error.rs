//! Error types for board profiles and board configuration files.

use pano_common::InternalError;
use pano_platform::PlatformError;

/// Errors raised while constructing or querying a board profile.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// An unknown revision or toolchain was requested.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The static board description is inconsistent (a defect, not user error).
    #[error(transparent)]
    Consistency(#[from] InternalError),

    /// A resource lookup or table invariant failed.
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

/// Errors that can occur when loading a `board.toml` file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A required field is missing from the configuration.
    #[error("missing required field: {0}")]
    MissingField(String),
}
