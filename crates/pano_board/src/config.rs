//! `board.toml` loading.
//!
//! A build directory selects its board revision and toolchain with a small
//! TOML file:
//!
//! ```toml
//! [board]
//! revision = "c"
//! toolchain = "ise"
//!
//! [platform]
//! commands = ['CONFIG PROHIBIT = "U10";']
//!
//! [check]
//! deny = ["bus-width"]
//! allow = ["shared-pin"]
//! ```

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// File name looked up by [`load_config`].
pub const CONFIG_FILE: &str = "board.toml";

/// The parsed contents of a `board.toml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    /// Board selection.
    pub board: BoardSection,
    /// Extra platform directives.
    #[serde(default)]
    pub platform: PlatformSection,
    /// Board check policy.
    #[serde(default)]
    pub check: CheckConfig,
}

/// The `[board]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardSection {
    /// Revision tag, validated when the profile is built.
    pub revision: String,
    /// Toolchain name, validated when the profile is built.
    #[serde(default = "default_toolchain")]
    pub toolchain: String,
}

/// The `[platform]` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformSection {
    /// Raw directives appended after the board's own, in order.
    #[serde(default)]
    pub commands: Vec<String>,
}

/// The `[check]` table controlling board consistency checks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckConfig {
    /// Rule names promoted to errors.
    #[serde(default)]
    pub deny: Vec<String>,
    /// Rule names that are not run.
    #[serde(default)]
    pub allow: Vec<String>,
}

fn default_toolchain() -> String {
    "ise".to_string()
}

/// Loads `<dir>/board.toml`.
pub fn load_config(dir: &Path) -> Result<BoardConfig, ConfigError> {
    load_config_file(&dir.join(CONFIG_FILE))
}

/// Loads a board configuration from an explicit file path.
pub fn load_config_file(path: &Path) -> Result<BoardConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a board configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<BoardConfig, ConfigError> {
    let config: BoardConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &BoardConfig) -> Result<(), ConfigError> {
    if config.board.revision.trim().is_empty() {
        return Err(ConfigError::MissingField("board.revision".to_string()));
    }
    if config.board.toolchain.trim().is_empty() {
        return Err(ConfigError::MissingField("board.toolchain".to_string()));
    }
    Ok(())
}
