//! Board selection shared by every subcommand.
//!
//! The board is chosen by, in increasing precedence: the built-in defaults
//! (revision c, ISE), the nearest `board.toml`, and `--revision` /
//! `--toolchain` on the command line.

use std::path::{Path, PathBuf};

use pano_board::config::{BoardSection, CheckConfig, PlatformSection};
use pano_board::{load_config, load_config_file, BoardConfig, BoardProfile, Revision, CONFIG_FILE};
use pano_platform::Toolchain;

use crate::GlobalArgs;

/// A built board profile together with the check policy from its config.
pub struct Selection {
    /// The board profile.
    pub profile: BoardProfile,
    /// The `[check]` table of the config file, or empty.
    pub check: CheckConfig,
}

/// Walks up from `start` looking for the nearest directory containing `board.toml`.
pub fn find_board_dir(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(CONFIG_FILE).is_file() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Loads the board configuration named by `--config`, or the nearest one.
///
/// Returns `None` when no `--config` is given and no `board.toml` is found.
pub fn resolve_config(
    global: &GlobalArgs,
) -> Result<Option<BoardConfig>, Box<dyn std::error::Error>> {
    if let Some(ref config_path) = global.config {
        let p = PathBuf::from(config_path);
        let config = if p.is_dir() {
            load_config(&p)?
        } else {
            load_config_file(&p)?
        };
        return Ok(Some(config));
    }
    match find_board_dir(&std::env::current_dir()?) {
        Some(dir) => Ok(Some(load_config(&dir)?)),
        None => Ok(None),
    }
}

/// Resolves the board selection and builds its profile.
pub fn resolve_board(global: &GlobalArgs) -> Result<Selection, Box<dyn std::error::Error>> {
    let config = resolve_config(global)?;
    if global.verbose && config.is_none() {
        eprintln!("   No {CONFIG_FILE} found, using defaults");
    }
    let config = apply_overrides(config.unwrap_or_else(default_config), global);
    let profile = BoardProfile::from_config(&config)?;

    if global.verbose {
        eprintln!(
            "   Selected revision {} ({}, {})",
            profile.revision(),
            profile.device(),
            profile.toolchain()
        );
    }

    Ok(Selection {
        profile,
        check: config.check,
    })
}

fn default_config() -> BoardConfig {
    BoardConfig {
        board: BoardSection {
            revision: Revision::default().tag().to_string(),
            toolchain: Toolchain::default().name().to_string(),
        },
        platform: PlatformSection::default(),
        check: CheckConfig::default(),
    }
}

fn apply_overrides(mut config: BoardConfig, global: &GlobalArgs) -> BoardConfig {
    if let Some(ref revision) = global.revision {
        config.board.revision = revision.clone();
    }
    if let Some(ref toolchain) = global.toolchain {
        config.board.toolchain = toolchain.clone();
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn global(config: Option<&Path>, revision: Option<&str>) -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: false,
            color: false,
            config: config.map(|p| p.to_str().unwrap().to_string()),
            revision: revision.map(str::to_string),
            toolchain: None,
        }
    }

    #[test]
    fn find_board_dir_in_parent() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[board]\nrevision = \"b\"\n").unwrap();
        let sub = tmp.path().join("build");
        fs::create_dir_all(&sub).unwrap();
        assert_eq!(find_board_dir(&sub).as_deref(), Some(tmp.path()));
    }

    #[test]
    fn find_board_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert!(find_board_dir(tmp.path()).is_none());
    }

    #[test]
    fn config_file_selects_revision() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "[board]\nrevision = \"b\"\n").unwrap();
        let selection = resolve_board(&global(Some(&path), None)).unwrap();
        assert_eq!(selection.profile.revision(), Revision::B);
    }

    #[test]
    fn config_directory_accepted() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "[board]\nrevision = \"c\"\n\n[check]\nallow = [\"shared-pin\"]\n",
        )
        .unwrap();
        let selection = resolve_board(&global(Some(tmp.path()), None)).unwrap();
        assert_eq!(selection.check.allow, ["shared-pin"]);
    }

    #[test]
    fn command_line_overrides_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "[board]\nrevision = \"c\"\n").unwrap();
        let selection = resolve_board(&global(Some(&path), Some("b"))).unwrap();
        assert_eq!(selection.profile.device(), "xc6slx150-2-fgg484");
    }

    #[test]
    fn bad_override_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "[board]\nrevision = \"c\"\n").unwrap();
        let err = resolve_board(&global(Some(&path), Some("x"))).err().unwrap();
        assert!(err.to_string().contains("unknown revision 'x'"));
    }

    #[test]
    fn defaults_without_file() {
        let config = apply_overrides(default_config(), &global(None, None));
        assert_eq!(config.board.revision, "c");
        assert_eq!(config.board.toolchain, "ise");
    }
}
