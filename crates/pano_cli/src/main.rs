//! Pano CLI: inspect, check and program the Pano Logic G1 board.
//!
//! Provides `pano info` for the selected board profile, `pano lookup` and
//! `pano resources` for the pin tables, `pano check` for consistency rules,
//! and `pano program` / `pano flash` for driving OpenOCD.

#![warn(missing_docs)]

mod board;
mod check;
mod info;
mod lookup;
mod program;
mod resources;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Pano: board support for the Pano Logic G1.
#[derive(Parser, Debug)]
#[command(name = "pano", version, about = "Pano Logic G1 board support")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a `board.toml` file or the directory holding one.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Board revision, overriding `board.toml` (b or c).
    #[arg(short, long, global = true)]
    pub revision: Option<String>,

    /// Toolchain, overriding `board.toml`.
    #[arg(short, long, global = true)]
    pub toolchain: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the device, default clock and platform directives.
    Info(InfoArgs),
    /// Resolve a logical signal to its pins.
    Lookup(LookupArgs),
    /// List every resource of the selected revision.
    Resources(ResourcesArgs),
    /// Run consistency checks over the pin table.
    Check(CheckArgs),
    /// Load a bitstream into the FPGA over JTAG.
    Program(ProgramArgs),
    /// Write a file into the SPI configuration flash.
    Flash(FlashArgs),
}

/// Arguments for the `pano info` subcommand.
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `pano lookup` subcommand.
#[derive(Parser, Debug)]
pub struct LookupArgs {
    /// Resource name (e.g. `serial`).
    pub name: String,

    /// Resource index; required unless `--loose` is given.
    pub index: Option<u32>,

    /// Without an index, return the first resource with this name.
    #[arg(short, long)]
    pub loose: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `pano resources` subcommand.
#[derive(Parser, Debug)]
pub struct ResourcesArgs {
    /// List one line per package pin instead of per resource.
    #[arg(long)]
    pub pins: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `pano check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Rule names to suppress (e.g., `--allow shared-pin`).
    #[arg(long, num_args = 1..)]
    pub allow: Vec<String>,

    /// Rule names to promote to errors (e.g., `--deny diff-pair`).
    #[arg(long, num_args = 1..)]
    pub deny: Vec<String>,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `pano program` subcommand.
#[derive(Parser, Debug)]
pub struct ProgramArgs {
    /// Bitstream file (`.bit`).
    pub bitstream: String,

    /// OpenOCD executable to run.
    #[arg(long, default_value = "openocd")]
    pub openocd: String,

    /// Print the OpenOCD command line instead of running it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `pano flash` subcommand.
#[derive(Parser, Debug)]
pub struct FlashArgs {
    /// Data file to write (`.bin`).
    pub data: String,

    /// Flash byte address, decimal or `0x`-prefixed hex.
    #[arg(short, long, value_parser = program::parse_address, default_value = "0")]
    pub address: u32,

    /// JTAG-to-SPI proxy bitstream for the fitted device.
    #[arg(short, long)]
    pub proxy: String,

    /// OpenOCD executable to run.
    #[arg(long, default_value = "openocd")]
    pub openocd: String,

    /// Print the OpenOCD command line instead of running it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a `board.toml` file or directory.
    pub config: Option<String>,
    /// Revision override.
    pub revision: Option<String>,
    /// Toolchain override.
    pub toolchain: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::env::var("TERM").is_ok(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
        revision: cli.revision,
        toolchain: cli.toolchain,
    };

    let result = match cli.command {
        Command::Info(ref args) => info::run(args, &global),
        Command::Lookup(ref args) => lookup::run(args, &global),
        Command::Resources(ref args) => resources::run(args, &global),
        Command::Check(ref args) => check::run(args, &global),
        Command::Program(ref args) => program::run_program(args, &global),
        Command::Flash(ref args) => program::run_flash(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
