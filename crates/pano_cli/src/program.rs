//! `pano program` and `pano flash`: drive OpenOCD over the board's JTAG adapter.

use std::path::Path;

use pano_platform::{OpenOcd, Programmer};

use crate::board::resolve_board;
use crate::{FlashArgs, GlobalArgs, ProgramArgs};

/// Runs the `pano program` command.
pub fn run_program(
    args: &ProgramArgs,
    global: &GlobalArgs,
) -> Result<i32, Box<dyn std::error::Error>> {
    let selection = resolve_board(global)?;
    let programmer = selection
        .profile
        .create_programmer()
        .with_executable(args.openocd.as_str());
    let bitstream = Path::new(&args.bitstream);

    if args.dry_run {
        println!(
            "{}",
            command_line(&programmer, &programmer.load_bitstream_args(bitstream))
        );
        return Ok(0);
    }

    if !global.quiet {
        eprintln!("     Loading {}", bitstream.display());
    }
    programmer.load_bitstream(bitstream)?;
    if !global.quiet {
        eprintln!("    Finished loading onto {}", selection.profile.device());
    }
    Ok(0)
}

/// Runs the `pano flash` command.
pub fn run_flash(args: &FlashArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let selection = resolve_board(global)?;
    let programmer = selection
        .profile
        .create_programmer()
        .with_executable(args.openocd.as_str())
        .with_flash_proxy(&args.proxy);
    let data = Path::new(&args.data);

    if args.dry_run {
        let flash_args = programmer.flash_args(args.address, data)?;
        println!("{}", command_line(&programmer, &flash_args));
        return Ok(0);
    }

    if !global.quiet {
        eprintln!("    Flashing {} at 0x{:x}", data.display(), args.address);
    }
    programmer.flash(args.address, data)?;
    if !global.quiet {
        eprintln!("    Finished writing configuration flash");
    }
    Ok(0)
}

/// Parses a flash address given as decimal or `0x`-prefixed hex.
pub fn parse_address(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid address '{s}': {e}"))
}

/// Formats an OpenOCD invocation as a shell command line.
fn command_line(programmer: &OpenOcd, args: &[String]) -> String {
    std::iter::once(programmer.executable())
        .chain(args.iter().map(String::as_str))
        .map(quote)
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote(arg: &str) -> String {
    if !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:".contains(c))
    {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decimal_and_hex() {
        assert_eq!(parse_address("0"), Ok(0));
        assert_eq!(parse_address("4096"), Ok(4096));
        assert_eq!(parse_address("0x40000"), Ok(0x40000));
        assert_eq!(parse_address("0XFF"), Ok(0xff));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_address("0x").is_err());
        assert!(parse_address("-1").is_err());
        assert!(parse_address("0x1_0000_0000").is_err());
    }

    #[test]
    fn dry_run_load_command_line() {
        let ocd = OpenOcd::new("openocd_xc6_ft232.cfg");
        let args = ocd.load_bitstream_args(Path::new("build/top.bit"));
        assert_eq!(
            command_line(&ocd, &args),
            "openocd -f openocd_xc6_ft232.cfg -c 'init; pld load 0 {build/top.bit}; exit'"
        );
    }

    #[test]
    fn dry_run_flash_command_line() {
        let ocd = OpenOcd::new("openocd_xc6_ft232.cfg").with_flash_proxy("bscan.bit");
        let args = ocd.flash_args(0x100, Path::new("top.bin")).unwrap();
        assert_eq!(
            command_line(&ocd, &args),
            "openocd -f openocd_xc6_ft232.cfg -c \
             'init; jtagspi_init 0 {bscan.bit}; jtagspi_program {top.bin} 0x100; fini; exit'"
        );
    }

    #[test]
    fn quote_escapes_single_quotes() {
        assert_eq!(quote("it's"), r"'it'\''s'");
        assert_eq!(quote(""), "''");
    }
}
