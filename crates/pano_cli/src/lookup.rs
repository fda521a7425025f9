//! `pano lookup`: resolve one logical signal.

use pano_platform::{Attr, Resource, ResourceKind};

use crate::board::resolve_board;
use crate::{GlobalArgs, LookupArgs, ReportFormat};

/// Runs the `pano lookup` command.
///
/// A missing resource is reported as an error and exits with status 1.
pub fn run(args: &LookupArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let selection = resolve_board(global)?;
    let resource = selection
        .profile
        .lookup(&args.name, args.index, args.loose)?;

    match args.format {
        ReportFormat::Text => print!("{}", render_resource(resource)),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(resource)?),
    }
    Ok(0)
}

/// Formats a resource with one line per sub-signal.
pub fn render_resource(resource: &Resource) -> String {
    let mut out = String::new();
    match resource.kind() {
        ResourceKind::Simple(pins) => {
            out.push_str(&format!(
                "{}  {pins}{}\n",
                resource.key(),
                attr_suffix(resource.attrs())
            ));
        }
        ResourceKind::Composite(subsignals) => {
            out.push_str(&format!(
                "{}{}\n",
                resource.key(),
                attr_suffix(resource.attrs())
            ));
            let width = subsignals.iter().map(|s| s.name().len()).max().unwrap_or(0);
            for sub in subsignals {
                out.push_str(&format!(
                    "  {:<width$}  {}{}\n",
                    sub.name(),
                    sub.pins(),
                    attr_suffix(sub.attrs())
                ));
            }
        }
    }
    out
}

fn attr_suffix(attrs: &[Attr]) -> String {
    if attrs.is_empty() {
        return String::new();
    }
    let joined: Vec<String> = attrs.iter().map(Attr::to_string).collect();
    format!("  [{}]", joined.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pano_board::BoardProfile;

    #[test]
    fn render_simple_resource() {
        let profile = BoardProfile::new("c", "ise").unwrap();
        let clk = profile.lookup("clk100", Some(0), false).unwrap();
        assert_eq!(render_resource(clk), "clk100:0  U10  [IOSTANDARD=LVCMOS33]\n");
    }

    #[test]
    fn render_composite_resource() {
        let profile = BoardProfile::new("c", "ise").unwrap();
        let serial = profile.lookup("serial", Some(1), false).unwrap();
        assert_eq!(
            render_resource(serial),
            "serial:1  [IOSTANDARD=LVCMOS33]\n  tx  C14\n  rx  C17\n"
        );
    }

    #[test]
    fn render_misc_attributes() {
        let profile = BoardProfile::new("b", "ise").unwrap();
        let clk = profile.lookup("ddram_clock_a", None, true).unwrap();
        assert!(render_resource(clk)
            .starts_with("ddram_clock_a:0  [IOSTANDARD=DIFF_SSTL18_II, IN_TERM=NONE]\n"));
    }
}
