//! `pano resources`: list the pin table of the selected revision.

use pano_board::BoardProfile;

use crate::board::resolve_board;
use crate::{GlobalArgs, ReportFormat, ResourcesArgs};

/// Runs the `pano resources` command.
pub fn run(args: &ResourcesArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let selection = resolve_board(global)?;
    let profile = &selection.profile;
    let table = profile.platform().table();

    match (args.format, args.pins) {
        (ReportFormat::Text, false) => print!("{}", render_resources(profile)),
        (ReportFormat::Text, true) => print!("{}", render_pins(profile)),
        (ReportFormat::Json, false) => println!("{}", serde_json::to_string_pretty(table)?),
        (ReportFormat::Json, true) => {
            println!("{}", serde_json::to_string_pretty(&table.pin_assignments())?);
        }
    }

    if !global.quiet && args.format == ReportFormat::Text {
        eprintln!(
            "   {} resource(s), {} not fitted on rev {}",
            table.len(),
            table.not_fitted().len(),
            profile.revision()
        );
    }
    Ok(0)
}

fn render_resources(profile: &BoardProfile) -> String {
    let table = profile.platform().table();
    let mut out = String::new();
    for resource in table {
        let kind = if resource.is_composite() {
            format!("{} signals", resource.subsignals().len())
        } else {
            "simple".to_string()
        };
        out.push_str(&format!(
            "{:<18} {:<12} {:>3} pin(s)  {}\n",
            resource.key().to_string(),
            kind,
            resource.width(),
            resource.io_standard().unwrap_or("-")
        ));
    }
    for key in table.not_fitted() {
        out.push_str(&format!("{:<18} not fitted\n", key.to_string()));
    }
    out
}

fn render_pins(profile: &BoardProfile) -> String {
    let mut out = String::new();
    for assignment in profile.platform().table().pin_assignments() {
        out.push_str(&format!(
            "{:<6} {:<24} {}\n",
            assignment.pin,
            assignment.path(),
            assignment.io_standard.as_deref().unwrap_or("-")
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_not_fitted_on_b() {
        let profile = BoardProfile::new("b", "ise").unwrap();
        let text = render_resources(&profile);
        assert!(text.starts_with("clk100:0"));
        assert!(text.contains("serial:0           not fitted"));
        assert!(text.contains("serial:1           not fitted"));
    }

    #[test]
    fn lists_every_resource_on_c() {
        let profile = BoardProfile::new("c", "ise").unwrap();
        let text = render_resources(&profile);
        assert_eq!(text.lines().count(), profile.platform().table().len());
        assert!(!text.contains("not fitted"));
    }

    #[test]
    fn pin_listing_one_line_per_pin() {
        let profile = BoardProfile::new("c", "ise").unwrap();
        let text = render_pins(&profile);
        let assignments = profile.platform().table().pin_assignments();
        assert_eq!(text.lines().count(), assignments.len());
        assert!(text.starts_with("U10    clk100:0"));
        assert!(text.contains("eth:0.rx_data[7]"));
    }
}
