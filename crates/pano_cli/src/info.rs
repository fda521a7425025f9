//! `pano info`: summary of the selected board profile.

use pano_board::BoardProfile;

use crate::board::resolve_board;
use crate::{GlobalArgs, InfoArgs, ReportFormat};

/// Runs the `pano info` command.
pub fn run(args: &InfoArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let selection = resolve_board(global)?;
    let profile = &selection.profile;

    match args.format {
        ReportFormat::Text => print!("{}", render_text(profile)),
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&to_json(profile))?);
        }
    }
    Ok(0)
}

fn render_text(profile: &BoardProfile) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>12}  Pano Logic G1 rev {}\n", "Board", profile.revision()));
    out.push_str(&format!("{:>12}  {}\n", "Device", profile.device()));
    out.push_str(&format!("{:>12}  {}\n", "Toolchain", profile.toolchain()));
    out.push_str(&format!(
        "{:>12}  {} ({} ns, {})\n",
        "Clock",
        profile.default_clk_name(),
        profile.default_clk_period(),
        profile.default_clk_frequency()
    ));
    for command in profile.platform_commands() {
        out.push_str(&format!("{:>12}  {command}\n", "Command"));
    }
    for constraint in profile.period_constraints() {
        out.push_str(&format!(
            "{:>12}  {} {} ns\n",
            "Period", constraint.resource, constraint.period_ns
        ));
    }
    let programmer = profile.create_programmer();
    out.push_str(&format!(
        "{:>12}  {} -f {}\n",
        "Programmer",
        programmer.executable(),
        programmer.config().display()
    ));
    out
}

fn to_json(profile: &BoardProfile) -> serde_json::Value {
    let programmer = profile.create_programmer();
    serde_json::json!({
        "revision": profile.revision(),
        "device": profile.device(),
        "toolchain": profile.toolchain(),
        "default_clk": {
            "name": profile.default_clk_name(),
            "period_ns": profile.default_clk_period(),
            "frequency_hz": profile.default_clk_frequency().hz(),
        },
        "platform_commands": profile.platform_commands(),
        "period_constraints": profile.period_constraints(),
        "not_fitted": profile.platform().table().not_fitted(),
        "programmer": {
            "executable": programmer.executable(),
            "config": programmer.config().display().to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_summary() {
        let profile = BoardProfile::new("c", "ise").unwrap();
        let text = render_text(&profile);
        assert!(text.contains("Pano Logic G1 rev c"));
        assert!(text.contains("xc6slx100-2-fgg484"));
        assert!(text.contains("clk100 (8 ns, 125 MHz)"));
        assert!(text.contains(r#"CONFIG VCCAUX="2.5";"#));
        assert!(text.contains("clk100:0 8 ns"));
        assert!(text.contains("openocd -f openocd_xc6_ft232.cfg"));
    }

    #[test]
    fn json_summary() {
        let profile = BoardProfile::new("b", "ise").unwrap();
        let json = to_json(&profile);
        assert_eq!(json["revision"], "b");
        assert_eq!(json["device"], "xc6slx150-2-fgg484");
        assert_eq!(json["toolchain"], "ise");
        assert_eq!(json["default_clk"]["period_ns"], 8.0);
        assert_eq!(json["default_clk"]["frequency_hz"], 125e6);
        assert_eq!(json["period_constraints"][0]["resource"]["name"], "clk100");
        assert_eq!(json["not_fitted"].as_array().unwrap().len(), 2);
    }
}
