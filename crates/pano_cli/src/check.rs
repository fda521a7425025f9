//! `pano check`: run board consistency rules and render diagnostics.

use pano_board::config::CheckConfig;
use pano_board::CheckEngine;
use pano_diagnostics::{DiagnosticRenderer, DiagnosticSink, TerminalRenderer};

use crate::board::resolve_board;
use crate::{CheckArgs, GlobalArgs, ReportFormat};

/// Runs the `pano check` command.
///
/// Returns exit code 0 if no errors, 1 if there are errors.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let selection = resolve_board(global)?;
    let profile = &selection.profile;

    if !global.quiet && args.format == ReportFormat::Text {
        eprintln!(
            "   Checking Pano Logic G1 rev {} ({})",
            profile.revision(),
            profile.device()
        );
    }

    let merged = merge_check_config(&selection.check, args);
    let engine = CheckEngine::new(&merged);
    if !global.quiet {
        for name in engine.unknown_rule_names() {
            eprintln!("warning: unknown check rule '{name}'");
        }
    }

    let sink = DiagnosticSink::new();
    engine.run(profile.platform(), &sink);
    let diagnostics = sink.diagnostics();

    match args.format {
        ReportFormat::Text => {
            let renderer = TerminalRenderer::new(global.color);
            for diag in &diagnostics {
                eprintln!("{}", renderer.render(diag));
            }
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&diagnostics)?);
        }
    }

    let error_count = sink.error_count();
    let warning_count = sink.warning_count();

    if !global.quiet && args.format == ReportFormat::Text {
        eprintln!("   Result: {error_count} error(s), {warning_count} warning(s)");
    }

    Ok(if sink.has_errors() { 1 } else { 0 })
}

/// Merges `--allow`/`--deny` flags with the `[check]` table.
///
/// A rule named on the command line is removed from the opposite list of the
/// file, so the command line wins. Entries naming the same rule match whether
/// they use its name or its code.
fn merge_check_config(config: &CheckConfig, args: &CheckArgs) -> CheckConfig {
    let rules = CheckEngine::with_defaults();
    let same_rule = |a: &str, b: &str| {
        a == b || matches!((rules.resolve(a), rules.resolve(b)), (Some(x), Some(y)) if x == y)
    };

    let mut deny = config.deny.clone();
    let mut allow = config.allow.clone();

    for rule in &args.deny {
        allow.retain(|r| !same_rule(r.as_str(), rule.as_str()));
        if !deny.iter().any(|r| same_rule(r.as_str(), rule.as_str())) {
            deny.push(rule.clone());
        }
    }
    for rule in &args.allow {
        deny.retain(|r| !same_rule(r.as_str(), rule.as_str()));
        if !allow.iter().any(|r| same_rule(r.as_str(), rule.as_str())) {
            allow.push(rule.clone());
        }
    }

    CheckConfig { deny, allow }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(allow: &[&str], deny: &[&str]) -> CheckArgs {
        CheckArgs {
            allow: allow.iter().map(|s| s.to_string()).collect(),
            deny: deny.iter().map(|s| s.to_string()).collect(),
            format: ReportFormat::Text,
        }
    }

    #[test]
    fn merge_keeps_file_lists() {
        let file = CheckConfig {
            deny: vec!["bus-width".to_string()],
            allow: vec!["shared-pin".to_string()],
        };
        let merged = merge_check_config(&file, &args(&[], &[]));
        assert_eq!(merged.deny, ["bus-width"]);
        assert_eq!(merged.allow, ["shared-pin"]);
    }

    #[test]
    fn cli_deny_overrides_file_allow() {
        let file = CheckConfig {
            deny: Vec::new(),
            allow: vec!["shared-pin".to_string()],
        };
        let merged = merge_check_config(&file, &args(&[], &["shared-pin"]));
        assert_eq!(merged.deny, ["shared-pin"]);
        assert!(merged.allow.is_empty());
    }

    #[test]
    fn cli_allow_overrides_file_deny() {
        let file = CheckConfig {
            deny: vec!["diff-pair".to_string()],
            allow: Vec::new(),
        };
        let merged = merge_check_config(&file, &args(&["diff-pair"], &[]));
        assert!(merged.deny.is_empty());
        assert_eq!(merged.allow, ["diff-pair"]);
    }

    #[test]
    fn no_duplicates_after_merge() {
        let file = CheckConfig {
            deny: vec!["bus-width".to_string()],
            allow: Vec::new(),
        };
        let merged = merge_check_config(&file, &args(&[], &["bus-width"]));
        assert_eq!(merged.deny, ["bus-width"]);
    }

    #[test]
    fn cli_deny_by_name_overrides_file_allow_by_code() {
        let file = CheckConfig {
            deny: Vec::new(),
            allow: vec!["W101".to_string()],
        };
        let merged = merge_check_config(&file, &args(&[], &["shared-pin"]));
        assert!(merged.allow.is_empty());
        assert_eq!(merged.deny, ["shared-pin"]);

        let profile = pano_board::BoardProfile::new("c", "ise").unwrap();
        let sink = DiagnosticSink::new();
        CheckEngine::new(&merged).run(profile.platform(), &sink);
        assert!(sink.error_count() > 0);
        assert!(sink
            .diagnostics()
            .iter()
            .any(|d| d.code.to_string() == "W101" && d.location.as_deref() == Some("K3")));
    }

    #[test]
    fn cli_allow_by_code_overrides_file_deny_by_name() {
        let file = CheckConfig {
            deny: vec!["bus-width".to_string(), "diff-pair".to_string()],
            allow: Vec::new(),
        };
        let merged = merge_check_config(&file, &args(&["e102"], &[]));
        assert_eq!(merged.deny, ["diff-pair"]);
        assert_eq!(merged.allow, ["e102"]);
    }

    #[test]
    fn unknown_entries_merge_by_exact_text() {
        let file = CheckConfig {
            deny: Vec::new(),
            allow: vec!["W999".to_string(), "typo".to_string()],
        };
        let merged = merge_check_config(&file, &args(&[], &["typo", "shared-pin"]));
        assert_eq!(merged.allow, ["W999"]);
        assert_eq!(merged.deny, ["typo", "shared-pin"]);
    }
}
