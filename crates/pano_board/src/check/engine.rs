//! Rule registration and execution.

use std::collections::HashSet;

use pano_diagnostics::{DiagnosticCode, DiagnosticSink, Severity};
use pano_platform::Platform;

use super::{register_builtin_rules, BoardRule};
use crate::config::CheckConfig;

/// Runs board rules against a platform.
///
/// Rules named in `allow` are skipped; diagnostics from rules named in `deny`
/// are promoted to errors. Either list may name a rule by its kebab-case name
/// or by its code (`shared-pin` or `W101`).
pub struct CheckEngine {
    rules: Vec<Box<dyn BoardRule>>,
    denied: HashSet<String>,
    allowed: HashSet<String>,
}

impl CheckEngine {
    /// Creates an engine with every builtin rule, configured by `config`.
    pub fn new(config: &CheckConfig) -> Self {
        let mut engine = Self {
            rules: Vec::new(),
            denied: config.deny.iter().cloned().collect(),
            allowed: config.allow.iter().cloned().collect(),
        };
        register_builtin_rules(&mut engine);
        engine
    }

    /// Creates an engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(&CheckConfig::default())
    }

    /// Registers a rule.
    pub fn register(&mut self, rule: Box<dyn BoardRule>) {
        self.rules.push(rule);
    }

    /// Returns the names of all registered rules.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Resolves a rule name or code to the code of a registered rule.
    pub fn resolve(&self, entry: &str) -> Option<DiagnosticCode> {
        self.rules
            .iter()
            .find(|r| names_rule(entry, r.as_ref()))
            .map(|r| r.code())
    }

    /// Returns entries of the allow and deny lists that match no rule.
    pub fn unknown_rule_names(&self) -> Vec<&str> {
        let mut unknown: Vec<&str> = self
            .denied
            .iter()
            .chain(self.allowed.iter())
            .map(String::as_str)
            .filter(|entry| !self.rules.iter().any(|r| names_rule(entry, r.as_ref())))
            .collect();
        unknown.sort_unstable();
        unknown.dedup();
        unknown
    }

    /// Runs every enabled rule, in registration order.
    pub fn run(&self, platform: &Platform, sink: &DiagnosticSink) {
        for rule in &self.rules {
            if selects(&self.allowed, rule.as_ref()) {
                continue;
            }

            let rule_sink = DiagnosticSink::new();
            rule.check(platform, &rule_sink);

            let is_denied = selects(&self.denied, rule.as_ref());
            let severity = if is_denied {
                Severity::Error
            } else {
                rule.default_severity()
            };
            for mut diag in rule_sink.take_all() {
                diag.severity = severity;
                sink.emit(diag);
            }
        }
    }
}

fn selects(entries: &HashSet<String>, rule: &dyn BoardRule) -> bool {
    entries.iter().any(|entry| names_rule(entry, rule))
}

fn names_rule(entry: &str, rule: &dyn BoardRule) -> bool {
    entry == rule.name() || entry.parse::<DiagnosticCode>().ok() == Some(rule.code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pano_diagnostics::Category;
    use pano_platform::{Attr, Resource, ResourceTable, Subsignal, Toolchain};

    fn shared_pin_platform() -> Platform {
        let table = ResourceTable::new(vec![
            Resource::simple("eth_rst_n", 0, "K3").attr(Attr::io_standard("LVCMOS33")),
            Resource::composite("eth", 0)
                .subsignal(Subsignal::new("rst_n", "K3"))
                .attr(Attr::io_standard("LVCMOS33")),
        ])
        .unwrap();
        Platform::new("xc6slx100-2-fgg484", Toolchain::Ise, table)
    }

    #[test]
    fn registers_builtin_rules() {
        let engine = CheckEngine::with_defaults();
        assert_eq!(
            engine.rule_names(),
            ["shared-pin", "bus-width", "diff-pair", "missing-io-standard"]
        );
    }

    #[test]
    fn default_severity_kept() {
        let sink = DiagnosticSink::new();
        CheckEngine::with_defaults().run(&shared_pin_platform(), &sink);
        assert_eq!(sink.warning_count(), 1);
        assert!(!sink.has_errors());
    }

    #[test]
    fn denied_rule_promoted_to_error() {
        let config = CheckConfig {
            deny: vec!["shared-pin".to_string()],
            allow: Vec::new(),
        };
        let sink = DiagnosticSink::new();
        CheckEngine::new(&config).run(&shared_pin_platform(), &sink);
        assert_eq!(sink.error_count(), 1);
    }

    #[test]
    fn allowed_rule_skipped() {
        let config = CheckConfig {
            deny: Vec::new(),
            allow: vec!["shared-pin".to_string()],
        };
        let sink = DiagnosticSink::new();
        CheckEngine::new(&config).run(&shared_pin_platform(), &sink);
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn rules_selected_by_code() {
        let config = CheckConfig {
            deny: vec!["W101".to_string()],
            allow: Vec::new(),
        };
        let sink = DiagnosticSink::new();
        let engine = CheckEngine::new(&config);
        engine.run(&shared_pin_platform(), &sink);
        assert_eq!(sink.error_count(), 1);
        assert!(engine.unknown_rule_names().is_empty());

        let config = CheckConfig {
            deny: Vec::new(),
            allow: vec!["w101".to_string()],
        };
        let sink = DiagnosticSink::new();
        CheckEngine::new(&config).run(&shared_pin_platform(), &sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn resolves_names_and_codes() {
        let engine = CheckEngine::with_defaults();
        let shared = DiagnosticCode::new(Category::Warning, 101);
        assert_eq!(engine.resolve("shared-pin"), Some(shared));
        assert_eq!(engine.resolve("W101"), Some(shared));
        assert_eq!(engine.resolve("w101"), Some(shared));
        assert_eq!(engine.resolve("W999"), None);
        assert_eq!(engine.resolve("shared_pin"), None);
    }

    #[test]
    fn emitted_severity_matches_rule_default() {
        let table = ResourceTable::new(vec![
            Resource::simple("eth_rst_n", 0, "K3"),
            Resource::composite("ddram", 0)
                .subsignal(Subsignal::new("dq", "N20 N22 M21"))
                .subsignal(Subsignal::new("clk", "H20 H21"))
                .subsignal(Subsignal::new("clk_n", "J19"))
                .subsignal(Subsignal::new("rst_n", "K3")),
        ])
        .unwrap();
        let platform = Platform::new("xc6slx100-2-fgg484", Toolchain::Ise, table);

        let engine = CheckEngine::with_defaults();
        for rule in &engine.rules {
            let sink = DiagnosticSink::new();
            rule.check(&platform, &sink);
            let diags = sink.take_all();
            assert!(!diags.is_empty(), "{} emitted nothing", rule.name());
            for diag in diags {
                assert_eq!(diag.severity, rule.default_severity(), "{}", rule.name());
            }
        }
    }

    #[test]
    fn reports_unknown_rule_names() {
        let config = CheckConfig {
            deny: vec!["bus-width".to_string(), "no-such-rule".to_string()],
            allow: vec!["typo".to_string(), "W999".to_string(), "E102".to_string()],
        };
        let engine = CheckEngine::new(&config);
        assert_eq!(engine.unknown_rule_names(), ["W999", "no-such-rule", "typo"]);
    }
}
