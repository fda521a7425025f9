//! Consistency checks over a board's pin-constraint table.
//!
//! The table only enforces structural invariants. These rules report what a
//! downstream toolchain or the hardware would trip over, such as one package
//! pin wired to two signals.
//!
//! # Rules
//!
//! - `W101 shared-pin`
//! - `E102 bus-width`
//! - `W103 diff-pair`
//! - `W104 missing-io-standard`

mod bus_width;
mod diff_pair;
mod engine;
mod io_standard;
mod shared_pin;

pub use bus_width::BusWidth;
pub use diff_pair::DiffPair;
pub use engine::CheckEngine;
pub use io_standard::MissingIoStandard;
pub use shared_pin::SharedPin;

use pano_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, Severity};
use pano_platform::Platform;

/// A single board consistency rule.
pub trait BoardRule {
    /// Returns the diagnostic code for this rule (e.g. W101).
    fn code(&self) -> DiagnosticCode;

    /// Returns the short kebab-case name of this rule (e.g. "shared-pin").
    fn name(&self) -> &str;

    /// Returns a human-readable description of what this rule checks.
    fn description(&self) -> &str;

    /// Returns the default severity for diagnostics emitted by this rule.
    fn default_severity(&self) -> Severity;

    /// Checks the platform and emits diagnostics to the sink.
    fn check(&self, platform: &Platform, sink: &DiagnosticSink);
}

/// Starts a diagnostic for `rule` at the rule's default severity.
pub(crate) fn rule_diagnostic(rule: &dyn BoardRule, message: impl Into<String>) -> Diagnostic {
    Diagnostic::new(rule.default_severity(), rule.code(), message)
}

/// Registers the builtin rules, in code order.
pub fn register_builtin_rules(engine: &mut CheckEngine) {
    engine.register(Box::new(SharedPin));
    engine.register(Box::new(BusWidth));
    engine.register(Box::new(DiffPair));
    engine.register(Box::new(MissingIoStandard));
}
