//! W101: Shared pin: one package pin assigned to several signals.

use std::collections::BTreeMap;

use pano_diagnostics::{Category, DiagnosticCode, DiagnosticSink, Label, Severity};
use pano_platform::Platform;

use super::{rule_diagnostic, BoardRule};

/// Detects package pins that appear in more than one resource or sub-signal.
///
/// A shared pin is sometimes intentional (a reset line that doubles as a PHY
/// reset) and sometimes a copy-paste error; either way it needs confirming
/// against the schematic before the description is trusted.
pub struct SharedPin;

impl BoardRule for SharedPin {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 101)
    }

    fn name(&self) -> &str {
        "shared-pin"
    }

    fn description(&self) -> &str {
        "package pin is assigned to more than one signal"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, platform: &Platform, sink: &DiagnosticSink) {
        let mut by_pin: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for assignment in platform.table().pin_assignments() {
            by_pin
                .entry(assignment.pin.clone())
                .or_default()
                .push(assignment.path());
        }

        for (pin, paths) in by_pin {
            if paths.len() < 2 {
                continue;
            }
            let mut diag = rule_diagnostic(
                self,
                format!("package pin {pin} is assigned to {} signals", paths.len()),
            )
            .at(pin.as_str());
            for (i, path) in paths.iter().enumerate() {
                diag = diag.with_label(if i == 0 {
                    Label::primary(path, "assigned here")
                } else {
                    Label::secondary(path, "also assigned here")
                });
            }
            sink.emit(diag.with_note("confirm the shared use against the board schematic"));
        }
    }
}
