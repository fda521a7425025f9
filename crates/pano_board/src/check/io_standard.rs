//! W104: Missing I/O standard.

use pano_diagnostics::{Category, DiagnosticCode, DiagnosticSink, Severity};
use pano_platform::Platform;

use super::{rule_diagnostic, BoardRule};

/// Detects pins with no I/O standard, either their own or shared.
///
/// Vendor tools fall back to a device default, which is rarely the bank
/// voltage the board actually uses.
pub struct MissingIoStandard;

impl BoardRule for MissingIoStandard {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 104)
    }

    fn name(&self) -> &str {
        "missing-io-standard"
    }

    fn description(&self) -> &str {
        "pin has no I/O standard"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, platform: &Platform, sink: &DiagnosticSink) {
        for assignment in platform.table().pin_assignments() {
            if assignment.io_standard.is_none() {
                sink.emit(
                    rule_diagnostic(
                        self,
                        format!("pin {} has no I/O standard", assignment.pin),
                    )
                    .at(assignment.path())
                    .with_help("add an IoStandard attribute to the resource or sub-signal"),
                );
            }
        }
    }
}
