//! E102: Bus width: data mask and strobe widths out of step with the data bus.

use pano_diagnostics::{Category, DiagnosticCode, DiagnosticSink, Severity};
use pano_platform::Platform;

use super::{rule_diagnostic, BoardRule};

/// Data bits covered by one `dm` / `dqs` bit.
const BYTE_LANE: usize = 8;

/// Checks memory buses: `dq` must be 8 bits per `dm` bit, and `dqs` must have
/// one strobe per byte lane.
pub struct BusWidth;

impl BoardRule for BusWidth {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 102)
    }

    fn name(&self) -> &str {
        "bus-width"
    }

    fn description(&self) -> &str {
        "data mask or strobe width does not match the data bus"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, platform: &Platform, sink: &DiagnosticSink) {
        for resource in platform.table() {
            let Some(dq) = resource.get_subsignal("dq") else {
                continue;
            };
            let dq_width = dq.pins().width();
            let lanes = dq_width / BYTE_LANE;

            if dq_width % BYTE_LANE != 0 {
                sink.emit(
                    rule_diagnostic(
                        self,
                        format!("dq is {dq_width} bits wide, not a whole number of bytes"),
                    )
                    .at(format!("{}.dq", resource.key())),
                );
                continue;
            }

            for lane_signal in ["dm", "dqs"] {
                let Some(sub) = resource.get_subsignal(lane_signal) else {
                    continue;
                };
                let width = sub.pins().width();
                if width != lanes {
                    sink.emit(
                        rule_diagnostic(
                            self,
                            format!(
                                "{lane_signal} is {width} bits wide but dq has {lanes} byte lanes"
                            ),
                        )
                        .at(format!("{}.{lane_signal}", resource.key()))
                        .with_note(format!("{dq_width} dq bits need {lanes} {lane_signal} bits")),
                    );
                }
            }
        }
    }
}
