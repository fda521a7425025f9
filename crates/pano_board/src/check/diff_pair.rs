//! W103: Differential pair: positive and negative legs of unequal width.

use pano_diagnostics::{Category, DiagnosticCode, DiagnosticSink, Severity};
use pano_platform::{Platform, Resource, Subsignal};

use super::{rule_diagnostic, BoardRule};

/// Checks that each differential pair has as many negative as positive pins.
///
/// Pairs are recognized as `p`/`n` and `<name>`/`<name>_n` sub-signals.
pub struct DiffPair;

impl BoardRule for DiffPair {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 103)
    }

    fn name(&self) -> &str {
        "diff-pair"
    }

    fn description(&self) -> &str {
        "differential pair legs have different widths"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, platform: &Platform, sink: &DiagnosticSink) {
        for resource in platform.table() {
            for positive in resource.subsignals() {
                let Some(negative) = negative_leg(resource, positive) else {
                    continue;
                };
                let (p, n) = (positive.pins().width(), negative.pins().width());
                if p != n {
                    sink.emit(
                        rule_diagnostic(
                            self,
                            format!(
                                "differential pair {}/{} has {p} positive and {n} negative pins",
                                positive.name(),
                                negative.name()
                            ),
                        )
                        .at(format!("{}.{}", resource.key(), positive.name())),
                    );
                }
            }
        }
    }
}

fn negative_leg<'a>(resource: &'a Resource, positive: &Subsignal) -> Option<&'a Subsignal> {
    let name = positive.name();
    if name.ends_with("_n") {
        return None;
    }
    if name == "p" {
        return resource.get_subsignal("n");
    }
    resource.get_subsignal(&format!("{name}_n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pano_diagnostics::Diagnostic;
    use pano_platform::{ResourceTable, Toolchain};

    fn run(resource: Resource) -> Vec<Diagnostic> {
        let table = ResourceTable::new(vec![resource]).unwrap();
        let platform = Platform::new("xc6slx100-2-fgg484", Toolchain::Ise, table);
        let sink = DiagnosticSink::new();
        DiffPair.check(&platform, &sink);
        sink.take_all()
    }

    #[test]
    fn matched_pairs_clean() {
        let res = Resource::composite("ddram", 0)
            .subsignal(Subsignal::new("dqs", "T21 L20"))
            .subsignal(Subsignal::new("dqs_n", "T22 L22"));
        assert!(run(res).is_empty());
    }

    #[test]
    fn mismatched_strobe_flagged() {
        let res = Resource::composite("ddram", 0)
            .subsignal(Subsignal::new("dqs", "T21 L20"))
            .subsignal(Subsignal::new("dqs_n", "T22"));
        let diags = run(res);
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].message,
            "differential pair dqs/dqs_n has 2 positive and 1 negative pins"
        );
    }

    #[test]
    fn clock_pn_pair() {
        let res = Resource::composite("ddram_clock_a", 0)
            .subsignal(Subsignal::new("p", "H20 H21"))
            .subsignal(Subsignal::new("n", "J19"));
        assert_eq!(run(res).len(), 1);
    }

    #[test]
    fn active_low_singletons_ignored() {
        let res = Resource::composite("ddram", 0)
            .subsignal(Subsignal::new("ras_n", "H21"))
            .subsignal(Subsignal::new("cas_n", "H22"));
        assert!(run(res).is_empty());
    }
}
