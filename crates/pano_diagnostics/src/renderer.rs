//! Diagnostic rendering for terminal output.

use crate::diagnostic::Diagnostic;
use crate::label::LabelStyle;
use crate::severity::Severity;

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    fn render(&self, diag: &Diagnostic) -> String;
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// warning[W101]: package pin K3 is assigned to 2 signals
///   --> K3
///    | eth_rst_n:0: assigned here
///    - eth:0.rst_n: also assigned here
///    = note: ...
///    = help: ...
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, severity: Severity, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        format!("\x1b[1;{}m{text}\x1b[0m", severity.ansi_color())
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let mut out = String::new();

        let header = format!("{}[{}]", diag.severity, diag.code);
        out.push_str(&format!(
            "{}: {}\n",
            self.paint(diag.severity, &header),
            diag.message
        ));

        if let Some(location) = &diag.location {
            out.push_str(&format!("  --> {location}\n"));
        }

        for label in &diag.labels {
            let marker = match label.style {
                LabelStyle::Primary => '|',
                LabelStyle::Secondary => '-',
            };
            out.push_str(&format!(
                "   {marker} {}: {}\n",
                label.location, label.message
            ));
        }

        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }

        for help in &diag.help {
            out.push_str(&format!("   = help: {help}\n"));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{Category, DiagnosticCode};
    use crate::label::Label;

    #[test]
    fn render_warning_with_labels() {
        let diag = Diagnostic::warning(
            DiagnosticCode::new(Category::Warning, 101),
            "package pin K3 is assigned to 2 signals",
        )
        .at("K3")
        .with_label(Label::primary("eth_rst_n:0", "assigned here"))
        .with_label(Label::secondary("eth:0.rst_n", "also assigned here"));

        let output = TerminalRenderer::new(false).render(&diag);
        assert!(output.starts_with("warning[W101]: package pin K3 is assigned to 2 signals\n"));
        assert!(output.contains("  --> K3\n"));
        assert!(output.contains("   | eth_rst_n:0: assigned here\n"));
        assert!(output.contains("   - eth:0.rst_n: also assigned here\n"));
    }

    #[test]
    fn render_notes_and_help() {
        let diag = Diagnostic::error(DiagnosticCode::new(Category::Error, 102), "width mismatch")
            .with_note("16 dq bits need 2 dm bits")
            .with_help("check the dm pin list");

        let output = TerminalRenderer::new(false).render(&diag);
        assert!(output.contains("error[E102]: width mismatch"));
        assert!(output.contains("= note: 16 dq bits need 2 dm bits"));
        assert!(output.contains("= help: check the dm pin list"));
        assert!(!output.contains("-->"));
    }

    #[test]
    fn render_with_color_wraps_header() {
        let diag = Diagnostic::error(DiagnosticCode::new(Category::Error, 1), "bad");
        let output = TerminalRenderer::new(true).render(&diag);
        assert!(output.starts_with("\x1b[1;31merror[E001]\x1b[0m: bad"));
    }
}
