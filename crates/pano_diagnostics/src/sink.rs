//! Collects findings during a check run.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;
use std::sync::{Mutex, MutexGuard};

/// Accumulates diagnostics in emission order.
///
/// Rules emit through `&self`, so one sink can be handed to every rule of a
/// run.
#[derive(Default)]
pub struct DiagnosticSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic.
    pub fn emit(&self, diag: Diagnostic) {
        self.lock().push(diag);
    }

    /// Returns the number of held diagnostics with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.lock().iter().filter(|d| d.severity == severity).count()
    }

    /// Returns the number of held errors.
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Returns the number of held warnings.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Returns `true` if any held diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.highest_severity() == Some(Severity::Error)
    }

    /// Returns the most severe held diagnostic level, if any.
    pub fn highest_severity(&self) -> Option<Severity> {
        self.lock().iter().map(|d| d.severity).max()
    }

    /// Returns `true` if nothing has been emitted (or everything was taken).
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drains the sink.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    /// Returns a copy of the held diagnostics.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        // Pushing a finished value cannot leave the vector half-written.
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{Category, DiagnosticCode};

    fn shared_pin() -> Diagnostic {
        Diagnostic::warning(DiagnosticCode::new(Category::Warning, 101), "pin K3 shared")
    }

    fn narrow_dm() -> Diagnostic {
        Diagnostic::error(DiagnosticCode::new(Category::Error, 102), "dm too narrow")
    }

    #[test]
    fn starts_empty() {
        let sink = DiagnosticSink::new();
        assert!(sink.is_empty());
        assert!(!sink.has_errors());
        assert_eq!(sink.highest_severity(), None);
    }

    #[test]
    fn counts_by_severity() {
        let sink = DiagnosticSink::new();
        sink.emit(shared_pin());
        sink.emit(shared_pin());
        assert_eq!(sink.warning_count(), 2);
        assert!(!sink.has_errors());

        sink.emit(narrow_dm());
        assert_eq!(sink.error_count(), 1);
        assert_eq!(sink.highest_severity(), Some(Severity::Error));
    }

    #[test]
    fn take_all_drains_in_order() {
        let sink = DiagnosticSink::new();
        sink.emit(shared_pin());
        sink.emit(narrow_dm());
        let all = sink.take_all();
        assert_eq!(all[0].message, "pin K3 shared");
        assert_eq!(all[1].message, "dm too narrow");
        assert!(sink.is_empty());
        assert!(!sink.has_errors());
    }
}
