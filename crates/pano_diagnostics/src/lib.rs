//! Findings reported by board consistency checks.
//!
//! A check rule reports each finding as a [`Diagnostic`]: a [`Severity`], a
//! code such as `W101`, a message, and [`Label`]s pointing at resource paths
//! (`eth:0.rst_n`) or package pins (`K3`). Rules emit into a shared
//! [`DiagnosticSink`]; the CLI renders the result with [`TerminalRenderer`]
//! or serializes it as JSON.
//!
//! ```
//! use pano_diagnostics::{
//!     Diagnostic, DiagnosticCode, DiagnosticRenderer, DiagnosticSink, TerminalRenderer,
//! };
//!
//! let sink = DiagnosticSink::new();
//! let code: DiagnosticCode = "W101".parse().unwrap();
//! sink.emit(Diagnostic::warning(code, "package pin K3 is assigned to 2 signals").at("K3"));
//!
//! let text = TerminalRenderer::new(false).render(&sink.diagnostics()[0]);
//! assert!(text.starts_with("warning[W101]"));
//! ```

#![warn(missing_docs)]

mod code;
mod diagnostic;
mod label;
mod renderer;
mod severity;
mod sink;

pub use code::{Category, DiagnosticCode, ParseCodeError};
pub use diagnostic::Diagnostic;
pub use label::{Label, LabelStyle};
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
