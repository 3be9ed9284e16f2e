//! Diagnostics sinks.
//!
//! Violations and synthesis failures are reported through a sink; reporting
//! never halts a batch. Embedders route diagnostics wherever they need; the
//! pipeline only requires the `(message, location)` contract.

use crate::error::{SourceLoc, Violation};

/// A sink accepting diagnostic messages with source attribution.
pub trait Diagnostics {
    /// Reports one diagnostic.
    fn report(&mut self, message: &str, loc: &SourceLoc);

    /// Reports a violation, attributed to its originating property.
    fn report_violation(&mut self, violation: &Violation) {
        self.report(&violation.to_string(), &violation.loc);
    }
}

/// A diagnostics sink that retains every report, for tests and embedders
/// that post-process diagnostics themselves.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    entries: Vec<(String, SourceLoc)>,
}

impl CollectingDiagnostics {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All collected `(message, location)` pairs, in report order.
    pub fn entries(&self) -> &[(String, SourceLoc)] {
        &self.entries
    }

    /// Collected messages, in report order.
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|(m, _)| m.as_str()).collect()
    }

    /// Number of collected diagnostics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn report(&mut self, message: &str, loc: &SourceLoc) {
        self.entries.push((message.to_string(), loc.clone()));
    }
}

/// A diagnostics sink that forwards to the `log` facade at warn level.
#[derive(Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, message: &str, loc: &SourceLoc) {
        log::warn!("{}: {}", loc, message);
    }
}
