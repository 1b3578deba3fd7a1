//! Capturing diagnostic sink for tests.

use std::sync::Mutex;

use crate::diagnostic::{Diagnostic, DiagnosticSink};

/// Sink that records every diagnostic for later assertions.
#[derive(Debug, Default)]
pub(crate) struct CapturingSink {
    reports: Mutex<Vec<Diagnostic>>,
}

impl CapturingSink {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// All diagnostics reported so far, in order.
    pub(crate) fn reports(&self) -> Vec<Diagnostic> {
        self.reports.lock().unwrap().clone()
    }
}

impl DiagnosticSink for CapturingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.reports.lock().unwrap().push(diagnostic.clone());
    }
}
