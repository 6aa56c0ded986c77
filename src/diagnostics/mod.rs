//! Diagnostics collected while building
//!
//! Recoverable problems are logged and the build carries on. The builder also
//! records them here so callers can inspect what was skipped without
//! scraping log output.

use serde::{Deserialize, Serialize};

/// Severity level for a build diagnostic
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// One recoverable problem found while building
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BuildDiagnostic {
    /// Position of the offending item: indices from the top-level sequence
    /// down through nested `children`
    pub path: Vec<usize>,
    pub severity: DiagnosticSeverity,
    /// Kind identifier (e.g., "children_not_a_sequence")
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl BuildDiagnostic {
    pub fn new(
        path: Vec<usize>,
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path,
            severity,
            kind: kind.into(),
            message: message.into(),
        }
    }
}

/// Collection of diagnostics for one build
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Diagnostics {
    pub marks: Vec<BuildDiagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self { marks: Vec::new() }
    }

    pub fn add(&mut self, mark: BuildDiagnostic) {
        self.marks.push(mark);
    }

    pub fn has_errors(&self) -> bool {
        self.marks
            .iter()
            .any(|m| m.severity == DiagnosticSeverity::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BuildDiagnostic> {
        self.marks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_has_errors() {
        let mut diags = Diagnostics::new();
        assert!(!diags.has_errors());

        diags.add(BuildDiagnostic::new(
            vec![0],
            DiagnosticSeverity::Warning,
            "warn",
            "Warning",
        ));
        assert!(!diags.has_errors());

        diags.add(BuildDiagnostic::new(
            vec![0, 2],
            DiagnosticSeverity::Error,
            "children_not_a_sequence",
            "Error",
        ));
        assert!(diags.has_errors());
        assert_eq!(diags.len(), 2);
    }
}
