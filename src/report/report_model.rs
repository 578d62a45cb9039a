use std::collections::BTreeMap;

use serde::Serialize;

use crate::synth::testcase_model::TestCase;

// ============================================================================
// Test-case report — aggregates one run's records for the reporters
// ============================================================================

/// Aggregated output of one analysis run (a page or a whole repository).
///
/// Consumed by the console, CSV, and HTML reporters, which write the
/// records verbatim as rows.
#[derive(Debug, Clone, Serialize)]
pub struct TestCaseReport {
    /// What was analyzed: URL, file path, or repository URL
    pub source: String,

    /// Classified website type, or a mode label for repository scans
    pub website_type: String,

    /// SHA-1 of the fetched HTML (absent for repository scans)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    pub total: usize,

    /// Record count per `type` column value
    pub counts_by_type: BTreeMap<String, usize>,

    pub cases: Vec<TestCase>,
}

impl TestCaseReport {
    pub fn from_cases(source: &str, website_type: &str, cases: Vec<TestCase>) -> Self {
        let mut counts_by_type = BTreeMap::new();
        for case in &cases {
            *counts_by_type.entry(case.case_type.clone()).or_insert(0) += 1;
        }
        Self {
            source: source.to_string(),
            website_type: website_type.to_string(),
            fingerprint: None,
            total: cases.len(),
            counts_by_type,
            cases,
        }
    }

    pub fn with_fingerprint(mut self, fingerprint: &str) -> Self {
        self.fingerprint = Some(fingerprint.to_string());
        self
    }
}
