use serde::{Deserialize, Serialize};

// ============================================================================
// Test-case record — one row of the reporting artifact
// ============================================================================

/// Marker used as `actual_result` for synthesized records. These cases
/// describe generated expectations, never observed outcomes; downstream
/// consumers rely on the wording to tell the two apart.
pub const GENERATED_RESULT: &str = "Test case generated (not executed)";

/// One expected-interaction record.
///
/// Field names and meaning are fixed: downstream reporters write them
/// verbatim as spreadsheet columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    #[serde(rename = "type")]
    pub case_type: String,
    pub action: String,
    pub element: String,
    pub expected_result: String,
    pub actual_result: String,
    /// Provenance tag naming the analysis pass that produced the record.
    pub notes: String,
}
