use crate::report::report_model::TestCaseReport;

// ============================================================================
// CSV reporter — spreadsheet rows
// ============================================================================

const HEADERS: [&str; 7] = [
    "Test Case ID",
    "Type",
    "Action",
    "Element",
    "Expected Result",
    "Actual Result",
    "Notes",
];

/// Render the report as CSV with the fixed seven-column layout.
pub fn generate_csv_report(report: &TestCaseReport) -> String {
    let mut out = String::new();

    out.push_str(&HEADERS.join(","));
    out.push('\n');

    for (idx, case) in report.cases.iter().enumerate() {
        let row = [
            (idx + 1).to_string(),
            case.case_type.clone(),
            case.action.clone(),
            case.element.clone(),
            case.expected_result.clone(),
            case.actual_result.clone(),
            case.notes.clone(),
        ];
        let encoded: Vec<String> = row.iter().map(|cell| escape_csv(cell)).collect();
        out.push_str(&encoded.join(","));
        out.push('\n');
    }

    out
}

/// Quote a cell when it contains a delimiter, quote, or newline.
fn escape_csv(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
