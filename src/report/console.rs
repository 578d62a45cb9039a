use crate::report::report_model::TestCaseReport;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format a report for terminal output.
///
/// Produces output like:
/// ```text
/// === Test Cases: https://example.com ===
/// Website type: e_commerce
///
///    1. [Form] Submit POST form — /login
///       expect: Form submitted successfully (form analysis: login_forms (medium complexity))
///
/// === 7 test cases (3 Form, 2 Button, 2 Link) ===
/// ```
pub fn format_console_report(report: &TestCaseReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Test Cases: {} ===\n", report.source));
    out.push_str(&format!("Website type: {}\n\n", report.website_type));

    for (idx, case) in report.cases.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}. [{}] {} — {}\n",
            idx + 1,
            case.case_type,
            case.action,
            case.element
        ));
        out.push_str(&format!(
            "      expect: {} ({})\n",
            case.expected_result, case.notes
        ));
    }

    let breakdown = report
        .counts_by_type
        .iter()
        .map(|(kind, count)| format!("{} {}", count, kind))
        .collect::<Vec<_>>()
        .join(", ");

    if breakdown.is_empty() {
        out.push_str(&format!("\n=== {} test cases ===\n", report.total));
    } else {
        out.push_str(&format!(
            "\n=== {} test cases ({}) ===\n",
            report.total, breakdown
        ));
    }

    out
}
