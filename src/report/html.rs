use crate::report::report_model::TestCaseReport;

// ============================================================================
// HTML reporter — self-contained spreadsheet-styled table
// ============================================================================

/// Generate a self-contained HTML report.
///
/// Features:
/// - Header bar with source and website type
/// - One table row per record under the fixed seven-column layout
/// - Striped row fills matching the classic workbook palette
/// - Inline CSS (no external dependencies)
pub fn generate_html_report(report: &TestCaseReport) -> String {
    // Same fills the original workbook used
    const ROW_FILLS: [&str; 4] = ["#DCE6F1", "#B8CCE4", "#95B3D7", "#4F81BD"];

    let mut rows = String::new();
    for (idx, case) in report.cases.iter().enumerate() {
        let fill = ROW_FILLS[idx % ROW_FILLS.len()];
        rows.push_str(&format!(
            r#"<tr style="background: {fill}">
<td>{id}</td>
<td>{case_type}</td>
<td>{action}</td>
<td>{element}</td>
<td>{expected}</td>
<td>{actual}</td>
<td>{notes}</td>
</tr>
"#,
            fill = fill,
            id = idx + 1,
            case_type = escape_html(&case.case_type),
            action = escape_html(&case.action),
            element = escape_html(&case.element),
            expected = escape_html(&case.expected_result),
            actual = escape_html(&case.actual_result),
            notes = escape_html(&case.notes),
        ));
    }

    let fingerprint_text = report
        .fingerprint
        .as_deref()
        .map(|fp| format!(" | snapshot {}", &fp[..fp.len().min(12)]))
        .unwrap_or_default();

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{source} — Test Cases</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; padding: 0; background: #f5f5f5; }}
.header {{ background: #4F81BD; color: white; padding: 20px 30px; }}
.header h1 {{ margin: 0 0 8px 0; font-size: 24px; }}
.header p {{ margin: 0; font-size: 15px; opacity: 0.9; }}
.content {{ max-width: 1100px; margin: 20px auto; padding: 0 20px; }}
table {{ width: 100%; border-collapse: collapse; background: white; font-size: 14px; }}
th {{ background: #4F81BD; color: white; font-weight: bold; text-align: left; padding: 8px 10px; }}
td {{ padding: 6px 10px; vertical-align: top; }}
</style>
</head>
<body>
<div class="header">
<h1>{total} test cases</h1>
<p>{source} | {website_type}{fingerprint}</p>
</div>
<div class="content">
<table>
<tr>
<th>Test Case ID</th><th>Type</th><th>Action</th><th>Element</th>
<th>Expected Result</th><th>Actual Result</th><th>Notes</th>
</tr>
{rows}
</table>
</div>
</body>
</html>"##,
        source = escape_html(&report.source),
        website_type = escape_html(&report.website_type),
        fingerprint = fingerprint_text,
        total = report.total,
        rows = rows,
    )
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
