use std::collections::HashSet;

use crate::analyze::page_model::{AnalysisResult, FieldDescriptor, LinkPurpose};
use crate::synth::identity::{ElementKind, ElementRef, identify};
use crate::synth::testcase_model::{GENERATED_RESULT, TestCase};
use crate::synth::tracker::DedupTracker;

// ============================================================================
// Test-case synthesizer
// ============================================================================

/// Walk an `AnalysisResult` and emit one test-case record per first-seen
/// element, consulting the tracker to skip repeats.
///
/// The pass order is fixed (forms, navigation, buttons, links, tables,
/// cards), so output for a given result and tracker state is fully
/// reproducible. The tracker is NOT reset here: resetting is the
/// caller's step at the start of each independent run, which is what
/// makes re-synthesis through an un-reset tracker come back empty.
pub fn synthesize(result: &AnalysisResult, tracker: &mut DedupTracker) -> Vec<TestCase> {
    let mut cases = Vec::new();

    // Forms: one submit record each, plus one record per required field.
    // A duplicate form is skipped entirely, fields included.
    for form in &result.forms {
        let id = identify(&ElementRef::Form(form));
        if tracker.is_emitted(ElementKind::Form, &id) {
            continue;
        }
        tracker.mark_emitted(ElementKind::Form, id);

        cases.push(TestCase {
            case_type: "Form".to_string(),
            action: format!("Submit {} form", form.method),
            element: form.action.clone(),
            expected_result: "Form submitted successfully".to_string(),
            actual_result: GENERATED_RESULT.to_string(),
            notes: format!(
                "form analysis: {} ({} complexity)",
                form.purpose,
                form.complexity.as_str()
            ),
        });

        // Fields dedupe locally within the form, independent of the tracker
        let mut seen_fields = HashSet::new();
        for field in form.fields.iter().filter(|f| f.required) {
            let key = format!("{}:{}:{}", field.name, field.field_type, field.purpose);
            if !seen_fields.insert(key) {
                continue;
            }
            cases.push(TestCase {
                case_type: "Form Field".to_string(),
                action: "Fill required field".to_string(),
                element: field_element(field),
                expected_result: "Field accepts valid input".to_string(),
                actual_result: GENERATED_RESULT.to_string(),
                notes: format!(
                    "field analysis: {} field, suggested value \"{}\"",
                    field.purpose,
                    suggest_value(&field.purpose, &field.field_type)
                ),
            });
        }
    }

    // Navigation groups: one record per unique (text, href) pair inside
    // a first-seen group
    for nav in &result.navigation {
        let id = identify(&ElementRef::Navigation(nav));
        if tracker.is_emitted(ElementKind::Navigation, &id) {
            continue;
        }
        tracker.mark_emitted(ElementKind::Navigation, id);

        let mut seen_links = HashSet::new();
        for link in &nav.links {
            if !seen_links.insert((link.text.clone(), link.href.clone())) {
                continue;
            }
            cases.push(TestCase {
                case_type: "Navigation".to_string(),
                action: "Click navigation link".to_string(),
                element: non_empty(&link.text, &link.href, "Unnamed link"),
                expected_result: "Navigates to linked page".to_string(),
                actual_result: GENERATED_RESULT.to_string(),
                notes: format!("navigation analysis: {} group", nav.nav_type.as_str()),
            });
        }
    }

    // Buttons dedupe by (text, purpose)
    for button in &result.interactive.buttons {
        let key = format!("{}|{}", button.text, button.purpose.as_str());
        if tracker.is_emitted(ElementKind::Button, &key) {
            continue;
        }
        tracker.mark_emitted(ElementKind::Button, key);

        cases.push(TestCase {
            case_type: "Button".to_string(),
            action: "Click button".to_string(),
            element: non_empty(&button.text, "", "Unnamed button"),
            expected_result: "Button click triggers expected action".to_string(),
            actual_result: GENERATED_RESULT.to_string(),
            notes: format!("interactive analysis: {} button", button.purpose.as_str()),
        });
    }

    // Links dedupe by (text, href, purpose); unclassified links are not
    // reported at all
    for link in &result.interactive.links {
        if link.purpose == LinkPurpose::General {
            continue;
        }
        let key = format!("{}|{}|{}", link.text, link.href, link.purpose.as_str());
        if tracker.is_emitted(ElementKind::Link, &key) {
            continue;
        }
        tracker.mark_emitted(ElementKind::Link, key);

        cases.push(TestCase {
            case_type: "Link".to_string(),
            action: "Click link".to_string(),
            element: non_empty(&link.text, &link.href, "Unnamed link"),
            expected_result: "Navigates to linked page".to_string(),
            actual_result: GENERATED_RESULT.to_string(),
            notes: format!("interactive analysis: {} link", link.purpose.as_str()),
        });
    }

    // Tables dedupe by shape, local to this run, interactive only
    let mut seen_tables = HashSet::new();
    for table in &result.data_structures.tables {
        if !table.interactive {
            continue;
        }
        if !seen_tables.insert((table.row_count, table.column_count)) {
            continue;
        }
        cases.push(TestCase {
            case_type: "Table".to_string(),
            action: "Interact with table controls".to_string(),
            element: format!("{}x{} table", table.row_count, table.column_count),
            expected_result: "Table controls respond to interaction".to_string(),
            actual_result: GENERATED_RESULT.to_string(),
            notes: "data structure analysis: table".to_string(),
        });
    }

    // Cards dedupe by detected type, interactive only
    for card in &result.data_structures.cards {
        if !card.interactive {
            continue;
        }
        let key = card.card_type.as_str().to_string();
        if tracker.is_emitted(ElementKind::Card, &key) {
            continue;
        }
        tracker.mark_emitted(ElementKind::Card, key);

        cases.push(TestCase {
            case_type: "Card".to_string(),
            action: "Interact with card".to_string(),
            element: card.card_type.as_str().to_string(),
            expected_result: "Card interaction triggers expected behavior".to_string(),
            actual_result: GENERATED_RESULT.to_string(),
            notes: "data structure analysis: card".to_string(),
        });
    }

    cases
}

/// Display name for a field record: name, then placeholder, then id.
fn field_element(field: &FieldDescriptor) -> String {
    if !field.name.is_empty() {
        field.name.clone()
    } else if !field.placeholder.is_empty() {
        field.placeholder.clone()
    } else if !field.id.is_empty() {
        field.id.clone()
    } else {
        "Unnamed field".to_string()
    }
}

/// A plausible fill value for a field, derived from its classified
/// purpose with the raw type as fallback.
pub fn suggest_value(purpose: &str, field_type: &str) -> &'static str {
    match purpose {
        "email" => "user@example.com",
        "password" => "TestPass123!",
        "username" => "testuser",
        "phone" => "555-0100",
        "name" => "Jane Doe",
        "address" => "1 Main Street",
        "date" => "2025-01-15",
        "search" => "test query",
        "number" => "42",
        "url" => "https://example.com",
        "message" => "Test message",
        _ => match field_type {
            "email" => "user@example.com",
            "password" => "TestPass123!",
            "tel" => "555-0100",
            "url" => "https://example.com",
            "number" => "42",
            "date" => "2025-01-15",
            _ => "test",
        },
    }
}

fn non_empty(primary: &str, fallback: &str, default: &str) -> String {
    if !primary.is_empty() {
        primary.to_string()
    } else if !fallback.is_empty() {
        fallback.to_string()
    } else {
        default.to_string()
    }
}
