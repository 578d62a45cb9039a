use std::path::{Path, PathBuf};
use std::process::Command;

use regex::Regex;
use walkdir::WalkDir;

use crate::fetch::error::FetchError;
use crate::synth::testcase_model::{GENERATED_RESULT, TestCase};

// ============================================================================
// Repository-clone mode — scan a cloned source tree for testable markup
// ============================================================================

/// Source files found in a cloned repository.
#[derive(Debug, Default)]
pub struct RepoScan {
    /// Static pages, analyzed through the full pipeline
    pub html_files: Vec<PathBuf>,
    /// JS/JSX sources, scanned for embedded markup
    pub script_files: Vec<PathBuf>,
}

/// Shallow-clone a repository into `dest`.
pub fn clone_repo(repo_url: &str, dest: &Path) -> Result<(), FetchError> {
    let output = Command::new("git")
        .arg("clone")
        .arg("--depth")
        .arg("1")
        .arg(repo_url)
        .arg(dest)
        .output()
        .map_err(|e| FetchError::CloneSpawn { source: e })?;

    if !output.status.success() {
        return Err(FetchError::CloneFailed {
            repo: repo_url.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}

/// Collect `.html`, `.js`, and `.jsx` files under `root`, skipping
/// `node_modules` and `.git`. Paths come back sorted for stable output.
pub fn collect_source_files(root: &Path) -> RepoScan {
    let mut scan = RepoScan::default();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            name != "node_modules" && name != ".git"
        })
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        match entry.path().extension().and_then(|e| e.to_str()) {
            Some("html") => scan.html_files.push(entry.path().to_path_buf()),
            Some("js") | Some("jsx") => scan.script_files.push(entry.path().to_path_buf()),
            _ => {}
        }
    }

    scan.html_files.sort();
    scan.script_files.sort();
    scan
}

/// Scan JS/JSX source for embedded `<form>`, `<button>`, and `<a>`
/// markup and produce one record per hit.
///
/// This is a regex sweep over string content, not a JavaScript parser:
/// it finds markup the page would render from templates and JSX, at the
/// cost of false positives inside comments or strings.
pub fn scan_markup_cases(source: &str, origin: &str) -> Vec<TestCase> {
    let form_re = Regex::new(r"(?i)<form(\s[^>]*)?>").unwrap();
    let button_re = Regex::new(r"(?is)<button[^>]*>(.*?)</button>").unwrap();
    let link_re = Regex::new(r"(?is)<a\s[^>]*>(.*?)</a>").unwrap();
    let tag_re = Regex::new(r"<[^>]+>").unwrap();

    let mut cases = Vec::new();

    for (idx, _) in form_re.find_iter(source).enumerate() {
        cases.push(TestCase {
            case_type: "Form".to_string(),
            action: "Submit form".to_string(),
            element: "Inline form markup".to_string(),
            expected_result: "Form submitted successfully".to_string(),
            actual_result: GENERATED_RESULT.to_string(),
            notes: format!("source scan: form #{} in {}", idx + 1, origin),
        });
    }

    for (idx, capture) in button_re.captures_iter(source).enumerate() {
        let text = strip_tags(&tag_re, capture.get(1).map_or("", |m| m.as_str()));
        cases.push(TestCase {
            case_type: "Button".to_string(),
            action: "Click button".to_string(),
            element: if text.is_empty() {
                "Unnamed button".to_string()
            } else {
                text
            },
            expected_result: "Button click triggers expected action".to_string(),
            actual_result: GENERATED_RESULT.to_string(),
            notes: format!("source scan: button #{} in {}", idx + 1, origin),
        });
    }

    for (idx, capture) in link_re.captures_iter(source).enumerate() {
        let text = strip_tags(&tag_re, capture.get(1).map_or("", |m| m.as_str()));
        cases.push(TestCase {
            case_type: "Link".to_string(),
            action: "Click link".to_string(),
            element: if text.is_empty() {
                "Unnamed link".to_string()
            } else {
                text
            },
            expected_result: "Navigates to linked page".to_string(),
            actual_result: GENERATED_RESULT.to_string(),
            notes: format!("source scan: link #{} in {}", idx + 1, origin),
        });
    }

    cases
}

fn strip_tags(tag_re: &Regex, fragment: &str) -> String {
    let stripped = tag_re.replace_all(fragment, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
