use site_testgen::fetch::repo::{collect_source_files, scan_markup_cases};
use site_testgen::synth::testcase_model::GENERATED_RESULT;

// ============================================================================
// 1. Embedded-markup scan of JS/JSX sources
// ============================================================================

#[test]
fn jsx_markup_produces_records_per_hit() {
    let source = r#"
        export function Login() {
            return (
                <form onSubmit={handleSubmit}>
                    <button type="submit">Sign in</button>
                    <a href="/register">Create account</a>
                </form>
            );
        }
    "#;

    let cases = scan_markup_cases(source, "src/Login.jsx");

    assert_eq!(cases.len(), 3);
    assert_eq!(cases[0].case_type, "Form");
    assert_eq!(cases[1].case_type, "Button");
    assert_eq!(cases[1].element, "Sign in");
    assert_eq!(cases[2].case_type, "Link");
    assert_eq!(cases[2].element, "Create account");

    assert!(cases.iter().all(|c| c.actual_result == GENERATED_RESULT));
    assert!(cases.iter().all(|c| c.notes.contains("src/Login.jsx")));
}

#[test]
fn nested_markup_in_captions_is_stripped() {
    let source = "<button><span>Buy</span> <b>now</b></button>";
    let cases = scan_markup_cases(source, "app.js");

    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].element, "Buy now");
}

#[test]
fn empty_captions_fall_back_to_unnamed() {
    let source = "<button></button> and <a href=\"/x\"></a>";
    let cases = scan_markup_cases(source, "app.js");

    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].element, "Unnamed button");
    assert_eq!(cases[1].element, "Unnamed link");
}

#[test]
fn source_without_markup_yields_no_records() {
    let cases = scan_markup_cases("const a = 1; // <formula>", "math.js");
    assert!(cases.is_empty());
}

#[test]
fn anchor_regex_does_not_match_article_tags() {
    let cases = scan_markup_cases("<article>long read</article>", "page.js");
    assert!(cases.is_empty());
}

// ============================================================================
// 2. Source-file sweep
// ============================================================================

#[test]
fn sweep_collects_html_and_scripts_skipping_vendored_dirs() {
    let root = tempfile::tempdir().unwrap();
    let base = root.path();

    std::fs::create_dir_all(base.join("src")).unwrap();
    std::fs::create_dir_all(base.join("node_modules/pkg")).unwrap();
    std::fs::create_dir_all(base.join(".git")).unwrap();

    std::fs::write(base.join("index.html"), "<html></html>").unwrap();
    std::fs::write(base.join("src/app.jsx"), "export {}").unwrap();
    std::fs::write(base.join("src/util.js"), "export {}").unwrap();
    std::fs::write(base.join("src/readme.md"), "# no").unwrap();
    std::fs::write(base.join("node_modules/pkg/index.js"), "skip").unwrap();
    std::fs::write(base.join(".git/config.html"), "skip").unwrap();

    let scan = collect_source_files(base);

    assert_eq!(scan.html_files.len(), 1);
    assert!(scan.html_files[0].ends_with("index.html"));
    assert_eq!(scan.script_files.len(), 2);
    assert!(scan.script_files.iter().all(|p| !p.to_string_lossy().contains("node_modules")));
}
