use crate::analyze::analyzer::analyze;
use crate::cli::config::AppConfig;
use crate::dom::parse::{page_fingerprint, parse_html};
use crate::fetch::http::load_target;
use crate::fetch::repo::{clone_repo, collect_source_files, scan_markup_cases};
use crate::report::console::format_console_report;
use crate::report::csv::generate_csv_report;
use crate::report::html::generate_html_report;
use crate::report::report_model::TestCaseReport;
use crate::synth::synthesizer::synthesize;
use crate::synth::tracker::DedupTracker;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::{TraceEvent, TraceStep};

// ============================================================================
// analyze subcommand
// ============================================================================

pub fn cmd_analyze(
    target: &str,
    format: &str,
    output: Option<&str>,
    verbose: u8,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let tracer = build_tracer(config);

    if verbose > 0 {
        eprintln!("Fetching {}...", target);
    }

    let html = load_target(target, config.fetch.timeout_secs, &config.fetch.user_agent)?;
    tracer.log(&TraceEvent::now(TraceStep::PageFetched {
        source: target.to_string(),
        bytes: html.len(),
    }));

    let fingerprint = page_fingerprint(&html);
    let doc = parse_html(&html);
    let result = analyze(&doc, target);

    tracer.log(&TraceEvent::now(TraceStep::PageAnalyzed {
        source: target.to_string(),
        fingerprint: fingerprint.clone(),
        website_type: result.website_type.clone(),
        forms: result.forms.len(),
        buttons: result.interactive.buttons.len(),
        links: result.interactive.links.len(),
    }));

    if verbose > 0 {
        eprintln!(
            "Analyzed {} as {} ({} forms, {} buttons, {} links)",
            target,
            result.website_type,
            result.forms.len(),
            result.interactive.buttons.len(),
            result.interactive.links.len()
        );
    }

    let mut tracker = DedupTracker::new();
    tracker.reset();
    let cases = synthesize(&result, &mut tracker);

    tracer.log(&TraceEvent::now(TraceStep::CasesSynthesized {
        source: target.to_string(),
        count: cases.len(),
    }));

    let report =
        TestCaseReport::from_cases(target, &result.website_type, cases).with_fingerprint(&fingerprint);

    write_report(&report, format, output, &tracer)?;
    println!("Generated {} test cases for {}", report.total, target);
    Ok(())
}

// ============================================================================
// repo subcommand
// ============================================================================

pub fn cmd_repo(
    repo_url: &str,
    format: &str,
    output: Option<&str>,
    max_files: usize,
    verbose: u8,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let tracer = build_tracer(config);

    let checkout = tempfile::tempdir()?;
    if verbose > 0 {
        eprintln!("Cloning {}...", repo_url);
    }
    clone_repo(repo_url, checkout.path())?;

    let scan = collect_source_files(checkout.path());
    println!(
        "Found {} HTML and {} JS/JSX files",
        scan.html_files.len(),
        scan.script_files.len()
    );

    let mut all_cases = Vec::new();
    let mut tracker = DedupTracker::new();

    for path in scan.html_files.iter().take(max_files) {
        let page_id = path.display().to_string();
        let html = match std::fs::read_to_string(path) {
            Ok(html) => html,
            Err(e) => {
                eprintln!("Skipping {}: {}", page_id, e);
                continue;
            }
        };

        if verbose > 0 {
            eprintln!("Analyzing HTML: {}", page_id);
        }

        let doc = parse_html(&html);
        let result = analyze(&doc, &page_id);

        // Each page is an independent run
        tracker.reset();
        let cases = synthesize(&result, &mut tracker);
        tracer.log(&TraceEvent::now(TraceStep::CasesSynthesized {
            source: page_id,
            count: cases.len(),
        }));
        all_cases.extend(cases);
    }

    for path in scan.script_files.iter().take(max_files) {
        let origin = path.display().to_string();
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Skipping {}: {}", origin, e);
                continue;
            }
        };

        if verbose > 0 {
            eprintln!("Scanning source: {}", origin);
        }

        let cases = scan_markup_cases(&source, &origin);
        tracer.log(&TraceEvent::now(TraceStep::SourceScanned {
            path: origin,
            count: cases.len(),
        }));
        all_cases.extend(cases);
    }

    let report = TestCaseReport::from_cases(repo_url, "repository scan", all_cases);
    write_report(&report, format, output, &tracer)?;
    println!("Generated {} test cases from {}", report.total, repo_url);
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

fn build_tracer(config: &AppConfig) -> TraceLogger {
    match config.trace.path.as_deref() {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    }
}

/// Render the report in the requested format and write it to the output
/// path, or stdout when none is given.
fn write_report(
    report: &TestCaseReport,
    format: &str,
    output: Option<&str>,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = match format {
        "html" => generate_html_report(report),
        "csv" => generate_csv_report(report),
        _ => format_console_report(report),
    };

    match output {
        Some(path) => {
            std::fs::write(path, &content)?;
            tracer.log(&TraceEvent::now(TraceStep::ReportWritten {
                path: path.to_string(),
                format: format.to_string(),
            }));
            eprintln!("Report written to {}", path);
        }
        None => print!("{}", content),
    }

    Ok(())
}
