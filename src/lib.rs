//! Structural website analyzer and test-case generator.
//!
//! The pipeline: parse HTML into a [`dom::dom_model::DomNode`] tree,
//! classify its structure with [`analyze::analyzer::analyze`], then walk
//! the result with [`synth::synthesizer::synthesize`] to emit one
//! deduplicated test-case record per first-seen element. Fetching,
//! repository cloning, and report writing live in their own modules and
//! never leak into the analysis core, which is pure and synchronous.

use crate::analyze::analyzer::analyze;
use crate::analyze::page_model::AnalysisResult;
use crate::dom::parse::parse_html;
use crate::synth::synthesizer::synthesize;
use crate::synth::testcase_model::TestCase;
use crate::synth::tracker::DedupTracker;

pub mod analyze;
pub mod cli;
pub mod dom;
pub mod fetch;
pub mod report;
pub mod synth;
pub mod trace;

/// Run the full pipeline over one page: parse, analyze, synthesize with
/// a fresh tracker.
///
/// Convenience for embedders that analyze one page at a time. Callers
/// analyzing many pages against shared dedup state should drive
/// `analyze`/`synthesize` themselves with one `DedupTracker` per run.
pub fn analyze_page(html: &str, page_identifier: &str) -> (AnalysisResult, Vec<TestCase>) {
    let doc = parse_html(html);
    let result = analyze(&doc, page_identifier);

    let mut tracker = DedupTracker::new();
    tracker.reset();
    let cases = synthesize(&result, &mut tracker);

    (result, cases)
}
