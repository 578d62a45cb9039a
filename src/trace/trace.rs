use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

// ============================================================================
// Trace events — one JSONL line per pipeline step
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceStep {
    PageFetched {
        source: String,
        bytes: usize,
    },
    PageAnalyzed {
        source: String,
        fingerprint: String,
        website_type: String,
        forms: usize,
        buttons: usize,
        links: usize,
    },
    CasesSynthesized {
        source: String,
        count: usize,
    },
    SourceScanned {
        path: String,
        count: usize,
    },
    ReportWritten {
        path: String,
        format: String,
    },
}

#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    #[serde(flatten)]
    pub step: TraceStep,
}

impl TraceEvent {
    pub fn now(step: TraceStep) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            step,
        }
    }
}
