use std::time::Duration;

use crate::fetch::error::FetchError;

// ============================================================================
// Page fetching — blocking HTTP or local file
// ============================================================================

/// Fetch a page over HTTP with a bounded timeout.
pub fn fetch_page(url: &str, timeout_secs: u64, user_agent: &str) -> Result<String, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(user_agent.to_string())
        .build()
        .map_err(|e| FetchError::Http {
            url: url.to_string(),
            source: e,
        })?;

    let response = client.get(url).send().map_err(|e| FetchError::Http {
        url: url.to_string(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().map_err(|e| FetchError::Http {
        url: url.to_string(),
        source: e,
    })
}

/// Load HTML from a URL or a local file path.
pub fn load_target(target: &str, timeout_secs: u64, user_agent: &str) -> Result<String, FetchError> {
    if target.starts_with("http://") || target.starts_with("https://") {
        fetch_page(target, timeout_secs, user_agent)
    } else {
        std::fs::read_to_string(target).map_err(|e| FetchError::Io {
            path: target.to_string(),
            source: e,
        })
    }
}
