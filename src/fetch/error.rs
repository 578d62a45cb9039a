use std::fmt;

// ============================================================================
// Fetch-layer errors
// ============================================================================

#[derive(Debug)]
pub enum FetchError {
    /// HTTP request failed (connection, timeout, invalid URL)
    Http { url: String, source: reqwest::Error },

    /// Server answered with a non-success status
    Status { url: String, status: u16 },

    /// Local file could not be read
    Io { path: String, source: std::io::Error },

    /// `git` failed to spawn
    CloneSpawn { source: std::io::Error },

    /// `git clone` exited with non-zero status
    CloneFailed { repo: String, stderr: String },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http { url, source } => {
                write!(f, "Failed to fetch {}: {}", url, source)
            }
            FetchError::Status { url, status } => {
                write!(f, "{} answered with status {}", url, status)
            }
            FetchError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path, source)
            }
            FetchError::CloneSpawn { source } => {
                write!(f, "Failed to spawn git (is git installed?): {}", source)
            }
            FetchError::CloneFailed { repo, stderr } => {
                write!(f, "git clone of {} failed: {}", repo, stderr)
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Http { source, .. } => Some(source),
            FetchError::Io { source, .. } => Some(source),
            FetchError::CloneSpawn { source } => Some(source),
            _ => None,
        }
    }
}
