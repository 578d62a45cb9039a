use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "site-testgen",
    version,
    about = "Structural website analyzer and test-case generator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: site-testgen.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one page and synthesize test cases
    Analyze {
        /// URL or local HTML file to analyze
        #[arg(long)]
        target: String,

        /// Output format: console, csv, html
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Clone a git repository and scan its HTML/JS/JSX sources
    Repo {
        /// Repository URL to clone
        #[arg(long)]
        url: String,

        /// Output format: console, csv, html
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Maximum number of source files to analyze
        #[arg(long)]
        max_files: Option<usize>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `site-testgen.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub repo: RepoConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: "site-testgen/0.1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_console")]
    pub format: String,

    pub output: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: "console".to_string(),
            output: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoConfig {
    #[serde(default = "default_max_files")]
    pub max_files: usize,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self { max_files: 200 }
    }
}

/// Trace logging is off unless a path is configured.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceConfig {
    pub path: Option<String>,
}

// Serde default helpers
fn default_timeout() -> u64 {
    10
}
fn default_user_agent() -> String {
    "site-testgen/0.1".to_string()
}
fn default_console() -> String {
    "console".to_string()
}
fn default_max_files() -> usize {
    200
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or
/// malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("site-testgen.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
