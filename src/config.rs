//! Runtime configuration.
//!
//! Values come from, in increasing priority: built-in defaults, environment
//! variables, and explicit overrides applied by the CLI.

use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::utils::{DEFAULT_PATH_MARKERS, ProjectPathDecoder, get_claude_dir};

/// Name of the precomputed index inside each project directory
pub const DEFAULT_INDEX_FILE_NAME: &str = "sessions-index.json";
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Comma-separated override for [`Config::path_markers`]
pub const PATH_MARKERS_ENV: &str = "SESSION_DASHBOARD_PATH_MARKERS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `projects/`
    pub claude_dir: PathBuf,
    pub index_file_name: String,
    /// Marker segments for the directory-name decoding heuristic
    pub path_markers: Vec<String>,
    pub default_page_size: usize,
    pub default_search_limit: usize,
    /// Read through the process-wide cache; `false` re-reads disk every call
    pub use_cache: bool,
}

impl Config {
    /// Defaults rooted at `claude_dir`
    pub fn new(claude_dir: impl Into<PathBuf>) -> Self {
        Self {
            claude_dir: claude_dir.into(),
            index_file_name: DEFAULT_INDEX_FILE_NAME.to_string(),
            path_markers: DEFAULT_PATH_MARKERS.iter().map(|m| m.to_string()).collect(),
            default_page_size: DEFAULT_PAGE_SIZE,
            default_search_limit: DEFAULT_SEARCH_LIMIT,
            use_cache: true,
        }
    }

    /// Defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if no Claude directory can be determined (no
    /// `CLAUDE_CONFIG_DIR` and no home directory).
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(get_claude_dir()?).with_env_overrides())
    }

    /// Apply `SESSION_DASHBOARD_PATH_MARKERS` if set
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(markers) = env::var(PATH_MARKERS_ENV) {
            self.path_markers = parse_marker_list(&markers);
        }
        self
    }

    pub fn projects_dir(&self) -> PathBuf {
        self.claude_dir.join("projects")
    }

    pub fn path_decoder(&self) -> ProjectPathDecoder {
        ProjectPathDecoder::new(self.path_markers.iter().cloned())
    }
}

fn parse_marker_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|m| !m.is_empty()).map(str::to_string).collect()
}
