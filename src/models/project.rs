use std::path::PathBuf;

/// A directory under `projects/` and the files it holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    /// Mangled directory name, e.g. `-Users-bob-proj`
    pub dir_name: String,
    pub project_dir: PathBuf,
    /// Present when the directory holds a precomputed session index
    pub index_file: Option<PathBuf>,
    /// Session logs (`*.jsonl`), sorted by file name
    pub log_files: Vec<PathBuf>,
}
