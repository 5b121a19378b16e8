use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;
use walkdir::WalkDir;

use crate::models::ProjectInfo;

const LOG_FILE_EXTENSION: &str = "jsonl";

/// Discover all project directories under `projects_dir`
///
/// Each subdirectory is one project. Inside it, the file named
/// `index_file_name` (if any) is recorded as the project's index and every
/// `*.jsonl` file as a session log. Hidden directories are skipped.
///
/// # Returns
///
/// Projects sorted by directory name. Returns an empty Vec if the projects
/// directory doesn't exist (not an error).
///
/// # Errors
///
/// Returns an error only if the projects directory exists but cannot be
/// listed. A project directory that cannot be read is logged and returned
/// with no files, so it contributes nothing downstream.
pub fn discover_projects(projects_dir: &Path, index_file_name: &str) -> Result<Vec<ProjectInfo>> {
    if !projects_dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(projects_dir)
        .with_context(|| format!("Failed to read projects directory: {}", projects_dir.display()))?;

    let mut projects = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", projects_dir.display(), e);
                continue;
            }
        };
        let path = entry.path();

        if !path.is_dir() {
            continue;
        }

        let dir_name = entry.file_name().to_string_lossy().to_string();
        if dir_name.starts_with('.') {
            continue;
        }

        let mut index_file = None;
        let mut log_files = Vec::new();
        for file in WalkDir::new(&path).min_depth(1).max_depth(1) {
            let file = match file {
                Ok(file) => file,
                Err(e) => {
                    warn!("Failed to read project directory {}: {}", path.display(), e);
                    continue;
                }
            };
            if !file.path().is_file() {
                continue;
            }

            let file_path = file.into_path();
            if file_path.file_name().is_some_and(|name| name == index_file_name) {
                index_file = Some(file_path);
            } else if file_path.extension().is_some_and(|ext| ext == LOG_FILE_EXTENSION) {
                log_files.push(file_path);
            }
        }
        log_files.sort();

        projects.push(ProjectInfo { dir_name, project_dir: path, index_file, log_files });
    }

    projects.sort_by(|a, b| a.dir_name.cmp(&b.dir_name));
    Ok(projects)
}
