//! Direct-scan fallback for project directories without a session index.
//!
//! Every log file becomes one [`SessionRecord`]. Metadata comes from the file
//! system, the first prompt from the first user record, and `messageCount` is
//! the file's line count (an estimate: it counts every record kind).

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use tracing::warn;

use crate::models::{ProjectInfo, SessionRecord};
use crate::parsers::record_text;
use crate::utils::ProjectPathDecoder;

/// Lines inspected per file when looking for the producer's working directory
pub const CWD_SCAN_LINES: usize = 100;

/// What a single pass over a log file yields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogScan {
    pub first_prompt: Option<String>,
    pub line_count: u64,
    pub cwd: Option<String>,
    pub git_branch: Option<String>,
    pub is_sidechain: bool,
}

/// Scan one log file. Lines are parsed only while something is still being
/// looked for; the rest are just counted.
pub fn scan_log(path: &Path) -> io::Result<LogScan> {
    let reader = BufReader::new(File::open(path)?);
    let mut scan = LogScan::default();

    for (line_num, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        scan.line_count += 1;

        let within_head = line_num < CWD_SCAN_LINES;
        let wants_head = within_head && (scan.cwd.is_none() || scan.git_branch.is_none());
        if scan.first_prompt.is_some() && !wants_head {
            continue;
        }

        let Ok(value) = serde_json::from_slice::<Value>(&line) else {
            continue;
        };

        if within_head {
            if scan.cwd.is_none() {
                scan.cwd = non_empty_str(&value, "cwd");
            }
            if scan.git_branch.is_none() {
                scan.git_branch = non_empty_str(&value, "gitBranch");
            }
        }

        if scan.first_prompt.is_none() && is_user_prompt(&value) {
            scan.is_sidechain = value.get("isSidechain").and_then(Value::as_bool).unwrap_or(false);
            scan.first_prompt = record_text(&value);
        }
    }

    Ok(scan)
}

/// Build catalog entries for every readable log in `project`.
///
/// The project path is the first `cwd` found in any log's head, else the
/// decoded directory name. Unreadable logs are logged and skipped.
pub fn scan_project(project: &ProjectInfo, decoder: &ProjectPathDecoder) -> Vec<SessionRecord> {
    let scanned: Vec<(PathBuf, fs::Metadata, LogScan)> = project
        .log_files
        .iter()
        .filter_map(|path| {
            let scan_result = fs::metadata(path).and_then(|meta| Ok((meta, scan_log(path)?)));
            match scan_result {
                Ok((meta, scan)) => Some((path.clone(), meta, scan)),
                Err(e) => {
                    warn!("Skipping unreadable session log {}: {}", path.display(), e);
                    None
                }
            }
        })
        .collect();

    let project_path = resolve_project_path(project, &scanned, decoder);

    scanned
        .into_iter()
        .map(|(log_path, meta, scan)| {
            let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
            let created = meta.created().unwrap_or(modified);
            let modified = DateTime::<Utc>::from(modified);

            SessionRecord {
                session_id: session_id_from_path(&log_path),
                file_modified_at: modified.timestamp_millis(),
                first_prompt: scan.first_prompt.unwrap_or_default(),
                message_count: scan.line_count,
                created_at: to_iso(DateTime::<Utc>::from(created)),
                modified_at: to_iso(modified),
                git_branch: scan.git_branch.unwrap_or_default(),
                project_path: project_path.clone(),
                is_sidechain: scan.is_sidechain,
                log_path,
            }
        })
        .collect()
}

fn resolve_project_path(
    project: &ProjectInfo,
    scanned: &[(PathBuf, fs::Metadata, LogScan)],
    decoder: &ProjectPathDecoder,
) -> String {
    scanned
        .iter()
        .find_map(|(_, _, scan)| scan.cwd.clone())
        .unwrap_or_else(|| decoder.decode(&project.dir_name))
}

/// Session id is the log file name without its extension
pub fn session_id_from_path(path: &Path) -> String {
    path.file_stem().map(|stem| stem.to_string_lossy().to_string()).unwrap_or_default()
}

/// A user-authored prompt: a `user` record that is not producer metadata
/// and renders to some text
fn is_user_prompt(value: &Value) -> bool {
    value.get("type").and_then(Value::as_str) == Some("user")
        && !value.get("isMeta").and_then(Value::as_bool).unwrap_or(false)
        && record_text(value).is_some()
}

fn non_empty_str(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).filter(|s| !s.is_empty()).map(str::to_string)
}

fn to_iso(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
