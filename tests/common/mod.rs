//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for creating test Claude directory structures
pub struct ClaudeDirBuilder {
    temp_dir: TempDir,
}

impl ClaudeDirBuilder {
    /// Create a new builder with an empty `projects/` directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("projects")).expect("Failed to create projects dir");
        Self { temp_dir }
    }

    /// Get the path to the Claude directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn project_dir(&self, dir_name: &str) -> PathBuf {
        self.temp_dir.path().join("projects").join(dir_name)
    }

    /// Add an empty project directory
    pub fn with_project(self, dir_name: &str) -> Self {
        fs::create_dir_all(self.project_dir(dir_name)).expect("Failed to create project dir");
        self
    }

    /// Add a session log built from records
    pub fn with_log(self, dir_name: &str, session_id: &str, records: &[RecordBuilder]) -> Self {
        let content: String = records.iter().map(|r| format!("{}\n", r.to_json())).collect();
        self.with_raw_log(dir_name, session_id, &content)
    }

    /// Add a session log with verbatim content
    pub fn with_raw_log(self, dir_name: &str, session_id: &str, content: &str) -> Self {
        let dir = self.project_dir(dir_name);
        fs::create_dir_all(&dir).expect("Failed to create project dir");
        fs::write(dir.join(format!("{}.jsonl", session_id)), content)
            .expect("Failed to write session log");
        self
    }

    /// Add a `sessions-index.json` listing the given entries
    pub fn with_index(self, dir_name: &str, entries: &[IndexEntryBuilder]) -> Self {
        let dir = self.project_dir(dir_name);
        let entries: Vec<Value> = entries.iter().map(|e| e.to_json(&dir)).collect();
        let content = json!({"version": 1, "entries": entries}).to_string();
        self.with_raw_index(dir_name, &content)
    }

    pub fn with_raw_index(self, dir_name: &str, content: &str) -> Self {
        let dir = self.project_dir(dir_name);
        fs::create_dir_all(&dir).expect("Failed to create project dir");
        fs::write(dir.join("sessions-index.json"), content).expect("Failed to write index");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ClaudeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one JSONL record
pub struct RecordBuilder {
    kind: String,
    content: Option<Value>,
    cwd: Option<String>,
    timestamp: Option<Value>,
    extra: Vec<(String, Value)>,
}

impl RecordBuilder {
    pub fn new(kind: &str) -> Self {
        Self { kind: kind.to_string(), content: None, cwd: None, timestamp: None, extra: Vec::new() }
    }

    /// User record with a single text block
    pub fn user(text: &str) -> Self {
        Self::new("user").text(text)
    }

    /// Assistant record with a single text block
    pub fn assistant(text: &str) -> Self {
        Self::new("assistant").text(text)
    }

    pub fn text(mut self, text: &str) -> Self {
        self.content = Some(json!([{"type": "text", "text": text}]));
        self
    }

    /// Raw `message.content` value
    pub fn content(mut self, content: Value) -> Self {
        self.content = Some(content);
        self
    }

    pub fn cwd(mut self, cwd: &str) -> Self {
        self.cwd = Some(cwd.to_string());
        self
    }

    pub fn timestamp(mut self, timestamp: Value) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Extra top-level field
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.extra.push((key.to_string(), value));
        self
    }

    pub fn to_json(&self) -> String {
        let mut record = json!({"type": self.kind});
        if let Some(content) = &self.content {
            record["message"] = json!({"content": content});
        }
        if let Some(cwd) = &self.cwd {
            record["cwd"] = json!(cwd);
        }
        if let Some(timestamp) = &self.timestamp {
            record["timestamp"] = timestamp.clone();
        }
        for (key, value) in &self.extra {
            record[key.as_str()] = value.clone();
        }
        record.to_string()
    }
}

/// Builder for one `sessions-index.json` entry
pub struct IndexEntryBuilder {
    session_id: String,
    file_mtime: i64,
    first_prompt: String,
    message_count: u64,
    modified: String,
    project_path: String,
}

impl IndexEntryBuilder {
    pub fn new(session_id: &str) -> Self {
        Self {
            session_id: session_id.to_string(),
            file_mtime: 0,
            first_prompt: String::new(),
            message_count: 0,
            modified: "2025-01-01T00:00:00.000Z".to_string(),
            project_path: String::new(),
        }
    }

    pub fn mtime(mut self, file_mtime: i64) -> Self {
        self.file_mtime = file_mtime;
        self
    }

    pub fn first_prompt(mut self, prompt: &str) -> Self {
        self.first_prompt = prompt.to_string();
        self
    }

    pub fn message_count(mut self, count: u64) -> Self {
        self.message_count = count;
        self
    }

    pub fn modified(mut self, modified: &str) -> Self {
        self.modified = modified.to_string();
        self
    }

    pub fn project_path(mut self, path: &str) -> Self {
        self.project_path = path.to_string();
        self
    }

    fn to_json(&self, project_dir: &Path) -> Value {
        json!({
            "sessionId": self.session_id,
            "fullPath": project_dir.join(format!("{}.jsonl", self.session_id)),
            "fileMtime": self.file_mtime,
            "firstPrompt": self.first_prompt,
            "messageCount": self.message_count,
            "created": "2025-01-01T00:00:00.000Z",
            "modified": self.modified,
            "gitBranch": "main",
            "projectPath": self.project_path,
            "isSidechain": false
        })
    }
}
