use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One session in the catalog, either read from a `sessions-index.json`
/// entry or reconstructed by scanning the session's log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub session_id: String,
    #[serde(rename = "fullPath")]
    pub log_path: PathBuf,
    /// Last write of the backing log file, epoch millis
    #[serde(
        rename = "fileMtime",
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_millis"
    )]
    pub file_modified_at: i64,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient_string")]
    pub first_prompt: String,
    #[serde(default)]
    pub message_count: u64,
    #[serde(
        rename = "created",
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient_string"
    )]
    pub created_at: String,
    #[serde(
        rename = "modified",
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient_string"
    )]
    pub modified_at: String,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient_string")]
    pub git_branch: String,
    /// Best-known project path. When recovered from the directory name this is
    /// a guess and may not match other sessions of the same project.
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient_string")]
    pub project_path: String,
    #[serde(default)]
    pub is_sidechain: bool,
}

impl SessionRecord {
    /// Name of the project directory holding the log file
    pub fn catalog_dir_name(&self) -> Option<&str> {
        self.log_path.parent().and_then(Path::file_name).and_then(|name| name.to_str())
    }
}

/// On-disk `sessions-index.json` layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionsIndex {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub original_path: Option<String>,
    pub entries: Vec<SessionRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_entry_deserializes_camel_case_fields() {
        let json = r#"{
            "sessionId": "abc123",
            "fullPath": "/home/bob/.claude/projects/-home-bob-proj/abc123.jsonl",
            "fileMtime": 1762076480016,
            "firstPrompt": "fix bug",
            "messageCount": 12,
            "created": "2025-11-02T09:00:00.000Z",
            "modified": "2025-11-02T09:41:20.016Z",
            "gitBranch": "main",
            "projectPath": "/home/bob/proj",
            "isSidechain": false
        }"#;

        let record: SessionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.session_id, "abc123");
        assert_eq!(record.file_modified_at, 1762076480016);
        assert_eq!(record.first_prompt, "fix bug");
        assert_eq!(record.message_count, 12);
        assert_eq!(record.git_branch, "main");
        assert_eq!(record.project_path, "/home/bob/proj");
        assert_eq!(record.catalog_dir_name(), Some("-home-bob-proj"));
    }

    #[test]
    fn test_index_entry_tolerates_missing_and_null_fields() {
        let json = r#"{"sessionId":"s1","fullPath":"/p/-x/s1.jsonl","gitBranch":null}"#;

        let record: SessionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.file_modified_at, 0);
        assert_eq!(record.git_branch, "");
        assert_eq!(record.first_prompt, "");
        assert!(!record.is_sidechain);
    }

    #[test]
    fn test_serializes_with_index_field_names() {
        let record = SessionRecord {
            session_id: "s1".to_string(),
            log_path: PathBuf::from("/p/-x/s1.jsonl"),
            file_modified_at: 5,
            first_prompt: String::new(),
            message_count: 1,
            created_at: String::new(),
            modified_at: String::new(),
            git_branch: String::new(),
            project_path: "/x".to_string(),
            is_sidechain: false,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["sessionId"], "s1");
        assert_eq!(value["fullPath"], "/p/-x/s1.jsonl");
        assert_eq!(value["fileMtime"], 5);
        assert_eq!(value["projectPath"], "/x");
    }
}
