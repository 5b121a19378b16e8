use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    /// Mangled directory name under `projects/`
    pub project_dir: String,
    pub project_path: String,
    pub session_count: usize,
    pub message_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_projects: usize,
    pub total_sessions: usize,
    pub total_messages: u64,
    #[serde(rename = "projectStats")]
    pub per_project: Vec<ProjectStats>,
}
