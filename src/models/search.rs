use serde::{Deserialize, Serialize};

/// A single matching (message, term) pair inside a hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedMessage {
    /// Position of the message in the session log
    #[serde(rename = "index")]
    pub message_index: usize,
    /// First 200 characters of the message content
    #[serde(rename = "content")]
    pub truncated_content: String,
    #[serde(rename = "highlight")]
    pub highlight_snippet: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub session_id: String,
    pub project_path: String,
    pub first_prompt: String,
    pub matched_messages: Vec<MatchedMessage>,
    pub score: u64,
}

/// Envelope returned to callers of `search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
    pub count: usize,
}

impl From<Vec<SearchHit>> for SearchResponse {
    fn from(results: Vec<SearchHit>) -> Self {
        let count = results.len();
        Self { results, count }
    }
}
