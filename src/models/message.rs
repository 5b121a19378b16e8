use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Record kind taken from the `type` discriminator of a log line.
///
/// Producers emit more kinds than the dashboard understands (`summary`,
/// `system`, `file-history-snapshot`, ...). Those are kept as
/// [`MessageKind::Unrecognized`] with the original tag so no line is lost.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageKind {
    User,
    Assistant,
    ToolUse,
    ToolResult,
    Unrecognized(String),
}

impl MessageKind {
    pub fn as_str(&self) -> &str {
        match self {
            MessageKind::User => "user",
            MessageKind::Assistant => "assistant",
            MessageKind::ToolUse => "tool_use",
            MessageKind::ToolResult => "tool_result",
            MessageKind::Unrecognized(tag) => tag,
        }
    }
}

impl From<&str> for MessageKind {
    fn from(tag: &str) -> Self {
        match tag {
            "user" => MessageKind::User,
            "assistant" => MessageKind::Assistant,
            "tool_use" => MessageKind::ToolUse,
            "tool_result" => MessageKind::ToolResult,
            other => MessageKind::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for MessageKind {
    fn from(tag: String) -> Self {
        MessageKind::from(tag.as_str())
    }
}

impl From<MessageKind> for String {
    fn from(kind: MessageKind) -> Self {
        kind.as_str().to_string()
    }
}

/// One normalized log line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Flattened display text; `None` when the record carries nothing renderable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// False for records that produced no display fragments
    pub has_content: bool,
    #[serde(rename = "tool_name", default, skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,
    #[serde(rename = "tool_input", default, skip_serializing_if = "Option::is_none")]
    pub tool_input: Option<Value>,
    #[serde(rename = "tool_output", default, skip_serializing_if = "Option::is_none")]
    pub tool_output: Option<Value>,
    /// Original payload, kept for unrecognized and content-empty records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
}

impl Message {
    /// Display text, or "" for content-empty records
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_kind_round_trips_known_and_unknown_tags() {
        assert_eq!(MessageKind::from("user"), MessageKind::User);
        assert_eq!(MessageKind::from("tool_result"), MessageKind::ToolResult);
        assert_eq!(MessageKind::from("summary"), MessageKind::Unrecognized("summary".to_string()));
        assert_eq!(MessageKind::from("summary").as_str(), "summary");
    }

    #[test]
    fn test_message_serializes_type_tag() {
        let message = Message {
            kind: MessageKind::ToolUse,
            timestamp: Some("2025-01-01T00:00:00Z".to_string()),
            content: Some("x".to_string()),
            has_content: true,
            tool_name: Some("Bash".to_string()),
            tool_input: None,
            tool_output: None,
            raw: None,
        };

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["type"], "tool_use");
        assert_eq!(value["tool_name"], "Bash");
        assert_eq!(value["hasContent"], true);
        assert!(value.get("raw").is_none());
    }
}
