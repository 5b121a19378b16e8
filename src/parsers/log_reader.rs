use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Result, bail};
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::{Message, MessageKind};
use crate::parsers::deserializers::timestamp_to_string;
use crate::utils::truncate_chars;

const THINKING_MARKER: &str = "[Thinking]";
const TOOL_CALL_MARKER: &str = "[Tool call]";
const THINKING_PREVIEW_CHARS: usize = 200;
const TOOL_INPUT_PREVIEW_CHARS: usize = 100;
const UNKNOWN_RECORD_TYPE: &str = "unknown";

/// Read a session log, returning one [`Message`] per well-formed line.
///
/// Fails open: a missing or unreadable file yields an empty Vec. Use
/// [`try_read_messages`] to tell the two apart.
pub fn read_messages(path: &Path) -> Vec<Message> {
    match try_read_messages(path) {
        Ok(messages) => messages,
        Err(e) => {
            warn!("Failed to read session log {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Read a session log, surfacing I/O failures.
///
/// Malformed lines are logged and dropped; blank lines are ignored. Invalid
/// UTF-8 is replaced rather than rejected so one bad byte cannot hide a line.
pub fn try_read_messages(path: &Path) -> io::Result<Vec<Message>> {
    let reader = BufReader::new(File::open(path)?);
    let mut messages = Vec::new();
    let mut skipped_count = 0;

    for (line_num, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let line = String::from_utf8_lossy(&line);

        if line.trim().is_empty() {
            continue;
        }

        match parse_record_line(&line) {
            Ok(message) => messages.push(message),
            Err(e) => {
                warn!("Skipping malformed line {} in {}: {}", line_num + 1, path.display(), e);
                skipped_count += 1;
            }
        }
    }

    if skipped_count > 0 {
        debug!("Parsed {}: {} records ({} skipped)", path.display(), messages.len(), skipped_count);
    }

    Ok(messages)
}

/// Parse one log line into a [`Message`]
pub fn parse_record_line(line: &str) -> Result<Message> {
    let value: Value = serde_json::from_str(line)?;
    if !value.is_object() {
        bail!("record is not a JSON object");
    }
    Ok(parse_record(value))
}

/// Normalize an already-decoded record
pub fn parse_record(value: Value) -> Message {
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .map(MessageKind::from)
        .unwrap_or_else(|| MessageKind::Unrecognized(UNKNOWN_RECORD_TYPE.to_string()));
    let timestamp = value.get("timestamp").and_then(timestamp_to_string);
    let content = record_text(&value);
    let has_content = content.is_some();
    let tool_name = value.get("tool_name").and_then(Value::as_str).map(str::to_string);
    let tool_input = non_null(&value, "tool_input");
    let tool_output = non_null(&value, "tool_output").or_else(|| non_null(&value, "toolUseResult"));

    let keep_raw = !has_content || matches!(kind, MessageKind::Unrecognized(_));
    let raw = keep_raw.then_some(value);

    Message { kind, timestamp, content, has_content, tool_name, tool_input, tool_output, raw }
}

/// Flatten a record's renderable content into display text.
///
/// Structured `message.content` lists are walked item by item; a plain
/// string `message.content` is used as is; records without a message fall
/// back to a top-level `content` string. Returns `None` when nothing renders.
pub fn record_text(value: &Value) -> Option<String> {
    match value.get("message").and_then(|m| m.get("content")) {
        Some(Value::Array(items)) => {
            let fragments = normalize_content(items);
            if fragments.is_empty() { None } else { Some(fragments.join("\n")) }
        }
        Some(Value::String(text)) => Some(text.clone()).filter(|t| !t.is_empty()),
        _ => value
            .get("content")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(str::to_string),
    }
}

/// Render each recognized content item to a display fragment, in order.
/// Unrecognized item kinds (images, tool results, ...) are skipped.
pub fn normalize_content(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| match item.get("type").and_then(Value::as_str)? {
            "text" => non_empty_str(item, "text").map(str::to_string),
            "thinking" => non_empty_str(item, "thinking").map(|thinking| {
                format!("{} {}...", THINKING_MARKER, truncate_chars(thinking, THINKING_PREVIEW_CHARS))
            }),
            "tool_use" => {
                let name = non_empty_str(item, "name")?;
                let input = item
                    .get("input")
                    .filter(|input| !input.is_null())
                    .and_then(|input| serde_json::to_string(input).ok());
                Some(match input {
                    Some(input) => format!(
                        "{} {}: {}...",
                        TOOL_CALL_MARKER,
                        name,
                        truncate_chars(&input, TOOL_INPUT_PREVIEW_CHARS)
                    ),
                    None => format!("{} {}", TOOL_CALL_MARKER, name),
                })
            }
            _ => None,
        })
        .collect()
}

fn non_empty_str<'a>(item: &'a Value, key: &str) -> Option<&'a str> {
    item.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn non_null(value: &Value, key: &str) -> Option<Value> {
    value.get(key).filter(|v| !v.is_null()).cloned()
}
