//! JSONL parsing for Claude session logs
//!
//! # Error Handling Strategy
//!
//! Reading follows a **fail-open** approach so one damaged file or line never
//! takes down a listing or search that spans many sessions:
//!
//! - **Individual line failures**: Lines that are not valid JSON objects are logged
//!   through `tracing` and dropped. Sibling lines are unaffected, and there is no
//!   failure-rate cutoff: a file with one good line yields that one message.
//!
//! - **File failures**: [`read_messages`] turns a missing or unreadable file into an
//!   empty Vec. [`try_read_messages`] keeps the I/O error for callers (the read cache)
//!   that must not remember a failed read.
//!
//! - **Unknown shapes**: Records of unrecognized type, or with nothing renderable,
//!   are still returned so message indexes stay aligned with file lines.

pub mod deserializers;
pub mod log_reader;
pub mod sessions_index;

pub use log_reader::{
    normalize_content, parse_record, parse_record_line, read_messages, record_text,
    try_read_messages,
};
pub use sessions_index::read_sessions_index;
